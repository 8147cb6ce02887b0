//! Core domain types
//!
//! Validated newtypes shared by the resolver, the aggregator and the
//! budget adapter.

pub mod budget;
pub mod path;
pub mod validated;

pub use budget::BudgetFraction;
pub use path::MetricPath;
pub use validated::{ConfigPath, RouterName, ValidationError};
