//! Router configuration
//!
//! Only the retry budget is read from the router configuration. Everything
//! else in the file is ignored, and every level may be missing.

mod defaults;
mod loading;
mod types;
mod validation;

pub use defaults::percent_can_retry;
pub use loading::{ConfigFormat, load_router_config, parse_router_config};
pub use types::{BudgetConfig, ClientConfig, RetriesConfig, RouterConfig, RouterEntry};
