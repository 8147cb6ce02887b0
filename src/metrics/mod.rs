//! Metrics resolution and aggregation
//!
//! - [`tree`]: the snapshot the collector delivers each tick
//! - [`kind`]: which paths each metric lives at, for subscribing and reading
//! - [`aggregate`]: summing entities into router totals
//! - [`rates`]: success and failure rates over those totals

pub mod aggregate;
pub mod kind;
pub mod rates;
pub mod tree;

pub use aggregate::{Aggregator, RouterSummary, Totals, summarize};
pub use kind::{MetricKind, MetricSpec, RouterMetrics};
pub use rates::{FailureRate, SuccessRate};
pub use tree::{MetricsTree, TreeError, TreeNode};
