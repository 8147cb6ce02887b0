//! Live retry budget summary for a router
//!
//! A collector pushes snapshots of a router's metrics tree. For every
//! snapshot the summary sums the per-server, per-client and per-path
//! counters into router totals, derives success and failure rates, and
//! turns the share of retried requests into a health bar measured against
//! the router's retry budget.
//!
//! ```
//! use router_summary::{
//!     MetricsTree, SharedChart, SharedMarkup, TextTemplate, TreeCollector,
//!     create_router_summary, types::RouterName,
//! };
//!
//! let collector = TreeCollector::new();
//! let chart = SharedChart::new();
//! let _summary = create_router_summary(
//!     &collector,
//!     SharedMarkup::new(),
//!     chart.clone(),
//!     TextTemplate::single_line(),
//!     RouterName::new("incoming".to_string()).unwrap(),
//!     None,
//! );
//!
//! collector.publish(
//!     MetricsTree::new()
//!         .with(["rt", "incoming", "srv", "s1", "requests", "delta"], 10.0)
//!         .with(["rt", "incoming", "dst", "path", "svc", "retries", "total", "delta"], 1.0),
//! );
//! assert_eq!(chart.latest().unwrap().label.value, "10% / 20%");
//! ```

pub mod args;
pub mod budget;
pub mod collector;
pub mod config;
pub mod constants;
pub mod feed;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod summary;
pub mod tui;
pub mod types;

pub use args::Args;
pub use budget::{BudgetStatus, ColorTier, RetryBudgetState, display_percent, to_health_bar};
pub use collector::{MetricsCollector, MetricsListener, Subscription, TreeCollector};
pub use config::{RouterConfig, load_router_config};
pub use feed::{FeedError, SnapshotFeed};
pub use metrics::{Aggregator, MetricKind, MetricsTree, RouterSummary};
pub use render::{
    ChartRenderer, SharedChart, SharedMarkup, SummaryContainer, SummaryView, TemplateRenderer,
    TextBarChart, TextTemplate,
};
pub use summary::create_router_summary;
