//! Router summary widget
//!
//! [`create_router_summary`] is the whole public surface: it wires a
//! router's aggregation and retry budget bar to a collector and returns the
//! registration guard. From then on the widget drives itself off collector
//! ticks.

mod widget;

use tracing::debug;

use crate::collector::{MetricsCollector, Subscription};
use crate::config::RouterConfig;
use crate::render::{ChartRenderer, SummaryContainer, TemplateRenderer};
use crate::types::{BudgetFraction, RouterName};
use widget::RouterSummaryWidget;

/// Build a summary widget for `router_name` and register it with `collector`
///
/// The retry budget is resolved once here, from `router_config` when given,
/// otherwise the default. The container immediately receives the template
/// rendered with the router name only. Every collector tick after that
/// updates the chart first, then the container.
///
/// Dropping the returned [`Subscription`] removes the widget from the
/// collector.
pub fn create_router_summary<C, S, R, T>(
    collector: &C,
    summary_container: S,
    chart: R,
    template: T,
    router_name: RouterName,
    router_config: Option<&RouterConfig>,
) -> Subscription
where
    C: MetricsCollector + ?Sized,
    S: SummaryContainer + 'static,
    R: ChartRenderer + 'static,
    T: TemplateRenderer + 'static,
{
    let budget =
        router_config.map_or_else(BudgetFraction::default, |config| config.retry_budget(&router_name));
    debug!(router = %router_name, %budget, "creating router summary");

    let widget = RouterSummaryWidget::new(
        router_name,
        budget,
        Box::new(summary_container),
        Box::new(chart),
        Box::new(template),
    );
    collector.register_listener(Box::new(widget))
}
