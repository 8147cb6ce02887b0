//! Tick handler behind [`create_router_summary`](super::create_router_summary)

use tracing::{debug, warn};

use crate::budget::{BudgetStatus, to_health_bar};
use crate::collector::MetricsListener;
use crate::metrics::{Aggregator, MetricsTree};
use crate::render::{ChartRenderer, SummaryContainer, SummaryView, TemplateRenderer};
use crate::types::{BudgetFraction, MetricPath, RouterName};

/// Lifecycle of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum WidgetState {
    /// Template rendered with the router name only
    Initialized,
    /// At least one tick handled
    Updating { ticks: u64 },
}

impl WidgetState {
    fn advance(self) -> Self {
        match self {
            Self::Initialized => Self::Updating { ticks: 1 },
            Self::Updating { ticks } => Self::Updating {
                ticks: ticks.saturating_add(1),
            },
        }
    }
}

pub(super) struct RouterSummaryWidget {
    aggregator: Aggregator,
    budget: BudgetFraction,
    container: Box<dyn SummaryContainer>,
    chart: Box<dyn ChartRenderer>,
    template: Box<dyn TemplateRenderer>,
    state: WidgetState,
    last_status: Option<BudgetStatus>,
}

impl RouterSummaryWidget {
    /// Render the initial view into `container`
    pub(super) fn new(
        router: RouterName,
        budget: BudgetFraction,
        mut container: Box<dyn SummaryContainer>,
        chart: Box<dyn ChartRenderer>,
        template: Box<dyn TemplateRenderer>,
    ) -> Self {
        container.set_markup(template.render(&SummaryView::initial(router.clone())));
        Self {
            aggregator: Aggregator::new(router),
            budget,
            container,
            chart,
            template,
            state: WidgetState::Initialized,
            last_status: None,
        }
    }

    #[cfg(test)]
    pub(super) fn state(&self) -> WidgetState {
        self.state
    }
}

impl MetricsListener for RouterSummaryWidget {
    fn on_tick(&mut self, tree: &MetricsTree) {
        let summary = self.aggregator.aggregate(tree);
        let budget_state = to_health_bar(&summary, self.budget);

        if self.state == WidgetState::Initialized {
            debug!(router = %summary.router, "router summary received first tick");
        }
        self.state = self.state.advance();

        if budget_state.status.is_exhausted() && self.last_status != Some(BudgetStatus::Exhausted) {
            warn!(
                router = %summary.router,
                retry_percent = ?summary.retry_percent(),
                budget = %self.budget,
                "Retry budget exhausted"
            );
        }
        self.last_status = Some(budget_state.status);

        self.chart.update(&budget_state);
        self.container
            .set_markup(self.template.render(&SummaryView::with_summary(summary)));
    }

    fn desired_metrics(&self, tree: Option<&MetricsTree>) -> Vec<MetricPath> {
        self.aggregator.metrics().desired_metrics(tree)
    }
}
