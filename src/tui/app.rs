//! Dashboard state

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::log_buffer::LogBuffer;
use crate::budget::RetryBudgetState;
use crate::render::{SharedChart, SharedMarkup};
use crate::types::RouterName;

/// Lets the feed task tell the dashboard it has run dry
#[derive(Debug, Clone, Default)]
pub struct FeedHandle {
    finished: Arc<AtomicBool>,
}

impl FeedHandle {
    pub fn finish(&self) {
        self.finished.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}

/// What the dashboard draws, refreshed from the widget's shared outputs
pub struct DashboardApp {
    router: RouterName,
    markup: SharedMarkup,
    chart: SharedChart,
    logs: Option<LogBuffer>,
    feed: FeedHandle,
    summary: String,
    budget: Option<RetryBudgetState>,
}

impl DashboardApp {
    /// Dashboard reading the container and chart the widget writes to
    pub fn new(router: RouterName, markup: SharedMarkup, chart: SharedChart) -> Self {
        let mut app = Self {
            router,
            markup,
            chart,
            logs: None,
            feed: FeedHandle::default(),
            summary: String::new(),
            budget: None,
        };
        app.update();
        app
    }

    /// Show recent log lines from `logs`
    #[must_use]
    pub fn with_logs(mut self, logs: LogBuffer) -> Self {
        self.logs = Some(logs);
        self
    }

    /// Pull the latest markup and budget state
    pub fn update(&mut self) {
        self.summary = self.markup.markup();
        self.budget = self.chart.latest();
    }

    #[must_use]
    pub fn feed_handle(&self) -> FeedHandle {
        self.feed.clone()
    }

    #[must_use]
    pub fn router(&self) -> &RouterName {
        &self.router
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn budget(&self) -> Option<&RetryBudgetState> {
        self.budget.as_ref()
    }

    #[must_use]
    pub fn logs(&self) -> Option<&LogBuffer> {
        self.logs.as_ref()
    }

    #[must_use]
    pub fn feed_finished(&self) -> bool {
        self.feed.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SummaryContainer;

    #[test]
    fn test_update_pulls_shared_state() {
        let mut markup = SharedMarkup::new();
        let chart = SharedChart::new();
        let mut app = DashboardApp::new(
            RouterName::new("incoming".to_string()).unwrap(),
            markup.clone(),
            chart,
        );
        assert_eq!(app.summary(), "");

        markup.set_markup("incoming waiting for metrics".to_string());
        assert_eq!(app.summary(), "");
        app.update();
        assert_eq!(app.summary(), "incoming waiting for metrics");
        assert!(app.budget().is_none());
    }

    #[test]
    fn test_feed_handle_shared() {
        let app = DashboardApp::new(
            RouterName::new("r".to_string()).unwrap(),
            SharedMarkup::new(),
            SharedChart::new(),
        );
        assert!(!app.feed_finished());
        app.feed_handle().finish();
        assert!(app.feed_finished());
    }
}
