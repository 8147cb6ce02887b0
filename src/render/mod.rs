//! Render collaborators
//!
//! The summary widget hands its data to three collaborators: a chart that
//! draws the retry budget bar, a template that turns the summary into
//! markup, and a container that holds the markup. None of them can fail;
//! whatever they do with the data is their own business.

mod shared;
mod text;

pub use shared::{SharedChart, SharedMarkup};
pub use text::{TextBarChart, TextTemplate};

use serde::Serialize;

use crate::budget::RetryBudgetState;
use crate::metrics::RouterSummary;
use crate::types::RouterName;

/// Draws the retry budget health bar
pub trait ChartRenderer: Send + Sync {
    fn update(&mut self, state: &RetryBudgetState);
}

/// Pure function from summary data to markup
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, view: &SummaryView) -> String;
}

/// Holds the rendered summary markup
pub trait SummaryContainer: Send + Sync {
    fn set_markup(&mut self, markup: String);
}

/// Data handed to a [`TemplateRenderer`]
///
/// Before the first tick only the router name is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub router: RouterName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RouterSummary>,
}

impl SummaryView {
    /// View with the router name only
    #[must_use]
    pub fn initial(router: RouterName) -> Self {
        Self {
            router,
            summary: None,
        }
    }

    /// View of one aggregated tick
    #[must_use]
    pub fn with_summary(summary: RouterSummary) -> Self {
        Self {
            router: summary.router.clone(),
            summary: Some(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{Totals, summarize};

    fn router() -> RouterName {
        RouterName::new("incoming".to_string()).unwrap()
    }

    #[test]
    fn test_initial_view_serializes_router_only() {
        let json = serde_json::to_value(SummaryView::initial(router())).unwrap();
        assert_eq!(json, serde_json::json!({"router": "incoming"}));
    }

    #[test]
    fn test_view_with_summary() {
        let view = SummaryView::with_summary(summarize(router(), Totals::default()));
        assert_eq!(view.router.as_str(), "incoming");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["summary"]["successRate"], "N/A");
    }
}
