//! Retry budget health bar
//!
//! Converts a [`RouterSummary`] and the router's configured retry budget
//! into the state a bar chart draws: how much of the budget is left, in
//! which colour, with which label, and whether to warn.

mod tier;

pub use tier::ColorTier;

use serde::Serialize;

use crate::constants::text::{BUDGET_DESCRIPTION, BUDGET_EXHAUSTED, PERCENT_PLACEHOLDER};
use crate::metrics::RouterSummary;
use crate::types::BudgetFraction;

/// Where the router stands relative to its retry budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetStatus {
    /// No requests this tick, so there is no retry ratio
    NoData,
    /// Retries are below the budget
    WithinBudget,
    /// Retries reached or passed the budget
    Exhausted,
}

impl BudgetStatus {
    /// Compare the unclamped retry ratio against the budget
    #[must_use]
    pub fn classify(retry_percent: Option<f64>, budget: BudgetFraction) -> Self {
        match retry_percent {
            None => Self::NoData,
            Some(ratio) if ratio >= budget.get() => Self::Exhausted,
            Some(_) => Self::WithinBudget,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Text shown next to the health bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetLabel {
    pub description: &'static str,
    /// `"<remaining%> / <budget%>"`
    pub value: String,
}

/// Everything a chart needs to draw the retry budget for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryBudgetState {
    /// Fill fraction of the bar, in `[0, 1]`
    pub percent: f64,
    pub color: ColorTier,
    pub label: BudgetLabel,
    /// `budget exhausted` once retries reach the budget
    pub warning_label: Option<&'static str>,
    pub status: BudgetStatus,
}

/// Format a fraction as a whole percentage, or `" - "` without a number
#[must_use]
pub fn display_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) if p.is_finite() => format!("{}%", (p * 100.0).round() as i64),
        _ => PERCENT_PLACEHOLDER.to_string(),
    }
}

/// Derive the health bar state from a summary and the configured budget
///
/// With a zero budget nothing may be retried, so the bar is empty.
#[must_use]
pub fn to_health_bar(summary: &RouterSummary, budget: BudgetFraction) -> RetryBudgetState {
    let retry_percent = summary.retry_percent();
    let configured = budget.get();

    let budget_remaining = (configured - retry_percent.unwrap_or_default()).max(0.0);
    let percent = if budget.is_zero() {
        0.0
    } else {
        (budget_remaining / configured).min(1.0)
    };

    let status = BudgetStatus::classify(retry_percent, budget);

    RetryBudgetState {
        percent,
        color: ColorTier::from_percent(percent),
        label: BudgetLabel {
            description: BUDGET_DESCRIPTION,
            value: format!(
                "{} / {}",
                display_percent(Some(budget_remaining)),
                display_percent(Some(configured))
            ),
        },
        warning_label: status.is_exhausted().then_some(BUDGET_EXHAUSTED),
        status,
    }
}
