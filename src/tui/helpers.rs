//! TUI rendering helper functions

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::constants::{styles, text};
use crate::budget::{ColorTier, RetryBudgetState};

/// Terminal colour for a health bar tier
#[must_use]
pub const fn tier_color(tier: ColorTier) -> Color {
    match tier {
        ColorTier::Red => Color::Red,
        ColorTier::Orange => styles::ORANGE,
        ColorTier::Green => Color::Green,
    }
}

/// Gauge title, with the warning appended when the budget is exhausted
#[must_use]
pub fn gauge_title(state: Option<&RetryBudgetState>) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(" {} ", text::GAUGE_TITLE))];
    if let Some(warning) = state.and_then(|s| s.warning_label) {
        spans.push(Span::styled(
            format!("- {warning} "),
            Style::default()
                .fg(styles::WARNING)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

/// Text drawn inside the gauge
#[must_use]
pub fn gauge_label(state: Option<&RetryBudgetState>) -> String {
    state.map_or_else(
        || text::WAITING.to_string(),
        |s| format!("{} {}", s.label.description, s.label.value),
    )
}

/// Gauge fill, always within `[0, 1]`
#[must_use]
pub fn gauge_ratio(state: Option<&RetryBudgetState>) -> f64 {
    state.map_or(0.0, |s| s.percent.clamp(0.0, 1.0))
}
