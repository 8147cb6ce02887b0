//! Plain text renderers for terminals and logs

use std::fmt::Write as _;
use std::io::Write;
use tracing::warn;

use super::{ChartRenderer, SummaryView, TemplateRenderer};
use crate::budget::RetryBudgetState;

/// Renders a [`SummaryView`] as plain text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextTemplate {
    single_line: bool,
}

impl TextTemplate {
    /// One `name  value` row per field
    #[must_use]
    pub const fn multi_line() -> Self {
        Self { single_line: false }
    }

    /// Everything on one `key=value` line
    #[must_use]
    pub const fn single_line() -> Self {
        Self { single_line: true }
    }
}

fn count(value: f64) -> String {
    format!("{value}")
}

impl TemplateRenderer for TextTemplate {
    fn render(&self, view: &SummaryView) -> String {
        let Some(summary) = &view.summary else {
            return if self.single_line {
                format!("{} waiting for metrics", view.router)
            } else {
                format!("{}\n  waiting for metrics\n", view.router)
            };
        };

        let failures = summary.failures.map_or_else(|| "-".to_string(), count);
        let rows = [
            ("load", count(summary.load)),
            ("requests", count(summary.requests)),
            ("success", count(summary.success)),
            ("failures", failures),
            ("retries", count(summary.retries)),
            ("successRate", summary.success_rate.clone()),
            ("failureRate", summary.failure_rate.clone()),
        ];

        let mut out = view.router.to_string();
        if self.single_line {
            for (name, value) in rows {
                let _ = write!(out, " {name}={value}");
            }
        } else {
            out.push('\n');
            for (name, value) in rows {
                let _ = writeln!(out, "  {name:<12} {value}");
            }
        }
        out
    }
}

/// ASCII health bar written to `W` on every update
#[derive(Debug)]
pub struct TextBarChart<W> {
    out: W,
    width: usize,
}

impl<W: Write + Send + Sync> TextBarChart<W> {
    #[must_use]
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    /// One line: `[####------] 40% green  Retry budget available 8% / 20%`
    #[must_use]
    pub fn draw(state: &RetryBudgetState, width: usize) -> String {
        let filled = ((state.percent * width as f64).round() as usize).min(width);
        let mut line = String::with_capacity(width + 64);
        line.push('[');
        line.extend(std::iter::repeat_n('#', filled));
        line.extend(std::iter::repeat_n('-', width - filled));
        let _ = write!(
            line,
            "] {:>3}% {:<6} {} {}",
            (state.percent * 100.0).round() as i64,
            state.color,
            state.label.description,
            state.label.value
        );
        if let Some(warning) = state.warning_label {
            let _ = write!(line, " ({warning})");
        }
        line
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send + Sync> ChartRenderer for TextBarChart<W> {
    fn update(&mut self, state: &RetryBudgetState) {
        let line = Self::draw(state, self.width);
        if let Err(e) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            warn!("Failed to draw retry budget bar: {e}");
        }
    }
}
