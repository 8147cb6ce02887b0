//! Success and failure rates derived from aggregated counts
//!
//! Both rates are kept as separate types: the failure rate is relative to
//! requests, the success rate to completed responses, and the two are not
//! guaranteed to add up to 100%.

use std::fmt;

use crate::constants::text::RATE_UNAVAILABLE;

/// Ratio of successful to completed (successful + failed) responses
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct SuccessRate {
    success: f64,
    failures: f64,
}

impl SuccessRate {
    /// Build from counts; negative or non-finite counts are treated as 0
    #[must_use]
    pub fn new(success: f64, failures: f64) -> Self {
        Self {
            success: sanitize(success),
            failures: sanitize(failures),
        }
    }

    /// Fraction in `[0, 1]`, or `None` when nothing completed
    #[must_use]
    pub fn get(&self) -> Option<f64> {
        let total = self.success + self.failures;
        if total > 0.0 {
            Some(self.success / total)
        } else {
            None
        }
    }

    /// Percentage with two decimals, or `N/A` when nothing completed
    #[must_use]
    pub fn pretty_rate(&self) -> String {
        let total = self.success + self.failures;
        if total > 0.0 {
            pretty_percent(100.0 * self.success / total)
        } else {
            RATE_UNAVAILABLE.to_string()
        }
    }
}

impl fmt::Display for SuccessRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_rate())
    }
}

/// Ratio of failures to requests
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FailureRate {
    failures: f64,
    requests: f64,
}

impl FailureRate {
    /// Build from counts; a missing failure count reads as 0
    #[must_use]
    pub fn new(failures: Option<f64>, requests: f64) -> Self {
        Self {
            failures: sanitize(failures.unwrap_or_default()),
            requests: sanitize(requests),
        }
    }

    /// Fraction of requests that failed, or `None` without requests
    #[must_use]
    pub fn get(&self) -> Option<f64> {
        if self.requests == 0.0 {
            None
        } else {
            Some(self.failures / self.requests)
        }
    }

    /// Percentage with two decimals, or `N/A` without requests
    #[must_use]
    pub fn pretty_rate(&self) -> String {
        if self.requests == 0.0 {
            RATE_UNAVAILABLE.to_string()
        } else {
            pretty_percent(100.0 * self.failures / self.requests)
        }
    }
}

impl fmt::Display for FailureRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_rate())
    }
}

/// Two-decimal percentage, halves rounded up (0.125 prints as 0.13)
fn pretty_percent(percent: f64) -> String {
    format!("{:.2}%", (percent * 100.0).round() / 100.0)
}

#[inline]
fn sanitize(count: f64) -> f64 {
    if count.is_finite() && count > 0.0 {
        count
    } else {
        0.0
    }
}
