//! Retry budget fraction

use nutype::nutype;

use crate::constants::budget::DEFAULT_PERCENT_CAN_RETRY;

/// Fraction of requests a router may retry, in `[0, 1]`
///
/// Mirrors `client.retries.budget.percentCanRetry` from the router
/// configuration. Zero is allowed and means "no retries permitted".
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1.0),
    derive(
        Debug, Clone, Copy, PartialEq, PartialOrd, TryFrom, Into, Serialize, Deserialize,
        Display,
    )
)]
pub struct BudgetFraction(f64);

impl Default for BudgetFraction {
    fn default() -> Self {
        Self::try_new(DEFAULT_PERCENT_CAN_RETRY).expect("default retry budget is within [0, 1]")
    }
}

impl BudgetFraction {
    /// Get the raw fraction
    #[inline]
    #[must_use]
    pub fn get(&self) -> f64 {
        self.into_inner()
    }

    /// True when no retries are permitted at all
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.get() == 0.0
    }
}
