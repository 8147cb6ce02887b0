//! Default values for configuration fields

use crate::types::BudgetFraction;

/// Retry budget used when the router or its budget is not configured
#[inline]
pub fn percent_can_retry() -> BudgetFraction {
    BudgetFraction::default()
}
