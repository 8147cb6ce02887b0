//! Configuration type definitions

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{BudgetFraction, RouterName};

/// Router configuration, as far as the summary cares about it
///
/// `{routers: [{label, client: {retries: {budget: {percentCanRetry}}}}]}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
    #[serde(default)]
    pub routers: Vec<RouterEntry>,
}

/// One configured router
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RouterEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<RetriesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RetriesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetConfig>,
}

/// Retry budget settings
///
/// Kept as a raw number so a bad value degrades to the default instead of
/// rejecting the whole file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_can_retry: Option<f64>,
}

impl RouterEntry {
    /// Entry for `label` with the given budget
    #[must_use]
    pub fn with_budget(label: impl Into<String>, percent_can_retry: f64) -> Self {
        Self {
            label: Some(label.into()),
            client: Some(ClientConfig {
                retries: Some(RetriesConfig {
                    budget: Some(BudgetConfig {
                        percent_can_retry: Some(percent_can_retry),
                    }),
                }),
            }),
        }
    }

    /// `client.retries.budget.percentCanRetry`, if set
    #[must_use]
    pub fn percent_can_retry(&self) -> Option<f64> {
        self.client
            .as_ref()?
            .retries
            .as_ref()?
            .budget
            .as_ref()?
            .percent_can_retry
    }
}

impl RouterConfig {
    /// First router whose label is `router`
    #[must_use]
    pub fn router(&self, router: &RouterName) -> Option<&RouterEntry> {
        self.routers
            .iter()
            .find(|entry| entry.label.as_deref() == Some(router.as_str()))
    }

    /// Retry budget for `router`
    ///
    /// Falls back to the default when the router or its budget is missing,
    /// and also when the configured value is not a fraction in `[0, 1]`.
    #[must_use]
    pub fn retry_budget(&self, router: &RouterName) -> BudgetFraction {
        let Some(raw) = self.router(router).and_then(RouterEntry::percent_can_retry) else {
            return super::defaults::percent_can_retry();
        };

        BudgetFraction::try_new(raw).unwrap_or_else(|e| {
            let fallback = super::defaults::percent_can_retry();
            warn!(
                "Router '{}' has invalid percentCanRetry {} ({}), using {}",
                router, raw, e, fallback
            );
            fallback
        })
    }
}
