//! Router-level aggregation of per-entity metrics
//!
//! Every tick the aggregator walks the fresh snapshot, sums each metric
//! across whatever entities are present right now, and derives the rates.
//! Nothing is carried over between ticks.

use serde::Serialize;
use tracing::trace;

use super::kind::{MetricKind, MetricSpec, RouterMetrics};
use super::rates::{FailureRate, SuccessRate};
use super::tree::MetricsTree;
use crate::types::RouterName;

/// Aggregated view of one router for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterSummary {
    pub router: RouterName,
    /// Sum of the server `load` gauges
    pub load: f64,
    pub requests: f64,
    pub success: f64,
    /// `None` when no server reported a failure count this tick
    pub failures: Option<f64>,
    /// Path retries plus client requeues
    pub retries: f64,
    pub success_rate: String,
    pub failure_rate: String,
}

impl RouterSummary {
    /// Fraction of requests that were retries, `None` without requests
    #[must_use]
    pub fn retry_percent(&self) -> Option<f64> {
        if self.requests == 0.0 {
            None
        } else {
            Some(self.retries / self.requests)
        }
    }
}

/// Per-kind totals before rates are derived
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub load: Option<f64>,
    pub requests: Option<f64>,
    pub success: Option<f64>,
    pub failures: Option<f64>,
    pub requeues: Option<f64>,
    pub path_retries: Option<f64>,
}

impl Totals {
    fn set(&mut self, kind: MetricKind, value: Option<f64>) {
        let slot = match kind {
            MetricKind::Load => &mut self.load,
            MetricKind::Requests => &mut self.requests,
            MetricKind::Success => &mut self.success,
            MetricKind::Failures => &mut self.failures,
            MetricKind::Requeues => &mut self.requeues,
            MetricKind::PathRetries => &mut self.path_retries,
        };
        *slot = value;
    }

    /// `pathRetries + requeues`, absent parts count as 0
    #[must_use]
    pub fn retries(&self) -> f64 {
        self.path_retries.unwrap_or_default() + self.requeues.unwrap_or_default()
    }
}

/// Sums one router's metrics out of a snapshot
#[derive(Debug, Clone)]
pub struct Aggregator {
    metrics: RouterMetrics,
}

impl Aggregator {
    /// Create an aggregator for `router`
    #[must_use]
    pub fn new(router: RouterName) -> Self {
        Self {
            metrics: RouterMetrics::new(router),
        }
    }

    #[inline]
    #[must_use]
    pub fn metrics(&self) -> &RouterMetrics {
        &self.metrics
    }

    /// Total for one metric spec, `None` when no value was found
    ///
    /// Path-scoped metrics read their single fixed path. Everything else is
    /// summed across the entities currently under the accessor; an entity
    /// without the field contributes nothing.
    #[must_use]
    pub fn total(spec: &MetricSpec, tree: &MetricsTree) -> Option<f64> {
        if spec.is_path() {
            return tree.number_at(spec.read_path(None).segments());
        }

        tree.entries(spec.accessor().segments())
            .filter_map(|(_, entity)| {
                entity.number_at(
                    spec.metric_accessor()
                        .segments()
                        .chain(std::iter::once(spec.field())),
                )
            })
            .fold(None, |acc: Option<f64>, value| {
                Some(acc.unwrap_or_default() + value)
            })
    }

    /// Totals for every metric kind
    #[must_use]
    pub fn totals(&self, tree: &MetricsTree) -> Totals {
        let mut totals = Totals::default();
        for spec in self.metrics.specs() {
            let value = Self::total(spec, tree);
            trace!(
                router = %self.metrics.router(),
                metric = %spec.kind(),
                ?value,
                "aggregated metric"
            );
            totals.set(spec.kind(), value);
        }
        totals
    }

    /// Aggregate one snapshot into a [`RouterSummary`]
    #[must_use]
    pub fn aggregate(&self, tree: &MetricsTree) -> RouterSummary {
        summarize(self.metrics.router().clone(), self.totals(tree))
    }
}

/// Turn per-kind totals into a summary with both rates
#[must_use]
pub fn summarize(router: RouterName, totals: Totals) -> RouterSummary {
    let requests = totals.requests.unwrap_or_default();
    let success = totals.success.unwrap_or_default();
    let failures = totals.failures;

    RouterSummary {
        router,
        load: totals.load.unwrap_or_default(),
        requests,
        success,
        failures,
        retries: totals.retries(),
        success_rate: SuccessRate::new(success, failures.unwrap_or_default()).pretty_rate(),
        failure_rate: FailureRate::new(failures, requests).pretty_rate(),
    }
}
