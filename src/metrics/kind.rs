//! Metric kinds and key-path resolution
//!
//! For a given router every [`MetricKind`] resolves to a [`MetricSpec`]:
//! where its entities live (`accessor`), where the value sits inside one
//! entity's record (`metric_accessor`), and whether it is a gauge or a
//! counter. From a spec we build two kinds of paths:
//!
//! - the *desired* path announced to the collector, ending in `gauge` or
//!   `counter`;
//! - the *read* path used against a snapshot, ending in `value` (gauges) or
//!   `delta` (counters).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tree::MetricsTree;
use crate::constants::tree;
use crate::types::{MetricPath, RouterName};

/// The router-level metrics the summary is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Outstanding requests per server (gauge)
    Load,
    /// Requests received per server
    Requests,
    /// Successful responses per server
    Success,
    /// Failed responses per server
    Failures,
    /// Requeued requests per client
    Requeues,
    /// Retries across the service path subtree
    PathRetries,
}

impl MetricKind {
    /// Every kind, in resolution order
    pub const ALL: [MetricKind; 6] = [
        MetricKind::Load,
        MetricKind::Requests,
        MetricKind::Success,
        MetricKind::Failures,
        MetricKind::Requeues,
        MetricKind::PathRetries,
    ];

    /// Name as used in the summary payload
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Requests => "requests",
            Self::Success => "success",
            Self::Failures => "failures",
            Self::Requeues => "requeues",
            Self::PathRetries => "pathRetries",
        }
    }

    /// True only for `load`: read via `value` instead of `delta`
    #[must_use]
    pub const fn is_gauge(&self) -> bool {
        matches!(self, Self::Load)
    }

    /// True only for `pathRetries`: a single fixed path, not a sum over entities
    #[must_use]
    pub const fn is_path(&self) -> bool {
        matches!(self, Self::PathRetries)
    }

    /// Category segments below `rt/<router>`
    const fn category(&self) -> &'static [&'static str] {
        match self {
            Self::Load | Self::Requests | Self::Success | Self::Failures => tree::SERVERS,
            Self::Requeues => tree::CLIENTS,
            Self::PathRetries => tree::SERVICE_PATHS,
        }
    }

    /// Segments locating the value inside one entity's record
    const fn metric_segments(&self) -> &'static [&'static str] {
        match self {
            Self::Load => &["load"],
            Self::Requests => &["requests"],
            Self::Success => &["success"],
            Self::Failures => &["failures"],
            Self::Requeues => &["retries", "requeues"],
            Self::PathRetries => &["retries", "total"],
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`MetricKind`] resolved against one router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSpec {
    kind: MetricKind,
    accessor: MetricPath,
    metric_accessor: MetricPath,
}

impl MetricSpec {
    /// Resolve `kind` for `router`
    #[must_use]
    pub fn new(kind: MetricKind, router: &RouterName) -> Self {
        let accessor = MetricPath::new([tree::ROUTER_ROOT, router.as_str()])
            .join(kind.category().iter().copied());
        let metric_accessor = MetricPath::new(kind.metric_segments().iter().copied());
        Self {
            kind,
            accessor,
            metric_accessor,
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Path to the subtree holding this metric's entities
    #[inline]
    #[must_use]
    pub fn accessor(&self) -> &MetricPath {
        &self.accessor
    }

    /// Path to the value inside one entity's record
    #[inline]
    #[must_use]
    pub fn metric_accessor(&self) -> &MetricPath {
        &self.metric_accessor
    }

    #[inline]
    #[must_use]
    pub fn is_gauge(&self) -> bool {
        self.kind.is_gauge()
    }

    #[inline]
    #[must_use]
    pub fn is_path(&self) -> bool {
        self.kind.is_path()
    }

    fn with_entity(&self, entity: Option<&str>) -> MetricPath {
        self.accessor
            .clone()
            .join(entity)
            .join(self.metric_accessor.segments())
    }

    /// Path announced to the collector
    ///
    /// `accessor ++ [entity] ++ metric_accessor ++ [gauge|counter]`; the
    /// entity is skipped when `None`.
    #[must_use]
    pub fn desired_path(&self, entity: Option<&str>) -> MetricPath {
        let kind = if self.is_gauge() {
            tree::GAUGE
        } else {
            tree::COUNTER
        };
        self.with_entity(entity).child(kind)
    }

    /// Path read from a snapshot
    ///
    /// `accessor ++ [entity] ++ metric_accessor ++ [value|delta]`.
    #[must_use]
    pub fn read_path(&self, entity: Option<&str>) -> MetricPath {
        self.with_entity(entity).child(self.field())
    }

    /// Field read from an entity record: `value` for gauges, `delta` otherwise
    #[inline]
    #[must_use]
    pub fn field(&self) -> &'static str {
        if self.is_gauge() {
            tree::VALUE
        } else {
            tree::DELTA
        }
    }

    /// Entity names currently present under the accessor
    ///
    /// Recomputed from each snapshot; the set is expected to churn.
    pub fn entities<'t>(&self, snapshot: &'t MetricsTree) -> Vec<&'t str> {
        snapshot
            .entries(self.accessor.segments())
            .map(|(name, _)| name)
            .collect()
    }
}

/// The full set of resolved metrics for one router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterMetrics {
    router: RouterName,
    specs: Vec<MetricSpec>,
}

impl RouterMetrics {
    /// Resolve every [`MetricKind`] for `router`
    #[must_use]
    pub fn new(router: RouterName) -> Self {
        let specs = MetricKind::ALL
            .iter()
            .map(|kind| MetricSpec::new(*kind, &router))
            .collect();
        Self { router, specs }
    }

    #[inline]
    #[must_use]
    pub fn router(&self) -> &RouterName {
        &self.router
    }

    /// Resolved specs, in [`MetricKind::ALL`] order
    pub fn specs(&self) -> impl Iterator<Item = &MetricSpec> + '_ {
        self.specs.iter()
    }

    /// Spec for one kind
    #[must_use]
    pub fn spec(&self, kind: MetricKind) -> Option<&MetricSpec> {
        self.specs.iter().find(|spec| spec.kind == kind)
    }

    /// Everything this router wants the collector to deliver
    ///
    /// Without a tree there is nothing to enumerate yet, so the list is
    /// empty. Otherwise each path-scoped kind contributes its one path and
    /// every other kind one path per entity present right now.
    #[must_use]
    pub fn desired_metrics(&self, tree: Option<&MetricsTree>) -> Vec<MetricPath> {
        let Some(tree) = tree else {
            return Vec::new();
        };

        self.specs
            .iter()
            .flat_map(|spec| {
                if spec.is_path() {
                    vec![spec.desired_path(None)]
                } else {
                    spec.entities(tree)
                        .into_iter()
                        .map(|entity| spec.desired_path(Some(entity)))
                        .collect()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> RouterName {
        RouterName::new("incoming".to_string()).unwrap()
    }

    #[test]
    fn test_flags() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.is_gauge(), kind == MetricKind::Load, "{kind}");
            assert_eq!(kind.is_path(), kind == MetricKind::PathRetries, "{kind}");
        }
    }

    #[test]
    fn test_accessors() {
        let r = router();
        let srv = MetricSpec::new(MetricKind::Requests, &r);
        assert_eq!(srv.accessor().to_string(), "rt/incoming/srv");
        assert_eq!(srv.metric_accessor().to_string(), "requests");

        let clients = MetricSpec::new(MetricKind::Requeues, &r);
        assert_eq!(clients.accessor().to_string(), "rt/incoming/dst/id");
        assert_eq!(clients.metric_accessor().to_string(), "retries/requeues");

        let paths = MetricSpec::new(MetricKind::PathRetries, &r);
        assert_eq!(paths.accessor().to_string(), "rt/incoming/dst/path/svc");
        assert_eq!(paths.metric_accessor().to_string(), "retries/total");
    }

    #[test]
    fn test_desired_path_gauge_and_counter() {
        let r = router();
        let load = MetricSpec::new(MetricKind::Load, &r);
        assert_eq!(
            load.desired_path(Some("0.0.0.0/4140")).to_string(),
            "rt/incoming/srv/0.0.0.0/4140/load/gauge"
        );

        let requeues = MetricSpec::new(MetricKind::Requeues, &r);
        assert_eq!(
            requeues.desired_path(Some("$/inet/127.1/9990")).to_string(),
            "rt/incoming/dst/id/$/inet/127.1/9990/retries/requeues/counter"
        );
    }

    #[test]
    fn test_desired_path_without_entity() {
        let spec = MetricSpec::new(MetricKind::PathRetries, &router());
        let path = spec.desired_path(None);
        assert_eq!(path.len(), 8);
        assert_eq!(path.to_string(), "rt/incoming/dst/path/svc/retries/total/counter");
    }

    #[test]
    fn test_read_path() {
        let r = router();
        let load = MetricSpec::new(MetricKind::Load, &r);
        assert_eq!(load.read_path(Some("s")).to_string(), "rt/incoming/srv/s/load/value");

        let failures = MetricSpec::new(MetricKind::Failures, &r);
        assert_eq!(
            failures.read_path(Some("s")).to_string(),
            "rt/incoming/srv/s/failures/delta"
        );

        let path = MetricSpec::new(MetricKind::PathRetries, &r);
        assert_eq!(
            path.read_path(None).to_string(),
            "rt/incoming/dst/path/svc/retries/total/delta"
        );
    }

    #[test]
    fn test_desired_metrics_without_tree_is_empty() {
        let metrics = RouterMetrics::new(router());
        assert!(metrics.desired_metrics(None).is_empty());
    }

    #[test]
    fn test_desired_metrics_enumerates_entities() {
        let metrics = RouterMetrics::new(router());
        let tree = MetricsTree::new()
            .with(["rt", "incoming", "srv", "a", "requests", "delta"], 1.0)
            .with(["rt", "incoming", "srv", "b", "requests", "delta"], 1.0)
            .with(["rt", "incoming", "dst", "id", "c", "retries", "requeues", "delta"], 1.0);

        let desired: Vec<String> = metrics
            .desired_metrics(Some(&tree))
            .iter()
            .map(ToString::to_string)
            .collect();

        // 4 server kinds x 2 servers + 1 client + 1 fixed path
        assert_eq!(desired.len(), 10);
        assert_eq!(desired[0], "rt/incoming/srv/a/load/gauge");
        assert_eq!(desired[1], "rt/incoming/srv/b/load/gauge");
        assert!(desired.contains(&"rt/incoming/dst/id/c/retries/requeues/counter".to_string()));
        assert_eq!(
            desired.last().unwrap(),
            "rt/incoming/dst/path/svc/retries/total/counter"
        );
    }

    #[test]
    fn test_desired_metrics_empty_tree_keeps_path_metric() {
        let metrics = RouterMetrics::new(router());
        let desired = metrics.desired_metrics(Some(&MetricsTree::new()));
        assert_eq!(desired.len(), 1);
        assert_eq!(
            desired[0].to_string(),
            "rt/incoming/dst/path/svc/retries/total/counter"
        );
    }

    #[test]
    fn test_spec_lookup() {
        let metrics = RouterMetrics::new(router());
        assert_eq!(metrics.specs().count(), 6);
        assert_eq!(
            metrics.spec(MetricKind::Success).map(MetricSpec::kind),
            Some(MetricKind::Success)
        );
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&MetricKind::PathRetries).unwrap();
        assert_eq!(json, "\"pathRetries\"");
        assert_eq!(MetricKind::PathRetries.to_string(), "pathRetries");
    }
}
