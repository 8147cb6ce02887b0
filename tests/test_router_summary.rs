//! End-to-end tests: collector ticks driving the router summary widget

use router_summary::budget::{BudgetStatus, ColorTier};
use router_summary::config::{RouterConfig, RouterEntry};
use router_summary::types::RouterName;
use router_summary::{
    MetricsTree, SharedChart, SharedMarkup, TextTemplate, TreeCollector, create_router_summary,
};

fn router(name: &str) -> RouterName {
    RouterName::new(name.to_string()).unwrap()
}

fn srv(tree: MetricsTree, server: &str, metric: &str, delta: f64) -> MetricsTree {
    tree.with(["rt", "incoming", "srv", server, metric, "delta"], delta)
}

fn requeues(tree: MetricsTree, client: &str, delta: f64) -> MetricsTree {
    tree.with(
        ["rt", "incoming", "dst", "id", client, "retries", "requeues", "delta"],
        delta,
    )
}

fn path_retries(tree: MetricsTree, delta: f64) -> MetricsTree {
    tree.with(
        ["rt", "incoming", "dst", "path", "svc", "retries", "total", "delta"],
        delta,
    )
}

/// requests 100, success 90, failures 10, pathRetries 15, requeues 5
fn exhausted_tree() -> MetricsTree {
    let tree = srv(MetricsTree::new(), "10.0.0.1:8080", "requests", 60.0);
    let tree = srv(tree, "10.0.0.2:8080", "requests", 40.0);
    let tree = srv(tree, "10.0.0.1:8080", "success", 55.0);
    let tree = srv(tree, "10.0.0.2:8080", "success", 35.0);
    let tree = srv(tree, "10.0.0.1:8080", "failures", 5.0);
    let tree = srv(tree, "10.0.0.2:8080", "failures", 5.0);
    let tree = requeues(tree, "$/inet/web/80", 3.0);
    let tree = requeues(tree, "$/inet/api/80", 2.0);
    path_retries(tree, 15.0)
}

struct Harness {
    collector: TreeCollector,
    markup: SharedMarkup,
    chart: SharedChart,
}

impl Harness {
    fn new() -> Self {
        Self {
            collector: TreeCollector::new(),
            markup: SharedMarkup::new(),
            chart: SharedChart::new(),
        }
    }

    fn attach(&self, name: &str, config: Option<&RouterConfig>) -> router_summary::Subscription {
        create_router_summary(
            &self.collector,
            self.markup.clone(),
            self.chart.clone(),
            TextTemplate::single_line(),
            router(name),
            config,
        )
    }
}

#[test]
fn test_initial_render_before_any_tick() {
    let h = Harness::new();
    let _sub = h.attach("incoming", None);

    assert_eq!(h.markup.markup(), "incoming waiting for metrics");
    assert!(h.chart.latest().is_none());
    assert_eq!(h.collector.listener_count(), 1);
}

#[test]
fn test_budget_exactly_consumed() {
    let h = Harness::new();
    let _sub = h.attach("incoming", None);

    h.collector.publish(exhausted_tree());

    let state = h.chart.latest().unwrap();
    assert_eq!(state.percent, 0.0);
    assert_eq!(state.color, ColorTier::Red);
    assert_eq!(state.warning_label, Some("budget exhausted"));
    assert_eq!(state.label.value, "0% / 20%");

    let markup = h.markup.markup();
    assert!(markup.contains("retries=20"));
    assert!(markup.contains("failureRate=10.00%"));
    assert!(markup.contains("successRate=90.00%"));
}

#[test]
fn test_idle_router() {
    let h = Harness::new();
    let _sub = h.attach("incoming", None);

    let tree = srv(MetricsTree::new(), "10.0.0.1:8080", "requests", 0.0);
    h.collector.publish(tree);

    let state = h.chart.latest().unwrap();
    assert_eq!(state.percent, 1.0);
    assert_eq!(state.color, ColorTier::Green);
    assert_eq!(state.warning_label, None);
    assert_eq!(state.status, BudgetStatus::NoData);
    assert_eq!(state.label.value, "20% / 20%");
    assert!(h.markup.markup().contains("failureRate=N/A"));
    assert!(h.markup.markup().contains("successRate=N/A"));
}

#[test]
fn test_configured_budget_is_used() {
    let config = RouterConfig {
        routers: vec![RouterEntry::with_budget("incoming", 0.5)],
    };
    let h = Harness::new();
    let _sub = h.attach("incoming", Some(&config));

    h.collector.publish(exhausted_tree());

    let state = h.chart.latest().unwrap();
    assert!((state.percent - 0.6).abs() < 1e-12);
    assert_eq!(state.color, ColorTier::Orange);
    assert_eq!(state.label.value, "30% / 50%");
    assert_eq!(state.warning_label, None);
}

#[test]
fn test_config_for_other_router_falls_back() {
    let config = RouterConfig {
        routers: vec![RouterEntry::with_budget("outgoing", 0.9)],
    };
    let h = Harness::new();
    let _sub = h.attach("incoming", Some(&config));

    h.collector.publish(exhausted_tree());
    assert_eq!(h.chart.latest().unwrap().label.value, "0% / 20%");
}

#[test]
fn test_entities_come_and_go() {
    let h = Harness::new();
    let _sub = h.attach("incoming", None);

    h.collector.publish(exhausted_tree());
    assert!(h.markup.markup().contains("requests=100"));

    // One server gone, the other reports a new delta
    let tree = srv(MetricsTree::new(), "10.0.0.2:8080", "requests", 7.0);
    h.collector.publish(tree);
    assert!(h.markup.markup().contains("requests=7"));
    assert!(h.markup.markup().contains("failures=-"));

    h.collector.publish(MetricsTree::new());
    assert!(h.markup.markup().contains("requests=0"));
    assert_eq!(h.chart.update_count(), 3);
}

#[test]
fn test_each_tick_is_independent() {
    let h = Harness::new();
    let _sub = h.attach("incoming", None);

    h.collector.publish(exhausted_tree());
    let first = h.markup.markup();
    h.collector.publish(exhausted_tree());
    assert_eq!(h.markup.markup(), first);
}

#[test]
fn test_dropping_subscription_stops_updates() {
    let h = Harness::new();
    let sub = h.attach("incoming", None);
    drop(sub);

    h.collector.publish(exhausted_tree());
    assert_eq!(h.collector.listener_count(), 0);
    assert!(h.chart.latest().is_none());
    assert_eq!(h.markup.markup(), "incoming waiting for metrics");
}

#[test]
fn test_desired_metrics_track_entities() {
    let h = Harness::new();
    let _incoming = h.attach("incoming", None);
    let _outgoing = h.attach("outgoing", None);

    assert!(h.collector.desired_metrics().is_empty());

    let tree = exhausted_tree().with(
        ["rt", "outgoing", "srv", "10.0.0.9:4141", "requests", "delta"],
        1.0,
    );
    h.collector.publish(tree);

    let desired: Vec<String> = h
        .collector
        .desired_metrics()
        .iter()
        .map(ToString::to_string)
        .collect();

    // 4 server kinds x 2 servers, 2 clients, 1 fixed path for incoming;
    // 4 server kinds x 1 server plus the fixed path for outgoing
    assert_eq!(desired.len(), 8 + 2 + 1 + 4 + 1);
    assert!(desired.contains(&"rt/incoming/srv/10.0.0.1:8080/load/gauge".to_string()));
    assert!(desired.contains(&"rt/incoming/dst/id/$/inet/web/80/retries/requeues/counter".to_string()));
    assert!(desired.contains(&"rt/outgoing/dst/path/svc/retries/total/counter".to_string()));
    let unique: std::collections::HashSet<&String> = desired.iter().collect();
    assert_eq!(unique.len(), desired.len());
}
