//! Metrics collector interface
//!
//! The collector owns the metrics tree and pushes a fresh snapshot to every
//! registered listener on each tick. Listeners also tell the collector which
//! paths they want, which may change from tick to tick as entities come and
//! go.

mod in_process;
mod subscription;

pub use in_process::TreeCollector;
pub use subscription::Subscription;

use crate::metrics::MetricsTree;
use crate::types::MetricPath;

/// Receives snapshots from a [`MetricsCollector`]
///
/// The collector serializes ticks, so `on_tick` is never called
/// concurrently for the same listener.
pub trait MetricsListener: Send + Sync {
    /// Handle one snapshot
    fn on_tick(&mut self, tree: &MetricsTree);

    /// Paths this listener wants delivered, given the current tree
    ///
    /// `None` means the collector has not seen a tree yet.
    fn desired_metrics(&self, tree: Option<&MetricsTree>) -> Vec<MetricPath>;
}

/// Source of metrics snapshots
pub trait MetricsCollector {
    /// Register a listener; it stays registered until the returned
    /// [`Subscription`] is dropped or cancelled
    fn register_listener(&self, listener: Box<dyn MetricsListener>) -> Subscription;
}
