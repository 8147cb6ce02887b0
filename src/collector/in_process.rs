//! In-process collector that fans snapshots out to listeners

use dashmap::DashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};
use tracing::{debug, trace};

use super::{MetricsCollector, MetricsListener, Subscription};
use crate::metrics::MetricsTree;
use crate::types::MetricPath;

/// Thread-safe collector fed by [`publish`](Self::publish)
///
/// Cloning is cheap and every clone shares the same listeners and current
/// tree. Listeners run synchronously inside `publish`, in registration
/// order. A listener must not register or deregister listeners from inside
/// its own `on_tick`.
#[derive(Clone, Default)]
pub struct TreeCollector {
    inner: Arc<CollectorInner>,
}

#[derive(Default)]
struct CollectorInner {
    listeners: DashMap<u64, Box<dyn MetricsListener>>,
    next_id: AtomicU64,
    current: RwLock<Option<Arc<MetricsTree>>>,
}

impl CollectorInner {
    /// Listener ids in registration order
    fn ordered_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.listeners.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }
}

impl TreeCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `tree` current and deliver it to every listener
    pub fn publish(&self, tree: MetricsTree) {
        let tree = Arc::new(tree);
        *self
            .inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&tree));

        let ids = self.inner.ordered_ids();
        trace!(listeners = ids.len(), "publishing metrics tree");
        for id in ids {
            if let Some(mut listener) = self.inner.listeners.get_mut(&id) {
                listener.on_tick(&tree);
            }
        }
    }

    /// The most recently published tree
    #[must_use]
    pub fn current(&self) -> Option<Arc<MetricsTree>> {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Union of every listener's desired paths against the current tree
    ///
    /// Sorted and without duplicates.
    #[must_use]
    pub fn desired_metrics(&self) -> Vec<MetricPath> {
        let current = self.current();
        let mut paths: Vec<MetricPath> = self
            .inner
            .listeners
            .iter()
            .flat_map(|entry| entry.value().desired_metrics(current.as_deref()))
            .collect();
        paths.sort();
        paths.dedup();
        paths
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

impl MetricsCollector for TreeCollector {
    fn register_listener(&self, listener: Box<dyn MetricsListener>) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.insert(id, listener);
        debug!(id, "registered metrics listener");

        let inner: Weak<CollectorInner> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade()
                && inner.listeners.remove(&id).is_some()
            {
                debug!(id, "deregistered metrics listener");
            }
        })
    }
}

impl fmt::Debug for TreeCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeCollector")
            .field("listeners", &self.listener_count())
            .field("has_tree", &self.current().is_some())
            .finish()
    }
}
