//! Registration guard returned by collectors

use std::fmt;

type Deregister = Box<dyn FnOnce() + Send + Sync>;

/// Keeps a listener registered with its collector
///
/// Dropping the guard deregisters the listener. Deregistration runs at most
/// once, whether through [`cancel`](Self::cancel) or drop.
#[must_use = "dropping a Subscription deregisters its listener"]
pub struct Subscription {
    deregister: Option<Deregister>,
}

impl Subscription {
    /// Guard that runs `deregister` when released
    pub fn new<F>(deregister: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            deregister: Some(Box::new(deregister)),
        }
    }

    /// Guard with nothing to release
    pub fn noop() -> Self {
        Self { deregister: None }
    }

    /// Deregister now
    pub fn cancel(mut self) {
        self.release();
    }

    /// Keep the listener registered for the rest of the collector's life
    pub fn detach(mut self) {
        self.deregister = None;
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.deregister.is_some()
    }

    fn release(&mut self) {
        if let Some(deregister) = self.deregister.take() {
            deregister();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
