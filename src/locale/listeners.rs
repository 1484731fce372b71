//! Locale change listeners.
//!
//! Handlers are held weakly by the registry; the strong reference lives in the
//! [`Subscription`] guard returned to the caller. Dropping the guard removes
//! the handler, and dead entries are pruned on the next notification.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Handler = dyn Fn(&str) + Send + Sync;

/// Ordered set of locale change handlers.
#[derive(Default)]
pub struct Listeners {
    handlers: Mutex<Vec<Weak<Handler>>>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("live", &self.len())
            .finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. It stays registered as long as the returned guard lives.
    pub fn subscribe(&self, handler: impl Fn(&str) + Send + Sync + 'static) -> Subscription {
        let strong: Arc<Handler> = Arc::new(handler);
        self.lock().push(Arc::downgrade(&strong));
        Subscription { _guard: strong }
    }

    /// Call every live handler with `locale`, in registration order.
    ///
    /// The handler list is copied before dispatch and no lock is held while
    /// handlers run, so a handler may subscribe, unsubscribe or trigger another
    /// notification. Handlers added during dispatch are first called on the
    /// next notification.
    pub fn notify(&self, locale: &str) -> usize {
        let snapshot: Vec<Arc<Handler>> = {
            let mut handlers = self.lock();
            handlers.retain(|handler| handler.strong_count() > 0);
            handlers.iter().filter_map(Weak::upgrade).collect()
        };

        for handler in &snapshot {
            handler(locale);
        }
        snapshot.len()
    }

    /// Number of handlers whose subscription is still alive.
    pub fn len(&self) -> usize {
        self.lock()
            .iter()
            .filter(|handler| handler.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Weak<Handler>>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps a locale change handler registered.
///
/// Dropping the guard (or calling [`Subscription::unsubscribe`]) removes the handler.
#[must_use = "dropping a Subscription immediately removes its handler"]
pub struct Subscription {
    _guard: Arc<Handler>,
}

impl Subscription {
    /// Remove the handler.
    pub fn unsubscribe(self) {}
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
