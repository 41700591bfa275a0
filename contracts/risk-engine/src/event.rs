use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use lending_interface::types::address::Address;
use lending_interface::types::market_event::MarketEvent;
use tracing::trace;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Listeners<T> {
    next_id: u64,
    listeners: BTreeMap<u64, Listener<T>>,
}

/// Fan-out of events to registered listeners.
///
/// Listeners are invoked in registration order, outside of the internal lock, so a
/// listener may subscribe or unsubscribe while being notified.
pub struct Emitter<T> {
    inner: Arc<Mutex<Listeners<T>>>,
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Listeners {
                next_id: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Emitter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, Arc::new(listener));

        let weak: Weak<Mutex<Listeners<T>>> = Arc::downgrade(&self.inner);

        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .listeners
                        .remove(&id);
                }
            })),
        }
    }

    pub fn emit(&self, event: &T) {
        let listeners: Vec<Listener<T>> = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .values()
            .cloned()
            .collect();

        trace!(listeners = listeners.len(), "emitting event");

        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }
}

/// Keeps a listener registered until dropped or explicitly unsubscribed
#[must_use = "listener is removed when the subscription is dropped"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

pub type MarketEmitter = Emitter<MarketEvent>;

impl Emitter<MarketEvent> {
    /// Listens for order book refreshes, the listener receives the refreshed mints
    pub fn on_market<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&BTreeSet<Address>) + Send + Sync + 'static,
    {
        self.subscribe(move |event| {
            if let MarketEvent::MarketUpdated(mints) = event {
                listener(mints);
            }
        })
    }

    pub fn raise_market_updated<I>(&self, mints: I)
    where
        I: IntoIterator<Item = Address>,
    {
        self.emit(&MarketEvent::MarketUpdated(mints.into_iter().collect()));
    }
}
