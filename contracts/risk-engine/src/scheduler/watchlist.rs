use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use lending_interface::types::address::Address;
use tracing::trace;

type Counts = Arc<Mutex<BTreeMap<Address, usize>>>;

/// Reference counted set of accounts the driving loop keeps fresh
#[derive(Clone, Default)]
pub struct AccountWatchlist {
    counts: Counts,
}

impl AccountWatchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the watch count of every address until the handle is released
    pub fn watch<I>(&self, addresses: I) -> WatchHandle
    where
        I: IntoIterator<Item = Address>,
    {
        let addresses: Vec<Address> = addresses.into_iter().collect();
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);

        for address in &addresses {
            *counts.entry(*address).or_insert(0) += 1;
        }

        trace!(added = addresses.len(), watched = counts.len(), "accounts watched");

        WatchHandle {
            counts: Arc::clone(&self.counts),
            addresses,
        }
    }

    /// Addresses with at least one live handle
    pub fn active(&self) -> Vec<Address> {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect()
    }

    pub fn watch_count(&self, address: &Address) -> usize {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(address)
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

#[must_use = "accounts are unwatched when the handle is dropped"]
pub struct WatchHandle {
    counts: Counts,
    addresses: Vec<Address>,
}

impl WatchHandle {
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn release(self) {
        drop(self);
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);

        for address in self.addresses.drain(..) {
            if let Some(count) = counts.get_mut(&address) {
                *count -= 1;
                if *count == 0 {
                    counts.remove(&address);
                }
            }
        }
    }
}
