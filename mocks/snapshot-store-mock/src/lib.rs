#![deny(warnings)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use lending_interface::types::address::Address;
use lending_interface::types::error::Error;
use lending_interface::types::market_snapshot::MarketSnapshot;
use lending_interface::SnapshotProvider;
use tracing::trace;


/// Account cache holding a single replaceable snapshot.
///
/// Readers always get a whole snapshot, updates copy the current one so a snapshot
/// handed out earlier never changes.
#[derive(Default)]
pub struct SnapshotStoreMock {
    snapshot: RwLock<Arc<MarketSnapshot>>,
    refresh_calls: Mutex<Vec<Vec<Address>>>,
    fail_refresh: AtomicBool,
}

impl SnapshotStoreMock {
    pub fn new(snapshot: MarketSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            ..Default::default()
        }
    }

    pub fn update<F: FnOnce(&mut MarketSnapshot)>(&self, f: F) {
        let mut current = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = MarketSnapshot::clone(&current);
        f(&mut next);
        *current = Arc::new(next);
    }

    pub fn replace(&self, snapshot: MarketSnapshot) {
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(snapshot);
    }

    /// Accounts passed to every `refresh` call so far
    pub fn refresh_calls(&self) -> Vec<Vec<Address>> {
        self.refresh_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn fail_refresh(&self, fail: bool) {
        self.fail_refresh.store(fail, Ordering::SeqCst);
    }
}

impl SnapshotProvider for SnapshotStoreMock {
    fn snapshot(&self) -> Arc<MarketSnapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn refresh(&self, accounts: &[Address]) -> Result<(), Error> {
        trace!(accounts = accounts.len(), "refresh requested");

        self.refresh_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(accounts.to_vec());

        if self.fail_refresh.load(Ordering::SeqCst) {
            return Err(Error::SnapshotUnavailable);
        }

        Ok(())
    }
}
