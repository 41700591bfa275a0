use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::address::Address;

/// Change notification pushed by the account cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// Order books of the given mints were refreshed
    MarketUpdated(BTreeSet<Address>),
    /// A single account changed
    AccountChanged(Address),
}
