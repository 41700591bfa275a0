mod recompute;
mod watchlist;

pub use recompute::RecomputeScheduler;
pub use watchlist::{AccountWatchlist, WatchHandle};
