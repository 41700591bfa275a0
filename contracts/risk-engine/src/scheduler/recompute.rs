use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use lending_interface::types::address::Address;
use lending_interface::types::engine_config::{EngineConfig, DEFAULT_REFRESH_INTERVAL};
use lending_interface::types::market_event::MarketEvent;
use lending_interface::types::risk_result::RiskResult;
use lending_interface::SnapshotProvider;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::event::{Emitter, MarketEmitter, Subscription};
use crate::methods::enriched_obligations::enriched_obligations;
use crate::types::price_provider::PriceProvider;

use super::watchlist::AccountWatchlist;

type Results = Arc<Vec<RiskResult>>;

/// Re-evaluates every obligation whenever the market moves.
///
/// Each pass pulls a single snapshot from the provider and runs the evaluator over
/// the whole obligation set, so published figures never mix two snapshots.
pub struct RecomputeScheduler<P> {
    provider: P,
    config: EngineConfig,
    watchlist: AccountWatchlist,
    market_emitter: MarketEmitter,
    results_emitter: Emitter<Results>,
    latest: RwLock<Results>,
}

impl<P: SnapshotProvider> RecomputeScheduler<P> {
    pub fn new(provider: P, config: EngineConfig) -> Self {
        Self {
            provider,
            config,
            watchlist: AccountWatchlist::new(),
            market_emitter: MarketEmitter::new(),
            results_emitter: Emitter::new(),
            latest: RwLock::new(Arc::new(Vec::new())),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn watchlist(&self) -> &AccountWatchlist {
        &self.watchlist
    }

    pub fn market_emitter(&self) -> &MarketEmitter {
        &self.market_emitter
    }

    /// Registers a listener for every published result set, sorted by health ascending
    pub fn on_results<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[RiskResult]) + Send + Sync + 'static,
    {
        self.results_emitter
            .subscribe(move |results: &Results| listener(results.as_slice()))
    }

    /// Result set of the last recompute, empty before the first one
    pub fn latest(&self) -> Results {
        Arc::clone(&self.latest.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn recompute(&self) -> Results {
        let snapshot = self.provider.snapshot();
        let mut price_provider = PriceProvider::new(&snapshot, &self.config);
        let results = Arc::new(enriched_obligations(&mut price_provider));

        debug!(obligations = results.len(), "obligations recomputed");

        *self.latest.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&results);
        self.results_emitter.emit(&results);

        results
    }

    /// Refreshes watched accounts and recomputes. A failed refresh still recomputes
    /// from the last available snapshot.
    pub fn tick(&self) -> Results {
        let accounts = self.watchlist.active();

        if let Err(err) = self.provider.refresh(&accounts) {
            warn!(accounts = accounts.len(), code = err.code(), "refresh failed: {}", err);
        }

        self.recompute()
    }

    pub fn handle_event(&self, event: &MarketEvent) -> Results {
        match event {
            MarketEvent::MarketUpdated(mints) => {
                debug!(mints = mints.len(), "market updated");
                self.market_emitter.emit(event);
            }
            MarketEvent::AccountChanged(address) => {
                debug!(%address, "account changed");
            }
        }

        self.recompute()
    }

    pub fn notify_market_updated(&self, mints: BTreeSet<Address>) -> Results {
        self.handle_event(&MarketEvent::MarketUpdated(mints))
    }

    /// Drives periodic and push based recomputes until `shutdown` turns true, its
    /// sender is dropped or the `updates` channel is closed.
    pub async fn run(
        &self,
        mut updates: mpsc::Receiver<MarketEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        if *shutdown.borrow() {
            return;
        }

        let refresh_interval = if self.config.refresh_interval.is_zero() {
            warn!("zero refresh interval, falling back to default");
            DEFAULT_REFRESH_INTERVAL
        } else {
            self.config.refresh_interval
        };

        let mut ticker = interval(refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            ?refresh_interval,
            "starting recompute scheduler"
        );

        loop {
            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("shutdown requested");
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.tick();
                }
                event = updates.recv() => match event {
                    Some(event) => {
                        self.handle_event(&event);
                    }
                    None => {
                        info!("market event channel closed");
                        break;
                    }
                },
            }
        }

        info!("recompute scheduler stopped");
    }
}
