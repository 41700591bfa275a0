use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::Error;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_DEPTH_LEVELS: usize = 1000;
pub const DEFAULT_STABLE_COINS: [&str; 4] = ["USDC", "USDT", "wUSDC", "wUSDT"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Symbols priced at exactly 1.0 regardless of their order book
    pub stable_coins: BTreeSet<String>,
    /// Period of the polling refresh
    #[serde(with = "humantime_serde")]
    pub refresh_interval: Duration,
    /// Max number of levels walked per side when simulating fills
    pub depth_levels: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stable_coins: DEFAULT_STABLE_COINS.iter().map(|s| s.to_string()).collect(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            depth_levels: DEFAULT_DEPTH_LEVELS,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, Error> {
        let config: EngineConfig = toml::from_str(input).map_err(|e| {
            tracing::warn!(error = %e, "failed to parse engine config");
            Error::ConfigParseError
        })?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.refresh_interval.is_zero() {
            return Err(Error::InvalidRefreshInterval);
        }

        if self.depth_levels == 0 {
            return Err(Error::InvalidDepthLevels);
        }

        Ok(())
    }

    pub fn is_stable_coin(&self, symbol: &str) -> bool {
        self.stable_coins.contains(symbol)
    }
}
