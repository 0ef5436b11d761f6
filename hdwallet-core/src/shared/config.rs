//! Runtime configuration
//!
//! Values come from the process environment, after an optional `.env` file
//! has been loaded. Unparseable values are reported, never replaced by defaults.

use dotenv::dotenv;
use serde::Serialize;
use std::env;

use crate::core::crypto::keys::DerivationPath;
use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::types::{BitcoinNetwork, Strength, WalletResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreConfig {
    pub default_strength: Strength,
    pub default_path: DerivationPath,
    pub bitcoin_network: BitcoinNetwork,
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_strength: Strength::default(),
            default_path: DerivationPath::bip44_bitcoin(),
            bitcoin_network: BitcoinNetwork::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CoreConfig {
    /// Load configuration from `.env` (if present) and the environment
    pub fn from_env() -> WalletResult<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> WalletResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_STRENGTH) {
            let bits: usize = raw.trim().parse().map_err(|_| {
                WalletError::config(format!("{} must be a number of bits, got '{}'", ENV_DEFAULT_STRENGTH, raw))
            })?;
            config.default_strength = Strength::try_from(bits)
                .map_err(|e| WalletError::config(format!("{}: {}", ENV_DEFAULT_STRENGTH, e)))?;
        }

        if let Some(raw) = lookup(ENV_DEFAULT_PATH) {
            config.default_path = raw
                .parse()
                .map_err(|e| WalletError::config(format!("{}: {}", ENV_DEFAULT_PATH, e)))?;
        }

        if let Some(raw) = lookup(ENV_BITCOIN_NETWORK) {
            config.bitcoin_network = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            let level = raw.trim().to_ascii_lowercase();
            if !matches!(level.as_str(), "off" | "error" | "warn" | "info" | "debug" | "trace") {
                return Err(WalletError::config(format!("{}: unknown level '{}'", ENV_LOG_LEVEL, raw)));
            }
            config.log_level = level;
        }

        Ok(config)
    }
}
