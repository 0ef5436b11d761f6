//! Wallet export entities
//!
//! These are the serialisable shapes handed to external collaborators
//! (exporter, UI, QR rendering). The core never writes them anywhere itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

/// Hex-encoded master and child keypairs returned by `derive`
/// Does not implement Debug with key material to prevent exposure in logs
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedKeys {
    pub master_private_key: String,
    pub master_public_key: String,
    pub child_private_key: String,
    pub child_public_key: String,
}

impl Zeroize for DerivedKeys {
    fn zeroize(&mut self) {
        self.master_private_key.zeroize();
        self.child_private_key.zeroize();
    }
}

impl Drop for DerivedKeys {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKeys")
            .field("master_private_key", &"[REDACTED]")
            .field("master_public_key", &self.master_public_key)
            .field("child_private_key", &"[REDACTED]")
            .field("child_public_key", &self.child_public_key)
            .finish()
    }
}

/// Export mapping with the seven fields an external writer persists
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletExport {
    pub seed_phrase: String,
    pub master_private_key: String,
    pub master_public_key: String,
    pub child_private_key: String,
    pub child_public_key: String,
    pub bitcoin_address: String,
    pub ethereum_address: String,
}

impl WalletExport {
    pub fn to_json(&self) -> WalletResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> WalletResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| WalletError::serialization(format!("Invalid wallet export: {}", e)))
    }
}

impl Zeroize for WalletExport {
    fn zeroize(&mut self) {
        self.seed_phrase.zeroize();
        self.master_private_key.zeroize();
        self.child_private_key.zeroize();
    }
}

impl Drop for WalletExport {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for WalletExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletExport")
            .field("seed_phrase", &"[REDACTED]")
            .field("master_private_key", &"[REDACTED]")
            .field("master_public_key", &self.master_public_key)
            .field("child_private_key", &"[REDACTED]")
            .field("child_public_key", &self.child_public_key)
            .field("bitcoin_address", &self.bitcoin_address)
            .field("ethereum_address", &self.ethereum_address)
            .finish()
    }
}
