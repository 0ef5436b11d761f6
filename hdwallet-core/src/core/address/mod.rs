//! Chain-specific addresses derived from public keys

pub mod address_encoder;

pub use address_encoder::AddressEncoder;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::types::Chain;

/// Display string bound to one chain; derived, never mutated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    chain: Chain,
    value: String,
}

impl Address {
    pub(crate) fn new(chain: Chain, value: String) -> Self {
        Self { chain, value }
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
