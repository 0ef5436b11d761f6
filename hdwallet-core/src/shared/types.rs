use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::constants::{
    BITCOIN_MAINNET_P2PKH_VERSION, BITCOIN_TESTNET_P2PKH_VERSION, MAINNET_XPRV_VERSION,
    MAINNET_XPUB_VERSION, TESTNET_XPRV_VERSION, TESTNET_XPUB_VERSION,
};
use crate::shared::error::WalletError;

pub type WalletResult<T> = Result<T, WalletError>;

/// Entropy strength of a mnemonic, in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "usize", into = "usize")]
pub enum Strength {
    #[default]
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    Bits256,
}

impl Strength {
    pub const ALL: [Strength; 5] = [
        Strength::Bits128,
        Strength::Bits160,
        Strength::Bits192,
        Strength::Bits224,
        Strength::Bits256,
    ];

    pub const fn bits(self) -> usize {
        match self {
            Strength::Bits128 => 128,
            Strength::Bits160 => 160,
            Strength::Bits192 => 192,
            Strength::Bits224 => 224,
            Strength::Bits256 => 256,
        }
    }

    /// Entropy length in bytes
    pub const fn entropy_len(self) -> usize {
        self.bits() / 8
    }

    /// Number of checksum bits appended to the entropy
    pub const fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    pub const fn word_count(self) -> usize {
        (self.bits() + self.checksum_bits()) / 11
    }

    pub fn from_entropy_len(len: usize) -> WalletResult<Self> {
        Self::try_from(len * 8)
    }

    pub fn from_word_count(count: usize) -> WalletResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.word_count() == count)
            .ok_or(WalletError::InvalidWordCount(count))
    }
}

impl TryFrom<usize> for Strength {
    type Error = WalletError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.bits() == bits)
            .ok_or(WalletError::InvalidStrength(bits))
    }
}

impl From<Strength> for usize {
    fn from(strength: Strength) -> Self {
        strength.bits()
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

/// Bitcoin network selecting address and extended-key version bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BitcoinNetwork {
    #[default]
    Mainnet,
    Testnet,
}

impl BitcoinNetwork {
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            BitcoinNetwork::Mainnet => BITCOIN_MAINNET_P2PKH_VERSION,
            BitcoinNetwork::Testnet => BITCOIN_TESTNET_P2PKH_VERSION,
        }
    }

    pub fn xprv_version(&self) -> [u8; 4] {
        match self {
            BitcoinNetwork::Mainnet => MAINNET_XPRV_VERSION,
            BitcoinNetwork::Testnet => TESTNET_XPRV_VERSION,
        }
    }

    pub fn xpub_version(&self) -> [u8; 4] {
        match self {
            BitcoinNetwork::Mainnet => MAINNET_XPUB_VERSION,
            BitcoinNetwork::Testnet => TESTNET_XPUB_VERSION,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BitcoinNetwork::Mainnet => "mainnet",
            BitcoinNetwork::Testnet => "testnet",
        }
    }
}

impl FromStr for BitcoinNetwork {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(BitcoinNetwork::Mainnet),
            "testnet" | "test" => Ok(BitcoinNetwork::Testnet),
            other => Err(WalletError::config(format!("Unknown bitcoin network: {}", other))),
        }
    }
}

/// Chain an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Bitcoin,
    Ethereum,
}
