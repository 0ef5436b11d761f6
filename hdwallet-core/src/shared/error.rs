//! Error handling for the wallet core
//!
//! This module defines the error types used throughout the wallet core.
//! Every failure the derivation pipeline can produce is a typed, recoverable
//! variant; callers decide whether to abort or retry.

use thiserror::Error;

/// Wallet error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid entropy strength: {0} bits (expected 128, 160, 192, 224 or 256)")]
    InvalidStrength(usize),

    #[error("Invalid word count: {0} (expected 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),

    #[error("Word '{0}' is not in the BIP-39 wordlist")]
    UnknownWord(String),

    #[error("Mnemonic checksum mismatch")]
    InvalidChecksum,

    #[error("Seed produces an invalid master key")]
    InvalidSeed,

    #[error("Child index {index} produces an invalid key")]
    InvalidChild { index: u32 },

    #[error("Hardened child {0} cannot be derived from a public key")]
    HardenedFromPublic(u32),

    #[error("Invalid derivation path: {0}")]
    InvalidPathSyntax(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Not ready: {0}")]
    NotReady(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl WalletError {
    /// Create a derivation path error
    pub fn path(message: impl Into<String>) -> Self {
        Self::InvalidPathSyntax(message.into())
    }

    /// Create a public key error
    pub fn public_key(message: impl Into<String>) -> Self {
        Self::InvalidPublicKey(message.into())
    }

    /// Create a not-ready error naming the missing artifact
    pub fn not_ready(artifact: impl Into<String>) -> Self {
        Self::NotReady(artifact.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Stable numeric code, used across the C boundary
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidStrength(_) => 1,
            Self::InvalidWordCount(_) => 2,
            Self::UnknownWord(_) => 3,
            Self::InvalidChecksum => 4,
            Self::InvalidSeed => 5,
            Self::InvalidChild { .. } => 6,
            Self::HardenedFromPublic(_) => 7,
            Self::InvalidPathSyntax(_) => 8,
            Self::InvalidPublicKey(_) => 9,
            Self::NotReady(_) => 10,
            Self::Config(_) => 11,
            Self::Crypto(_) => 12,
            Self::Validation(_) => 13,
            Self::Serialization(_) => 14,
        }
    }
}

impl From<hex::FromHexError> for WalletError {
    fn from(err: hex::FromHexError) -> Self {
        Self::validation(format!("Hex decoding error: {}", err))
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

// Cryptographic error conversions
impl From<secp256k1::Error> for WalletError {
    fn from(err: secp256k1::Error) -> Self {
        Self::crypto(format!("Secp256k1 error: {}", err))
    }
}

impl From<sha2::digest::InvalidLength> for WalletError {
    fn from(err: sha2::digest::InvalidLength) -> Self {
        Self::crypto(format!("MAC key error: {}", err))
    }
}
