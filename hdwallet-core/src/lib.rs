//! HD Wallet Core
//!
//! Deterministic key hierarchy core: BIP-39 mnemonics, BIP-32 derivation
//! along BIP-44 paths, and Bitcoin / Ethereum address encoding.
//!
//! ## Architecture
//!
//! - **Core**: entropy, mnemonic codec, key tree, address encoder, session
//! - **Domain**: export entities handed to collaborators
//! - **Shared**: errors, configuration, common types and constants
//!
//! Data flows strictly forward:
//! entropy → mnemonic → seed → master key → child key → addresses.
//!
//! ## Security Features
//!
//! - Entropy, seeds and private scalars are zeroized on drop
//! - Secrets never appear in `Debug` output
//! - Curve arithmetic is delegated to libsecp256k1
//!
//! ## Usage
//!
//! ```rust
//! use hdwallet_core::{DerivationPath, Strength, WalletSession};
//!
//! let session = WalletSession::default().generate(Strength::Bits128);
//! let derived = session.derive("", &DerivationPath::bip44_bitcoin())?;
//! let export = derived.export()?;
//! assert!(export.bitcoin_address.starts_with('1'));
//! # Ok::<(), hdwallet_core::WalletError>(())
//! ```

pub mod core;
pub mod domain;
pub mod shared;

use env_logger::Env;

// Re-export specific components
pub use crate::core::address::{Address, AddressEncoder};
pub use crate::core::crypto::keys::{ChildNumber, DerivationPath, ExtendedKey, KeyTree};
pub use crate::core::crypto::mnemonic::{Entropy, EntropySource, MnemonicCodec, MnemonicPhrase, Seed};
pub use crate::core::wallet::WalletSession;

// Re-export domain entities
pub use crate::domain::{DerivedKeys, WalletExport};

// Re-export shared types
pub use crate::shared::config::CoreConfig;
pub use crate::shared::error::WalletError;
pub use crate::shared::types::{BitcoinNetwork, Chain, Strength, WalletResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

// Feature flags
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export FFI functions when feature is enabled
#[cfg(feature = "ffi")]
pub use ffi::*;

/// Load configuration and initialise logging at its level
///
/// `RUST_LOG` still takes precedence when set. Calling this twice is harmless.
pub fn init() -> WalletResult<CoreConfig> {
    let config = CoreConfig::from_env()?;
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .try_init();
    log::info!("{} {} initialised", NAME, VERSION);
    Ok(config)
}

/// Fresh mnemonic phrase of `strength_bits` bits of entropy
pub fn generate_phrase(strength_bits: usize) -> WalletResult<String> {
    let entropy = EntropySource::generate(strength_bits)?;
    Ok(MnemonicCodec::entropy_to_phrase(&entropy).as_str().to_string())
}

/// Master and child keypairs for `phrase` and `passphrase` at `path_text`
pub fn derive(phrase: &str, passphrase: &str, path_text: &str) -> WalletResult<DerivedKeys> {
    let path: DerivationPath = path_text.parse()?;
    WalletSession::default()
        .with_phrase(phrase)?
        .derive(passphrase, &path)?
        .derived_keys()
}

/// Mainnet P2PKH address for a hex-encoded public key
pub fn bitcoin_address(child_public_key_hex: &str) -> WalletResult<String> {
    let public_key = AddressEncoder::parse_public_key_hex(child_public_key_hex)?;
    Ok(AddressEncoder::to_bitcoin_address(&public_key).into_string())
}

/// EIP-55 Ethereum address for a hex-encoded public key
pub fn ethereum_address(child_public_key_hex: &str) -> WalletResult<String> {
    let public_key = AddressEncoder::parse_public_key_hex(child_public_key_hex)?;
    Ok(AddressEncoder::to_ethereum_checksum_address(&public_key).into_string())
}
