//! Key tree functionality for the wallet core
//!
//! Extended keys, derivation paths, and the BIP-32 derivation engine.

pub mod derivation_path;
pub mod extended_key;
pub mod key_tree;

pub use derivation_path::{ChildNumber, DerivationPath};
pub use extended_key::{ChainCode, ExtendedKey, Fingerprint};
pub use key_tree::KeyTree;
