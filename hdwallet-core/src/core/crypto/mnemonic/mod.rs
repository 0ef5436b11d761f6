//! Mnemonic functionality for the wallet core
//!
//! Entropy generation, the BIP-39 phrase codec, and phrase-to-seed stretching.

pub mod entropy;
pub mod mnemonic_codec;
pub mod mnemonic_phrase;
pub mod seed;

pub use entropy::{Entropy, EntropySource};
pub use mnemonic_codec::MnemonicCodec;
pub use mnemonic_phrase::MnemonicPhrase;
pub use seed::Seed;
