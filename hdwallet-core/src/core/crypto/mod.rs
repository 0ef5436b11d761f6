//! Cryptographic functionality for the wallet core
//!
//! This module provides hashing, mnemonic encoding, Base58Check and the BIP-32 key tree.
//!
//! SECURITY: entropy, seeds and private scalars are held in zeroizing
//! containers and never appear in `Debug` output.

pub mod base58check;
pub mod hashing;
pub mod keys;
pub mod mnemonic;

// Re-export all public items from submodules
pub use hashing::*;
pub use keys::*;
pub use mnemonic::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic_to_master_key_pipeline() {
        let entropy = Entropy::from_bytes(&[0u8; 16]).unwrap();
        let phrase = MnemonicCodec::entropy_to_phrase(&entropy);
        let seed = MnemonicCodec::phrase_to_seed(&phrase, "TREZOR");
        let master = KeyTree::new().master_from_seed(&seed).unwrap();

        assert!(master.is_private());
        assert_eq!(
            master.to_xprv(crate::shared::types::BitcoinNetwork::Mainnet).unwrap().as_str(),
            "xprv9s21ZrQH143K3h3fDYiay8mocZ3afhfULfb5GX8kCBdno77K4HiA15Tg23wpbeF1pLfs1c5SPmYHrEpTuuRhxMwvKDwqdKiGJS9XFKzUsAF"
        );
    }
}
