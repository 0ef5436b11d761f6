//! BIP-32 hierarchical deterministic derivation over secp256k1
//!
//! Curve arithmetic is delegated to libsecp256k1; this module only arranges
//! the HMAC inputs and byte layouts.

use secp256k1::{All, PublicKey, Scalar, Secp256k1, SecretKey};
use zeroize::Zeroizing;

use super::{ChildNumber, DerivationPath, ExtendedKey};
use crate::core::crypto::base58check;
use crate::core::crypto::hashing::HashManager;
use crate::core::crypto::mnemonic::Seed;
use crate::shared::constants::{
    CHAIN_CODE_SIZE, EXTENDED_KEY_PAYLOAD_SIZE, FINGERPRINT_SIZE, MASTER_HMAC_KEY, PRIVATE_KEY_SIZE,
};
use crate::shared::error::WalletError;
use crate::shared::types::{BitcoinNetwork, WalletResult};
use crate::shared::utils::to_array;

/// Derives master and child extended keys
///
/// Holds only the secp256k1 context; no key material survives between calls.
#[derive(Clone, Debug)]
pub struct KeyTree {
    secp256k1: Secp256k1<All>,
}

impl KeyTree {
    pub fn new() -> Self {
        Self {
            secp256k1: Secp256k1::new(),
        }
    }

    /// Master key from HMAC-SHA512(key = "Bitcoin seed", data = seed)
    pub fn master_from_seed(&self, seed: &Seed) -> WalletResult<ExtendedKey> {
        let output = Zeroizing::new(HashManager::hmac_sha512(MASTER_HMAC_KEY, &[seed.as_bytes()])?);
        let master = self.master_from_output(&output)?;
        log::debug!("Derived master key");
        Ok(master)
    }

    /// IL becomes the master secret, IR the chain code
    fn master_from_output(&self, output: &[u8; 64]) -> WalletResult<ExtendedKey> {
        let (il, ir) = split_output(output)?;
        let private_key = SecretKey::from_byte_array(*il).map_err(|_| WalletError::InvalidSeed)?;
        let public_key = PublicKey::from_secret_key(&self.secp256k1, &private_key);

        Ok(ExtendedKey::new(
            Some(private_key),
            public_key,
            ir,
            0,
            [0u8; 4],
            ChildNumber::from_u32(0),
        ))
    }

    /// CKDpriv / CKDpub for a single child
    ///
    /// A tweak outside the curve order, or a zero child key, is reported as
    /// `InvalidChild`; the caller chooses whether to move on to the next index.
    pub fn derive_child(&self, parent: &ExtendedKey, child: ChildNumber) -> WalletResult<ExtendedKey> {
        let raw_index = child.to_u32();
        let index_bytes = raw_index.to_be_bytes();

        let output = if child.is_hardened() {
            let secret = parent
                .private_key_bytes()
                .ok_or(WalletError::HardenedFromPublic(child.index()))?;
            HashManager::hmac_sha512(parent.chain_code(), &[&[0u8][..], secret.as_slice(), &index_bytes[..]])?
        } else {
            HashManager::hmac_sha512(parent.chain_code(), &[&parent.public_key_bytes()[..], &index_bytes[..]])?
        };
        let output = Zeroizing::new(output);
        self.child_from_output(parent, child, &output)
    }

    /// IL tweaks the parent key, IR becomes the child chain code
    fn child_from_output(
        &self,
        parent: &ExtendedKey,
        child: ChildNumber,
        output: &[u8; 64],
    ) -> WalletResult<ExtendedKey> {
        let (il, ir) = split_output(output)?;
        let raw_index = child.to_u32();
        let invalid = || WalletError::InvalidChild { index: raw_index };
        let tweak = Scalar::from_be_bytes(*il).map_err(|_| invalid())?;

        let (private_key, public_key) = match parent.private_key() {
            Some(parent_key) => {
                let child_key = parent_key.add_tweak(&tweak).map_err(|_| invalid())?;
                let public_key = PublicKey::from_secret_key(&self.secp256k1, &child_key);
                (Some(child_key), public_key)
            }
            None => {
                let public_key = parent
                    .public_key()
                    .add_exp_tweak(&self.secp256k1, &tweak)
                    .map_err(|_| invalid())?;
                (None, public_key)
            }
        };

        let depth = parent
            .depth()
            .checked_add(1)
            .ok_or_else(|| WalletError::path("maximum derivation depth of 255 exceeded"))?;

        Ok(ExtendedKey::new(
            private_key,
            public_key,
            ir,
            depth,
            parent.fingerprint(),
            child,
        ))
    }

    /// Fold `derive_child` over every segment of `path`
    pub fn derive_path(&self, master: &ExtendedKey, path: &DerivationPath) -> WalletResult<ExtendedKey> {
        let key = path
            .iter()
            .try_fold(master.clone(), |key, child| self.derive_child(&key, *child))?;
        log::debug!("Derived key at depth {}", key.depth());
        Ok(key)
    }

    /// Decode a Base58Check `xprv`/`xpub` string back into a key and its network
    pub fn parse_extended_key(&self, text: &str) -> WalletResult<(ExtendedKey, BitcoinNetwork)> {
        let payload = Zeroizing::new(base58check::decode(text.trim())?);
        if payload.len() != EXTENDED_KEY_PAYLOAD_SIZE {
            return Err(WalletError::validation(format!(
                "extended key payload must be {} bytes, got {}",
                EXTENDED_KEY_PAYLOAD_SIZE,
                payload.len()
            )));
        }

        let version = to_array::<4>(&payload[..4])?;
        let (network, is_private) = [BitcoinNetwork::Mainnet, BitcoinNetwork::Testnet]
            .into_iter()
            .find_map(|network| {
                if network.xprv_version() == version {
                    Some((network, true))
                } else if network.xpub_version() == version {
                    Some((network, false))
                } else {
                    None
                }
            })
            .ok_or_else(|| WalletError::validation(format!("unknown extended key version {}", hex::encode(version))))?;

        let depth = payload[4];
        let parent_fingerprint = to_array::<FINGERPRINT_SIZE>(&payload[5..9])?;
        let child_number = ChildNumber::from_u32(u32::from_be_bytes(to_array::<4>(&payload[9..13])?));
        let chain_code = to_array::<CHAIN_CODE_SIZE>(&payload[13..45])?;
        let key_data = &payload[45..];

        if depth == 0 && (parent_fingerprint != [0u8; FINGERPRINT_SIZE] || child_number.to_u32() != 0) {
            return Err(WalletError::validation("master key with non-zero parent fingerprint or index"));
        }

        let (private_key, public_key) = if is_private {
            if key_data[0] != 0 {
                return Err(WalletError::validation("xprv key data must start with 0x00"));
            }
            let secret = Zeroizing::new(to_array::<PRIVATE_KEY_SIZE>(&key_data[1..])?);
            let private_key = SecretKey::from_byte_array(*secret)
                .map_err(|e| WalletError::validation(format!("invalid xprv secret: {}", e)))?;
            let public_key = PublicKey::from_secret_key(&self.secp256k1, &private_key);
            (Some(private_key), public_key)
        } else {
            let public_key = PublicKey::from_slice(key_data)
                .map_err(|e| WalletError::validation(format!("invalid xpub key: {}", e)))?;
            (None, public_key)
        };

        let key = ExtendedKey::new(
            private_key,
            public_key,
            chain_code,
            depth,
            parent_fingerprint,
            child_number,
        );
        Ok((key, network))
    }
}

impl Default for KeyTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Split HMAC-SHA512 output into IL (secret scalar) and IR (chain code)
fn split_output(output: &[u8; 64]) -> WalletResult<(Zeroizing<[u8; PRIVATE_KEY_SIZE]>, [u8; CHAIN_CODE_SIZE])> {
    let il = Zeroizing::new(to_array::<PRIVATE_KEY_SIZE>(&output[..PRIVATE_KEY_SIZE])?);
    let ir = to_array::<CHAIN_CODE_SIZE>(&output[PRIVATE_KEY_SIZE..])?;
    Ok((il, ir))
}
