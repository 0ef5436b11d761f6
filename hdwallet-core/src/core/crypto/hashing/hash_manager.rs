use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};
use sha3::Keccak256;

use crate::shared::WalletResult;

/// Digest primitives used by the derivation pipeline
pub struct HashManager;

impl HashManager {
    /// SHA-256
    pub fn sha256(data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }

    /// SHA-256 applied twice (Bitcoin checksums)
    pub fn double_sha256(data: &[u8]) -> [u8; 32] {
        Self::sha256(&Self::sha256(data))
    }

    /// RIPEMD-160 of SHA-256 (Bitcoin key hash)
    pub fn hash160(data: &[u8]) -> [u8; 20] {
        Ripemd160::digest(Self::sha256(data)).into()
    }

    /// Legacy Keccak-256 as used by Ethereum, not NIST SHA3-256
    pub fn keccak256(data: &[u8]) -> [u8; 32] {
        Keccak256::digest(data).into()
    }

    /// HMAC-SHA512 over the concatenation of `parts`
    pub fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> WalletResult<[u8; 64]> {
        let mut mac = Hmac::<Sha512>::new_from_slice(key)?;
        for part in parts {
            mac.update(part);
        }
        let mut out = [0u8; 64];
        out.copy_from_slice(&mac.finalize().into_bytes());
        Ok(out)
    }
}
