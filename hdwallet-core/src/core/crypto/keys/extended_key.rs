use secp256k1::{PublicKey, SecretKey};
use std::fmt;
use zeroize::Zeroizing;

use super::ChildNumber;
use crate::core::crypto::base58check;
use crate::core::crypto::hashing::HashManager;
use crate::shared::constants::{
    CHAIN_CODE_SIZE, EXTENDED_KEY_PAYLOAD_SIZE, FINGERPRINT_SIZE,
};
use crate::shared::error::WalletError;
use crate::shared::types::{BitcoinNetwork, WalletResult};

pub type ChainCode = [u8; CHAIN_CODE_SIZE];
pub type Fingerprint = [u8; FINGERPRINT_SIZE];

/// A node of the key tree: keypair (or public key alone) plus chain code
///
/// Values are never mutated; deriving produces a new `ExtendedKey`.
#[derive(Clone, PartialEq, Eq)]
pub struct ExtendedKey {
    private_key: Option<SecretKey>,
    public_key: PublicKey,
    chain_code: ChainCode,
    depth: u8,
    parent_fingerprint: Fingerprint,
    child_number: ChildNumber,
}

impl ExtendedKey {
    pub(crate) fn new(
        private_key: Option<SecretKey>,
        public_key: PublicKey,
        chain_code: ChainCode,
        depth: u8,
        parent_fingerprint: Fingerprint,
        child_number: ChildNumber,
    ) -> Self {
        Self {
            private_key,
            public_key,
            chain_code,
            depth,
            parent_fingerprint,
            child_number,
        }
    }

    pub fn private_key(&self) -> Option<&SecretKey> {
        self.private_key.as_ref()
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn chain_code(&self) -> &ChainCode {
        &self.chain_code
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn parent_fingerprint(&self) -> Fingerprint {
        self.parent_fingerprint
    }

    pub fn child_number(&self) -> ChildNumber {
        self.child_number
    }

    pub fn is_private(&self) -> bool {
        self.private_key.is_some()
    }

    /// 32-byte private scalar, if this key carries one
    pub fn private_key_bytes(&self) -> Option<Zeroizing<[u8; 32]>> {
        self.private_key.map(|sk| Zeroizing::new(sk.secret_bytes()))
    }

    /// 33-byte compressed public key
    pub fn public_key_bytes(&self) -> [u8; 33] {
        self.public_key.serialize()
    }

    pub fn private_key_hex(&self) -> Option<Zeroizing<String>> {
        self.private_key_bytes()
            .map(|bytes| Zeroizing::new(hex::encode(bytes.as_slice())))
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }

    /// First four bytes of HASH160 of the compressed public key
    pub fn fingerprint(&self) -> Fingerprint {
        let hash = HashManager::hash160(&self.public_key_bytes());
        let mut fingerprint = [0u8; FINGERPRINT_SIZE];
        fingerprint.copy_from_slice(&hash[..FINGERPRINT_SIZE]);
        fingerprint
    }

    /// Public-only copy; it can still derive non-hardened children
    pub fn neuter(&self) -> Self {
        Self {
            private_key: None,
            ..self.clone()
        }
    }

    /// Base58Check `xprv` serialization
    pub fn to_xprv(&self, network: BitcoinNetwork) -> WalletResult<Zeroizing<String>> {
        let secret = self
            .private_key_bytes()
            .ok_or_else(|| WalletError::validation("Public-only key has no xprv form"))?;

        let mut key_data = Zeroizing::new([0u8; 33]);
        key_data[1..].copy_from_slice(secret.as_slice());
        let payload = Zeroizing::new(self.serialize(network.xprv_version(), &key_data));
        Ok(Zeroizing::new(base58check::encode(&payload)))
    }

    /// Base58Check `xpub` serialization
    pub fn to_xpub(&self, network: BitcoinNetwork) -> String {
        base58check::encode(&self.serialize(network.xpub_version(), &self.public_key_bytes()))
    }

    fn serialize(&self, version: [u8; 4], key_data: &[u8; 33]) -> Vec<u8> {
        let mut payload = Vec::with_capacity(EXTENDED_KEY_PAYLOAD_SIZE);
        payload.extend_from_slice(&version);
        payload.push(self.depth);
        payload.extend_from_slice(&self.parent_fingerprint);
        payload.extend_from_slice(&self.child_number.to_u32().to_be_bytes());
        payload.extend_from_slice(&self.chain_code);
        payload.extend_from_slice(key_data);
        payload
    }
}

// Private scalar never reaches Debug output
impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("private_key", &self.private_key.map(|_| "[REDACTED]"))
            .field("public_key", &self.public_key_hex())
            .field("depth", &self.depth)
            .field("parent_fingerprint", &hex::encode(self.parent_fingerprint))
            .field("child_number", &self.child_number)
            .finish()
    }
}
