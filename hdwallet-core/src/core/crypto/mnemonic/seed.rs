use std::fmt;
use zeroize::Zeroizing;

use crate::shared::constants::SEED_SIZE;
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

/// Binary seed feeding the master key derivation
///
/// Phrase-derived seeds are always 64 bytes. Raw seeds between 16 and 64
/// bytes are accepted so published BIP-32 vectors can be replayed.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(Zeroizing<Vec<u8>>);

impl Seed {
    pub const MIN_LEN: usize = 16;
    pub const MAX_LEN: usize = SEED_SIZE;

    pub(crate) fn from_stretched(bytes: [u8; SEED_SIZE]) -> Self {
        Self(Zeroizing::new(bytes.to_vec()))
    }

    pub fn from_bytes(bytes: &[u8]) -> WalletResult<Self> {
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&bytes.len()) {
            return Err(WalletError::validation(format!(
                "Seed must be {} to {} bytes, got {}",
                Self::MIN_LEN,
                Self::MAX_LEN,
                bytes.len()
            )));
        }
        Ok(Self(Zeroizing::new(bytes.to_vec())))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("len", &self.0.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
