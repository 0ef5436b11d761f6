use rand_core::{CryptoRng, OsRng, RngCore};
use std::fmt;
use zeroize::Zeroizing;

use crate::shared::types::{Strength, WalletResult};

/// Raw mnemonic entropy, zeroized on drop
#[derive(Clone, PartialEq, Eq)]
pub struct Entropy {
    bytes: Zeroizing<Vec<u8>>,
    strength: Strength,
}

impl Entropy {
    /// Wrap existing entropy bytes; the length must match a standard strength
    pub fn from_bytes(bytes: &[u8]) -> WalletResult<Self> {
        let strength = Strength::from_entropy_len(bytes.len())?;
        Ok(Self {
            bytes: Zeroizing::new(bytes.to_vec()),
            strength,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }
}

// Never print entropy
impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("strength", &self.strength)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Source of mnemonic entropy backed by the operating system CSPRNG
pub struct EntropySource;

impl EntropySource {
    /// Generate entropy for a strength given in bits
    pub fn generate(strength_bits: usize) -> WalletResult<Entropy> {
        let strength = Strength::try_from(strength_bits)?;
        Ok(Self::generate_with_strength(strength))
    }

    pub fn generate_with_strength(strength: Strength) -> Entropy {
        Self::generate_with_rng(strength, &mut OsRng)
    }

    /// Generate entropy from a caller-supplied cryptographic RNG
    pub fn generate_with_rng<R>(strength: Strength, rng: &mut R) -> Entropy
    where
        R: RngCore + CryptoRng,
    {
        let mut bytes = Zeroizing::new(vec![0u8; strength.entropy_len()]);
        rng.fill_bytes(&mut bytes);
        log::debug!("Generated {} of entropy", strength);
        Entropy { bytes, strength }
    }
}
