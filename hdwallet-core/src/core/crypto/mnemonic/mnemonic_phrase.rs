use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

use super::MnemonicCodec;
use crate::shared::error::WalletError;
use crate::shared::types::{Strength, WalletResult};

/// Checksummed BIP-39 phrase in canonical form: NFKD, single spaces
///
/// Only constructed through the codec, so every value has a valid checksum.
#[derive(Clone, PartialEq, Eq)]
pub struct MnemonicPhrase {
    phrase: String,
    strength: Strength,
}

impl MnemonicPhrase {
    pub(crate) fn from_canonical(phrase: String, strength: Strength) -> Self {
        Self { phrase, strength }
    }

    /// Parse and validate user-supplied phrase text
    pub fn parse(text: &str) -> WalletResult<Self> {
        let entropy = MnemonicCodec::phrase_to_entropy(text)?;
        Ok(MnemonicCodec::entropy_to_phrase(&entropy))
    }

    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split(' ').collect()
    }

    pub fn word_count(&self) -> usize {
        self.strength.word_count()
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }
}

impl FromStr for MnemonicPhrase {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// The phrase is the wallet; keep it out of logs
impl fmt::Debug for MnemonicPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnemonicPhrase")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl Drop for MnemonicPhrase {
    fn drop(&mut self) {
        self.phrase.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_parse_canonicalizes_whitespace() {
        let messy = format!("  {}\t\n", ABANDON_ABOUT.replace(' ', "   "));
        let phrase = MnemonicPhrase::parse(&messy).expect("valid phrase");
        assert_eq!(phrase.as_str(), ABANDON_ABOUT);
        assert_eq!(phrase.word_count(), 12);
        assert_eq!(phrase.words().last(), Some(&"about"));
        assert_eq!(phrase.strength(), Strength::Bits128);
    }

    #[test]
    fn test_from_str_rejects_bad_checksum() {
        let bad = ABANDON_ABOUT.replace("about", "abandon");
        assert_eq!(bad.parse::<MnemonicPhrase>().unwrap_err(), WalletError::InvalidChecksum);
    }

    #[test]
    fn test_debug_redacts_phrase() {
        let phrase = MnemonicPhrase::parse(ABANDON_ABOUT).unwrap();
        let debug = format!("{:?}", phrase);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("abandon"));
    }
}
