//! BIP-39 encoding between entropy, phrase text and binary seed

use bip39::Language;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use super::{Entropy, MnemonicPhrase, Seed};
use crate::core::crypto::hashing::HashManager;
use crate::shared::constants::{BITS_PER_WORD, MNEMONIC_SALT_PREFIX, PBKDF2_ROUNDS, SEED_SIZE};
use crate::shared::error::WalletError;
use crate::shared::types::{Strength, WalletResult};

const LANGUAGE: Language = Language::English;

/// Stateless BIP-39 codec over the English wordlist
pub struct MnemonicCodec;

impl MnemonicCodec {
    /// Encode entropy and its checksum as 11-bit word indices
    pub fn entropy_to_phrase(entropy: &Entropy) -> MnemonicPhrase {
        let strength = entropy.strength();
        let checksum = HashManager::sha256(entropy.as_bytes())[0];

        let mut bits = Zeroizing::new(Vec::with_capacity(entropy.as_bytes().len() + 1));
        bits.extend_from_slice(entropy.as_bytes());
        bits.push(checksum);

        let word_list = LANGUAGE.word_list();
        let words: Vec<&str> = (0..strength.word_count())
            .map(|i| word_list[read_index(&bits, i) as usize])
            .collect();

        MnemonicPhrase::from_canonical(words.join(" "), strength)
    }

    /// Decode phrase text back to entropy, verifying the embedded checksum
    pub fn phrase_to_entropy(text: &str) -> WalletResult<Entropy> {
        let normalized = Zeroizing::new(Self::normalize(text));
        let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();
        let strength = Strength::from_word_count(words.len())?;

        let mut bits = Zeroizing::new(vec![0u8; strength.entropy_len() + 1]);
        for (i, word) in words.iter().enumerate() {
            let index = LANGUAGE
                .find_word(word)
                .ok_or_else(|| WalletError::UnknownWord(word.to_string()))?;
            write_index(&mut bits, i, index);
        }

        let entropy_len = strength.entropy_len();
        let mask = 0xFFu8 << (8 - strength.checksum_bits());
        let expected = HashManager::sha256(&bits[..entropy_len])[0] & mask;
        if bits[entropy_len] != expected {
            return Err(WalletError::InvalidChecksum);
        }

        Entropy::from_bytes(&bits[..entropy_len])
    }

    /// Check a phrase, reporting why it is invalid
    pub fn check(text: &str) -> WalletResult<()> {
        Self::phrase_to_entropy(text).map(|_| ())
    }

    pub fn validate(text: &str) -> bool {
        Self::check(text).is_ok()
    }

    /// PBKDF2-HMAC-SHA512 over the phrase, salted with "mnemonic" + passphrase
    pub fn phrase_to_seed(phrase: &MnemonicPhrase, passphrase: &str) -> Seed {
        let password = Zeroizing::new(Self::normalize(phrase.as_str()));
        let salt = Zeroizing::new(format!(
            "{}{}",
            MNEMONIC_SALT_PREFIX,
            passphrase.nfkd().collect::<String>()
        ));

        let mut seed = [0u8; SEED_SIZE];
        pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);
        let result = Seed::from_stretched(seed);
        zeroize::Zeroize::zeroize(&mut seed);
        result
    }

    /// NFKD-normalize and collapse whitespace to single spaces
    pub fn normalize(text: &str) -> String {
        let decomposed: String = text.nfkd().collect();
        decomposed.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Read the `word`-th 11-bit big-endian group from `bits`
fn read_index(bits: &[u8], word: usize) -> u16 {
    (0..BITS_PER_WORD).fold(0u16, |acc, j| {
        let pos = word * BITS_PER_WORD + j;
        let bit = (bits[pos / 8] >> (7 - pos % 8)) & 1;
        (acc << 1) | bit as u16
    })
}

/// Write `index` as the `word`-th 11-bit big-endian group into `bits`
fn write_index(bits: &mut [u8], word: usize, index: u16) {
    for j in 0..BITS_PER_WORD {
        if (index >> (BITS_PER_WORD - 1 - j)) & 1 == 1 {
            let pos = word * BITS_PER_WORD + j;
            bits[pos / 8] |= 0x80 >> (pos % 8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn entropy(hex_str: &str) -> Entropy {
        Entropy::from_bytes(&hex::decode(hex_str).unwrap()).unwrap()
    }

    #[test]
    fn test_known_phrases() {
        let cases = [
            ("00000000000000000000000000000000", ABANDON_ABOUT),
            (
                "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
                "legal winner thank year wave sausage worth useful legal winner thank yellow",
            ),
            (
                "ffffffffffffffffffffffffffffffff",
                "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
            ),
            (
                "0000000000000000000000000000000000000000000000000000000000000000",
                "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
            ),
        ];
        for (entropy_hex, expected) in cases {
            let phrase = MnemonicCodec::entropy_to_phrase(&entropy(entropy_hex));
            assert_eq!(phrase.as_str(), expected);
            let back = MnemonicCodec::phrase_to_entropy(expected).unwrap();
            assert_eq!(hex::encode(back.as_bytes()), entropy_hex);
        }
    }

    #[test]
    fn test_trezor_seed_vector() {
        let phrase = MnemonicPhrase::parse(ABANDON_ABOUT).unwrap();
        let seed = MnemonicCodec::phrase_to_seed(&phrase, "TREZOR");
        assert_eq!(
            seed.to_hex(),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn test_seed_without_passphrase() {
        let phrase = MnemonicPhrase::parse(ABANDON_ABOUT).unwrap();
        let seed = MnemonicCodec::phrase_to_seed(&phrase, "");
        assert_eq!(
            seed.to_hex(),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
        assert_eq!(seed.as_bytes().len(), 64);
    }

    #[test]
    fn test_seed_is_deterministic_and_passphrase_sensitive() {
        let phrase = MnemonicPhrase::parse(ABANDON_ABOUT).unwrap();
        let a = MnemonicCodec::phrase_to_seed(&phrase, "pass");
        let b = MnemonicCodec::phrase_to_seed(&phrase, "pass");
        let c = MnemonicCodec::phrase_to_seed(&phrase, "Pass");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_passphrase_is_nfkd_normalized() {
        let phrase = MnemonicPhrase::parse(ABANDON_ABOUT).unwrap();
        // U+00E9 and "e" + U+0301 decompose to the same sequence
        let composed = MnemonicCodec::phrase_to_seed(&phrase, "caf\u{e9}");
        let decomposed = MnemonicCodec::phrase_to_seed(&phrase, "cafe\u{301}");
        assert_eq!(composed, decomposed);
    }

    #[test]
    fn test_checksum_failure() {
        let bad = ABANDON_ABOUT.replace("about", "abandon");
        assert!(!MnemonicCodec::validate(&bad));
        assert_eq!(MnemonicCodec::check(&bad).unwrap_err(), WalletError::InvalidChecksum);
    }

    #[test]
    fn test_unknown_word_and_word_count() {
        let unknown = ABANDON_ABOUT.replace("about", "bitcoin");
        assert_eq!(
            MnemonicCodec::check(&unknown).unwrap_err(),
            WalletError::UnknownWord("bitcoin".to_string())
        );
        assert_eq!(
            MnemonicCodec::check("abandon abandon about").unwrap_err(),
            WalletError::InvalidWordCount(3)
        );
        assert_eq!(MnemonicCodec::check("").unwrap_err(), WalletError::InvalidWordCount(0));
    }

    #[test]
    fn test_bit_helpers_round_trip() {
        let mut bits = [0u8; 3];
        write_index(&mut bits, 0, 0x7ff);
        write_index(&mut bits, 1, 0x001);
        assert_eq!(read_index(&bits, 0), 0x7ff);
        assert_eq!(read_index(&bits, 1), 0x001);
    }
}
