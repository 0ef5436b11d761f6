//! BIP-32 derivation paths
//!
//! Text form is slash-separated decimal indices with `'` (or `h`/`H`) marking
//! hardened segments, optionally prefixed by `m/`: `44'/0'/0'/0/0`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::shared::constants::HARDENED_OFFSET;
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

/// One path segment: a 31-bit index plus the hardened flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildNumber {
    index: u32,
    hardened: bool,
}

impl ChildNumber {
    pub fn new(index: u32, hardened: bool) -> WalletResult<Self> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::path(format!(
                "index {} exceeds the 31-bit range",
                index
            )));
        }
        Ok(Self { index, hardened })
    }

    pub fn normal(index: u32) -> WalletResult<Self> {
        Self::new(index, false)
    }

    pub fn hardened(index: u32) -> WalletResult<Self> {
        Self::new(index, true)
    }

    /// Decode the 32-bit wire form where the top bit marks hardening
    pub fn from_u32(raw: u32) -> Self {
        Self {
            index: raw & !HARDENED_OFFSET,
            hardened: raw & HARDENED_OFFSET != 0,
        }
    }

    /// 32-bit wire form, as fed to HMAC and extended-key serialization
    pub fn to_u32(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn is_hardened(&self) -> bool {
        self.hardened
    }
}

impl fmt::Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

impl FromStr for ChildNumber {
    type Err = WalletError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let (digits, hardened) = match segment
            .strip_suffix('\'')
            .or_else(|| segment.strip_suffix('h'))
            .or_else(|| segment.strip_suffix('H'))
        {
            Some(rest) => (rest, true),
            None => (segment, false),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WalletError::path(format!("malformed segment '{}'", segment)));
        }

        let index: u32 = digits
            .parse()
            .map_err(|_| WalletError::path(format!("index '{}' is out of range", digits)))?;

        Self::new(index, hardened)
    }
}

/// Ordered list of child numbers leading from the master key
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<ChildNumber>);

impl DerivationPath {
    /// The empty path, addressing the master key itself
    pub fn master() -> Self {
        Self(Vec::new())
    }

    /// `m/44'/0'/0'/0/0`
    pub fn bip44_bitcoin() -> Self {
        Self::bip44(0, 0, 0)
    }

    /// `m/44'/60'/0'/0/0`
    pub fn bip44_ethereum() -> Self {
        Self::bip44(60, 0, 0)
    }

    fn bip44(coin_type: u32, account: u32, address_index: u32) -> Self {
        let hardened = |i| ChildNumber { index: i, hardened: true };
        let normal = |i| ChildNumber { index: i, hardened: false };
        Self(vec![
            hardened(44),
            hardened(coin_type),
            hardened(account),
            normal(0),
            normal(address_index),
        ])
    }

    /// A new path extended by one segment
    pub fn child(&self, child: ChildNumber) -> Self {
        let mut segments = self.0.clone();
        segments.push(child);
        Self(segments)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChildNumber> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ChildNumber>> for DerivationPath {
    fn from(segments: Vec<ChildNumber>) -> Self {
        Self(segments)
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a ChildNumber;
    type IntoIter = std::slice::Iter<'a, ChildNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("m") {
            return Ok(Self::master());
        }

        let body = text
            .strip_prefix("m/")
            .or_else(|| text.strip_prefix("M/"))
            .unwrap_or(text);
        if body.is_empty() {
            return Err(WalletError::path("path is empty"));
        }

        body.split('/')
            .map(ChildNumber::from_str)
            .collect::<WalletResult<Vec<_>>>()
            .map(Self)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for child in &self.0 {
            write!(f, "/{}", child)?;
        }
        Ok(())
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bip44_path() {
        let path: DerivationPath = "44'/0'/0'/0/0".parse().unwrap();
        assert_eq!(path, DerivationPath::bip44_bitcoin());
        assert_eq!(path.len(), 5);
        assert!(path.iter().take(3).all(ChildNumber::is_hardened));
        assert!(!path.iter().nth(3).unwrap().is_hardened());
    }

    #[test]
    fn test_parse_prefixes_and_markers() {
        let expected = DerivationPath::bip44_ethereum();
        for text in ["m/44'/60'/0'/0/0", "M/44h/60H/0'/0/0", " 44'/60'/0'/0/0 "] {
            assert_eq!(text.parse::<DerivationPath>().unwrap(), expected, "{}", text);
        }
        assert!("m".parse::<DerivationPath>().unwrap().is_empty());
    }

    #[test]
    fn test_display_is_canonical() {
        let path: DerivationPath = "44h/0h/0h/0/7".parse().unwrap();
        assert_eq!(path.to_string(), "m/44'/0'/0'/0/7");
        assert_eq!(path.to_string().parse::<DerivationPath>().unwrap(), path);
        assert_eq!(DerivationPath::master().to_string(), "m");
    }

    #[test]
    fn test_rejects_malformed_paths() {
        for text in [
            "",
            "m/",
            "44'//0",
            "44'/0'/",
            "-1",
            "+5",
            "44''",
            "4 4",
            "abc",
            "0x10",
            "2147483648",
            "2147483648'",
            "99999999999",
            "/44'",
        ] {
            let result = text.parse::<DerivationPath>();
            assert!(
                matches!(result, Err(WalletError::InvalidPathSyntax(_))),
                "{:?} should be rejected, got {:?}",
                text,
                result
            );
        }
    }

    #[test]
    fn test_largest_index_accepted() {
        let path: DerivationPath = "2147483647'/2147483647".parse().unwrap();
        let raw: Vec<u32> = path.iter().map(ChildNumber::to_u32).collect();
        assert_eq!(raw, vec![0xFFFF_FFFF, 0x7FFF_FFFF]);
    }

    #[test]
    fn test_child_number_wire_form() {
        let hardened = ChildNumber::hardened(44).unwrap();
        assert_eq!(hardened.to_u32(), 0x8000_002C);
        assert_eq!(ChildNumber::from_u32(0x8000_002C), hardened);
        assert_eq!(ChildNumber::from_u32(5), ChildNumber::normal(5).unwrap());
        assert!(ChildNumber::normal(HARDENED_OFFSET).is_err());
    }

    #[test]
    fn test_child_extends_without_mutating() {
        let account: DerivationPath = "m/44'/0'/0'".parse().unwrap();
        let external = account.child(ChildNumber::normal(0).unwrap());
        assert_eq!(account.len(), 3);
        assert_eq!(external.to_string(), "m/44'/0'/0'/0");
    }

    #[test]
    fn test_serde_as_string() {
        let path = DerivationPath::bip44_bitcoin();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"m/44'/0'/0'/0/0\"");
        let back: DerivationPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
        assert!(serde_json::from_str::<DerivationPath>("\"m/x\"").is_err());
    }
}
