//! Utility functions for the wallet core
//!
//! This module contains common utility functions used throughout the wallet core.

use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

/// Strip an optional `0x` prefix from a hex string
pub fn strip_hex_prefix(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
}

/// Decode hex (with or without `0x`) into bytes
pub fn decode_hex(input: &str) -> WalletResult<Vec<u8>> {
    Ok(hex::decode(strip_hex_prefix(input))?)
}

/// Copy a slice into a fixed-size array, failing on length mismatch
pub fn to_array<const N: usize>(bytes: &[u8]) -> WalletResult<[u8; N]> {
    bytes
        .try_into()
        .map_err(|_| WalletError::validation(format!("Expected {} bytes, got {}", N, bytes.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix("0xabcd"), "abcd");
        assert_eq!(strip_hex_prefix(" 0XABCD "), "ABCD");
        assert_eq!(strip_hex_prefix("abcd"), "abcd");
    }

    #[test]
    fn test_to_array_checks_length() {
        let bytes: [u8; 2] = to_array(&decode_hex("0x0102").unwrap()).unwrap();
        assert_eq!(bytes, [1, 2]);
        assert!(to_array::<3>(&[1, 2]).is_err());
        assert!(decode_hex("zz").is_err());
    }
}
