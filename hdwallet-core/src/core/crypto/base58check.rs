//! Base58Check: Base58 text over payload || first 4 bytes of double SHA-256

use crate::core::crypto::hashing::HashManager;
use crate::shared::constants::BASE58_CHECKSUM_SIZE;
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

/// Encode `payload` with a trailing double-SHA-256 checksum
///
/// Each leading zero byte becomes a leading `1`, as Bitcoin requires.
pub fn encode(payload: &[u8]) -> String {
    let checksum = HashManager::double_sha256(payload);
    let mut data = Vec::with_capacity(payload.len() + BASE58_CHECKSUM_SIZE);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..BASE58_CHECKSUM_SIZE]);
    bs58::encode(data).into_string()
}

/// Decode Base58Check text and verify its checksum, returning the payload
pub fn decode(text: &str) -> WalletResult<Vec<u8>> {
    let mut data = bs58::decode(text)
        .into_vec()
        .map_err(|e| WalletError::validation(format!("Base58 decoding error: {}", e)))?;
    if data.len() < BASE58_CHECKSUM_SIZE {
        return Err(WalletError::validation("Base58Check data shorter than its checksum"));
    }

    let checksum = data.split_off(data.len() - BASE58_CHECKSUM_SIZE);
    if HashManager::double_sha256(&data)[..BASE58_CHECKSUM_SIZE] != checksum[..] {
        return Err(WalletError::validation("Base58Check checksum mismatch"));
    }
    Ok(data)
}
