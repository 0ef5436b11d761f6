use secp256k1::PublicKey;

use super::Address;
use crate::core::crypto::base58check;
use crate::core::crypto::hashing::HashManager;
use crate::shared::constants::{
    COMPRESSED_PUBLIC_KEY_SIZE, ETHEREUM_ADDRESS_PREFIX, ETHEREUM_ADDRESS_SIZE,
    UNCOMPRESSED_PUBLIC_KEY_SIZE,
};
use crate::shared::error::WalletError;
use crate::shared::types::{BitcoinNetwork, Chain, WalletResult};
use crate::shared::utils::decode_hex;

/// Pure public key to address encoders
pub struct AddressEncoder;

impl AddressEncoder {
    /// Accept a 33-byte compressed or 65-byte uncompressed SEC1 public key
    pub fn parse_public_key(bytes: &[u8]) -> WalletResult<PublicKey> {
        if bytes.len() != COMPRESSED_PUBLIC_KEY_SIZE && bytes.len() != UNCOMPRESSED_PUBLIC_KEY_SIZE {
            return Err(WalletError::public_key(format!(
                "expected {} or {} bytes, got {}",
                COMPRESSED_PUBLIC_KEY_SIZE,
                UNCOMPRESSED_PUBLIC_KEY_SIZE,
                bytes.len()
            )));
        }
        PublicKey::from_slice(bytes).map_err(|e| WalletError::public_key(e.to_string()))
    }

    pub fn parse_public_key_hex(text: &str) -> WalletResult<PublicKey> {
        let bytes = decode_hex(text).map_err(|_| WalletError::public_key("not valid hex"))?;
        Self::parse_public_key(&bytes)
    }

    /// Mainnet P2PKH address
    pub fn to_bitcoin_address(public_key: &PublicKey) -> Address {
        Self::to_bitcoin_address_for(public_key, BitcoinNetwork::Mainnet)
    }

    /// P2PKH: Base58Check(version || HASH160(compressed key))
    pub fn to_bitcoin_address_for(public_key: &PublicKey, network: BitcoinNetwork) -> Address {
        let mut payload = Vec::with_capacity(21);
        payload.push(network.p2pkh_version());
        payload.extend_from_slice(&HashManager::hash160(&public_key.serialize()));
        Address::new(Chain::Bitcoin, base58check::encode(&payload))
    }

    /// `0x` + lowercase hex of the last 20 bytes of Keccak-256(x || y)
    pub fn to_ethereum_address(public_key: &PublicKey) -> Address {
        let hex_body = hex::encode(Self::ethereum_address_bytes(public_key));
        Address::new(Chain::Ethereum, format!("{}{}", ETHEREUM_ADDRESS_PREFIX, hex_body))
    }

    /// EIP-55 mixed-case form of `to_ethereum_address`
    pub fn to_ethereum_checksum_address(public_key: &PublicKey) -> Address {
        let lower = hex::encode(Self::ethereum_address_bytes(public_key));
        Address::new(Chain::Ethereum, format!("{}{}", ETHEREUM_ADDRESS_PREFIX, eip55(&lower)))
    }

    fn ethereum_address_bytes(public_key: &PublicKey) -> [u8; ETHEREUM_ADDRESS_SIZE] {
        let uncompressed = public_key.serialize_uncompressed();
        let hash = HashManager::keccak256(&uncompressed[1..]);
        let mut address = [0u8; ETHEREUM_ADDRESS_SIZE];
        address.copy_from_slice(&hash[32 - ETHEREUM_ADDRESS_SIZE..]);
        address
    }
}

/// Uppercase each hex letter whose nibble in Keccak-256(lowercase hex) is >= 8
fn eip55(lower_hex: &str) -> String {
    let hash = HashManager::keccak256(lower_hex.as_bytes());
    lower_hex
        .char_indices()
        .map(|(i, c)| {
            let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Public key of private scalar 1, the curve generator G
    const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    fn generator() -> PublicKey {
        AddressEncoder::parse_public_key_hex(G_COMPRESSED).unwrap()
    }

    #[test]
    fn test_bitcoin_address_known_key() {
        let address = AddressEncoder::to_bitcoin_address(&generator());
        assert_eq!(address.as_str(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert_eq!(address.chain(), Chain::Bitcoin);
    }

    #[test]
    fn test_bitcoin_address_hashes_compressed_form() {
        let from_uncompressed = AddressEncoder::parse_public_key_hex(G_UNCOMPRESSED).unwrap();
        assert_eq!(
            AddressEncoder::to_bitcoin_address(&from_uncompressed).as_str(),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
    }

    #[test]
    fn test_bitcoin_testnet_address() {
        let address = AddressEncoder::to_bitcoin_address_for(&generator(), BitcoinNetwork::Testnet);
        assert_eq!(address.as_str(), "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r");
    }

    #[test]
    fn test_ethereum_address_known_key() {
        let lower = AddressEncoder::to_ethereum_address(&generator());
        assert_eq!(lower.as_str(), "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf");
        assert_eq!(lower.chain(), Chain::Ethereum);

        let checksummed = AddressEncoder::to_ethereum_checksum_address(&generator());
        assert_eq!(checksummed.as_str(), "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
        assert_eq!(checksummed.as_str().to_lowercase(), lower.as_str());
    }

    #[test]
    fn test_eip55_reference_addresses() {
        // Checksum vectors published with EIP-55
        for expected in [
            "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "fB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "dbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "D1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            assert_eq!(eip55(&expected.to_lowercase()), expected);
        }
    }

    #[test]
    fn test_encoders_are_idempotent() {
        let key = generator();
        assert_eq!(
            AddressEncoder::to_bitcoin_address(&key),
            AddressEncoder::to_bitcoin_address(&key)
        );
        assert_eq!(
            AddressEncoder::to_ethereum_checksum_address(&key),
            AddressEncoder::to_ethereum_checksum_address(&key)
        );
    }

    #[test]
    fn test_rejects_malformed_public_keys() {
        for input in [
            "",
            "02",
            "zz79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            "0579be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            &G_COMPRESSED[..64],
        ] {
            assert!(
                matches!(
                    AddressEncoder::parse_public_key_hex(input),
                    Err(WalletError::InvalidPublicKey(_))
                ),
                "{:?} should be rejected",
                input
            );
        }
    }
}
