//! Constants for the wallet core
//!
//! This module contains all constants used throughout the wallet core.

// Mnemonic constants
pub const BITS_PER_WORD: usize = 11;
pub const PBKDF2_ROUNDS: u32 = 2048;
pub const MNEMONIC_SALT_PREFIX: &str = "mnemonic";
pub const SEED_SIZE: usize = 64;

// Key constants
pub const PRIVATE_KEY_SIZE: usize = 32;
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;
pub const CHAIN_CODE_SIZE: usize = 32;
pub const FINGERPRINT_SIZE: usize = 4;
pub const HARDENED_OFFSET: u32 = 0x8000_0000;
pub const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";
pub const EXTENDED_KEY_PAYLOAD_SIZE: usize = 78;

// Extended key version bytes
pub const MAINNET_XPRV_VERSION: [u8; 4] = [0x04, 0x88, 0xAD, 0xE4];
pub const MAINNET_XPUB_VERSION: [u8; 4] = [0x04, 0x88, 0xB2, 0x1E];
pub const TESTNET_XPRV_VERSION: [u8; 4] = [0x04, 0x35, 0x83, 0x94];
pub const TESTNET_XPUB_VERSION: [u8; 4] = [0x04, 0x35, 0x87, 0xCF];

// Address constants
pub const BITCOIN_MAINNET_P2PKH_VERSION: u8 = 0x00;
pub const BITCOIN_TESTNET_P2PKH_VERSION: u8 = 0x6f;
pub const BASE58_CHECKSUM_SIZE: usize = 4;
pub const ETHEREUM_ADDRESS_SIZE: usize = 20;
pub const ETHEREUM_ADDRESS_PREFIX: &str = "0x";

// Configuration defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration keys
pub const ENV_DEFAULT_STRENGTH: &str = "HDWALLET_DEFAULT_STRENGTH";
pub const ENV_DEFAULT_PATH: &str = "HDWALLET_DEFAULT_PATH";
pub const ENV_BITCOIN_NETWORK: &str = "HDWALLET_BITCOIN_NETWORK";
pub const ENV_LOG_LEVEL: &str = "HDWALLET_LOG_LEVEL";
