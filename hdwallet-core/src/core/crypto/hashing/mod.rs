//! Hashing functionality for the wallet core
//!
//! SHA-256, RIPEMD-160, Keccak-256 and HMAC-SHA512 as the derivation and
//! address pipelines use them.

pub mod hash_manager;

pub use hash_manager::*;
