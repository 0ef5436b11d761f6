//! Core wallet functionality
//!
//! This module contains the cryptographic pipeline (entropy, mnemonic,
//! key tree), address encoding, and the session orchestrator.

pub mod address;
pub mod crypto;
pub mod wallet;
