//! Domain entities and value objects
//!
//! This module contains the serialisable shapes exposed to collaborators.

pub mod wallet;

// Re-export entities
pub use wallet::*;
