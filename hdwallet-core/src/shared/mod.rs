//! Shared types, utilities, and constants
//!
//! This module contains common types, utilities, and constants used throughout
//! the wallet core. It provides a centralized location for shared functionality.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod utils;

// Re-export shared components
pub use config::*;
pub use constants::*;
pub use error::*;
pub use types::*;
pub use utils::*;
