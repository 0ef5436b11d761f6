//! Domain layer - entities exchanged with the outside world

pub mod entities;

// Re-export domain components
pub use entities::*;
