//! Domain layer containing the code entry entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
