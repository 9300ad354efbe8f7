//! Shared utilities and common types for the Booth 33 verification flow
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types (environment, logging, verification timings, collaborators)
//! - Error response structure and stable error codes
//! - Utility functions (email identifier handling, digit sanitizing)
//! - Language selection for user-visible messages

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use crate::config::{
    AppConfig, CollaboratorConfig, ConfigError, Environment, LogFormat, LoggingConfig,
    VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use types::Language;
pub use utils::{digits, email};
