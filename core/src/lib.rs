//! # Booth 33 Core
//!
//! Verification code entry for the Booth 33 onboarding flow. This crate holds
//! the pure code entry state machine (slots, focus, expiry timer, resend
//! cooldown, submission lifecycle), its error types, the collaborator traits,
//! and the async session driver that runs the countdown.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
