//! Verification session module for email code entry
//!
//! This module drives the code entry state machine:
//! - Input, backspace and focus events delegated to the state machine
//! - One-second expiry countdown running while the session is alive
//! - Code submission through the verification collaborator
//! - Cooldown-gated resend through the resend collaborator

mod countdown;
mod service;
mod traits;
mod types;


pub use countdown::Countdown;
pub use service::VerificationSession;
pub use traits::{ResendCollaborator, VerificationCollaborator};
pub use types::{ResendResult, SubmitResult, REJECTED_REASON};
