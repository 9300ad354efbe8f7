//! Services driving the domain entities.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    Countdown, ResendCollaborator, ResendResult, SubmitResult, VerificationCollaborator,
    VerificationSession,
};
