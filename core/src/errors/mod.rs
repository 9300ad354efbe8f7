//! Domain error types for code entry and verification sessions.

use booth_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Rule violations raised by the code entry state machine.
///
/// None of these change state; the caller surfaces them and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Incomplete code: {filled} of {required} digits entered")]
    IncompleteCode { filled: usize, required: usize },

    #[error("Slot out of range: {slot} (last slot is {last})")]
    SlotOutOfRange { slot: usize, last: usize },

    #[error("Input is locked while {state}")]
    InputLocked { state: &'static str },

    #[error("A verification request is already pending")]
    SubmissionPending,

    #[error("A resend request is already pending")]
    ResendPending,

    #[error("Code already verified")]
    AlreadyVerified,

    #[error("No verification request is pending")]
    NotSubmitting,
}

impl IntoErrorResponse for EntryError {
    fn to_error_response(&self) -> ErrorResponse {
        let code = match self {
            EntryError::IncompleteCode { .. } => error_codes::CODE_INCOMPLETE,
            EntryError::SlotOutOfRange { .. } => error_codes::SLOT_OUT_OF_RANGE,
            EntryError::InputLocked { .. } => error_codes::INPUT_LOCKED,
            EntryError::SubmissionPending => error_codes::SUBMISSION_PENDING,
            EntryError::ResendPending => error_codes::RESEND_PENDING,
            EntryError::AlreadyVerified => error_codes::ALREADY_VERIFIED,
            EntryError::NotSubmitting => error_codes::NOT_SUBMITTING,
        };
        let response = ErrorResponse::new(code, self.to_string());
        match self {
            EntryError::IncompleteCode { filled, required } => response
                .add_detail("filled", filled)
                .add_detail("required", required),
            EntryError::SlotOutOfRange { slot, .. } => response.add_detail("slot", slot),
            _ => response,
        }
    }
}

/// Session-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("Verification service error: {message}")]
    Verification { message: String },

    #[error("Resend service error: {message}")]
    Resend { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            DomainError::Entry(err) => err.to_error_response(),
            DomainError::Validation { .. } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, self.to_string())
            }
            DomainError::Verification { .. } => {
                ErrorResponse::new(error_codes::VERIFICATION_FAILED, self.to_string())
            }
            DomainError::Resend { .. } => {
                ErrorResponse::new(error_codes::RESEND_FAILED, self.to_string())
            }
            DomainError::Internal { .. } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, self.to_string())
            }
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
