//! Types for verification session results

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Reason recorded on the state machine when the collaborator rejects a code
pub const REJECTED_REASON: &str = "Invalid verification code";

/// Result of a completed submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitResult {
    /// Whether the collaborator accepted the code
    pub verified: bool,
    /// Rejection reason (if verification failed)
    pub error_message: Option<String>,
    /// When the collaborator answered
    pub completed_at: DateTime<Utc>,
}

impl SubmitResult {
    pub fn verified() -> Self {
        Self {
            verified: true,
            error_message: None,
            completed_at: Utc::now(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            verified: false,
            error_message: Some(reason.into()),
            completed_at: Utc::now(),
        }
    }
}

/// Result of a resend request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ResendResult {
    /// A new code is on its way; timer, buffer and focus were reset
    Sent { delivery_id: String },
    /// Cooldown still active; nothing changed
    Throttled { retry_in_seconds: u32 },
}
