//! Traits for the external verification and resend collaborators

use async_trait::async_trait;

/// Checks a code against the backend
#[async_trait]
pub trait VerificationCollaborator: Send + Sync {
    /// `Ok(true)` when the code is accepted, `Ok(false)` when rejected,
    /// `Err` when the service itself failed
    async fn verify(&self, identifier: &str, code: &str) -> Result<bool, String>;
}

/// Triggers out-of-band delivery of a fresh code
#[async_trait]
pub trait ResendCollaborator: Send + Sync {
    /// Returns the delivery id reported by the provider
    async fn resend(&self, identifier: &str) -> Result<String, String>;
}
