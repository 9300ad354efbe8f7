//! Resend Collaborator Adapter
//!
//! Implements the core `ResendCollaborator` on top of any `CodeDelivery`
//! provider: each resend generates a fresh six-digit code and hands it to the
//! provider.

use async_trait::async_trait;
use rand::Rng;

use booth_core::domain::entities::code_buffer::CODE_LENGTH;
use booth_core::services::verification::ResendCollaborator;
use booth_shared::utils::email::mask_email;

use super::CodeDelivery;
use crate::InfrastructureError;

/// Generate a random six-digit code (leading zeros kept)
pub fn generate_code() -> String {
    let code: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{:0width$}", code, width = CODE_LENGTH)
}

/// Adapter that implements the core ResendCollaborator for a delivery provider
pub struct DeliveryResendAdapter {
    inner: Box<dyn CodeDelivery>,
}

impl DeliveryResendAdapter {
    pub fn new(inner: Box<dyn CodeDelivery>) -> Self {
        Self { inner }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl ResendCollaborator for DeliveryResendAdapter {
    async fn resend(&self, identifier: &str) -> Result<String, String> {
        if !self.inner.is_available().await {
            tracing::warn!(
                provider = self.inner.provider_name(),
                "Delivery provider unavailable, resend skipped"
            );
            return Err(InfrastructureError::Delivery(format!(
                "Provider {} is unavailable",
                self.inner.provider_name()
            ))
            .to_string());
        }

        let code = generate_code();
        tracing::debug!(
            provider = self.inner.provider_name(),
            identifier = %mask_email(identifier),
            "Delivering a new verification code"
        );
        self.inner
            .send_code(identifier, &code)
            .await
            .map_err(|e| e.to_string())
    }
}
