//! Code Delivery Module
//!
//! Out-of-band delivery of verification codes to an email identifier, and the
//! adapter exposing it to the core as a `ResendCollaborator`.
//!
//! ## Features
//!
//! - **CodeDelivery Trait**: common interface for delivery providers
//! - **Console Implementation**: logs and prints codes for development
//! - **Resend Adapter**: generates a fresh code per resend and delivers it
//! - **Security**: identifiers are masked in logs

use async_trait::async_trait;

use crate::InfrastructureError;

pub mod console;
pub mod resend_adapter;

pub use console::{write_echo, ConsoleDelivery};
pub use resend_adapter::{generate_code, DeliveryResendAdapter};

#[cfg(test)]
mod tests;

/// Delivery provider for verification codes
#[async_trait]
pub trait CodeDelivery: Send + Sync {
    /// Deliver `code` to `identifier`, returning the provider's message id
    async fn send_code(&self, identifier: &str, code: &str) -> Result<String, InfrastructureError>;

    /// Provider name used in logs
    fn provider_name(&self) -> &str;

    /// Whether the provider is currently accepting messages
    async fn is_available(&self) -> bool;
}
