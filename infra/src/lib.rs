//! # Infrastructure Layer
//!
//! Concrete collaborators for the Booth 33 verification screen.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Verifier**: the simulated verification service (fixed delay)
//! - **Delivery**: code delivery providers and the resend adapter
//!
//! The hosted backend's own contracts are out of scope; the simulated
//! collaborators satisfy the core traits so the screen can run end to end.

use std::sync::Arc;

pub mod delivery;
pub mod verifier;

use delivery::{ConsoleDelivery, DeliveryResendAdapter};
use verifier::SimulatedVerifier;

/// Configuration module for infrastructure services
pub mod config {
    //! Infrastructure configuration, layered on the shared collaborator
    //! settings.

    use booth_shared::config::CollaboratorConfig;
    use serde::{Deserialize, Serialize};

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct InfrastructureConfig {
        /// Verification and resend collaborators
        pub collaborators: CollaboratorConfig,
    }

    impl InfrastructureConfig {
        pub fn new(collaborators: CollaboratorConfig) -> Self {
            Self { collaborators }
        }
    }
}

/// The collaborator pair handed to a verification session
pub type Collaborators = (Arc<SimulatedVerifier>, Arc<DeliveryResendAdapter>);

/// Build the verification and resend collaborators for `config`.
///
/// "simulated" is the only built-in provider.
pub fn create_collaborators(
    config: &config::InfrastructureConfig,
) -> Result<Collaborators, InfrastructureError> {
    let collaborators = &config.collaborators;
    match collaborators.provider.as_str() {
        "simulated" => {
            let verifier = SimulatedVerifier::from_millis(collaborators.simulated_delay_ms);
            let delivery = ConsoleDelivery::with_options(collaborators.console_output, false);
            tracing::info!(
                provider = "simulated",
                delay_ms = collaborators.simulated_delay_ms,
                "Verification collaborators initialized"
            );
            Ok((
                Arc::new(verifier),
                Arc::new(DeliveryResendAdapter::new(Box::new(delivery))),
            ))
        }
        other => {
            tracing::error!("Unknown collaborator provider: {}", other);
            Err(InfrastructureError::Config(format!(
                "Unknown collaborator provider: {}",
                other
            )))
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Code delivery error
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// Verification service error
    #[error("Verification service error: {0}")]
    Verification(String),
}
