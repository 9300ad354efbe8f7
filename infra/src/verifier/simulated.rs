//! Simulated verification collaborator
//!
//! Waits a fixed delay, then accepts any well-formed six-digit code. Codes on
//! the reject list are refused, which lets tests and demos exercise the
//! failure path.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};

use booth_core::domain::entities::code_buffer::CODE_LENGTH;
use booth_core::services::verification::VerificationCollaborator;
use booth_shared::utils::digits::is_numeric_code;
use booth_shared::utils::email::mask_email;

use crate::InfrastructureError;

/// Fixed-delay verifier standing in for the backend
pub struct SimulatedVerifier {
    /// Delay before every answer
    delay: Duration,
    /// Codes that are always refused
    rejected_codes: Mutex<HashSet<String>>,
    /// Whether to simulate a service failure
    simulate_failure: AtomicBool,
    /// Number of verification requests served
    request_count: AtomicU64,
}

impl SimulatedVerifier {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rejected_codes: Mutex::new(HashSet::new()),
            simulate_failure: AtomicBool::new(false),
            request_count: AtomicU64::new(0),
        }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Always refuse `code`
    pub fn reject_code(&self, code: impl Into<String>) {
        self.rejected_codes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(code.into());
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    fn is_rejected(&self, code: &str) -> bool {
        self.rejected_codes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(code)
    }
}

#[async_trait]
impl VerificationCollaborator for SimulatedVerifier {
    async fn verify(&self, identifier: &str, code: &str) -> Result<bool, String> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;

        let masked = mask_email(identifier);
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!("Simulated verifier failing request for {}", masked);
            return Err(InfrastructureError::Verification(
                "Simulated verification service failure".to_string(),
            )
            .to_string());
        }

        let accepted = is_numeric_code(code, CODE_LENGTH) && !self.is_rejected(code);
        info!(
            target: "verification_service",
            provider = "simulated",
            identifier = %masked,
            accepted = accepted,
            delay_ms = self.delay.as_millis() as u64,
            "Simulated verification answered"
        );
        Ok(accepted)
    }
}
