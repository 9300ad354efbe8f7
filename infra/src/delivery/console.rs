//! Console Delivery Implementation
//!
//! A mock delivery provider for development and testing. Codes are logged
//! (identifier masked) and optionally echoed to stderr instead of being
//! emailed.

use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use booth_shared::utils::email::{is_valid_email, mask_email};

use super::CodeDelivery;
use crate::InfrastructureError;

/// Console delivery provider
///
/// This implementation:
/// - Validates email identifiers
/// - Logs each delivery with a mock message id
/// - Counts deliveries for tests
/// - Can simulate provider failures
#[derive(Clone)]
pub struct ConsoleDelivery {
    /// Counter for tracking number of deliveries
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
    /// Whether to print codes to the console
    console_output: bool,
}

impl ConsoleDelivery {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
        }
    }

    /// Get the total number of deliveries
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

/// Writes the human-readable copy of a delivered code
pub fn write_echo<W: Write>(
    out: &mut W,
    count: u64,
    masked: &str,
    message_id: &str,
    code: &str,
) -> io::Result<()> {
    let rule = "=".repeat(60);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "BOOTH 33 VERIFICATION EMAIL #{}", count)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "To: {}", masked)?;
    writeln!(out, "Message ID: {}", message_id)?;
    writeln!(out, "Your Booth 33 verification code is {}", code)?;
    writeln!(out, "{}\n", rule)?;
    out.flush()
}

impl Default for ConsoleDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeDelivery for ConsoleDelivery {
    async fn send_code(&self, identifier: &str, code: &str) -> Result<String, InfrastructureError> {
        let masked = mask_email(identifier);

        if !is_valid_email(identifier) {
            return Err(InfrastructureError::Delivery(format!(
                "Invalid email address: {}",
                masked
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!("Console delivery simulating failure for {}", masked);
            return Err(InfrastructureError::Delivery(
                "Simulated delivery failure".to_string(),
            ));
        }

        let message_id = format!("console_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            // stdout belongs to the screen and is cleared on every redraw
            let mut stderr = io::stderr().lock();
            if let Err(e) = write_echo(&mut stderr, count, &masked, &message_id, code) {
                warn!("Console delivery could not echo the code: {}", e);
            }
        }

        info!(
            target: "code_delivery",
            provider = "console",
            identifier = %masked,
            message_id = %message_id,
            count = count,
            "Verification code delivered"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "console"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
