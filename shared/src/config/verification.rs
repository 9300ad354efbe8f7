//! Verification code entry timings

use serde::{Deserialize, Serialize};

/// Timing rules for the verification code entry control
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Seconds a delivered code is displayed as valid
    pub expiry_seconds: u32,

    /// Seconds after delivery during which resend is blocked
    pub resend_cooldown_seconds: u32,

    /// Remaining seconds at or below which the expiry display warns
    pub low_time_threshold_seconds: u32,

    /// Countdown tick period in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            expiry_seconds: 600,          // 10 minutes
            resend_cooldown_seconds: 30,
            low_time_threshold_seconds: 60,
            tick_interval_ms: 1000,
        }
    }
}

impl VerificationConfig {
    /// Check the timings are internally consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.expiry_seconds == 0 {
            return Err("verification.expiry_seconds must be greater than zero".to_string());
        }
        if self.resend_cooldown_seconds > self.expiry_seconds {
            return Err(format!(
                "verification.resend_cooldown_seconds ({}) exceeds expiry_seconds ({})",
                self.resend_cooldown_seconds, self.expiry_seconds
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err("verification.tick_interval_ms must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Remaining-seconds value at which the resend cooldown lifts
    pub fn cooldown_ends_at(&self) -> u32 {
        self.expiry_seconds.saturating_sub(self.resend_cooldown_seconds)
    }
}
