//! Expiry countdown and the resend cooldown derived from it.

use booth_shared::config::VerificationConfig;
use serde::{Deserialize, Serialize};

/// Result of advancing the timer by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting down
    Running { remaining_seconds: u32 },
    /// This tick reached zero
    JustExpired,
    /// Already at zero; nothing changed
    Expired,
}

/// Seconds-remaining countdown for a delivered code.
///
/// The resend cooldown is active during the first `resend_cooldown_seconds`
/// of the timer's life, i.e. while `remaining > cooldown_ends_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryTimer {
    remaining: u32,
    expiry: u32,
    cooldown_ends_at: u32,
    low_threshold: u32,
}

impl ExpiryTimer {
    pub fn new(config: &VerificationConfig) -> Self {
        Self {
            remaining: config.expiry_seconds,
            expiry: config.expiry_seconds,
            cooldown_ends_at: config.cooldown_ends_at(),
            low_threshold: config.low_time_threshold_seconds,
        }
    }

    pub fn with_durations(
        expiry_seconds: u32,
        cooldown_seconds: u32,
        low_threshold_seconds: u32,
    ) -> Self {
        Self::new(&VerificationConfig {
            expiry_seconds,
            resend_cooldown_seconds: cooldown_seconds,
            low_time_threshold_seconds: low_threshold_seconds,
            ..Default::default()
        })
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn expiry_seconds(&self) -> u32 {
        self.expiry
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.expiry - self.remaining
    }

    /// Advances one second, saturating at zero
    pub fn tick(&mut self) -> TickOutcome {
        match self.remaining {
            0 => TickOutcome::Expired,
            1 => {
                self.remaining = 0;
                TickOutcome::JustExpired
            }
            n => {
                self.remaining = n - 1;
                TickOutcome::Running {
                    remaining_seconds: self.remaining,
                }
            }
        }
    }

    /// Restarts the countdown (and with it the cooldown)
    pub fn reset(&mut self) {
        self.remaining = self.expiry;
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Whether resend is currently blocked
    pub fn in_cooldown(&self) -> bool {
        self.remaining > self.cooldown_ends_at
    }

    /// Seconds until resend becomes available (0 when available)
    pub fn cooldown_remaining_seconds(&self) -> u32 {
        self.remaining.saturating_sub(self.cooldown_ends_at)
    }

    /// Advisory warning window before expiry
    pub fn is_low_time(&self) -> bool {
        !self.is_expired() && self.remaining <= self.low_threshold
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining)
    }
}

/// Format a number of seconds as `MM:SS`
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
