//! Verification code entry state machine.
//!
//! Pure bookkeeping for the six-slot code control: digit input with
//! auto-advance, backspace retreat, paste distribution, the expiry countdown
//! and resend cooldown, the submission lifecycle
//! `Idle -> Editing -> Submitting -> {Verified, Failed}` and the in-flight
//! marker for resend requests.
//!
//! Nothing here performs I/O or knows about time sources; the session driver
//! feeds it input events, timer ticks and collaborator results.

use booth_shared::config::VerificationConfig;
use booth_shared::utils::digits::sanitize_digits;
use serde::{Deserialize, Serialize};

use super::code_buffer::{CodeBuffer, CODE_LENGTH, LAST_SLOT};
use super::expiry_timer::{ExpiryTimer, TickOutcome};
use super::focus::{FocusCursor, FocusTarget};
use crate::errors::EntryError;

/// Lifecycle state of the control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntryState {
    /// Mounted, nothing typed yet
    Idle,
    /// User is typing
    Editing,
    /// A verification request is outstanding
    Submitting,
    /// The collaborator accepted the code
    Verified,
    /// The collaborator rejected the code or failed; buffer kept for correction
    Failed { reason: String },
}

impl EntryState {
    pub fn name(&self) -> &'static str {
        match self {
            EntryState::Idle => "idle",
            EntryState::Editing => "editing",
            EntryState::Submitting => "submitting",
            EntryState::Verified => "verified",
            EntryState::Failed { .. } => "failed",
        }
    }
}

/// Result of a resend request against the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendOutcome {
    /// Timer, cooldown, buffer and focus were reset
    Reset,
    /// Cooldown still active; nothing changed
    Throttled { retry_in_seconds: u32 },
}

/// Serializable view of the whole control at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySnapshot {
    pub slots: Vec<String>,
    pub focus_index: usize,
    pub focus_target: FocusTarget,
    pub remaining_seconds: u32,
    pub cooldown_active: bool,
    pub cooldown_remaining_seconds: u32,
    pub expired: bool,
    pub low_time: bool,
    /// A resend request is waiting on delivery
    pub resend_pending: bool,
    #[serde(flatten)]
    pub state: EntryState,
}

/// The code entry control
#[derive(Debug, Clone)]
pub struct CodeEntry {
    buffer: CodeBuffer,
    focus: FocusCursor,
    timer: ExpiryTimer,
    state: EntryState,
    resend_pending: bool,
}

impl CodeEntry {
    /// Creates a freshly mounted control: empty buffer, focus on slot 0,
    /// full expiry window with the resend cooldown active.
    pub fn new(config: &VerificationConfig) -> Self {
        Self {
            buffer: CodeBuffer::new(),
            focus: FocusCursor::new(),
            timer: ExpiryTimer::new(config),
            state: EntryState::Idle,
            resend_pending: false,
        }
    }

    pub fn buffer(&self) -> &CodeBuffer {
        &self.buffer
    }

    pub fn focus(&self) -> &FocusCursor {
        &self.focus
    }

    pub fn focus_index(&self) -> usize {
        self.focus.index()
    }

    pub fn timer(&self) -> &ExpiryTimer {
        &self.timer
    }

    pub fn state(&self) -> &EntryState {
        &self.state
    }

    pub fn is_resend_pending(&self) -> bool {
        self.resend_pending
    }

    /// Whether a submit would be accepted right now
    pub fn can_submit(&self) -> bool {
        self.buffer.is_complete()
            && !self.resend_pending
            && !matches!(self.state, EntryState::Submitting | EntryState::Verified)
    }

    /// Handles text arriving in `slot`.
    ///
    /// Non-digits are stripped first. No digits clears the slot and retreats
    /// focus; one digit writes it and advances; several digits are a paste and
    /// are spread from `slot` towards the last slot, overflow discarded.
    pub fn input(&mut self, raw: &str, slot: usize) -> Result<(), EntryError> {
        self.ensure_editable()?;
        Self::check_slot(slot)?;

        let digits = sanitize_digits(raw);
        match digits.len() {
            0 => {
                self.buffer.clear_slot(slot);
                self.focus.retreat_from(slot);
            }
            1 => {
                if let Some(digit) = digits.chars().next() {
                    self.buffer.set(slot, digit);
                }
                self.focus.advance_from(slot);
            }
            _ => {
                let mut last_written = slot;
                for (offset, digit) in digits.chars().take(CODE_LENGTH - slot).enumerate() {
                    last_written = slot + offset;
                    self.buffer.set(last_written, digit);
                }
                self.focus.advance_from(last_written);
            }
        }

        self.state = EntryState::Editing;
        Ok(())
    }

    /// Backspace pressed on `slot`. Only an empty slot moves focus back;
    /// a filled slot is handled by the text path instead.
    pub fn backspace_at_empty(&mut self, slot: usize) -> Result<(), EntryError> {
        self.ensure_editable()?;
        Self::check_slot(slot)?;

        if self.buffer.is_slot_empty(slot) {
            self.focus.retreat_from(slot);
            self.state = EntryState::Editing;
        }
        Ok(())
    }

    /// Focus moved to `slot` by the user (e.g. a tap)
    pub fn focus_slot(&mut self, slot: usize) -> Result<(), EntryError> {
        Self::check_slot(slot)?;
        self.focus.focus(slot);
        Ok(())
    }

    /// Starts a submission and returns the joined code to hand to the
    /// verification collaborator.
    pub fn begin_submit(&mut self) -> Result<String, EntryError> {
        match self.state {
            EntryState::Submitting => return Err(EntryError::SubmissionPending),
            EntryState::Verified => return Err(EntryError::AlreadyVerified),
            _ => {}
        }
        if self.resend_pending {
            return Err(EntryError::ResendPending);
        }

        let code = self.buffer.code().ok_or(EntryError::IncompleteCode {
            filled: self.buffer.filled_count(),
            required: CODE_LENGTH,
        })?;

        self.state = EntryState::Submitting;
        Ok(code)
    }

    /// Applies the collaborator's answer to the pending submission
    pub fn complete_submit(&mut self, result: Result<(), String>) -> Result<(), EntryError> {
        if self.state != EntryState::Submitting {
            return Err(EntryError::NotSubmitting);
        }
        self.state = match result {
            Ok(()) => EntryState::Verified,
            Err(reason) => EntryState::Failed { reason },
        };
        Ok(())
    }

    /// Drops a pending submission that will never be answered
    pub fn abort_submit(&mut self) {
        if self.state == EntryState::Submitting {
            self.state = EntryState::Editing;
        }
    }

    /// `None` when a resend is allowed now, otherwise seconds to wait
    pub fn resend_throttle(&self) -> Result<Option<u32>, EntryError> {
        if self.state == EntryState::Submitting {
            return Err(EntryError::SubmissionPending);
        }
        if self.resend_pending {
            return Err(EntryError::ResendPending);
        }
        if self.timer.in_cooldown() {
            return Ok(Some(self.timer.cooldown_remaining_seconds()));
        }
        Ok(None)
    }

    /// Starts a resend request. `Some(seconds)` while the cooldown is active
    /// (nothing changes); otherwise marks the request in flight until
    /// `complete_resend` or `abort_resend`.
    pub fn begin_resend(&mut self) -> Result<Option<u32>, EntryError> {
        let throttle = self.resend_throttle()?;
        if throttle.is_none() {
            self.resend_pending = true;
        }
        Ok(throttle)
    }

    /// Delivery succeeded: resets timer, cooldown, buffer and focus
    pub fn complete_resend(&mut self) {
        self.resend_pending = false;
        self.timer.reset();
        self.buffer.clear();
        self.focus.focus(0);
        self.state = EntryState::Editing;
    }

    /// Delivery failed or was abandoned; nothing else changes
    pub fn abort_resend(&mut self) {
        self.resend_pending = false;
    }

    /// Resets timer, cooldown, buffer and focus unless the cooldown is active
    pub fn resend(&mut self) -> Result<ResendOutcome, EntryError> {
        if let Some(retry_in_seconds) = self.begin_resend()? {
            return Ok(ResendOutcome::Throttled { retry_in_seconds });
        }
        self.complete_resend();
        Ok(ResendOutcome::Reset)
    }

    /// One second of the expiry countdown
    pub fn tick(&mut self) -> TickOutcome {
        self.timer.tick()
    }

    pub fn snapshot(&self) -> EntrySnapshot {
        EntrySnapshot {
            slots: self.buffer.to_strings(),
            focus_index: self.focus.index(),
            focus_target: self.focus.target(),
            remaining_seconds: self.timer.remaining_seconds(),
            cooldown_active: self.timer.in_cooldown(),
            cooldown_remaining_seconds: self.timer.cooldown_remaining_seconds(),
            expired: self.timer.is_expired(),
            low_time: self.timer.is_low_time(),
            resend_pending: self.resend_pending,
            state: self.state.clone(),
        }
    }

    fn ensure_editable(&self) -> Result<(), EntryError> {
        match self.state {
            EntryState::Submitting | EntryState::Verified => Err(EntryError::InputLocked {
                state: self.state.name(),
            }),
            _ => Ok(()),
        }
    }

    fn check_slot(slot: usize) -> Result<(), EntryError> {
        if slot > LAST_SLOT {
            return Err(EntryError::SlotOutOfRange {
                slot,
                last: LAST_SLOT,
            });
        }
        Ok(())
    }
}
