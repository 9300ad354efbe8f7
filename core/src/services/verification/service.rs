//! Verification session: owns the code entry state machine for one mounted
//! screen and connects it to the countdown and the collaborators.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use booth_shared::config::VerificationConfig;
use booth_shared::utils::email::{is_valid_email, mask_email, normalize_email};
use tokio::runtime::Handle;
use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::entities::code_entry::{CodeEntry, EntrySnapshot};
use crate::errors::{DomainError, DomainResult};

use super::countdown::Countdown;
use super::traits::{ResendCollaborator, VerificationCollaborator};
use super::types::{ResendResult, SubmitResult, REJECTED_REASON};

/// One verification screen's worth of state.
///
/// All state lives here and is discarded on drop; the countdown task is
/// aborted with it.
pub struct VerificationSession<V: VerificationCollaborator, R: ResendCollaborator> {
    /// Correlates log events for this session
    session_id: Uuid,
    /// Normalized email address the code was sent to
    identifier: String,
    /// The state machine
    entry: Arc<Mutex<CodeEntry>>,
    /// Verification collaborator
    verifier: Arc<V>,
    /// Resend collaborator
    resender: Arc<R>,
    /// Change notifications for renderers
    changes: Arc<watch::Sender<u64>>,
    /// Running countdown, `None` after shutdown
    countdown: Option<Countdown>,
}

impl<V: VerificationCollaborator, R: ResendCollaborator> VerificationSession<V, R> {
    /// Mount a session for `identifier` and start its countdown.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - the identifier is not an email address
    /// * `DomainError::Internal` - the timings are invalid or no runtime is available
    pub fn start(
        identifier: &str,
        verifier: Arc<V>,
        resender: Arc<R>,
        config: &VerificationConfig,
    ) -> DomainResult<Self> {
        if !is_valid_email(identifier) {
            return Err(DomainError::Validation {
                message: format!("Invalid email address: {}", mask_email(identifier)),
            });
        }
        config
            .validate()
            .map_err(|message| DomainError::Internal { message })?;

        let runtime = Handle::try_current().map_err(|e| DomainError::Internal {
            message: format!("No async runtime available for countdown: {}", e),
        })?;

        let session_id = Uuid::new_v4();
        let entry = Arc::new(Mutex::new(CodeEntry::new(config)));
        let (changes, _) = watch::channel(0u64);
        let changes = Arc::new(changes);

        let countdown = Countdown::spawn(
            &runtime,
            Arc::downgrade(&entry),
            Duration::from_millis(config.tick_interval_ms),
            Arc::clone(&changes),
            session_id,
        );

        let identifier = normalize_email(identifier);
        tracing::info!(
            session_id = %session_id,
            identifier = %mask_email(&identifier),
            expiry_seconds = config.expiry_seconds,
            event = "verification_session_started",
            "Verification code entry mounted"
        );

        Ok(Self {
            session_id,
            identifier,
            entry,
            verifier,
            resender,
            changes,
            countdown: Some(countdown),
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Text arrived in `slot` (typed or pasted)
    pub fn input(&self, raw: &str, slot: usize) -> DomainResult<()> {
        self.lock_entry().input(raw, slot)?;
        self.notify();
        Ok(())
    }

    /// Backspace pressed on `slot`
    pub fn backspace_at_empty(&self, slot: usize) -> DomainResult<()> {
        self.lock_entry().backspace_at_empty(slot)?;
        self.notify();
        Ok(())
    }

    /// User moved focus to `slot`
    pub fn focus(&self, slot: usize) -> DomainResult<()> {
        self.lock_entry().focus_slot(slot)?;
        self.notify();
        Ok(())
    }

    /// Submit the entered code to the verification collaborator.
    ///
    /// Fails without any state change when the code is incomplete or a
    /// submission is already pending. A rejected code returns
    /// `Ok(SubmitResult { verified: false, .. })` and keeps the buffer.
    ///
    /// # Errors
    ///
    /// * `DomainError::Entry` - incomplete code, pending or already verified
    /// * `DomainError::Verification` - the collaborator itself failed
    pub async fn submit(&self) -> DomainResult<SubmitResult> {
        let code = {
            let mut entry = self.lock_entry();
            entry.begin_submit()?
        };
        self.notify();

        tracing::info!(
            session_id = %self.session_id,
            identifier = %mask_email(&self.identifier),
            event = "code_submitted",
            "Submitting verification code"
        );

        let mut pending = PendingRequest::new(&self.entry, CodeEntry::abort_submit);
        let outcome = self.verifier.verify(&self.identifier, &code).await;
        pending.disarm();

        let result = {
            let mut entry = self.lock_entry();
            match outcome {
                Ok(true) => {
                    entry.complete_submit(Ok(()))?;
                    tracing::info!(
                        session_id = %self.session_id,
                        event = "code_verified",
                        "Verification code accepted"
                    );
                    Ok(SubmitResult::verified())
                }
                Ok(false) => {
                    entry.complete_submit(Err(REJECTED_REASON.to_string()))?;
                    tracing::warn!(
                        session_id = %self.session_id,
                        event = "code_rejected",
                        "Verification code rejected"
                    );
                    Ok(SubmitResult::rejected(REJECTED_REASON))
                }
                Err(e) => {
                    entry.complete_submit(Err(e.clone()))?;
                    tracing::error!(
                        session_id = %self.session_id,
                        error = %e,
                        event = "verification_error",
                        "Verification service failed"
                    );
                    Err(DomainError::Verification { message: e })
                }
            }
        };

        self.notify();
        result
    }

    /// Ask for a new code.
    ///
    /// While the cooldown is active this is a no-op reporting how long to
    /// wait. Otherwise the request is marked in flight, the resend
    /// collaborator is called, and the state machine is reset only once
    /// delivery was accepted. Submissions and further resends are refused
    /// while the request is in flight.
    ///
    /// # Errors
    ///
    /// * `DomainError::Entry` - a submission or another resend is pending
    /// * `DomainError::Resend` - the collaborator failed; nothing was reset
    pub async fn resend(&self) -> DomainResult<ResendResult> {
        let throttle = self.lock_entry().begin_resend()?;
        if let Some(retry_in_seconds) = throttle {
            tracing::debug!(
                session_id = %self.session_id,
                retry_in_seconds = retry_in_seconds,
                event = "resend_throttled",
                "Resend requested during cooldown"
            );
            return Ok(ResendResult::Throttled { retry_in_seconds });
        }

        self.notify();

        let mut pending = PendingRequest::new(&self.entry, CodeEntry::abort_resend);
        let delivery = self.resender.resend(&self.identifier).await;
        pending.disarm();

        let result = match delivery {
            Ok(delivery_id) => {
                self.lock_entry().complete_resend();
                tracing::info!(
                    session_id = %self.session_id,
                    identifier = %mask_email(&self.identifier),
                    delivery_id = %delivery_id,
                    event = "code_resent",
                    "New verification code requested"
                );
                Ok(ResendResult::Sent { delivery_id })
            }
            Err(e) => {
                self.lock_entry().abort_resend();
                tracing::error!(
                    session_id = %self.session_id,
                    identifier = %mask_email(&self.identifier),
                    error = %e,
                    event = "resend_failed",
                    "Failed to deliver a new verification code"
                );
                Err(DomainError::Resend { message: e })
            }
        };

        self.notify();
        result
    }

    /// Current state of the control
    pub fn snapshot(&self) -> EntrySnapshot {
        self.lock_entry().snapshot()
    }

    /// Receiver bumped after every edit, tick and submission step
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Whether the countdown task is still running
    pub fn is_counting_down(&self) -> bool {
        self.countdown
            .as_ref()
            .map(|countdown| !countdown.is_finished())
            .unwrap_or(false)
    }

    /// Tear down: stop the countdown. Further ticks never touch the state.
    pub fn shutdown(&mut self) {
        if let Some(countdown) = self.countdown.take() {
            countdown.cancel();
            tracing::debug!(
                session_id = %self.session_id,
                event = "verification_session_stopped",
                "Verification code entry unmounted"
            );
        }
    }

    fn lock_entry(&self) -> MutexGuard<'_, CodeEntry> {
        self.entry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.changes
            .send_modify(|revision| *revision = revision.wrapping_add(1));
    }
}

impl<V: VerificationCollaborator, R: ResendCollaborator> Drop for VerificationSession<V, R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Clears an in-flight marker (submission or resend) if the request future
/// is dropped before the collaborator answers.
struct PendingRequest<'a> {
    entry: &'a Mutex<CodeEntry>,
    abort: fn(&mut CodeEntry),
    armed: bool,
}

impl<'a> PendingRequest<'a> {
    fn new(entry: &'a Mutex<CodeEntry>, abort: fn(&mut CodeEntry)) -> Self {
        Self {
            entry,
            abort,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut entry = self.entry.lock().unwrap_or_else(PoisonError::into_inner);
            (self.abort)(&mut *entry);
        }
    }
}
