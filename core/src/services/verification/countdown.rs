//! Background expiry countdown

use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use uuid::Uuid;

use crate::domain::entities::code_entry::CodeEntry;
use crate::domain::entities::expiry_timer::TickOutcome;

/// Recurring tick task feeding the state machine's expiry timer.
///
/// The task only holds a weak reference to the entry and is aborted when the
/// `Countdown` is dropped, so it never outlives the session that owns it.
#[derive(Debug)]
pub struct Countdown {
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Spawn the countdown on `runtime`, ticking every `period`.
    ///
    /// `changes` is bumped after every tick that changed the timer.
    pub fn spawn(
        runtime: &Handle,
        entry: Weak<Mutex<CodeEntry>>,
        period: Duration,
        changes: Arc<watch::Sender<u64>>,
        session_id: Uuid,
    ) -> Self {
        let handle = runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let entry = match entry.upgrade() {
                    Some(entry) => entry,
                    None => {
                        tracing::debug!(
                            session_id = %session_id,
                            "Code entry dropped; stopping countdown"
                        );
                        break;
                    }
                };
                let outcome = entry.lock().unwrap_or_else(PoisonError::into_inner).tick();
                drop(entry);

                match outcome {
                    TickOutcome::Expired => continue,
                    TickOutcome::JustExpired => {
                        tracing::info!(
                            session_id = %session_id,
                            event = "code_expired",
                            "Verification code expiry window elapsed"
                        );
                    }
                    TickOutcome::Running { .. } => {}
                }

                changes.send_modify(|revision| *revision = revision.wrapping_add(1));
            }
        });

        Self { handle }
    }

    /// Whether the task has stopped
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop ticking
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
