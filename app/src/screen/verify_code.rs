//! The verification screen: one session plus the notice under the boxes

use std::sync::{Arc, Mutex, PoisonError};

use booth_core::domain::entities::code_entry::EntryState;
use booth_core::domain::entities::expiry_timer::format_mm_ss;
use booth_core::errors::DomainError;
use booth_core::services::verification::{
    ResendCollaborator, ResendResult, VerificationCollaborator, VerificationSession,
};
use booth_shared::config::AppConfig;
use booth_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use booth_shared::types::Language;
use tokio::sync::watch;

use crate::dto::LaunchRequest;
use crate::i18n::{error_text, get_message, screen_text};

use super::event::ScreenEvent;
use super::view::{Notice, ScreenView};

pub struct VerifyCodeScreen<V: VerificationCollaborator, R: ResendCollaborator> {
    session: VerificationSession<V, R>,
    language: Language,
    notice: Mutex<Option<Notice>>,
}

impl<V: VerificationCollaborator, R: ResendCollaborator> VerifyCodeScreen<V, R> {
    /// Validate the launch parameters and mount the screen.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(
        request: &LaunchRequest,
        verifier: Arc<V>,
        resender: Arc<R>,
        config: &AppConfig,
    ) -> Result<Self, ErrorResponse> {
        request.check()?;
        let session = VerificationSession::start(
            &request.identifier,
            verifier,
            resender,
            &config.verification,
        )
        .map_err(|e| e.to_error_response())?;

        let language = request.language.unwrap_or(config.language);
        Ok(Self::new(session, language))
    }

    pub fn new(session: VerificationSession<V, R>, language: Language) -> Self {
        Self {
            session,
            language,
            notice: Mutex::new(None),
        }
    }

    pub fn session(&self) -> &VerificationSession<V, R> {
        &self.session
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Fires whenever the view may have changed
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.session.subscribe()
    }

    /// Apply `event` and return the resulting view.
    ///
    /// Successful edits clear the current notice; everything else replaces it.
    pub async fn handle(&self, event: ScreenEvent) -> ScreenView {
        tracing::debug!(
            session_id = %self.session.session_id(),
            event = event.name(),
            "Screen event"
        );

        let notice = match event {
            ScreenEvent::Text { slot, raw } => self.edit_notice(self.session.input(&raw, slot)),
            ScreenEvent::Backspace { slot } => {
                self.edit_notice(self.session.backspace_at_empty(slot))
            }
            ScreenEvent::Focus { slot } => self.edit_notice(self.session.focus(slot)),
            ScreenEvent::Submit => Some(self.submit_notice().await),
            ScreenEvent::Resend => Some(self.resend_notice().await),
        };

        *self.notice.lock().unwrap_or_else(PoisonError::into_inner) = notice;
        self.view()
    }

    /// Render the current state
    pub fn view(&self) -> ScreenView {
        let snapshot = self.session.snapshot();
        let lang = self.language;

        let time_remaining = format_mm_ss(snapshot.remaining_seconds);
        let expiry_label = if snapshot.expired {
            screen_text("expired", lang, &[])
        } else {
            screen_text("expires_in", lang, &[("time", time_remaining.clone())])
        };

        let submitting = snapshot.state == EntryState::Submitting;
        let resend_label = if snapshot.cooldown_active {
            screen_text(
                "resend_in",
                lang,
                &[("seconds", snapshot.cooldown_remaining_seconds.to_string())],
            )
        } else {
            screen_text("resend", lang, &[])
        };
        let submit_label = if submitting {
            screen_text("submitting", lang, &[])
        } else {
            screen_text("submit", lang, &[])
        };
        let submit_enabled = snapshot.slots.iter().all(|slot| !slot.is_empty())
            && !snapshot.resend_pending
            && !matches!(snapshot.state, EntryState::Submitting | EntryState::Verified);
        let resend_enabled = !snapshot.cooldown_active && !snapshot.resend_pending && !submitting;

        ScreenView {
            title: screen_text("title", lang, &[]),
            subtitle: screen_text(
                "subtitle",
                lang,
                &[("identifier", self.session.identifier().to_string())],
            ),
            slots: snapshot.slots,
            focus_index: snapshot.focus_index,
            focus_target: snapshot.focus_target,
            time_remaining,
            expiry_label,
            expired: snapshot.expired,
            low_time: snapshot.low_time,
            resend_label,
            resend_enabled,
            submit_label,
            submit_enabled,
            state: snapshot.state,
            notice: self.notice.lock().unwrap_or_else(PoisonError::into_inner).clone(),
        }
    }

    fn edit_notice(&self, result: Result<(), DomainError>) -> Option<Notice> {
        result.err().map(|e| self.error_notice(&e))
    }

    async fn submit_notice(&self) -> Notice {
        match self.session.submit().await {
            Ok(result) if result.verified => {
                Notice::success(screen_text("verified", self.language, &[]))
            }
            Ok(_) => {
                let text = get_message("errors", error_codes::CODE_REJECTED, self.language)
                    .unwrap_or_else(|| error_codes::CODE_REJECTED.to_string());
                Notice::error(error_codes::CODE_REJECTED, text)
            }
            Err(e) => self.error_notice(&e),
        }
    }

    async fn resend_notice(&self) -> Notice {
        match self.session.resend().await {
            Ok(ResendResult::Sent { .. }) => Notice::info(screen_text(
                "code_sent",
                self.language,
                &[("identifier", self.session.identifier().to_string())],
            )),
            Ok(ResendResult::Throttled { retry_in_seconds }) => Notice::info(screen_text(
                "resend_wait",
                self.language,
                &[("seconds", retry_in_seconds.to_string())],
            )),
            Err(e) => self.error_notice(&e),
        }
    }

    fn error_notice(&self, error: &DomainError) -> Notice {
        let response = error.to_error_response();
        tracing::debug!(
            session_id = %self.session.session_id(),
            code = %response.error,
            "Screen event rejected"
        );
        let text = error_text(&response, self.language);
        Notice::error(response.error, text)
    }
}
