use booth_core::domain::entities::code_entry::EntryState;
use booth_core::domain::entities::focus::FocusTarget;
use serde::Serialize;

/// Severity of a notice shown under the code boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    /// Stable error code when the notice comes from an error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            code: None,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            code: None,
            text: text.into(),
        }
    }

    pub fn error(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            code: Some(code.into()),
            text: text.into(),
        }
    }
}

/// Everything a renderer needs to draw the verification screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    pub title: String,
    pub subtitle: String,
    pub slots: Vec<String>,
    pub focus_index: usize,
    pub focus_target: FocusTarget,
    /// Remaining time as `MM:SS`
    pub time_remaining: String,
    /// "Code expires in MM:SS" or the expired message
    pub expiry_label: String,
    pub expired: bool,
    pub low_time: bool,
    /// "Resend code" or "Resend in Ns"
    pub resend_label: String,
    pub resend_enabled: bool,
    pub submit_label: String,
    pub submit_enabled: bool,
    pub state: EntryState,
    pub notice: Option<Notice>,
}

impl ScreenView {
    /// Whether the slot at `index` holds a digit
    pub fn is_filled(&self, index: usize) -> bool {
        self.slots.get(index).map(|slot| !slot.is_empty()).unwrap_or(false)
    }

    pub fn is_verified(&self) -> bool {
        self.state == EntryState::Verified
    }
}
