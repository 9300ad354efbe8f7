use serde::{Deserialize, Serialize};

/// Input events raised by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenEvent {
    /// Text changed in a slot (typing, deletion or paste)
    Text { slot: usize, raw: String },
    /// Backspace pressed on a slot
    Backspace { slot: usize },
    /// A slot was tapped
    Focus { slot: usize },
    /// The verify button was pressed
    Submit,
    /// The resend button was pressed
    Resend,
}

impl ScreenEvent {
    pub fn text(slot: usize, raw: impl Into<String>) -> Self {
        ScreenEvent::Text {
            slot,
            raw: raw.into(),
        }
    }

    /// Submit and resend wait on a collaborator; edits apply immediately
    pub fn is_request(&self) -> bool {
        matches!(self, ScreenEvent::Submit | ScreenEvent::Resend)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScreenEvent::Text { .. } => "text",
            ScreenEvent::Backspace { .. } => "backspace",
            ScreenEvent::Focus { .. } => "focus",
            ScreenEvent::Submit => "submit",
            ScreenEvent::Resend => "resend",
        }
    }
}
