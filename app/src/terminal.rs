//! Line-oriented terminal front end: command parsing and screen rendering

use std::fmt::Write as _;
use std::sync::Arc;

use booth_core::services::verification::{ResendCollaborator, VerificationCollaborator};
use booth_shared::types::Language;
use tokio::sync::mpsc;

use crate::i18n::screen_text;
use crate::screen::{NoticeKind, ScreenEvent, ScreenView, VerifyCodeScreen};

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(ScreenEvent),
    Help,
    Quit,
    /// Blank line, just redraw
    Redraw,
}

/// Parse a prompt line against the current view.
///
/// Digits type at the focused slot, `@<slot> <text>` types at a given slot
/// and `bs` behaves like a keyboard backspace on the focused slot: it clears
/// a filled slot and steps back from an empty one.
pub fn parse_command(line: &str, view: &ScreenView) -> Result<Command, String> {
    let line = line.trim();
    let focus = view.focus_index;

    let command = match line {
        "" => Command::Redraw,
        "q" | "quit" | "exit" => Command::Quit,
        "h" | "help" | "?" => Command::Help,
        "submit" | "verify" => Command::Event(ScreenEvent::Submit),
        "resend" => Command::Event(ScreenEvent::Resend),
        "bs" | "backspace" => {
            if view.is_filled(focus) {
                Command::Event(ScreenEvent::text(focus, ""))
            } else {
                Command::Event(ScreenEvent::Backspace { slot: focus })
            }
        }
        _ => {
            if let Some(rest) = line.strip_prefix('@') {
                let (slot, text) = rest.split_once(' ').unwrap_or((rest, ""));
                let slot = parse_slot(slot)?;
                Command::Event(ScreenEvent::text(slot, text.trim()))
            } else if let Some(slot) = line.strip_prefix("focus ") {
                Command::Event(ScreenEvent::Focus {
                    slot: parse_slot(slot.trim())?,
                })
            } else if line.chars().any(|c| c.is_ascii_digit()) {
                Command::Event(ScreenEvent::text(focus, line))
            } else {
                return Err(line.to_string());
            }
        }
    };

    Ok(command)
}

fn parse_slot(raw: &str) -> Result<usize, String> {
    raw.parse::<usize>().map_err(|_| format!("@{}", raw))
}

/// Apply one prompt event in input order.
///
/// Edits are applied before returning so the next line is parsed against the
/// focus they leave behind. Submit and resend run in the background and post
/// their view to `views` when the collaborator answers; `None` is returned
/// for them.
pub async fn dispatch<V, R>(
    screen: &Arc<VerifyCodeScreen<V, R>>,
    event: ScreenEvent,
    views: &mpsc::UnboundedSender<ScreenView>,
) -> Option<ScreenView>
where
    V: VerificationCollaborator + 'static,
    R: ResendCollaborator + 'static,
{
    if !event.is_request() {
        return Some(screen.handle(event).await);
    }

    let screen = Arc::clone(screen);
    let views = views.clone();
    tokio::spawn(async move {
        let view = screen.handle(event).await;
        // Receiver is gone once the prompt loop exits
        let _ = views.send(view);
    });
    None
}

/// Draw the view as plain text
pub fn render(view: &ScreenView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", view.subtitle);
    let _ = writeln!(out);

    let boxes: Vec<String> = view
        .slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let digit = if slot.is_empty() { "_" } else { slot.as_str() };
            if index == view.focus_index {
                format!("[{}]", digit)
            } else {
                format!(" {} ", digit)
            }
        })
        .collect();
    let _ = writeln!(out, "  {}", boxes.join(" "));
    let _ = writeln!(out);

    let marker = if view.expired || view.low_time { "! " } else { "" };
    let _ = writeln!(out, "{}{}", marker, view.expiry_label);

    let submit = if view.submit_enabled {
        format!("<{}>", view.submit_label)
    } else {
        format!("({})", view.submit_label)
    };
    let resend = if view.resend_enabled {
        format!("<{}>", view.resend_label)
    } else {
        format!("({})", view.resend_label)
    };
    let _ = writeln!(out, "{}   {}", submit, resend);

    if let Some(notice) = &view.notice {
        let prefix = match notice.kind {
            NoticeKind::Info => "i",
            NoticeKind::Success => "+",
            NoticeKind::Error => "x",
        };
        let _ = writeln!(out, "{} {}", prefix, notice.text);
    }

    out
}

/// Localized help line
pub fn help_text(lang: Language) -> String {
    screen_text("help", lang, &[])
}

/// Localized message for an unparseable line
pub fn unknown_command_text(command: &str, lang: Language) -> String {
    screen_text("unknown_command", lang, &[("command", command.to_string())])
}
