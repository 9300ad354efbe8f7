//! Verification screen binding layer
//!
//! Maps UI events onto a verification session and renders a view model with
//! localized labels. Nothing here panics on user input; rule violations turn
//! into a notice on the view.

mod event;
mod verify_code;
mod view;

pub use event::ScreenEvent;
pub use verify_code::VerifyCodeScreen;
pub use view::{Notice, NoticeKind, ScreenView};

#[cfg(test)]
mod tests;
