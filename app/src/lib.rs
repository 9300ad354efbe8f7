//! # Booth 33 App
//!
//! Presentation layer for the email verification screen: the event binding
//! layer over `booth_core`'s verification session, localized messages, and
//! the pieces of the `booth33-verify` terminal binary.

pub mod dto;
pub mod i18n;
pub mod logging;
pub mod screen;
pub mod terminal;
