//! Type definitions shared across crates
//!
//! - `language` - language selection for user-visible messages

pub mod language;

pub use language::Language;
