//! Domain entities for verification code entry.

pub mod code_buffer;
pub mod code_entry;
pub mod expiry_timer;
pub mod focus;


// Re-export commonly used types
pub use code_buffer::{CodeBuffer, CODE_LENGTH, LAST_SLOT};
pub use code_entry::{CodeEntry, EntrySnapshot, EntryState, ResendOutcome};
pub use expiry_timer::{format_mm_ss, ExpiryTimer, TickOutcome};
pub use focus::{FocusCursor, FocusTarget};
