//! Fixed-length buffer holding the digits of a verification code.

use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Index of the last slot
pub const LAST_SLOT: usize = CODE_LENGTH - 1;

/// Six slots, each holding one ASCII digit or nothing.
///
/// The length never changes; only slot contents do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeBuffer {
    slots: [Option<char>; CODE_LENGTH],
}

impl CodeBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Digit stored at `slot`, if any
    pub fn get(&self, slot: usize) -> Option<char> {
        self.slots.get(slot).copied().flatten()
    }

    /// Writes `digit` to `slot`.
    ///
    /// Returns `false` and leaves the buffer untouched when the slot is out of
    /// range or `digit` is not an ASCII decimal digit.
    pub fn set(&mut self, slot: usize, digit: char) -> bool {
        if !digit.is_ascii_digit() {
            return false;
        }
        match self.slots.get_mut(slot) {
            Some(cell) => {
                *cell = Some(digit);
                true
            }
            None => false,
        }
    }

    /// Empties `slot` (out-of-range slots are ignored)
    pub fn clear_slot(&mut self, slot: usize) {
        if let Some(cell) = self.slots.get_mut(slot) {
            *cell = None;
        }
    }

    /// Empties every slot
    pub fn clear(&mut self) {
        self.slots = [None; CODE_LENGTH];
    }

    pub fn is_slot_empty(&self, slot: usize) -> bool {
        self.get(slot).is_none()
    }

    /// Number of slots holding a digit
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count() == CODE_LENGTH
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// The joined code, only when every slot is filled
    pub fn code(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }

    /// Slot contents as display strings ("" for empty slots)
    pub fn to_strings(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|s| s.map(String::from).unwrap_or_default())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = CodeBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.filled_count(), 0);
        assert_eq!(buffer.code(), None);
        assert_eq!(buffer.to_strings(), vec![""; CODE_LENGTH]);
    }

    #[test]
    fn test_set_rejects_non_digits_and_out_of_range() {
        let mut buffer = CodeBuffer::new();
        assert!(!buffer.set(0, 'a'));
        assert!(!buffer.set(CODE_LENGTH, '1'));
        assert!(buffer.is_empty());

        assert!(buffer.set(2, '7'));
        assert_eq!(buffer.get(2), Some('7'));
        assert_eq!(buffer.get(CODE_LENGTH), None);
    }

    #[test]
    fn test_code_joins_only_when_complete() {
        let mut buffer = CodeBuffer::new();
        for (slot, digit) in "12345".chars().enumerate() {
            buffer.set(slot, digit);
        }
        assert_eq!(buffer.code(), None);

        buffer.set(LAST_SLOT, '6');
        assert!(buffer.is_complete());
        assert_eq!(buffer.code().as_deref(), Some("123456"));

        buffer.clear_slot(0);
        assert_eq!(buffer.filled_count(), 5);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
