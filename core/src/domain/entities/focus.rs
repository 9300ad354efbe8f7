//! Focus cursor over the code slots.
//!
//! Each slot owns an opaque [`FocusTarget`]; a rendering layer maps targets to
//! its own input handles and moves real focus when the cursor changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::code_buffer::{CODE_LENGTH, LAST_SLOT};

/// Opaque identifier of one slot's input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FocusTarget(Uuid);

impl FocusTarget {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot-{}", self.0)
    }
}

/// Index of the focused slot plus the per-slot focus targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusCursor {
    targets: [FocusTarget; CODE_LENGTH],
    index: usize,
}

impl Default for FocusCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusCursor {
    /// Creates a cursor on slot 0 with fresh focus targets
    pub fn new() -> Self {
        Self {
            targets: std::array::from_fn(|_| FocusTarget::new()),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Focus target of the focused slot
    pub fn target(&self) -> FocusTarget {
        self.targets[self.index]
    }

    pub fn target_at(&self, slot: usize) -> Option<FocusTarget> {
        self.targets.get(slot).copied()
    }

    /// Slot owning `target`, if it belongs to this cursor
    pub fn slot_of(&self, target: FocusTarget) -> Option<usize> {
        self.targets.iter().position(|t| *t == target)
    }

    pub fn targets(&self) -> &[FocusTarget] {
        &self.targets
    }

    /// Focuses `slot`, clamped to the last slot
    pub fn focus(&mut self, slot: usize) {
        self.index = slot.min(LAST_SLOT);
    }

    /// Moves to the slot after `slot`; stays on the last slot
    pub fn advance_from(&mut self, slot: usize) {
        self.focus(slot + 1);
    }

    /// Moves to the slot before `slot`; stays on slot 0
    pub fn retreat_from(&mut self, slot: usize) {
        self.focus(slot.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_distinct() {
        let cursor = FocusCursor::new();
        let unique: std::collections::HashSet<_> = cursor.targets().iter().collect();
        assert_eq!(unique.len(), CODE_LENGTH);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.target(), cursor.target_at(0).unwrap());
    }

    #[test]
    fn test_advance_and_retreat_clamp() {
        let mut cursor = FocusCursor::new();
        cursor.advance_from(LAST_SLOT);
        assert_eq!(cursor.index(), LAST_SLOT);

        cursor.retreat_from(0);
        assert_eq!(cursor.index(), 0);

        cursor.advance_from(2);
        assert_eq!(cursor.index(), 3);
        cursor.retreat_from(3);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_slot_of_round_trips_targets() {
        let cursor = FocusCursor::new();
        let other = FocusCursor::new();
        assert_eq!(cursor.slot_of(cursor.target_at(4).unwrap()), Some(4));
        assert_eq!(cursor.slot_of(other.target_at(4).unwrap()), None);
    }
}
