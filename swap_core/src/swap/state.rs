//! Swap bookkeeping carried between ticks.

use serde::{Deserialize, Serialize};

/// Phase of the swap lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SwapPhase {
    #[default]
    Idle,
    /// A resolved tool sits in the held slot in place of the original item.
    Swapped,
}

/// Mutable state of the single active swap.
///
/// Only the swap state machine writes to it; everyone else reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SwapState {
    tool_index: Option<usize>,
    equipped_slot_index: Option<usize>,
    is_swapped: bool,
}

impl SwapState {
    /// Create an idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot the tool was taken from.
    pub fn tool_index(&self) -> Option<usize> {
        self.tool_index
    }

    /// Slot that held the original item and is locked while swapped.
    pub fn equipped_slot_index(&self) -> Option<usize> {
        self.equipped_slot_index
    }

    pub fn is_swapped(&self) -> bool {
        self.is_swapped
    }

    pub fn phase(&self) -> SwapPhase {
        if self.is_swapped {
            SwapPhase::Swapped
        } else {
            SwapPhase::Idle
        }
    }

    pub(crate) fn begin(&mut self, tool_index: usize, equipped_slot_index: usize) {
        self.tool_index = Some(tool_index);
        self.equipped_slot_index = Some(equipped_slot_index);
        self.is_swapped = true;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = SwapState::new();
        assert_eq!(state.phase(), SwapPhase::Idle);
        assert!(state.tool_index().is_none());
        assert!(state.equipped_slot_index().is_none());
    }

    #[test]
    fn test_begin_and_clear() {
        let mut state = SwapState::new();
        state.begin(3, 0);

        assert_eq!(state.phase(), SwapPhase::Swapped);
        assert_eq!(state.tool_index(), Some(3));
        assert_eq!(state.equipped_slot_index(), Some(0));

        state.clear();
        assert_eq!(state, SwapState::new());
    }
}
