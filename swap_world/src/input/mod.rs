//! Input and UI signals sampled once per tick.

use serde::{Deserialize, Serialize};

/// Name the swap trigger is registered under with the host's keybinding system.
pub const TRIGGER_BINDING_NAME: &str = "QuickToolSwapKeyBind";

/// Human-readable description shown next to the binding.
pub const TRIGGER_BINDING_DESCRIPTION: &str = "Swap tools quickly";

/// Signals the swap state machine reads every tick.
pub trait InputSignals {
    /// The swap trigger went down during this tick (edge, not level).
    fn trigger_pressed_this_tick(&self) -> bool;

    /// The swap trigger is currently down.
    fn trigger_held(&self) -> bool;

    /// Primary or secondary action button is currently down.
    fn primary_or_secondary_action_held(&self) -> bool;

    /// The actor is in a state that keeps the tool in use, e.g. a fishing
    /// line is cast.
    fn is_actor_in_special_busy_state(&self) -> bool;

    /// Any inventory, crafting, map or menu surface is showing.
    fn is_any_blocking_ui_open(&self) -> bool;

    /// The actor exists and accepts control. Nothing runs while this is false.
    fn is_actor_enabled(&self) -> bool {
        true
    }
}

/// Plain snapshot of input state, filled in by the host each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub trigger_pressed: bool,
    pub trigger_held: bool,
    pub action_held: bool,
    pub busy: bool,
    pub blocking_ui_open: bool,
    pub actor_enabled: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            trigger_pressed: false,
            trigger_held: false,
            action_held: false,
            busy: false,
            blocking_ui_open: false,
            actor_enabled: true,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger goes down this tick.
    pub fn press_trigger(&mut self) {
        self.trigger_pressed = true;
        self.trigger_held = true;
    }

    /// Trigger goes up.
    pub fn release_trigger(&mut self) {
        self.trigger_pressed = false;
        self.trigger_held = false;
    }

    /// Advance to the next tick: edges are consumed, levels persist.
    pub fn next_tick(&mut self) {
        self.trigger_pressed = false;
    }
}

impl InputSignals for InputState {
    fn trigger_pressed_this_tick(&self) -> bool {
        self.trigger_pressed
    }

    fn trigger_held(&self) -> bool {
        self.trigger_held
    }

    fn primary_or_secondary_action_held(&self) -> bool {
        self.action_held
    }

    fn is_actor_in_special_busy_state(&self) -> bool {
        self.busy
    }

    fn is_any_blocking_ui_open(&self) -> bool {
        self.blocking_ui_open
    }

    fn is_actor_enabled(&self) -> bool {
        self.actor_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge_triggered() {
        let mut input = InputState::new();
        input.press_trigger();
        assert!(input.trigger_pressed_this_tick());
        assert!(input.trigger_held());

        input.next_tick();
        assert!(!input.trigger_pressed_this_tick());
        assert!(input.trigger_held());

        input.release_trigger();
        assert!(!input.trigger_held());
    }

    #[test]
    fn test_default_actor_enabled() {
        let input = InputState::default();
        assert!(input.is_actor_enabled());
        assert!(!input.is_any_blocking_ui_open());
    }
}
