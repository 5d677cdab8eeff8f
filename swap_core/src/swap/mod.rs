//! Swap State Machine - starts, restores and locks a temporary tool swap.
//!
//! Every tick runs three steps in order:
//! 1. **Start**: `Idle -> Swapped` when the trigger was newly pressed and no
//!    blocking UI is open
//! 2. **Restore**: `Swapped -> Idle` when the trigger is released and the tool
//!    is no longer in use, or as soon as a blocking UI opens
//! 3. **Lock**: while swapped, the recorded slot is re-equipped whenever the
//!    held slot drifts away from it
//!
//! Failures never escape a tick. A start that cannot proceed leaves the state
//! untouched so the next tick can try again.

mod state;

pub use state::*;

use serde::{Deserialize, Serialize};
use swap_world::{ConfigStore, Identifier, InputSignals, Inventory, WorldObserver};
use tracing::{debug, info, warn};

use crate::error::ExchangeError;
use crate::resolver::{observe, select_tool};
use crate::ruleset::{load_from_store, RuleSet, DEFAULT_TOOL};

/// Engine tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapConfig {
    /// Tool used when nothing in the matched priority list is carried.
    pub default_tool: Identifier,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            default_tool: Identifier::new(DEFAULT_TOOL),
        }
    }
}

/// Why a triggered swap did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Neither a priority entry nor the default tool is carried.
    NoToolAvailable,
    /// The inventory refused the exchange.
    Exchange(ExchangeError),
}

/// Something the state machine did during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapEvent {
    Started {
        tool_index: usize,
        equipped_slot_index: usize,
    },
    StartSkipped(SkipReason),
    Restored {
        tool_index: usize,
        equipped_slot_index: usize,
    },
    SlotRelocked {
        from: usize,
        to: usize,
    },
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    events: Vec<SwapEvent>,
}

impl TickReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, event: Option<SwapEvent>) {
        if let Some(event) = event {
            self.events.push(event);
        }
    }

    pub fn events(&self) -> &[SwapEvent] {
        &self.events
    }

    /// Whether nothing happened.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn started(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SwapEvent::Started { .. }))
    }

    pub fn restored(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SwapEvent::Restored { .. }))
    }
}

/// Exchange the contents of two inventory slots.
///
/// Refused when either slot is outside the inventory, or when `from` is
/// empty on a forward swap. A restore may swap an empty slot back.
pub fn exchange<I>(
    inventory: &mut I,
    from: usize,
    to: usize,
    is_restore: bool,
) -> Result<(), ExchangeError>
where
    I: Inventory + ?Sized,
{
    let size = inventory.size();
    for index in [from, to] {
        if index >= size {
            return Err(ExchangeError::OutOfRange { index, size });
        }
    }

    if !is_restore && !inventory.has_item_info(from) {
        return Err(ExchangeError::EmptySource { index: from });
    }

    inventory.exchange(from, to);
    Ok(())
}

/// Whether a swapped tool should go back this tick.
fn restore_due<S>(signals: &S) -> bool
where
    S: InputSignals + ?Sized,
{
    let tool_in_use = signals.primary_or_secondary_action_held()
        || signals.trigger_held()
        || signals.is_actor_in_special_busy_state();
    let released_while_unused = !signals.trigger_held() && !tool_in_use;

    released_while_unused || signals.is_any_blocking_ui_open()
}

/// Evaluates the swap pipeline against a rule set.
///
/// The engine itself is immutable between reloads. The single [`SwapState`]
/// is owned by the caller and handed in on every tick.
#[derive(Debug, Clone)]
pub struct SwapEngine {
    rules: RuleSet,
    config: SwapConfig,
}

impl SwapEngine {
    /// Create an engine over an already built rule set.
    pub fn new(rules: RuleSet, config: SwapConfig) -> Self {
        info!(
            sections = rules.len(),
            default_tool = %config.default_tool,
            "tool swap engine ready"
        );
        Self { rules, config }
    }

    /// Create an engine from a configuration store, binding defaults into it.
    pub fn from_store<S>(store: &mut S, config: SwapConfig) -> Self
    where
        S: ConfigStore + ?Sized,
    {
        Self::new(load_from_store(store), config)
    }

    /// Rebuild the rule set after the configuration changed.
    pub fn reload<S>(&mut self, store: &mut S)
    where
        S: ConfigStore + ?Sized,
    {
        self.rules = load_from_store(store);
        info!(sections = self.rules.len(), "tool rules reloaded");
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    /// Run one tick: start, restore, then lock.
    pub fn evaluate<W, I, S>(
        &self,
        state: &mut SwapState,
        world: &W,
        inventory: &mut I,
        signals: &S,
    ) -> TickReport
    where
        W: WorldObserver + ?Sized,
        I: Inventory + ?Sized,
        S: InputSignals + ?Sized,
    {
        let mut report = TickReport::new();
        if !signals.is_actor_enabled() {
            return report;
        }

        report.record(self.start_swap(state, world, inventory, signals));
        report.record(self.restore(state, inventory, signals));
        report.record(self.lock_slot(state, inventory));
        report
    }

    /// `Idle -> Swapped`.
    ///
    /// Returns `None` when the transition is not permitted this tick, which
    /// includes being swapped already.
    pub fn start_swap<W, I, S>(
        &self,
        state: &mut SwapState,
        world: &W,
        inventory: &mut I,
        signals: &S,
    ) -> Option<SwapEvent>
    where
        W: WorldObserver + ?Sized,
        I: Inventory + ?Sized,
        S: InputSignals + ?Sized,
    {
        if state.is_swapped()
            || signals.is_any_blocking_ui_open()
            || !signals.trigger_pressed_this_tick()
        {
            return None;
        }

        let observed = observe(world);
        let snapshot = inventory.snapshot();
        let Some(tool_index) =
            select_tool(&self.rules, &observed, &snapshot, &self.config.default_tool)
        else {
            debug!("no tool available for swap");
            return Some(SwapEvent::StartSkipped(SkipReason::NoToolAvailable));
        };

        let equipped_slot_index = inventory.equipped_slot();
        if let Err(err) = exchange(inventory, tool_index, equipped_slot_index, false) {
            debug!(%err, tool_index, equipped_slot_index, "swap refused");
            return Some(SwapEvent::StartSkipped(SkipReason::Exchange(err)));
        }

        state.begin(tool_index, equipped_slot_index);
        debug!(tool_index, equipped_slot_index, "tool swapped in");
        Some(SwapEvent::Started {
            tool_index,
            equipped_slot_index,
        })
    }

    /// `Swapped -> Idle`.
    ///
    /// The reverse exchange is attempted unconditionally and the state is
    /// cleared whether or not it succeeds.
    pub fn restore<I, S>(
        &self,
        state: &mut SwapState,
        inventory: &mut I,
        signals: &S,
    ) -> Option<SwapEvent>
    where
        I: Inventory + ?Sized,
        S: InputSignals + ?Sized,
    {
        if !state.is_swapped() || !restore_due(signals) {
            return None;
        }

        let (Some(tool_index), Some(equipped_slot_index)) =
            (state.tool_index(), state.equipped_slot_index())
        else {
            state.clear();
            return None;
        };

        if let Err(err) = exchange(inventory, tool_index, equipped_slot_index, true) {
            warn!(%err, tool_index, equipped_slot_index, "failed to swap tool back");
        }
        state.clear();

        debug!(tool_index, equipped_slot_index, "tool swapped back");
        Some(SwapEvent::Restored {
            tool_index,
            equipped_slot_index,
        })
    }

    /// Keep the recorded slot held while swapped.
    pub fn lock_slot<I>(&self, state: &SwapState, inventory: &mut I) -> Option<SwapEvent>
    where
        I: Inventory + ?Sized,
    {
        if !state.is_swapped() {
            return None;
        }

        let locked = state.equipped_slot_index()?;
        let current = inventory.equipped_slot();
        if current == locked {
            return None;
        }

        inventory.equip(locked);
        debug!(from = current, to = locked, "held slot relocked");
        Some(SwapEvent::SlotRelocked {
            from: current,
            to: locked,
        })
    }
}

impl Default for SwapEngine {
    fn default() -> Self {
        Self::new(crate::ruleset::load(Vec::new()), SwapConfig::default())
    }
}
