//! Priority resolution - from observed identifiers to an inventory slot.
//!
//! Resolution runs in two steps:
//! 1. **Section match**: the first section (rule set order) whose activation
//!    set contains any observed identifier supplies the priority list
//! 2. **Slot lookup**: the first priority entry carried with a positive amount
//!    wins; otherwise the default tool, otherwise nothing
//!
//! The section loop is the outer loop. A later section never wins over an
//! earlier one, even when its identifier was observed first.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use swap_world::{Identifier, InventorySnapshot, WorldObserver};
use tracing::debug;

use crate::ruleset::{RuleSet, Section};

/// Identifiers seen at the actor's facing position: tile kinds first, then
/// entity kinds, each in the order the world reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedContext {
    identifiers: Vec<Identifier>,
}

impl ObservedContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, identifier: impl Into<Identifier>) {
        self.identifiers.push(identifier.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.identifiers.iter()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl<T: Into<Identifier>> FromIterator<T> for ObservedContext {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            identifiers: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Gather everything at the tile the actor is facing.
pub fn observe<W>(world: &W) -> ObservedContext
where
    W: WorldObserver + ?Sized,
{
    let position = world.facing_position();
    let mut observed: ObservedContext = world.tiles_at(position).into_iter().collect();
    for entity in world.entities_at(position) {
        observed.push(entity);
    }
    observed
}

/// The first section, in rule set order, activated by any observed identifier.
pub fn matching_section<'a>(ruleset: &'a RuleSet, observed: &ObservedContext) -> Option<&'a Section> {
    for section in ruleset.iter() {
        for identifier in observed.iter() {
            if section.is_activated_by(identifier) {
                return Some(section);
            }
        }
    }
    None
}

/// Priority list of the matching section, or an empty list when none matches.
pub fn resolve_priority_list<'a>(ruleset: &'a RuleSet, observed: &ObservedContext) -> &'a [Identifier] {
    matching_section(ruleset, observed)
        .map(|section| section.priority_list.as_slice())
        .unwrap_or(&[])
}

/// Pick the inventory slot for a priority list.
///
/// Only slots with a positive amount count, and for duplicate items the lowest
/// slot index wins no matter where it appears in the snapshot. Falls back to
/// `default_tool` when no priority entry is carried.
pub fn resolve_slot(
    priority_list: &[Identifier],
    inventory: &InventorySnapshot,
    default_tool: &Identifier,
) -> Option<usize> {
    let mut slots: HashMap<&Identifier, usize> = HashMap::new();
    for entry in inventory.iter() {
        if entry.amount == 0 {
            continue;
        }
        slots
            .entry(&entry.item)
            .and_modify(|slot| *slot = (*slot).min(entry.slot))
            .or_insert(entry.slot);
    }

    priority_list
        .iter()
        .find_map(|item| slots.get(item).copied())
        .or_else(|| slots.get(default_tool).copied())
}

/// Match a section and resolve it to a slot in one go.
pub fn select_tool(
    ruleset: &RuleSet,
    observed: &ObservedContext,
    inventory: &InventorySnapshot,
    default_tool: &Identifier,
) -> Option<usize> {
    let section = matching_section(ruleset, observed);
    let priority_list = section.map(|s| s.priority_list.as_slice()).unwrap_or(&[]);
    let slot = resolve_slot(priority_list, inventory, default_tool);

    debug!(
        section = section.map(|s| s.name.as_str()).unwrap_or("<none>"),
        observed = observed.len(),
        slot = ?slot,
        "resolved tool"
    );

    slot
}

#[cfg(test)]
mod tests {
    use super::*;
    use swap_world::{GridWorld, TilePosition};

    fn torch() -> Identifier {
        Identifier::new("torch")
    }

    fn mining_rules() -> RuleSet {
        RuleSet::from_sections([Section::new("Mining", ["ore", "wall"], ["irontool", "woodtool"])])
    }

    #[test]
    fn test_wall_resolves_to_woodtool_slot() {
        let ruleset = mining_rules();
        let observed: ObservedContext = ["wall"].into_iter().collect();
        let inventory = InventorySnapshot::from_items([("sword", 1), ("rock", 5), ("woodtool", 1)]);

        let list = resolve_priority_list(&ruleset, &observed);
        assert_eq!(resolve_slot(list, &inventory, &torch()), Some(2));
    }

    #[test]
    fn test_no_matching_section_gives_empty_list() {
        let ruleset = mining_rules();
        let observed: ObservedContext = ["water"].into_iter().collect();
        let inventory = InventorySnapshot::from_items([("woodtool", 1)]);

        let list = resolve_priority_list(&ruleset, &observed);
        assert!(list.is_empty());
        assert_eq!(resolve_slot(list, &inventory, &torch()), None);
    }

    #[test]
    fn test_first_section_wins_over_first_observed() {
        let ruleset = RuleSet::from_sections([
            Section::new("Mining", ["wall"], ["pickaxe"]),
            Section::new("Fishing", ["water"], ["rod"]),
        ]);
        // "water" was observed before "wall", but Mining is declared first.
        let observed: ObservedContext = ["water", "wall"].into_iter().collect();

        let section = matching_section(&ruleset, &observed).unwrap();
        assert_eq!(section.name, "Mining");
        assert_eq!(resolve_priority_list(&ruleset, &observed), &[Identifier::new("pickaxe")]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let ruleset = RuleSet::from_sections([Section::new("Farming", ["wateredGround"], ["WoodHoe"])]);
        let observed: ObservedContext = ["WATEREDGROUND"].into_iter().collect();

        assert_eq!(resolve_priority_list(&ruleset, &observed), &[Identifier::new("woodhoe")]);
    }

    #[test]
    fn test_priority_order_beats_slot_order() {
        let list = [Identifier::new("irontool"), Identifier::new("woodtool")];
        let inventory = InventorySnapshot::from_items([("woodtool", 1), ("irontool", 1)]);

        assert_eq!(resolve_slot(&list, &inventory, &torch()), Some(1));
    }

    #[test]
    fn test_falls_back_to_default_tool() {
        let list = [Identifier::new("irontool")];
        let inventory = InventorySnapshot::from_items([("Torch", 8), ("rock", 3)]);

        assert_eq!(resolve_slot(&list, &inventory, &torch()), Some(0));
    }

    #[test]
    fn test_empty_list_still_falls_back() {
        let inventory = InventorySnapshot::from_items([("rock", 3), ("torch", 1)]);
        assert_eq!(resolve_slot(&[], &inventory, &torch()), Some(1));
    }

    #[test]
    fn test_duplicates_pick_lowest_slot() {
        let list = [Identifier::new("woodtool")];
        let mut inventory = InventorySnapshot::new();
        inventory.push(7, "woodtool", 1);
        inventory.push(2, "rock", 1);
        inventory.push(4, "WoodTool", 1);
        // Slot 7 is listed first, but slot 4 is lower.
        assert_eq!(resolve_slot(&list, &inventory, &torch()), Some(4));

        let inventory = InventorySnapshot::from_items([("rock", 1), ("woodtool", 1), ("woodtool", 1)]);
        assert_eq!(resolve_slot(&list, &inventory, &torch()), Some(1));
    }

    #[test]
    fn test_zero_amount_slots_are_ignored() {
        let list = [Identifier::new("woodtool")];
        let inventory = InventorySnapshot::from_items([("woodtool", 0), ("woodtool", 1)]);

        assert_eq!(resolve_slot(&list, &inventory, &torch()), Some(1));
    }

    #[test]
    fn test_observe_collects_tiles_then_entities() {
        let mut world = GridWorld::new();
        world.set_actor((0.0, 0.0), (1.0, 0.0));
        world.spawn_entity("CritterWorm", (1.0, 0.0));
        world.place_tile(TilePosition::new(1, 0), "ground");
        world.place_tile(TilePosition::new(2, 0), "wall");

        let observed = observe(&world);
        let ids: Vec<_> = observed.iter().map(Identifier::as_str).collect();
        assert_eq!(ids, vec!["ground", "critterworm"]);
    }

    #[test]
    fn test_select_tool() {
        let ruleset = mining_rules();
        let observed: ObservedContext = ["ore"].into_iter().collect();
        let inventory = InventorySnapshot::from_items([("irontool", 1)]);

        assert_eq!(select_tool(&ruleset, &observed, &inventory, &torch()), Some(0));
    }
}
