//! Inventory contents and the accessor trait the engine swaps through.

use serde::{Deserialize, Serialize};

use super::Identifier;

/// A stack of items occupying one inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Identifier,
    pub amount: u32,
}

impl ItemStack {
    pub fn new(item: impl Into<Identifier>, amount: u32) -> Self {
        Self {
            item: item.into(),
            amount,
        }
    }
}

/// One occupied slot as seen by a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub slot: usize,
    pub item: Identifier,
    pub amount: u32,
}

/// Point-in-time view of an inventory, used only for lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    entries: Vec<SnapshotEntry>,
}

impl InventorySnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot where each item sits at the slot matching its position.
    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = (T, u32)>,
        T: Into<Identifier>,
    {
        let mut snapshot = Self::new();
        for (slot, (item, amount)) in items.into_iter().enumerate() {
            snapshot.push(slot, item, amount);
        }
        snapshot
    }

    /// Record the contents of a slot.
    pub fn push(&mut self, slot: usize, item: impl Into<Identifier>, amount: u32) {
        self.entries.push(SnapshotEntry {
            slot,
            item: item.into(),
            amount,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &SnapshotEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Access to the actor's inventory.
///
/// Slots are addressed by index in `0..size()`. Implementations are not
/// required to range-check `exchange`; callers validate indices first.
pub trait Inventory {
    /// Number of slots.
    fn size(&self) -> usize;

    /// Contents of a slot, `None` when the slot is empty or out of range.
    fn item_at(&self, slot: usize) -> Option<ItemStack>;

    /// Whether the item in `slot` has a definition in the item database.
    /// Empty slots have none.
    fn has_item_info(&self, slot: usize) -> bool;

    /// Slot currently held in the actor's hands.
    fn equipped_slot(&self) -> usize;

    /// Select `slot` as the held slot.
    fn equip(&mut self, slot: usize);

    /// Exchange the contents of two slots in place.
    fn exchange(&mut self, slot_a: usize, slot_b: usize);

    /// Capture every occupied slot.
    fn snapshot(&self) -> InventorySnapshot {
        let mut snapshot = InventorySnapshot::new();
        for slot in 0..self.size() {
            if let Some(stack) = self.item_at(slot) {
                snapshot.push(slot, stack.item, stack.amount);
            }
        }
        snapshot
    }
}

/// In-memory player inventory: a fixed row of optional stacks plus the
/// equipped slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInventory {
    slots: Vec<Option<ItemStack>>,
    equipped: usize,
}

impl PlayerInventory {
    /// Create an inventory with `size` empty slots and slot 0 equipped.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
            equipped: 0,
        }
    }

    /// Put a stack into a slot, replacing whatever was there.
    /// Out-of-range slots are ignored.
    pub fn put(&mut self, slot: usize, item: impl Into<Identifier>, amount: u32) {
        if let Some(target) = self.slots.get_mut(slot) {
            *target = Some(ItemStack::new(item, amount));
        }
    }

    /// Empty a slot, returning its previous contents.
    pub fn take(&mut self, slot: usize) -> Option<ItemStack> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn slot(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }
}

impl Inventory for PlayerInventory {
    fn size(&self) -> usize {
        self.slots.len()
    }

    fn item_at(&self, slot: usize) -> Option<ItemStack> {
        self.slot(slot).cloned()
    }

    fn has_item_info(&self, slot: usize) -> bool {
        self.slot(slot).is_some()
    }

    fn equipped_slot(&self) -> usize {
        self.equipped
    }

    fn equip(&mut self, slot: usize) {
        if slot < self.slots.len() {
            self.equipped = slot;
        }
    }

    fn exchange(&mut self, slot_a: usize, slot_b: usize) {
        if slot_a < self.slots.len() && slot_b < self.slots.len() {
            self.slots.swap(slot_a, slot_b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_skips_empty_slots() {
        let mut inventory = PlayerInventory::new(4);
        inventory.put(1, "Torch", 12);
        inventory.put(3, "WoodMiningPick", 1);

        let snapshot = inventory.snapshot();
        let slots: Vec<_> = snapshot.iter().map(|e| e.slot).collect();

        assert_eq!(slots, vec![1, 3]);
        assert_eq!(snapshot.iter().next().unwrap().item.as_str(), "torch");
    }

    #[test]
    fn test_exchange_swaps_contents() {
        let mut inventory = PlayerInventory::new(3);
        inventory.put(0, "Sword", 1);
        inventory.put(2, "IronHoe", 1);

        inventory.exchange(0, 2);

        assert_eq!(inventory.slot(0).unwrap().item.as_str(), "ironhoe");
        assert_eq!(inventory.slot(2).unwrap().item.as_str(), "sword");
    }

    #[test]
    fn test_exchange_out_of_range_is_ignored() {
        let mut inventory = PlayerInventory::new(2);
        inventory.put(0, "Sword", 1);

        inventory.exchange(0, 2);

        assert_eq!(inventory.slot(0).unwrap().item.as_str(), "sword");
    }

    #[test]
    fn test_equip_and_item_info() {
        let mut inventory = PlayerInventory::new(3);
        inventory.put(1, "BugNet", 1);

        inventory.equip(1);
        assert_eq!(inventory.equipped_slot(), 1);

        inventory.equip(9);
        assert_eq!(inventory.equipped_slot(), 1);

        assert!(inventory.has_item_info(1));
        assert!(!inventory.has_item_info(0));
        assert!(inventory.take(1).is_some());
        assert!(!inventory.has_item_info(1));
    }

    #[test]
    fn test_snapshot_from_items() {
        let snapshot = InventorySnapshot::from_items([("Torch", 3), ("Rock", 0)]);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.iter().nth(1).unwrap().slot, 1);
    }
}
