//! In-memory container adapter.
//!
//! Fixed-size slot vector with stack merging. Used as the transient buffer
//! and in tests; production containers live with the world state.

use crate::ports::outbound::Container;
use shared_types::{Item, SlotIndex, MAX_STACK_SIZE};
use tracing::warn;

/// Slot-indexed container backed by a `Vec<Item>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InMemoryContainer {
    slots: Vec<Item>,
    /// Slots written with `notify = true` since the last `take_changed()`.
    changed: Vec<SlotIndex>,
}

impl InMemoryContainer {
    /// Creates an empty container with `size` slots.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![Item::air(); size],
            changed: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn contents(&self) -> &[Item] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Item::is_air)
    }

    /// Sum of counts of every stack of the same kind as `item`.
    pub fn total_count(&self, item: &Item) -> u32 {
        self.slots
            .iter()
            .filter(|stack| !stack.is_air() && stack.same_kind(item))
            .map(|stack| u32::from(stack.count))
            .sum()
    }

    /// Drains the list of slots that asked for a viewer update.
    pub fn take_changed(&mut self) -> Vec<SlotIndex> {
        std::mem::take(&mut self.changed)
    }
}

impl Container for InMemoryContainer {
    fn get_item(&self, slot: SlotIndex) -> Item {
        self.slots
            .get(usize::from(slot))
            .cloned()
            .unwrap_or_default()
    }

    fn slot_contains(&self, slot: SlotIndex, item: &Item) -> bool {
        let current = self.get_item(slot);
        if item.is_air() {
            return current.is_air();
        }
        !current.is_air() && current.same_kind(item) && current.count >= item.count
    }

    fn set_item(&mut self, slot: SlotIndex, item: Item, notify: bool) {
        let Some(entry) = self.slots.get_mut(usize::from(slot)) else {
            warn!(slot, size = self.slots.len(), "Write to slot outside container ignored");
            return;
        };
        *entry = if item.is_air() { Item::air() } else { item };
        if notify && !self.changed.contains(&slot) {
            self.changed.push(slot);
        }
    }

    fn contains(&self, item: &Item) -> bool {
        item.is_air() || self.total_count(item) >= u32::from(item.count)
    }

    fn remove_item(&mut self, item: &Item) {
        let mut remaining = item.count;
        for stack in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if stack.is_air() || !stack.same_kind(item) {
                continue;
            }
            let taken = remaining.min(stack.count);
            stack.count -= taken;
            remaining -= taken;
            if stack.count == 0 {
                *stack = Item::air();
            }
        }
    }

    fn add_item(&mut self, item: Item) {
        if item.is_air() {
            return;
        }
        let mut remaining = item.count;

        for stack in self.slots.iter_mut() {
            if remaining == 0 {
                return;
            }
            if !stack.is_air() && stack.same_kind(&item) && stack.count < MAX_STACK_SIZE {
                let moved = remaining.min(MAX_STACK_SIZE - stack.count);
                stack.count += moved;
                remaining -= moved;
            }
        }

        for stack in self.slots.iter_mut() {
            if remaining == 0 {
                return;
            }
            if stack.is_air() {
                let moved = remaining.min(MAX_STACK_SIZE);
                *stack = item.with_count(moved);
                remaining -= moved;
            }
        }

        if remaining > 0 {
            warn!(item = %item, overflow = remaining, "Container full, content discarded");
        }
    }
}
