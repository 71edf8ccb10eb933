//! Outbound (Driven) ports for the transaction executor.
//!
//! Container storage, the actor model and the notification transport are
//! owned elsewhere; the executor only sees them through these traits.

use crate::domain::{Timestamp, Transaction};
use shared_types::{ActorId, ContainerId, Item, SlotIndex};

/// Slot-indexed mutable store (an inventory).
pub trait Container {
    /// Current content of `slot` (air when empty or out of range).
    fn get_item(&self, slot: SlotIndex) -> Item;

    /// Returns true if `slot` holds at least `item`.
    fn slot_contains(&self, slot: SlotIndex, item: &Item) -> bool;

    /// Overwrites `slot`. `notify` asks the container to push the change to
    /// its viewers.
    fn set_item(&mut self, slot: SlotIndex, item: Item, notify: bool);

    /// Returns true if the container holds at least `item` across all slots.
    fn contains(&self, item: &Item) -> bool;

    /// Removes `item` (up to its count) from wherever it is stored.
    fn remove_item(&mut self, item: &Item);

    /// Stores `item`, merging into matching stacks first.
    fn add_item(&mut self, item: Item);
}

/// The actor a transaction group is bound to.
pub trait Actor {
    fn id(&self) -> ActorId;

    /// Unrestricted-edit mode relaxes all content expectations.
    fn is_unrestricted(&self) -> bool;

    /// Escrow container holding content between the two sides of a move.
    fn transient_buffer_mut(&mut self) -> &mut dyn Container;

    /// Resolves a container the actor currently has access to.
    fn container_mut(&mut self, id: ContainerId) -> Option<&mut dyn Container>;

    /// Ejects content from the actor into the world.
    fn eject(&mut self, item: Item);
}

/// Receives per-transaction outcomes for remote observers.
///
/// Called inline for successes and after the drain loop for permanent
/// failures.
pub trait NotificationSink {
    fn notify(&mut self, transaction: &Transaction);
}

/// Time source for bookkeeping timestamps.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}
