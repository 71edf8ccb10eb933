//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Content**: `Item`, `ItemId`
//! - **Addressing**: `ContainerId`, `SlotIndex`
//! - **Identity**: `ActorId`

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// Index of a slot inside a container.
pub type SlotIndex = u16;

/// Largest count a single slot can hold.
pub const MAX_STACK_SIZE: u8 = 64;

// =============================================================================
// CLUSTER A: CONTENT
// =============================================================================

/// Numeric item type identifier. `0` is air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u16);

impl ItemId {
    /// The empty item type.
    pub const AIR: ItemId = ItemId(0);
}

/// The content of one slot: an item type, its damage/variant and a count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Item type.
    pub id: ItemId,
    /// Damage or variant value.
    pub meta: u16,
    /// Stack size.
    pub count: u8,
}

impl Item {
    /// Creates an item stack.
    pub fn new(id: u16, meta: u16, count: u8) -> Self {
        Self {
            id: ItemId(id),
            meta,
            count,
        }
    }

    /// The value held by an empty slot.
    pub fn air() -> Self {
        Self {
            id: ItemId::AIR,
            meta: 0,
            count: 0,
        }
    }

    /// Returns true for the empty-slot value (or a zero-count stack).
    pub fn is_air(&self) -> bool {
        self.id == ItemId::AIR || self.count == 0
    }

    /// Same item type and variant, ignoring count.
    pub fn same_kind(&self, other: &Item) -> bool {
        self.id == other.id && self.meta == other.meta
    }

    /// Returns a copy of this stack with a different count.
    pub fn with_count(&self, count: u8) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::air()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_air() {
            write!(f, "air")
        } else {
            write!(f, "{}:{}x{}", self.id.0, self.meta, self.count)
        }
    }
}

// =============================================================================
// CLUSTER B: ADDRESSING & IDENTITY
// =============================================================================

/// Identifier of a container (an open inventory window) as seen by an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(pub u32);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

/// Identity of the actor owning a transaction group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Generates a fresh random actor id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
