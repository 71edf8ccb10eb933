//! Value objects for inventory transactions.

use super::entities::{Transaction, TransactionId, TransactionStatus};
use serde::{Deserialize, Serialize};
use shared_types::{ContainerId, Item, SlotIndex};
use std::fmt;

/// A single slot of a single container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotLocation {
    pub container: ContainerId,
    pub slot: SlotIndex,
}

impl SlotLocation {
    pub fn new(container: ContainerId, slot: SlotIndex) -> Self {
        Self { container, slot }
    }
}

impl fmt::Display for SlotLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.container, self.slot)
    }
}

/// Expected content at a slot location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotChange {
    pub location: SlotLocation,
    pub item: Item,
}

impl SlotChange {
    pub fn new(location: SlotLocation, item: Item) -> Self {
        Self { location, item }
    }
}

/// Inbound side of a transaction.
///
/// The variant selects the apply action once the inbound content has been
/// taken out of the actor's transient buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InboundChange {
    /// Commit the target content into a slot.
    Slot(SlotChange),
    /// Eject the target content from the actor.
    Drop(Item),
}

impl InboundChange {
    /// Content that must be present in the transient buffer.
    pub fn expected(&self) -> &Item {
        match self {
            Self::Slot(change) => &change.item,
            Self::Drop(item) => item,
        }
    }

    /// Destination slot, if the change writes into one.
    pub fn location(&self) -> Option<SlotLocation> {
        match self {
            Self::Slot(change) => Some(change.location),
            Self::Drop(_) => None,
        }
    }
}

/// Which half of a transaction an outcome refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeSide {
    Outbound,
    Inbound,
}

impl fmt::Display for ChangeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outbound => write!(f, "outbound"),
            Self::Inbound => write!(f, "inbound"),
        }
    }
}

/// Difference between a slot's believed content and the content an actor
/// wants it to hold.
///
/// `outbound` leaves the slot (and goes into escrow), `inbound` enters the
/// slot (and must come out of escrow).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemChange {
    pub outbound: Option<Item>,
    pub inbound: Option<Item>,
}

impl ItemChange {
    /// Computes the change for replacing `source` with `target`.
    ///
    /// Returns `None` when the two are identical.
    pub fn between(source: &Item, target: &Item) -> Option<Self> {
        if source == target || (source.is_air() && target.is_air()) {
            return None;
        }

        if source.same_kind(target) && !source.is_air() && !target.is_air() {
            let delta = i16::from(target.count) - i16::from(source.count);
            let moved = source.with_count(delta.unsigned_abs() as u8);
            return Some(if delta < 0 {
                Self {
                    outbound: Some(moved),
                    inbound: None,
                }
            } else {
                Self {
                    outbound: None,
                    inbound: Some(moved),
                }
            });
        }

        match (source.is_air(), target.is_air()) {
            (false, true) => Some(Self {
                outbound: Some(source.clone()),
                inbound: None,
            }),
            (true, false) => Some(Self {
                outbound: None,
                inbound: Some(target.clone()),
            }),
            _ => Some(Self {
                outbound: Some(source.clone()),
                inbound: Some(target.clone()),
            }),
        }
    }
}

/// Summary of one `execute()` cycle. Bookkeeping only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Transactions moved from the retry queue into the pending queue.
    pub admitted_retries: usize,
    /// Transactions dequeued by the drain loop.
    pub processed: usize,
    pub succeeded: usize,
    /// Failed this cycle, waiting for the next one.
    pub requeued: usize,
    /// Failed permanently this cycle.
    pub abandoned: usize,
}

/// Serializable outcome event handed to the transport layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutcome {
    pub transaction_id: TransactionId,
    pub status: TransactionStatus,
    pub failures: u32,
    /// Slots the owner must refresh to resynchronize with server state.
    pub refresh: Vec<SlotLocation>,
    pub reason: Option<String>,
}

impl From<&Transaction> for TransactionOutcome {
    fn from(tx: &Transaction) -> Self {
        Self {
            transaction_id: tx.id(),
            status: tx.status(),
            failures: tx.failures(),
            refresh: tx.touched_slots(),
            reason: tx.last_error().map(|e| e.to_string()),
        }
    }
}
