//! Core domain entities for inventory transactions.
//!
//! A transaction is an immutable intent (outbound expectation, inbound
//! expectation, target content) plus the mutable counters the executor
//! maintains while it is queued.
//!
//! ```text
//! [Pending] ──apply ok──────────────→ [Succeeded]
//!     │
//!     └──mismatch──→ failures += 1 ──→ [Pending] (retry queue)
//!                          │
//!                          └── failures >= allowed ──→ [PermanentlyFailed]
//! ```

use super::errors::TransactionError;
use super::value_objects::{InboundChange, ItemChange, SlotChange, SlotLocation};
use serde::{Deserialize, Serialize};
use shared_types::Item;
use std::fmt;
use uuid::Uuid;

/// Unique transaction identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub Uuid);

impl TransactionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status. `Pending` is the only creation state; the other two are
/// terminal and set exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[default]
    Pending,
    Succeeded,
    PermanentlyFailed,
}

impl TransactionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Apply-behavior selector for the inbound side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Inbound content is written into a slot.
    Slot,
    /// Inbound content is ejected from the actor.
    Drop,
}

/// A proposed move of content between an outbound slot and an inbound slot.
///
/// Not `Clone`: a transaction is owned by exactly one queue at a time, so
/// one id is applied and reported at most once.
#[derive(Debug)]
pub struct Transaction {
    id: TransactionId,
    outbound: Option<SlotChange>,
    inbound: Option<InboundChange>,
    target: Item,
    failures: u32,
    status: TransactionStatus,
    last_error: Option<TransactionError>,
}

impl Transaction {
    /// Creates a slot transaction. Either side may be absent.
    pub fn new(outbound: Option<SlotChange>, inbound: Option<SlotChange>, target: Item) -> Self {
        Self::with_sides(outbound, inbound.map(InboundChange::Slot), target)
    }

    /// Creates a drop transaction: `item` must be in the actor's transient
    /// buffer and is ejected on apply.
    pub fn drop_item(outbound: Option<SlotChange>, item: Item) -> Self {
        Self::with_sides(outbound, Some(InboundChange::Drop(item.clone())), item)
    }

    /// Builds the transaction for an actor editing one slot from `source`
    /// (the content the actor believes is there) to `target`.
    ///
    /// Returns `None` when the edit changes nothing.
    pub fn from_slot_edit(location: SlotLocation, source: &Item, target: Item) -> Option<Self> {
        let change = ItemChange::between(source, &target)?;
        Some(Self::new(
            change.outbound.map(|item| SlotChange::new(location, item)),
            change.inbound.map(|item| SlotChange::new(location, item)),
            target,
        ))
    }

    fn with_sides(
        outbound: Option<SlotChange>,
        inbound: Option<InboundChange>,
        target: Item,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            outbound,
            inbound,
            target,
            failures: 0,
            status: TransactionStatus::Pending,
            last_error: None,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        match self.inbound {
            Some(InboundChange::Drop(_)) => TransactionKind::Drop,
            _ => TransactionKind::Slot,
        }
    }

    pub fn outbound(&self) -> Option<&SlotChange> {
        self.outbound.as_ref()
    }

    pub fn inbound(&self) -> Option<&InboundChange> {
        self.inbound.as_ref()
    }

    /// Content committed on success.
    pub fn target(&self) -> &Item {
        &self.target
    }

    /// Number of failed validation attempts so far.
    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }

    /// Most recent failure reason, if any.
    pub fn last_error(&self) -> Option<&TransactionError> {
        self.last_error.as_ref()
    }

    /// Slots this transaction reads or writes, outbound first, deduplicated.
    pub fn touched_slots(&self) -> Vec<SlotLocation> {
        let mut slots = Vec::with_capacity(2);
        if let Some(outbound) = &self.outbound {
            slots.push(outbound.location);
        }
        if let Some(location) = self.inbound.as_ref().and_then(InboundChange::location) {
            if !slots.contains(&location) {
                slots.push(location);
            }
        }
        slots
    }

    /// Records one failed attempt. Returns the new failure count.
    pub(crate) fn record_failure(&mut self, error: TransactionError) -> u32 {
        debug_assert!(self.is_pending(), "failure recorded on terminal transaction");
        self.failures += 1;
        self.last_error = Some(error);
        self.failures
    }

    pub(crate) fn mark_succeeded(&mut self) {
        debug_assert!(self.is_pending(), "transaction already terminal");
        self.status = TransactionStatus::Succeeded;
    }

    pub(crate) fn mark_permanently_failed(&mut self) {
        debug_assert!(self.is_pending(), "transaction already terminal");
        self.status = TransactionStatus::PermanentlyFailed;
        self.last_error = Some(TransactionError::RetryExhausted {
            failures: self.failures,
        });
    }
}
