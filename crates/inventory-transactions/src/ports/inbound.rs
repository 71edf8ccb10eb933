//! # Inbound Port - TransactionGroupApi
//!
//! Driving port used by producers (packet handlers queueing edits) and by the
//! tick driver (running one cycle per tick).

use crate::config::ExecutionContext;
use crate::domain::{Transaction, TransactionGroup};
use crate::ports::outbound::{Actor, NotificationSink};

/// Primary API of a per-actor transaction group.
///
/// # Example
///
/// ```rust,ignore
/// use inventory_transactions::ports::TransactionGroupApi;
///
/// fn on_tick(group: &mut impl TransactionGroupApi, sink: &mut impl NotificationSink) {
///     group.execute(&ExecutionContext::default(), sink);
/// }
/// ```
pub trait TransactionGroupApi {
    /// Queues a pending transaction for the next cycle.
    fn add_transaction(&mut self, transaction: Transaction) -> bool;

    /// Runs one validate/apply cycle.
    fn execute(&mut self, ctx: &ExecutionContext, sink: &mut dyn NotificationSink) -> bool;

    fn is_executing(&self) -> bool;

    /// Transactions queued for the next cycle (fresh and retried).
    fn pending_len(&self) -> usize;

    fn retry_len(&self) -> usize;
}

impl<A: Actor> TransactionGroupApi for TransactionGroup<A> {
    fn add_transaction(&mut self, transaction: Transaction) -> bool {
        TransactionGroup::add_transaction(self, transaction)
    }

    fn execute(&mut self, ctx: &ExecutionContext, sink: &mut dyn NotificationSink) -> bool {
        TransactionGroup::execute(self, ctx, sink)
    }

    fn is_executing(&self) -> bool {
        TransactionGroup::is_executing(self)
    }

    fn pending_len(&self) -> usize {
        self.transactions().len() + self.retry_queue().len()
    }

    fn retry_len(&self) -> usize {
        self.retry_queue().len()
    }
}
