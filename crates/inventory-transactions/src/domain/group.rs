//! # Transaction Group - Per-Actor Executor
//!
//! Owns the pending and retry queues for one actor and runs the
//! validate/apply loop once per tick.
//!
//! ## Queue Discipline
//!
//! - `pending`: FIFO, appended by `add_transaction()`
//! - `retry`: transactions that failed last cycle, appended to the back of
//!   `pending` at the start of the next `execute()`, so fresh transactions
//!   run before retries
//!
//! A pending transaction lives in exactly one of the two queues. Terminal
//! transactions are reported and dropped, never re-enqueued.
//!
//! ## Apply Protocol
//!
//! ```text
//! outbound? ── slot holds expected ──→ escrow expected into buffer ──→ write target to slot
//!                 └── no ──→ failure
//! inbound?  ── slot container resolves ──→ buffer holds expected ─→ take it out of buffer ─┬→ Slot: write target to slot
//!                 └── no ──→ failure              └── no ──→ failure                       └→ Drop: eject target
//! ```
//!
//! Validation is skipped entirely while the cheat override is active, and
//! the content expectations are waived for unrestricted actors. An inbound
//! failure does not undo an outbound commit made earlier in the same apply.

use super::entities::Transaction;
use super::errors::TransactionError;
use super::retry::{RetryDecision, RetryPolicy};
use super::value_objects::{ChangeSide, ExecutionReport, InboundChange};
use super::Timestamp;
use crate::config::{ExecutionContext, TransactionGroupConfig};
use crate::ports::outbound::{Actor, Container, NotificationSink, SystemTimeSource, TimeSource};
use shared_types::ContainerId;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Transaction queue and executor bound to one actor.
pub struct TransactionGroup<A: Actor> {
    /// Bound actor. Absent groups never drain.
    actor: Option<A>,

    /// Transactions to run this cycle, in order.
    pending: VecDeque<Transaction>,

    /// Transactions that failed and wait for the next cycle.
    retry: VecDeque<Transaction>,

    /// Advisory reentrancy marker, not a lock.
    executing: bool,

    last_update: Option<Timestamp>,
    last_execution: Option<Timestamp>,
    last_report: ExecutionReport,

    policy: RetryPolicy,
    clock: Arc<dyn TimeSource>,
}

impl<A: Actor> TransactionGroup<A> {
    /// Creates a group with the default retry bound.
    pub fn new(actor: Option<A>) -> Self {
        Self {
            actor,
            pending: VecDeque::new(),
            retry: VecDeque::new(),
            executing: false,
            last_update: None,
            last_execution: None,
            last_report: ExecutionReport::default(),
            policy: RetryPolicy::default(),
            clock: Arc::new(SystemTimeSource),
        }
    }

    pub fn with_config(actor: Option<A>, config: &TransactionGroupConfig) -> Self {
        Self::new(actor).with_policy(config.retry_policy())
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_time_source(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    pub fn actor(&self) -> Option<&A> {
        self.actor.as_ref()
    }

    pub fn actor_mut(&mut self) -> Option<&mut A> {
        self.actor.as_mut()
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Live pending queue, front first.
    pub fn transactions(&self) -> &VecDeque<Transaction> {
        &self.pending
    }

    /// Transactions waiting for the next cycle.
    pub fn retry_queue(&self) -> &VecDeque<Transaction> {
        &self.retry
    }

    pub fn is_executing(&self) -> bool {
        self.executing
    }

    pub fn last_update(&self) -> Option<Timestamp> {
        self.last_update
    }

    pub fn last_execution(&self) -> Option<Timestamp> {
        self.last_execution
    }

    pub fn last_report(&self) -> ExecutionReport {
        self.last_report
    }

    /// Appends a transaction to the pending queue.
    ///
    /// No validation happens here and no capacity bound is enforced. The
    /// group takes ownership, so the same transaction cannot be queued twice.
    pub fn add_transaction(&mut self, transaction: Transaction) -> bool {
        self.pending.push_back(transaction);
        self.last_update = Some(self.clock.now());
        true
    }

    /// Runs one cycle: admits retries, drains the pending queue, then reports
    /// transactions that failed permanently during this cycle.
    ///
    /// Individual transactions can fail; the cycle itself cannot, so this
    /// always returns true.
    pub fn execute(&mut self, ctx: &ExecutionContext, sink: &mut dyn NotificationSink) -> bool {
        let Some(actor) = self.actor.as_mut() else {
            warn!(
                pending = self.pending.len(),
                retries = self.retry.len(),
                "Transaction group has no actor, skipping execution"
            );
            return true;
        };

        self.executing = true;

        let mut report = ExecutionReport {
            admitted_retries: self.retry.len(),
            ..Default::default()
        };
        let mut failed = Vec::new();

        self.pending.extend(self.retry.drain(..));

        if !self.pending.is_empty() {
            debug!(
                actor = %actor.id(),
                changes = self.pending.len(),
                retries = report.admitted_retries,
                allow_cheats = ctx.allow_cheats,
                "Batch-handling inventory changes"
            );
        }

        while let Some(mut transaction) = self.pending.pop_front() {
            report.processed += 1;

            match apply(&transaction, actor, ctx) {
                Ok(()) => {
                    transaction.mark_succeeded();
                    report.succeeded += 1;
                    trace!(transaction_id = %transaction.id(), "Transaction applied");
                    sink.notify(&transaction);
                }
                Err(error) => {
                    trace!(transaction_id = %transaction.id(), %error, "Transaction failed validation");
                    match handle_failure(self.policy, &mut self.retry, &mut failed, transaction, error)
                    {
                        RetryDecision::Requeue => report.requeued += 1,
                        RetryDecision::Abandon => report.abandoned += 1,
                    }
                }
            }
        }

        self.executing = false;

        for transaction in &failed {
            sink.notify(transaction);
        }

        self.last_execution = Some(self.clock.now());
        self.last_report = report;

        if report.processed > 0 {
            debug!(
                processed = report.processed,
                succeeded = report.succeeded,
                requeued = report.requeued,
                abandoned = report.abandoned,
                "Inventory transaction cycle complete"
            );
        }

        true
    }
}

/// Counts one failed attempt and either requeues or abandons the transaction.
fn handle_failure(
    policy: RetryPolicy,
    retry: &mut VecDeque<Transaction>,
    failed: &mut Vec<Transaction>,
    mut transaction: Transaction,
    error: TransactionError,
) -> RetryDecision {
    let failures = transaction.record_failure(error);
    let decision = policy.decide(failures);

    match decision {
        RetryDecision::Abandon => {
            transaction.mark_permanently_failed();
            warn!(
                transaction_id = %transaction.id(),
                failures,
                "Transaction failed permanently after retries"
            );
            failed.push(transaction);
        }
        RetryDecision::Requeue => retry.push_back(transaction),
    }

    decision
}

/// Validates and commits both sides of one transaction.
fn apply<A: Actor>(
    transaction: &Transaction,
    actor: &mut A,
    ctx: &ExecutionContext,
) -> Result<(), TransactionError> {
    let enforce = !ctx.allow_cheats && !actor.is_unrestricted();

    if let Some(outbound) = transaction.outbound() {
        let location = outbound.location;
        if enforce {
            if resolve(actor, location.container)?.slot_contains(location.slot, &outbound.item) {
                actor.transient_buffer_mut().add_item(outbound.item.clone());
            } else {
                return Err(TransactionError::ValidationMismatch {
                    side: ChangeSide::Outbound,
                    location: Some(location),
                });
            }
        }
        resolve(actor, location.container)?.set_item(
            location.slot,
            transaction.target().clone(),
            false,
        );
    }

    if let Some(inbound) = transaction.inbound() {
        // Destination must resolve before escrowed content leaves the buffer.
        if let InboundChange::Slot(change) = inbound {
            resolve(actor, change.location.container)?;
        }

        if enforce {
            let buffer = actor.transient_buffer_mut();
            if buffer.contains(inbound.expected()) {
                buffer.remove_item(inbound.expected());
            } else {
                return Err(TransactionError::ValidationMismatch {
                    side: ChangeSide::Inbound,
                    location: inbound.location(),
                });
            }
        }

        match inbound {
            InboundChange::Drop(_) => actor.eject(transaction.target().clone()),
            InboundChange::Slot(change) => resolve(actor, change.location.container)?.set_item(
                change.location.slot,
                transaction.target().clone(),
                false,
            ),
        }
    }

    Ok(())
}

fn resolve<A: Actor>(actor: &mut A, id: ContainerId) -> Result<&mut dyn Container, TransactionError> {
    actor
        .container_mut(id)
        .ok_or(TransactionError::ContainerUnavailable(id))
}
