//! Notification sink adapters.
//!
//! The executor reports each transaction exactly once: inline on success,
//! after the drain loop on permanent failure. These adapters turn that call
//! into a log line, a transport event, or an in-memory record.

use crate::domain::{Transaction, TransactionId, TransactionOutcome, TransactionStatus};
use crate::ports::outbound::NotificationSink;
use shared_types::ActorId;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Emits one structured `tracing` event per outcome.
#[derive(Debug, Clone, Default)]
pub struct LoggingNotifier;

impl NotificationSink for LoggingNotifier {
    fn notify(&mut self, transaction: &Transaction) {
        match transaction.status() {
            TransactionStatus::Succeeded => debug!(
                transaction_id = %transaction.id(),
                kind = ?transaction.kind(),
                "Inventory transaction committed"
            ),
            TransactionStatus::PermanentlyFailed => info!(
                transaction_id = %transaction.id(),
                failures = transaction.failures(),
                refresh = transaction.touched_slots().len(),
                "Inventory transaction rejected, resynchronizing slots"
            ),
            TransactionStatus::Pending => warn!(
                transaction_id = %transaction.id(),
                "Notified for a transaction that is still pending"
            ),
        }
    }
}

/// Outcome addressed to one actor's connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeEnvelope {
    pub actor: ActorId,
    pub outcome: TransactionOutcome,
}

/// Forwards outcomes to the transport layer over an unbounded channel.
///
/// Sending never blocks the tick. If the receiver is gone the outcome is
/// dropped with a warning.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    actor: ActorId,
    sender: mpsc::UnboundedSender<OutcomeEnvelope>,
}

impl ChannelNotifier {
    pub fn new(actor: ActorId, sender: mpsc::UnboundedSender<OutcomeEnvelope>) -> Self {
        Self { actor, sender }
    }

    /// Creates a notifier and the receiving end for the transport task.
    pub fn channel(actor: ActorId) -> (Self, mpsc::UnboundedReceiver<OutcomeEnvelope>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(actor, sender), receiver)
    }
}

impl NotificationSink for ChannelNotifier {
    fn notify(&mut self, transaction: &Transaction) {
        let envelope = OutcomeEnvelope {
            actor: self.actor,
            outcome: TransactionOutcome::from(transaction),
        };
        if self.sender.send(envelope).is_err() {
            warn!(
                actor = %self.actor,
                transaction_id = %transaction.id(),
                "Outcome receiver closed, notification dropped"
            );
        }
    }
}

/// Collects outcomes in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    outcomes: Vec<TransactionOutcome>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[TransactionOutcome] {
        &self.outcomes
    }

    /// Notified transaction ids, in notification order.
    pub fn ids(&self) -> Vec<TransactionId> {
        self.outcomes.iter().map(|o| o.transaction_id).collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn clear(&mut self) {
        self.outcomes.clear();
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&mut self, transaction: &Transaction) {
        self.outcomes.push(TransactionOutcome::from(transaction));
    }
}
