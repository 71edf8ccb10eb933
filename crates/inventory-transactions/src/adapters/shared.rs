//! Thread-safe handle to a transaction group.
//!
//! Producers on other threads and the tick driver share one
//! `parking_lot::Mutex` per group, so `add_transaction` never interleaves
//! with retry admission or the drain loop.

use crate::config::ExecutionContext;
use crate::domain::Transaction;
use crate::ports::inbound::TransactionGroupApi;
use crate::ports::outbound::NotificationSink;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, lock-protected transaction group.
pub struct SharedTransactionGroup<G> {
    inner: Arc<Mutex<G>>,
}

impl<G> Clone for SharedTransactionGroup<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: TransactionGroupApi> SharedTransactionGroup<G> {
    pub fn new(group: G) -> Self {
        Self {
            inner: Arc::new(Mutex::new(group)),
        }
    }

    pub fn add_transaction(&self, transaction: Transaction) -> bool {
        self.inner.lock().add_transaction(transaction)
    }

    /// Runs one cycle while holding the group lock.
    pub fn execute(&self, ctx: &ExecutionContext, sink: &mut dyn NotificationSink) -> bool {
        self.inner.lock().execute(ctx, sink)
    }

    pub fn pending_len(&self) -> usize {
        self.inner.lock().pending_len()
    }

    pub fn retry_len(&self) -> usize {
        self.inner.lock().retry_len()
    }

    /// Runs `f` with exclusive access to the group.
    pub fn with<R>(&self, f: impl FnOnce(&mut G) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
