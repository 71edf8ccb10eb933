//! Retry policy for failed transactions.
//!
//! There is no backoff: a requeued transaction is eligible again on the very
//! next `execute()` call.

use serde::{Deserialize, Serialize};

/// Failed attempts allowed before a transaction is abandoned.
pub const DEFAULT_ALLOWED_RETRIES: u32 = 5;

/// Returns true once `failures` has reached the configured bound.
pub fn should_abandon(failures: u32, allowed_retries: u32) -> bool {
    failures >= allowed_retries
}

/// What to do with a transaction that just failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    /// Keep it pending in the retry queue.
    Requeue,
    /// Mark it permanently failed.
    Abandon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub allowed_retries: u32,
}

impl RetryPolicy {
    pub fn new(allowed_retries: u32) -> Self {
        Self { allowed_retries }
    }

    pub fn should_abandon(&self, failures: u32) -> bool {
        should_abandon(failures, self.allowed_retries)
    }

    pub fn decide(&self, failures: u32) -> RetryDecision {
        if self.should_abandon(failures) {
            RetryDecision::Abandon
        } else {
            RetryDecision::Requeue
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_RETRIES)
    }
}
