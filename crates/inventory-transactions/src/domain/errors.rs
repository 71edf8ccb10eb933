//! Error types for inventory transactions.
//!
//! None of these escape `TransactionGroup::execute()`. They are recorded on
//! the transaction that hit them and drive the retry decision.

use super::value_objects::{ChangeSide, SlotLocation};
use shared_types::ContainerId;
use thiserror::Error;

/// Per-transaction failure outcomes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// Expected content did not match live container state at apply time.
    #[error("{side} validation mismatch{}", fmt_location(.location))]
    ValidationMismatch {
        side: ChangeSide,
        location: Option<SlotLocation>,
    },

    /// The transaction failed validation `failures` times and was abandoned.
    #[error("retries exhausted after {failures} failed attempts")]
    RetryExhausted { failures: u32 },

    /// The actor could not resolve a container referenced by the transaction.
    #[error("{0} is not available to the actor")]
    ContainerUnavailable(ContainerId),
}

impl TransactionError {
    /// Returns true if the error leaves the transaction eligible for a retry.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::RetryExhausted { .. })
    }
}

fn fmt_location(location: &Option<SlotLocation>) -> String {
    match location {
        Some(location) => format!(" at {}", location),
        None => String::new(),
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("allowed_retries must be at least 1")]
    ZeroRetries,

    #[error("tick_interval_ms must be greater than 0")]
    ZeroTickInterval,

    #[error("invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}
