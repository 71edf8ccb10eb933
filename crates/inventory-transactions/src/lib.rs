//! # Inventory Transactions
//!
//! Per-actor commit layer reconciling speculative client-side inventory edits
//! with server-authoritative container state.
//!
//! ## Purpose
//!
//! Producers queue proposed slot changes on the actor's `TransactionGroup`
//! between ticks. Once per tick the group validates each change against live
//! container state, applies it, and either reports it or requeues it for the
//! next tick. A change that keeps failing is abandoned after a bounded number
//! of attempts and the actor is told to resynchronize the affected slots.
//!
//! ## Transaction Lifecycle
//!
//! ```text
//! add_transaction ──→ [pending queue] ──execute──→ apply ──ok──→ Succeeded (notify inline)
//!                           ↑                        │
//!                           │                     mismatch
//!                           │                        ↓
//!                    [retry queue] ←── failures < allowed_retries
//!                                                    │
//!                                 failures >= allowed_retries ──→ PermanentlyFailed
//!                                                                 (notify after drain)
//! ```
//!
//! | Guarantee | Enforcement |
//! |-----------|-------------|
//! | Exactly-once apply | Succeeded transactions are dropped after notification |
//! | Fresh before retried | Retries appended behind the pending queue at cycle start |
//! | One failure per attempt | `handle_failure()` is the only failure counter |
//! | Escrow | Outbound content moves into the actor's transient buffer |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - InMemoryContainer, notifiers, shared group, ticks  │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - TransactionGroupApi                        │
//! │  ports/outbound.rs - Actor, Container, NotificationSink, clock  │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/entities.rs      - Transaction, TransactionStatus       │
//! │  domain/group.rs         - TransactionGroup executor            │
//! │  domain/retry.rs         - RetryPolicy                          │
//! │  domain/value_objects.rs - SlotChange, ItemChange, reports      │
//! │  domain/errors.rs        - TransactionError                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use config::{ExecutionContext, TransactionGroupConfig};
pub use domain::*;
pub use ports::*;
