//! # Domain Layer - Inventory Transactions
//!
//! Pure executor logic. Containers, actors and notification transport are
//! reached only through the traits in `ports`.
//!
//! ## Components
//!
//! - `entities`: Transaction, TransactionStatus, TransactionKind
//! - `value_objects`: SlotLocation, SlotChange, InboundChange, ItemChange, ExecutionReport
//! - `retry`: RetryPolicy and the abandon decision
//! - `group`: TransactionGroup executor
//! - `errors`: TransactionError, ConfigError

pub mod entities;
pub mod errors;
pub mod group;
pub mod retry;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use group::*;
pub use retry::*;
pub use value_objects::*;

pub use shared_types::Timestamp;
