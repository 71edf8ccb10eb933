//! Adapters layer for the transaction executor.
//!
//! Concrete containers, notification sinks, and the drivers that invoke the
//! executor once per tick.

pub mod container;
pub mod notifier;
pub mod shared;
pub mod tick_driver;

pub use container::InMemoryContainer;
pub use notifier::{ChannelNotifier, LoggingNotifier, OutcomeEnvelope, RecordingNotifier};
pub use shared::SharedTransactionGroup;
pub use tick_driver::TickDriver;
