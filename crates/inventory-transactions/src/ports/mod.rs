//! Ports layer for the transaction executor.
//!
//! - Inbound (Driving) ports: API exposed to the tick driver and producers
//! - Outbound (Driven) ports: containers, actor, notification sink, clock

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
