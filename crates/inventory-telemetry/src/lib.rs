//! # Inventory Telemetry
//!
//! Installs the global `tracing` subscriber used by every crate in the
//! workspace.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventory_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     init_logging(&TelemetryConfig::from_env()).expect("Failed to init logging");
//!     // Executor debug/warn events are now emitted
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `INV_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `INV_JSON_LOGS` | `false` | JSON formatted output |
//! | `INV_SERVICE_NAME` | `inventory-transactions` | Service name attached to the root span |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, init_test_logging, service_span};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
