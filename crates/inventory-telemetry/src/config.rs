//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for structured logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to the root span
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error or a directive list)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "inventory-transactions".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// - `INV_SERVICE_NAME`: Service name (default: inventory-transactions)
    /// - `INV_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `INV_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("INV_SERVICE_NAME")
                .unwrap_or_else(|_| "inventory-transactions".to_string()),

            log_level: env::var("INV_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("INV_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Verbose configuration for test runs.
    pub fn for_testing() -> Self {
        Self {
            log_level: "inventory_transactions=trace".to_string(),
            ..Default::default()
        }
    }
}
