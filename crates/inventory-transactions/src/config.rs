//! Configuration for the transaction executor.

use crate::domain::{ConfigError, RetryPolicy, DEFAULT_ALLOWED_RETRIES};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Transaction group configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionGroupConfig {
    /// Failed attempts before a transaction is abandoned.
    pub allowed_retries: u32,
    /// Global override disabling all content validation.
    pub allow_inventory_cheats: bool,
    /// Interval between `execute()` calls made by the tick driver.
    pub tick_interval_ms: u64,
}

impl Default for TransactionGroupConfig {
    fn default() -> Self {
        Self {
            allowed_retries: DEFAULT_ALLOWED_RETRIES,
            allow_inventory_cheats: false,
            tick_interval_ms: 50, // 20 ticks per second
        }
    }
}

impl TransactionGroupConfig {
    /// Creates a minimal config for testing.
    pub fn for_testing() -> Self {
        Self {
            allowed_retries: 3,
            tick_interval_ms: 10,
            ..Default::default()
        }
    }

    /// Reads overrides from the environment, falling back to defaults.
    ///
    /// - `INV_ALLOWED_RETRIES`
    /// - `INV_ALLOW_CHEATS` (`true`/`false`/`1`/`0`)
    /// - `INV_TICK_INTERVAL_MS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            allowed_retries: parse_var("INV_ALLOWED_RETRIES", defaults.allowed_retries)?,
            allow_inventory_cheats: parse_flag("INV_ALLOW_CHEATS", defaults.allow_inventory_cheats)?,
            tick_interval_ms: parse_var("INV_TICK_INTERVAL_MS", defaults.tick_interval_ms)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.allowed_retries)
    }

    pub fn execution_context(&self) -> ExecutionContext {
        ExecutionContext {
            allow_cheats: self.allow_inventory_cheats,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Shared state read by `execute()`, passed in explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Disables validation for every transaction regardless of actor mode.
    pub allow_cheats: bool,
}

impl ExecutionContext {
    pub fn with_cheats() -> Self {
        Self { allow_cheats: true }
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
        Err(_) => Ok(default),
    }
}

fn parse_flag(var: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(var) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidEnv { var, value }),
        },
        Err(_) => Ok(default),
    }
}
