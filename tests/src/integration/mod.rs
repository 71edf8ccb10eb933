//! Cross-crate flows: executor, adapters and telemetry together.

pub mod flows;
