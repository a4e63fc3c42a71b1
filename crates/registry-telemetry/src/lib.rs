//! # Registry Telemetry
//!
//! Structured logging bootstrap for the workspace binaries: an
//! env-filter on top of a compact or JSON fmt layer.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DR_LOG_LEVEL` or `RUST_LOG` | `info` | Log level filter |
//! | `DR_JSON_LOGS` | `false` | Emit JSON-formatted logs |
//! | `DR_SERVICE_NAME` | `domain-registry` | Service name field |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Telemetry initialization failures.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log filter directive did not parse.
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),
}

/// Initializes tracing from a configuration.
///
/// Uses `try_init` under the hood so repeated calls (every test may call
/// this) are harmless: only the first registration wins.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json_logs {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().compact()).try_init()
    };

    // A second init means a subscriber is already installed; fine.
    if result.is_ok() {
        tracing::debug!(
            service = %config.service_name,
            json = config.json_logs,
            "telemetry initialized"
        );
    }
    Ok(())
}

/// Initializes tracing straight from the environment.
pub fn init_from_env() -> Result<(), TelemetryError> {
    init_telemetry(&TelemetryConfig::from_env())
}
