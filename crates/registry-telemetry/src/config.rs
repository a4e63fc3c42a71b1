//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to log lines.
    pub service_name: String,
    /// Log level filter (an `EnvFilter` directive).
    pub log_level: String,
    /// Whether to emit JSON-formatted logs.
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "domain-registry".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Builds configuration from the environment, falling back to
    /// defaults.
    ///
    /// `RUST_LOG` wins over `DR_LOG_LEVEL` when both are set.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_name: env::var("DR_SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("DR_LOG_LEVEL"))
                .unwrap_or(defaults.log_level),
            json_logs: env::var("DR_JSON_LOGS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.json_logs),
        }
    }
}
