//! Configuration management for the contact form client.
//!
//! Loads and validates configuration from environment variables, reading a
//! `.env` file first if one exists. Every variable is optional.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default submission endpoint.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:3001/mensajes";

/// Default time the confirmation stays visible.
pub const DEFAULT_CONFIRMATION_DISPLAY_MS: u64 = 3000;

/// What to do when a submission does not reach a 2xx response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Any HTTP response acknowledges the message; transport failures are only logged.
    #[default]
    Ignore,

    /// Only 2xx acknowledges the message; every failure is reported to the user.
    Report,
}

/// Configuration for the contact form client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Submission endpoint URL
    pub endpoint_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// How long the confirmation stays shown, in milliseconds (default: 3000)
    pub confirmation_display_ms: u64,

    /// Failure handling (default: Ignore)
    pub failure_policy: FailurePolicy,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_ENDPOINT_URL`: Submission endpoint (default: `http://localhost:3001/mensajes`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `CONFIRMATION_DISPLAY_MS`: Confirmation display time (default: 3000)
    /// - `REPORT_SUBMISSION_FAILURES`: Report failed submissions to the user (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy doesn't print to stdout
        let _ = dotenvy::dotenv();

        let endpoint_url =
            env::var("CONTACT_ENDPOINT_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT_URL.to_string());

        if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_ENDPOINT_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let confirmation_display_ms =
            Self::parse_env_u64("CONFIRMATION_DISPLAY_MS", DEFAULT_CONFIRMATION_DISPLAY_MS)?;

        if confirmation_display_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONFIRMATION_DISPLAY_MS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let failure_policy = if Self::parse_env_bool("REPORT_SUBMISSION_FAILURES", false)? {
            FailurePolicy::Report
        } else {
            FailurePolicy::Ignore
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            endpoint_url,
            request_timeout,
            confirmation_display_ms,
            failure_policy,
            log_level,
        })
    }

    /// Confirmation display time as a Duration.
    pub fn confirmation_display(&self) -> Duration {
        Duration::from_millis(self.confirmation_display_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            request_timeout: 10,
            confirmation_display_ms: DEFAULT_CONFIRMATION_DISPLAY_MS,
            failure_policy: FailurePolicy::Ignore,
            log_level: "error".to_string(),
        }
    }
}
