//! Environment-driven suite configuration.
//!
//! The suite targets an already-deployed service, so the base URL is not a
//! default the repository can know; it must come from the environment.
//! Everything else has sensible defaults.

use std::env;

use thiserror::Error;
use url::Url;

/// Environment variable naming the service base URL (required).
pub const BASE_URL_VAR: &str = "SAGA_BASE_URL";
/// Environment variable overriding the per-request timeout in milliseconds.
pub const TIMEOUT_VAR: &str = "SAGA_TIMEOUT_MS";
/// Environment variable overriding the generated username prefix.
pub const USER_PREFIX_VAR: &str = "SAGA_USER_PREFIX";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_USER_PREFIX: &str = "saga";

/// Typed configuration for one suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Base URL of the deployed service, e.g. `https://host/api`.
    pub base_url: Url,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Prefix for the generated account username.
    pub username_prefix: String,
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The required base URL variable is not set.
    #[error("SAGA_BASE_URL is not set")]
    MissingBaseUrl,

    /// The base URL does not parse.
    #[error("invalid base URL '{url}': {message}")]
    InvalidBaseUrl {
        /// The raw value from the environment.
        url: String,
        /// The parser's complaint.
        message: String,
    },

    /// The timeout override is not an integer.
    #[error("invalid timeout '{0}': expected milliseconds as an integer")]
    InvalidTimeout(String),
}

impl SuiteConfig {
    /// Creates a configuration with defaults for everything but the URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            username_prefix: DEFAULT_USER_PREFIX.to_string(),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the base URL is missing or malformed,
    /// or when the timeout override does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup(BASE_URL_VAR).ok_or(ConfigError::MissingBaseUrl)?;
        let base_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw_url,
            message: e.to_string(),
        })?;

        let timeout_ms = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let username_prefix =
            lookup(USER_PREFIX_VAR).unwrap_or_else(|| DEFAULT_USER_PREFIX.to_string());

        Ok(Self {
            base_url,
            timeout_ms,
            username_prefix,
        })
    }
}
