//! Application error types

use thiserror::Error;

use crate::ports::ApiClientError;

/// Errors that abort the whole run before the first scenario.
///
/// Per-scenario check failures are not errors; they land in the report as
/// failed outcomes and never bubble up through this type.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Account registration or authentication did not yield a usable token.
    #[error("fixture setup failed: {0}")]
    Setup(String),

    /// The transport failed before any scenario could run.
    #[error("HTTP client error: {0}")]
    Client(#[from] ApiClientError),
}

/// Result type alias for suite operations.
pub type SuiteResult<T> = Result<T, SuiteError>;
