//! Story service transport port.

use std::future::Future;
use std::pin::Pin;

use saga_domain::{ApiCall, ApiResponse};
use thiserror::Error;

/// Trait for transports that execute calls against the story service.
///
/// Implementations receive a pure [`ApiCall`] description plus the session
/// token (when one exists) and return the raw response. They never interpret
/// bodies; assertions live with the scenarios.
pub trait StoryApi: Send + Sync {
    /// Executes one call against the remote service.
    ///
    /// `token` is attached as a bearer credential only when the call is
    /// marked authenticated.
    fn send<'a>(
        &'a self,
        call: &'a ApiCall,
        token: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, ApiClientError>> + Send + 'a>>;
}

/// Transport-level errors.
///
/// These indicate the call never produced a response; an error status code
/// from the service is a normal [`ApiResponse`], not one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiClientError {
    /// The base URL and path did not combine into a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}
