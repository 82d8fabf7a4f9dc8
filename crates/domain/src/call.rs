//! API call description
//!
//! An [`ApiCall`] is a pure description of one request to the story service:
//! method, path relative to the base URL, optional JSON body, and whether
//! the call carries the session's bearer token. Transports consume these
//! without knowing which scenario produced them.

use serde::Serialize;
use serde_json::Value;

use crate::method::HttpMethod;

/// A single call to the remote service, ready for a transport to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the configured base URL, without a leading slash.
    pub path: String,
    /// Optional JSON request body.
    pub body: Option<Value>,
    /// Whether the bearer token must be attached.
    pub authenticated: bool,
}

impl ApiCall {
    /// Creates an unauthenticated call without a body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            authenticated: false,
        }
    }

    /// Attaches a JSON body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches a JSON body serialized from `payload` (builder pattern).
    ///
    /// The suite's payloads are plain string maps; a payload that refuses to
    /// serialize degrades to a JSON null body.
    #[must_use]
    pub fn with_json<T: Serialize>(self, payload: &T) -> Self {
        self.with_body(serde_json::to_value(payload).unwrap_or(Value::Null))
    }

    /// Marks the call as requiring the bearer token (builder pattern).
    #[must_use]
    pub fn with_auth(mut self) -> Self {
        self.authenticated = true;
        self
    }
}
