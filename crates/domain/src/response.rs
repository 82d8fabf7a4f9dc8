//! API response type
//!
//! Contains the raw outcome of one HTTP call: status code, body text, and
//! timing. The suite asserts against this and nothing else.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Raw outcome of one HTTP call against the story service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text. May be empty or not valid JSON.
    pub body: String,
    /// Time between sending the request and reading the full body.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

impl ApiResponse {
    /// Creates a new `ApiResponse` from raw response data.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>, duration: Duration) -> Self {
        Self {
            status,
            body: body.into(),
            duration,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true if the status code indicates a client error (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Returns true if the status code indicates a server error (5xx).
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Attempts to parse the body as JSON.
    #[must_use]
    pub fn body_as_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Returns the first characters of the body for failure messages.
    #[must_use]
    pub fn body_preview(&self) -> String {
        const PREVIEW_CHARS: usize = 100;
        if self.body.chars().count() > PREVIEW_CHARS {
            let preview: String = self.body.chars().take(PREVIEW_CHARS).collect();
            format!("{preview}...")
        } else {
            self.body.clone()
        }
    }

    /// Returns a human-readable duration string (e.g., "124 ms").
    #[must_use]
    pub fn duration_display(&self) -> String {
        let millis = self.duration.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else {
            format!("{:.2} s", self.duration.as_secs_f64())
        }
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_checks() {
        let ok = ApiResponse::new(200, "", Duration::ZERO);
        assert!(ok.is_success());
        assert!(!ok.is_client_error());
        assert!(!ok.is_server_error());

        let created = ApiResponse::new(201, "", Duration::ZERO);
        assert!(created.is_success());

        let bad_request = ApiResponse::new(400, "", Duration::ZERO);
        assert!(bad_request.is_client_error());
        assert!(!bad_request.is_success());

        let broken = ApiResponse::new(500, "", Duration::ZERO);
        assert!(broken.is_server_error());
    }

    #[test]
    fn test_body_as_json() {
        let response = ApiResponse::new(200, r#"{"msg": "ok"}"#, Duration::ZERO);
        assert_eq!(
            response.body_as_json(),
            Some(serde_json::json!({"msg": "ok"}))
        );

        let response = ApiResponse::new(200, "not json", Duration::ZERO);
        assert_eq!(response.body_as_json(), None);

        let response = ApiResponse::new(200, "", Duration::ZERO);
        assert_eq!(response.body_as_json(), None);
    }

    #[test]
    fn test_body_preview_truncates() {
        let response = ApiResponse::new(200, "x".repeat(150), Duration::ZERO);
        let preview = response.body_preview();
        assert_eq!(preview.len(), 103);
        assert!(preview.ends_with("..."));

        let short = ApiResponse::new(200, "short", Duration::ZERO);
        assert_eq!(short.body_preview(), "short");
    }

    #[test]
    fn test_duration_display() {
        let fast = ApiResponse::new(200, "", Duration::from_millis(150));
        assert_eq!(fast.duration_display(), "150 ms");

        let slow = ApiResponse::new(200, "", Duration::from_millis(1500));
        assert_eq!(slow.duration_display(), "1.50 s");
    }
}
