//! Tolerant response envelope extraction.
//!
//! The service's JSON envelopes are loosely typed: a message here, a story
//! identifier there, an access token on login. Extraction never faults; a
//! body that is empty, malformed, or missing a field simply yields `None`
//! for that field, so assertions can treat "no message" as its own
//! condition instead of crashing the run.

use serde_json::Value;

/// Named fields extracted opportunistically from a response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// Human-readable outcome message, when the body carried one.
    pub message: Option<String>,
    /// Identifier of the story the call touched, when the body carried one.
    pub story_id: Option<String>,
    /// Access token, when the body is an authentication response.
    pub access_token: Option<String>,
}

impl ResponseEnvelope {
    /// Extracts whatever named fields the body carries.
    ///
    /// An empty or non-JSON body yields an empty envelope.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        serde_json::from_str::<Value>(body).map_or_else(|_| Self::default(), |json| Self::from_json(&json))
    }

    fn from_json(json: &Value) -> Self {
        Self {
            message: first_string(json, &["msg", "message"]),
            story_id: first_string(json, &["storyId", "id"]),
            access_token: first_string(json, &["accessToken", "token"]),
        }
    }

    /// Returns true when no field could be extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.story_id.is_none() && self.access_token.is_none()
    }
}

/// Returns the first non-empty string value found under any of `keys`.
fn first_string(json: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        json.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
    })
}
