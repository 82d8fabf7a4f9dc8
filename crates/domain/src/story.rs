//! Story payload types.

use serde::Serialize;

/// Payload for story create and edit calls.
///
/// Field names match the service's wire format.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoryDraft {
    /// Story title.
    pub title: String,
    /// Story description.
    pub description: String,
    /// Optional URL; omitted from the body when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl StoryDraft {
    /// Creates a draft without a URL.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: None,
        }
    }

    /// Sets the URL field (builder pattern).
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
