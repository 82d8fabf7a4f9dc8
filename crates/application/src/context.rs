//! Suite context: the state threaded through the ordered scenarios.
//!
//! Built once by the fixture and passed `&mut` through the driver. There is
//! no module or static state anywhere in the suite; this value is the only
//! carrier of the bearer token and the last created story identifier.

/// Mutable state shared by the ordered scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteContext {
    token: String,
    last_story_id: Option<String>,
}

impl SuiteContext {
    /// Creates a context around the token the fixture obtained.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self {
            token,
            last_story_id: None,
        }
    }

    /// The session's bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The identifier of the most recently created story, if any.
    #[must_use]
    pub fn story_id(&self) -> Option<&str> {
        self.last_story_id.as_deref()
    }

    /// Records the identifier returned by a create call.
    pub fn remember_story(&mut self, id: impl Into<String>) {
        self.last_story_id = Some(id.into());
    }

    /// Drops the stored identifier once the story no longer exists.
    pub fn forget_story(&mut self) {
        self.last_story_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_context_lifecycle() {
        let mut context = SuiteContext::new("tok-1".to_string());
        assert_eq!(context.token(), "tok-1");
        assert_eq!(context.story_id(), None);

        context.remember_story("abc-123");
        assert_eq!(context.story_id(), Some("abc-123"));

        context.forget_story();
        assert_eq!(context.story_id(), None);
    }

    #[test]
    fn test_remember_overwrites() {
        let mut context = SuiteContext::new("tok".to_string());
        context.remember_story("first");
        context.remember_story("second");
        assert_eq!(context.story_id(), Some("second"));
    }
}
