//! Call builders for the story service routes.
//!
//! One constructor per remote operation. Paths are relative to the
//! configured base URL; everything after authentication is marked as
//! carrying the bearer token.

use saga_domain::{ApiCall, Credentials, HttpMethod, Registration, StoryDraft};
use serde_json::json;

/// `POST /User/Create`
#[must_use]
pub fn register(form: &Registration) -> ApiCall {
    ApiCall::new(HttpMethod::Post, "User/Create").with_json(form)
}

/// `POST /User/Authentication`
#[must_use]
pub fn authenticate(credentials: &Credentials) -> ApiCall {
    ApiCall::new(HttpMethod::Post, "User/Authentication").with_json(credentials)
}

/// `POST /Story/Create`
#[must_use]
pub fn create_story(draft: &StoryDraft) -> ApiCall {
    ApiCall::new(HttpMethod::Post, "Story/Create")
        .with_json(draft)
        .with_auth()
}

/// `POST /Story/Create` with an empty payload, for the malformed-request
/// scenario.
#[must_use]
pub fn create_story_empty() -> ApiCall {
    ApiCall::new(HttpMethod::Post, "Story/Create")
        .with_body(json!({}))
        .with_auth()
}

/// `PUT /Story/Edit/{id}`
#[must_use]
pub fn edit_story(id: &str, draft: &StoryDraft) -> ApiCall {
    ApiCall::new(HttpMethod::Put, format!("Story/Edit/{id}"))
        .with_json(draft)
        .with_auth()
}

/// `GET /Story/All`
#[must_use]
pub fn list_stories() -> ApiCall {
    ApiCall::new(HttpMethod::Get, "Story/All").with_auth()
}

/// `DELETE /Story/Delete/{id}`
#[must_use]
pub fn delete_story(id: &str) -> ApiCall {
    ApiCall::new(HttpMethod::Delete, format!("Story/Delete/{id}")).with_auth()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_is_unauthenticated() {
        let call = register(&Registration::generate("qa"));
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.path, "User/Create");
        assert!(!call.authenticated);
        assert!(call.body.is_some());
    }

    #[test]
    fn test_authenticate_is_unauthenticated() {
        let credentials = Registration::generate("qa").credentials();
        let call = authenticate(&credentials);
        assert_eq!(call.path, "User/Authentication");
        assert!(!call.authenticated);
    }

    #[test]
    fn test_story_calls_carry_token() {
        let draft = StoryDraft::new("T", "D");
        assert!(create_story(&draft).authenticated);
        assert!(create_story_empty().authenticated);
        assert!(edit_story("abc", &draft).authenticated);
        assert!(list_stories().authenticated);
        assert!(delete_story("abc").authenticated);
    }

    #[test]
    fn test_identifier_lands_in_path() {
        let draft = StoryDraft::new("T", "D");
        assert_eq!(edit_story("abc-123", &draft).path, "Story/Edit/abc-123");
        assert_eq!(delete_story("abc-123").path, "Story/Delete/abc-123");
    }

    #[test]
    fn test_empty_create_sends_empty_object() {
        let call = create_story_empty();
        assert_eq!(call.body, Some(json!({})));
    }

    #[test]
    fn test_list_has_no_body() {
        assert_eq!(list_stories().body, None);
    }
}
