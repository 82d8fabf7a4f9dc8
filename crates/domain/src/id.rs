//! ID helpers for unique accounts and fabricated resources.

use uuid::Uuid;

/// Generates a short unique suffix for account names and story titles.
///
/// Uses a v7 UUID so suffixes generated in the same run stay sortable.
#[must_use]
pub fn unique_suffix() -> String {
    let id = Uuid::now_v7().simple().to_string();
    id.chars().take(8).collect()
}

/// Generates a random identifier no resource on the service can have.
///
/// The negative scenarios address resources through these to provoke
/// not-found-style failures.
#[must_use]
pub fn fabricated_story_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_suffix_format() {
        let suffix = unique_suffix();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_unique_suffix_uniqueness() {
        assert_ne!(unique_suffix(), unique_suffix());
    }

    #[test]
    fn test_fabricated_story_id_format() {
        let id = fabricated_story_id();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_fabricated_story_id_uniqueness() {
        assert_ne!(fabricated_story_id(), fabricated_story_id());
    }
}
