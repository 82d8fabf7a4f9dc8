//! Account payload types.
//!
//! The fixture registers a fresh account per run, so usernames carry a
//! unique suffix and never collide with earlier runs.

use serde::Serialize;

use crate::id::unique_suffix;

/// Payload for `POST /User/Create`.
///
/// Field names match the service's wire format.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Unique account name.
    pub user_name: String,
    /// First name.
    pub first_name: String,
    /// Middle name.
    pub mid_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Password repeated, as the service requires.
    pub re_password: String,
}

impl Registration {
    /// Generates a registration with a unique username under `prefix`.
    #[must_use]
    pub fn generate(prefix: &str) -> Self {
        let suffix = unique_suffix();
        let user_name = format!("{prefix}_{suffix}");
        let password = format!("P@ss_{suffix}");
        Self {
            email: format!("{user_name}@example.com"),
            first_name: "Suite".to_string(),
            mid_name: "QA".to_string(),
            last_name: "Account".to_string(),
            re_password: password.clone(),
            user_name,
            password,
        }
    }

    /// Returns the credentials this registration authenticates with.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            user_name: self.user_name.clone(),
            password: self.password.clone(),
        }
    }
}

/// Payload for `POST /User/Authentication`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Account name.
    pub user_name: String,
    /// Account password.
    pub password: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_is_unique() {
        let first = Registration::generate("qa");
        let second = Registration::generate("qa");
        assert_ne!(first.user_name, second.user_name);
    }

    #[test]
    fn test_generate_applies_prefix() {
        let registration = Registration::generate("saga");
        assert!(registration.user_name.starts_with("saga_"));
        assert!(registration.email.starts_with(&registration.user_name));
        assert_eq!(registration.password, registration.re_password);
    }

    #[test]
    fn test_credentials_match_registration() {
        let registration = Registration::generate("qa");
        let credentials = registration.credentials();
        assert_eq!(credentials.user_name, registration.user_name);
        assert_eq!(credentials.password, registration.password);
    }

    #[test]
    fn test_wire_field_names() {
        let registration = Registration::generate("qa");
        let value = serde_json::to_value(&registration).unwrap();
        for key in [
            "userName",
            "firstName",
            "midName",
            "lastName",
            "email",
            "password",
            "rePassword",
        ] {
            assert!(value.get(key).is_some(), "missing wire field {key}");
        }
    }
}
