//! Wire types exchanged with the authentication service.
//!
//! - `Credentials`: caller-supplied username/password, serialize-only
//! - `AuthCheck`, `AuthUser`: the session-check response payload

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum username length accepted by the service
const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum username length accepted by the service
const USERNAME_MAX_LENGTH: usize = 30;

/// Minimum password length accepted by the service
const PASSWORD_MIN_LENGTH: usize = 8;

/// Login/registration credentials. Transient: passed through to the
/// remote call and discarded, never persisted or deserialized.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Username and password are required")]
    Missing,

    #[error("Username length must be between {USERNAME_MIN_LENGTH} and {USERNAME_MAX_LENGTH}")]
    UsernameLength,

    #[error("Username has illegal characters")]
    UsernameCharset,

    #[error("Password must be at least {PASSWORD_MIN_LENGTH} characters")]
    PasswordTooShort,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check the credentials against the service's registration rules so
    /// a UI can reject bad input before spending a round trip. The rules
    /// mirror the server: a leading ASCII letter followed by letters,
    /// digits, or hyphens; 3-30 characters; password of at least 8.
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(CredentialsError::Missing);
        }
        if self.username.len() < USERNAME_MIN_LENGTH || self.username.len() > USERNAME_MAX_LENGTH {
            return Err(CredentialsError::UsernameLength);
        }
        if !Self::is_valid_username(&self.username) {
            return Err(CredentialsError::UsernameCharset);
        }
        if self.password.len() < PASSWORD_MIN_LENGTH {
            return Err(CredentialsError::PasswordTooShort);
        }
        Ok(())
    }

    fn is_valid_username(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
    }
}

// Keep passwords out of logs and error chains
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Session-check response. `authenticated` has no default on purpose:
/// a payload missing it is malformed and must fail decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthCheck {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_typical_usernames() {
        assert!(Credentials::new("alice", "hunter2hunter2").validate().is_ok());
        assert!(Credentials::new("bob-the-2nd", "password").validate().is_ok());
        assert!(Credentials::new("Zoe", "12345678").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        // empty fields
        assert_eq!(
            Credentials::new("", "password").validate(),
            Err(CredentialsError::Missing)
        );
        assert_eq!(
            Credentials::new("alice", "").validate(),
            Err(CredentialsError::Missing)
        );
        // length bounds
        assert_eq!(
            Credentials::new("ab", "password").validate(),
            Err(CredentialsError::UsernameLength)
        );
        assert_eq!(
            Credentials::new("a".repeat(31), "password").validate(),
            Err(CredentialsError::UsernameLength)
        );
        // charset: must start with a letter, no spaces or symbols
        assert_eq!(
            Credentials::new("1alice", "password").validate(),
            Err(CredentialsError::UsernameCharset)
        );
        assert_eq!(
            Credentials::new("ali ce", "password").validate(),
            Err(CredentialsError::UsernameCharset)
        );
        assert_eq!(
            Credentials::new("-alice", "password").validate(),
            Err(CredentialsError::UsernameCharset)
        );
        // short password
        assert_eq!(
            Credentials::new("alice", "hunter2").validate(),
            Err(CredentialsError::PasswordTooShort)
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("alice", "hunter2hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_serialize_shape() {
        let creds = Credentials::new("alice", "x");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({"username": "alice", "password": "x"}));
    }

    #[test]
    fn test_auth_check_parses_authenticated_payload() {
        let check: AuthCheck = serde_json::from_str(
            r#"{"authenticated": true, "user": {"id": "42", "username": "alice"}}"#,
        )
        .unwrap();
        assert!(check.authenticated);
        assert_eq!(check.user.unwrap().username, "alice");
    }

    #[test]
    fn test_auth_check_parses_anonymous_payload() {
        let check: AuthCheck = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
        assert!(!check.authenticated);
        assert!(check.user.is_none());
    }

    #[test]
    fn test_auth_check_rejects_malformed_payload() {
        // missing `authenticated` is a hard decode failure, not a default
        assert!(serde_json::from_str::<AuthCheck>(r#"{"user": {"username": "alice"}}"#).is_err());
        assert!(serde_json::from_str::<AuthCheck>("not json").is_err());
    }
}
