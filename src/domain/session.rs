//! Explicit session context.
//!
//! The bearer token lives in a [`Session`] value handed to gateway
//! constructors, never read from ambient storage at call sites. Only the
//! CLI boundary exchanges it with the on-disk store.

use serde_json::json;
use std::fmt;
use validator::Validate;

use crate::error::AppError;

/// An authenticated session holding the bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Session {
    // Token never appears in logs or debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"***").finish()
    }
}

/// Login credentials, validated before any network call.
#[derive(Debug, Clone, Validate)]
pub struct Credentials {
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Registration input, validated before any network call.
#[derive(Debug, Clone, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Runs `validator` checks and maps failures onto the error taxonomy.
pub fn check<T: Validate>(input: &T, what: &str) -> Result<(), AppError> {
    input.validate().map_err(|e| {
        AppError::bad_request(
            format!("Invalid {what}"),
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_the_token() {
        let session = Session::new("super-secret-token");
        let debug = format!("{session:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_short_password_is_rejected() {
        let input = RegisterInput {
            name: "Tester".to_string(),
            username: "tester".to_string(),
            email: "tester@example.com".to_string(),
            password: "12345".to_string(),
        };

        let err = check(&input, "registration details").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let creds = Credentials {
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(check(&creds, "credentials").is_err());
    }

    #[test]
    fn test_valid_registration_passes() {
        let input = RegisterInput {
            name: "Tester".to_string(),
            username: "tester".to_string(),
            email: "tester@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(check(&input, "registration details").is_ok());
    }
}
