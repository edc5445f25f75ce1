//! Authentication service for the login and registration screens.

use std::sync::Arc;

use crate::domain::gateways::AuthGateway;
use crate::domain::session::{self, Credentials, RegisterInput, Session};
use crate::error::AppError;

/// Service exchanging credentials for sessions.
///
/// All input validation happens here, before any network call; the gateway
/// only ever sees well-formed requests.
pub struct AuthService<A: AuthGateway> {
    gateway: Arc<A>,
}

impl<A: AuthGateway> AuthService<A> {
    /// Creates a new authentication service.
    pub fn new(gateway: Arc<A>) -> Self {
        Self { gateway }
    }

    /// Logs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed input, and
    /// [`AppError::FetchFailed`] carrying the backend's message on
    /// rejected credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let credentials = Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        session::check(&credentials, "credentials")?;

        self.gateway.login(&credentials).await
    }

    /// Registers a new account and returns its first session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the input fails the local
    /// rules (name present, username 3-32 chars, valid email, password at
    /// least 6 characters).
    pub async fn register(&self, input: RegisterInput) -> Result<Session, AppError> {
        session::check(&input, "registration details")?;

        self.gateway.register(&input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockAuthGateway;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_success() {
        let mut mock = MockAuthGateway::new();
        mock.expect_login()
            .withf(|c| c.email == "tester@example.com")
            .times(1)
            .returning(|_| Ok(Session::new("tok-1")));

        let service = AuthService::new(Arc::new(mock));
        let session = service.login("tester@example.com", "hunter2").await.unwrap();

        assert_eq!(session.token(), "tok-1");
    }

    #[tokio::test]
    async fn test_login_trims_email() {
        let mut mock = MockAuthGateway::new();
        mock.expect_login()
            .withf(|c| c.email == "tester@example.com")
            .times(1)
            .returning(|_| Ok(Session::new("tok-1")));

        let service = AuthService::new(Arc::new(mock));
        assert!(service.login("  tester@example.com ", "hunter2").await.is_ok());
    }

    #[tokio::test]
    async fn test_login_with_bad_email_never_reaches_the_gateway() {
        let mock = MockAuthGateway::new(); // no expectations

        let service = AuthService::new(Arc::new(mock));
        let err = service.login("not-an-email", "hunter2").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_register_with_short_password_is_rejected() {
        let mock = MockAuthGateway::new();

        let service = AuthService::new(Arc::new(mock));
        let err = service
            .register(RegisterInput {
                name: "Tester".to_string(),
                username: "tester".to_string(),
                email: "tester@example.com".to_string(),
                password: "12345".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_rejected_credentials_surface_the_backend_message() {
        let mut mock = MockAuthGateway::new();
        mock.expect_login()
            .times(1)
            .returning(|_| Err(AppError::fetch_failed("Invalid email or password", json!({}))));

        let service = AuthService::new(Arc::new(mock));
        let err = service.login("tester@example.com", "wrong").await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid email or password");
    }
}
