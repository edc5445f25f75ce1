//! Gateway trait for authentication.

use async_trait::async_trait;

use crate::domain::session::{Credentials, RegisterInput, Session};
use crate::error::AppError;

/// Interface for the unauthenticated auth endpoints.
///
/// These two endpoints deviate from the envelope convention: the token
/// arrives at the top level of the response body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FetchFailed`] carrying the backend's `message`
    /// on rejected credentials.
    async fn login(&self, credentials: &Credentials) -> Result<Session, AppError>;

    /// Registers a new account and returns its first session.
    async fn register(&self, input: &RegisterInput) -> Result<Session, AppError>;
}
