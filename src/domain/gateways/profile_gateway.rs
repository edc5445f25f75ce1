//! Gateway trait for account settings.

use async_trait::async_trait;

use crate::error::AppError;

/// Interface for the authenticated profile endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// Changes the account password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FetchFailed`] carrying the backend's `message`
    /// when the current password is rejected.
    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError>;

    /// Permanently deletes the account and all its data.
    async fn delete_account(&self) -> Result<(), AppError>;
}
