//! Account settings service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::gateways::ProfileGateway;
use crate::error::AppError;

/// Service for the profile screen: password changes and account deletion.
pub struct ProfileService<P: ProfileGateway> {
    gateway: Arc<P>,
}

impl<P: ProfileGateway> ProfileService<P> {
    /// Creates a new profile service.
    pub fn new(gateway: Arc<P>) -> Self {
        Self { gateway }
    }

    /// Changes the account password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when either field is empty or the
    /// new password is shorter than 6 characters. Confirmation prompting is
    /// the CLI's job; by the time input reaches here it is final.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(AppError::bad_request(
                "Both the current and the new password are required",
                json!({}),
            ));
        }
        if new_password.len() < 6 {
            return Err(AppError::bad_request(
                "New password must be at least 6 characters",
                json!({ "length": new_password.len() }),
            ));
        }

        self.gateway
            .change_password(current_password, new_password)
            .await
    }

    /// Permanently deletes the account and everything attached to it.
    pub async fn delete_account(&self) -> Result<(), AppError> {
        self.gateway.delete_account().await
    }
}
