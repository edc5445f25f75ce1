//! Gateway trait for link management.

use async_trait::async_trait;

use crate::domain::entities::{LinkSummary, LinkUpdate, PageMeta};
use crate::error::AppError;

/// Read/write interface for the link CRUD endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkGateway: Send + Sync {
    /// Fetches one page of the user's links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FetchFailed`] / [`AppError::InvalidResponseShape`]
    /// per the shared taxonomy.
    async fn list_links(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<LinkSummary>, PageMeta), AppError>;

    /// Creates a short link for `original_url`.
    async fn create_link(&self, original_url: &str) -> Result<LinkSummary, AppError>;

    /// Updates a link's target URL and, optionally, its short code.
    async fn update_link(&self, id: i64, update: &LinkUpdate) -> Result<LinkSummary, AppError>;

    /// Deletes a link.
    async fn delete_link(&self, id: i64) -> Result<(), AppError>;
}
