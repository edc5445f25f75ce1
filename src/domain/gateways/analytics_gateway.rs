//! Gateway trait for analytics reads.

use async_trait::async_trait;

use crate::domain::filters::FilterSet;
use crate::domain::snapshot::{AnalyticsSnapshot, LinkStats};
use crate::error::AppError;

/// Read interface for the analytics endpoints.
///
/// Implementations decode the backend envelope and return fully normalized
/// domain values; callers never see wire shapes.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpApiGateway`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsGateway: Send + Sync {
    /// Fetches the aggregate analytics view for a filter set.
    ///
    /// Only set filter fields become query parameters; an unconstrained
    /// filter sends none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthenticated`] without a session or on 401.
    /// Returns [`AppError::FetchFailed`] on network failure or non-2xx.
    /// Returns [`AppError::InvalidResponseShape`] on a malformed envelope.
    async fn fetch_overview(&self, filters: &FilterSet) -> Result<AnalyticsSnapshot, AppError>;

    /// Fetches the detail view for one short code, including its nested
    /// analytics block when present.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::fetch_overview`].
    async fn fetch_link_stats(&self, short_code: &str) -> Result<LinkStats, AppError>;
}
