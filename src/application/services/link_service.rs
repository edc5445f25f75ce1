//! Link management service for the dashboard table.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::json;

use crate::domain::entities::{LinkSummary, LinkUpdate, PageMeta};
use crate::domain::gateways::LinkGateway;
use crate::error::AppError;

/// Custom short codes: URL-safe, 3-32 characters.
static SHORT_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{3,32}$").expect("short code pattern is valid")
});

/// Service for listing, creating, editing, and deleting short links.
pub struct LinkService<L: LinkGateway> {
    gateway: Arc<L>,
}

impl<L: LinkGateway> LinkService<L> {
    /// Creates a new link service.
    pub fn new(gateway: Arc<L>) -> Self {
        Self { gateway }
    }

    /// Fetches one page of the user's links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a zero page number or an
    /// out-of-range page size (1-100).
    pub async fn list(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<LinkSummary>, PageMeta), AppError> {
        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }
        if !(1..=100).contains(&per_page) {
            return Err(AppError::bad_request(
                "Page size must be between 1 and 100",
                json!({ "per_page": per_page }),
            ));
        }

        self.gateway.list_links(page, per_page).await
    }

    /// Shortens a URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] unless the input parses as an
    /// http(s) URL.
    pub async fn shorten(&self, original_url: &str) -> Result<LinkSummary, AppError> {
        let normalized = validate_target_url(original_url)?;
        self.gateway.create_link(&normalized).await
    }

    /// Updates a link's target URL and, optionally, its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a bad URL or a short code
    /// outside `[A-Za-z0-9_-]{3,32}`.
    pub async fn update(
        &self,
        id: i64,
        original_url: &str,
        short_code: Option<&str>,
    ) -> Result<LinkSummary, AppError> {
        let normalized = validate_target_url(original_url)?;

        if let Some(code) = short_code
            && !SHORT_CODE_RE.is_match(code)
        {
            return Err(AppError::bad_request(
                "Short code must be 3-32 characters of letters, digits, '-' or '_'",
                json!({ "short_code": code }),
            ));
        }

        let update = LinkUpdate {
            original_url: normalized,
            short_code: short_code.map(str::to_string),
        };
        self.gateway.update_link(id, &update).await
    }

    /// Deletes a link.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.gateway.delete_link(id).await
    }
}

/// Parses and lightly normalizes a target URL, requiring http(s).
fn validate_target_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();
    let parsed = url::Url::parse(trimmed).map_err(|e| {
        AppError::bad_request(
            "Invalid URL format",
            json!({ "url": trimmed, "reason": e.to_string() }),
        )
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::bad_request(
            "Only http and https URLs can be shortened",
            json!({ "scheme": parsed.scheme() }),
        ));
    }

    Ok(parsed.to_string())
}
