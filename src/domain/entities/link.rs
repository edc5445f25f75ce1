//! Link summary entity for the dashboard table and analytics views.

use chrono::{DateTime, Utc};

/// One shortened link owned by the authenticated user.
///
/// `click_count` is the lifetime total reported by the backend, not the
/// count within any filtered window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSummary {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkSummary {
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        short_url: String,
        click_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            short_url,
            click_count,
            created_at,
        }
    }

    /// True once the link has been clicked at least once, distinguishing
    /// active links from created-but-never-clicked ones.
    pub fn is_active(&self) -> bool {
        self.click_count > 0
    }
}

/// Input for editing an existing link.
///
/// `short_code: None` keeps the current code; `Some(code)` renames it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkUpdate {
    pub original_url: String,
    pub short_code: Option<String>,
}
