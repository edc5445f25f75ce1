//! Computed analytics views.
//!
//! A snapshot is an immutable view of analytics data for one filter set. It
//! is built fresh on every load and replaced wholesale, never mutated in
//! place. Aggregates that can be computed from the snapshot's inputs are
//! methods, not stored fields.

use chrono::{DateTime, Utc};

use crate::domain::entities::{ClickEvent, LinkSummary};
use crate::domain::series::{self, ClickPoint};

/// Aggregate analytics view for one filter set.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsSnapshot {
    /// Backend-provided lifetime total for the filtered scope. Taken as a
    /// scalar, not re-derived: the series may cover a different window.
    pub total_clicks: i64,
    /// Daily click series, ascending by date.
    pub daily: Vec<ClickPoint>,
    /// Monthly click series, ascending by month 1-12.
    pub monthly: Vec<ClickPoint>,
    /// Links owned by the user, with lifetime click counts.
    pub links: Vec<LinkSummary>,
    /// Individual click records, when the backend includes them.
    pub clicks: Vec<ClickEvent>,
}

impl AnalyticsSnapshot {
    /// Builds a snapshot, normalizing both series to ascending bucket order.
    pub fn new(
        total_clicks: i64,
        mut daily: Vec<ClickPoint>,
        mut monthly: Vec<ClickPoint>,
        links: Vec<LinkSummary>,
        clicks: Vec<ClickEvent>,
    ) -> Self {
        series::normalize(&mut daily);
        series::normalize(&mut monthly);

        Self {
            total_clicks,
            daily,
            monthly,
            links,
            clicks,
        }
    }

    /// Rounded mean of total clicks over the link count; `0` with no links.
    pub fn average_clicks_per_link(&self) -> i64 {
        if self.links.is_empty() {
            return 0;
        }
        (self.total_clicks as f64 / self.links.len() as f64).round() as i64
    }

    /// Number of links that have been clicked at least once.
    pub fn active_link_count(&self) -> usize {
        self.links.iter().filter(|l| l.is_active()).count()
    }
}

/// Per-link analytics block nested in the single-link detail view.
#[derive(Debug, Clone, Default)]
pub struct LinkAnalytics {
    pub total_clicks: i64,
    pub unique_visitors: i64,
    pub top_countries: Vec<(String, i64)>,
    pub top_devices: Vec<(String, i64)>,
    /// Daily click series, ascending by date.
    pub daily: Vec<ClickPoint>,
}

impl LinkAnalytics {
    /// Rounded mean of clicks over the days present in the series; `0` for
    /// an empty series.
    pub fn average_per_day(&self) -> i64 {
        if self.daily.is_empty() {
            return 0;
        }
        (self.total_clicks as f64 / self.daily.len() as f64).round() as i64
    }
}

/// Detail view for a single shortened link.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: LinkSummary,
    pub updated_at: Option<DateTime<Utc>>,
    pub analytics: Option<LinkAnalytics>,
}
