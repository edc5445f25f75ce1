//! Wire DTOs for the shortener API.
//!
//! The backend mixes conventions: the analytics payload is camelCase while
//! the link records inside it are snake_case, month numbers arrive as
//! strings, and pagination counters may be stringly typed. These DTOs absorb
//! all of that; domain types never see wire shapes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::domain::entities::{ClickEvent, LinkSummary, PageMeta};
use crate::domain::series::{Bucket, ClickPoint};
use crate::domain::snapshot::{AnalyticsSnapshot, LinkAnalytics, LinkStats};
use crate::error::AppError;

/// The `{status, data|message}` wrapper used by every data endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwraps the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidResponseShape`] when `status` is falsy or
    /// `data` is absent; the backend's `message` becomes the user-facing
    /// text when present.
    pub fn into_data(self) -> Result<T, AppError> {
        if !self.status {
            return Err(AppError::invalid_shape(
                self.message
                    .unwrap_or_else(|| "Backend reported failure".to_string()),
                json!({ "status": false }),
            ));
        }
        self.data.ok_or_else(|| {
            AppError::invalid_shape(
                "Response envelope is missing 'data'",
                json!({ "status": true }),
            )
        })
    }
}

/// Minimal acknowledgement body for write endpoints.
///
/// Some endpoints answer with an envelope carrying no `data`; others with an
/// empty body. Both count as success as long as `status` is not `false`.
#[derive(Debug, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body attached to non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Auth responses carry the token at the top level, outside the envelope.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
}

// ── Request bodies ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ShortenRequest<'a> {
    pub original_url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateLinkRequest<'a> {
    pub original_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_code: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

// ── Analytics payload ──────────────────────────────────────────────────────

/// `GET /api/analytics` payload.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsPayload {
    #[serde(rename = "totalClicks", default)]
    pub total_clicks: i64,
    #[serde(rename = "dailyClicks", default)]
    pub daily_clicks: Vec<DailyPointPayload>,
    #[serde(rename = "monthlyClicks", default)]
    pub monthly_clicks: Vec<MonthlyPointPayload>,
    #[serde(rename = "urlStats", default)]
    pub url_stats: Vec<UrlStatPayload>,
    #[serde(rename = "clickDetails", default)]
    pub click_details: Vec<ClickDetailPayload>,
}

impl AnalyticsPayload {
    /// Converts the wire payload into a normalized snapshot.
    pub fn into_snapshot(self) -> AnalyticsSnapshot {
        let daily = self
            .daily_clicks
            .into_iter()
            .map(|p| ClickPoint::new(Bucket::Day(p.date), p.clicks))
            .collect();
        let monthly = self
            .monthly_clicks
            .into_iter()
            .map(|p| ClickPoint::new(Bucket::Month(p.month), p.clicks))
            .collect();
        let links = self.url_stats.into_iter().map(LinkSummary::from).collect();
        let clicks = self
            .click_details
            .into_iter()
            .map(ClickEvent::from)
            .collect();

        AnalyticsSnapshot::new(self.total_clicks, daily, monthly, links, clicks)
    }
}

/// One daily bucket; the backend keys it as `date` or `time`.
#[derive(Debug, Deserialize)]
pub struct DailyPointPayload {
    #[serde(alias = "time", with = "flexible_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub clicks: i64,
}

/// One monthly bucket; the month number arrives as `"1"`..`"12"`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct MonthlyPointPayload {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub month: u32,
    #[serde(default)]
    pub clicks: i64,
}

/// A link record as the analytics and link endpoints serialize it.
#[derive(Debug, Deserialize)]
pub struct UrlStatPayload {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
    #[serde(default)]
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlStatPayload> for LinkSummary {
    fn from(p: UrlStatPayload) -> Self {
        LinkSummary::new(
            p.id,
            p.short_code,
            p.original_url,
            p.short_url,
            p.click_count,
            p.created_at,
        )
    }
}

/// One click record from `clickDetails`.
#[derive(Debug, Deserialize)]
pub struct ClickDetailPayload {
    pub id: i64,
    pub url_id: i64,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub referer: Option<String>,
    pub clicked_at: DateTime<Utc>,
}

impl From<ClickDetailPayload> for ClickEvent {
    fn from(p: ClickDetailPayload) -> Self {
        ClickEvent::new(
            p.id,
            p.url_id,
            p.ip_address,
            p.user_agent,
            p.referer,
            p.clicked_at,
        )
    }
}

// ── Link list payload ──────────────────────────────────────────────────────

/// `GET /api/urls` payload.
#[derive(Debug, Deserialize)]
pub struct UrlListPayload {
    #[serde(default)]
    pub urls: Vec<UrlStatPayload>,
    pub pagination: PaginationPayload,
}

/// Pagination block; counters tolerate stringly numbers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationPayload {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub current_page: u32,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub per_page: u32,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub total: i64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub total_pages: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
}

impl From<PaginationPayload> for PageMeta {
    fn from(p: PaginationPayload) -> Self {
        PageMeta {
            current_page: p.current_page,
            per_page: p.per_page,
            total: p.total,
            total_pages: p.total_pages,
            has_next: p.has_next,
            has_prev: p.has_prev,
        }
    }
}

// ── Single-link stats payload ──────────────────────────────────────────────

/// `GET /api/stats/:code` payload.
#[derive(Debug, Deserialize)]
pub struct LinkStatsPayload {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
    #[serde(default)]
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub analytics: Option<LinkAnalyticsPayload>,
}

impl From<LinkStatsPayload> for LinkStats {
    fn from(p: LinkStatsPayload) -> Self {
        let link = LinkSummary::new(
            p.id,
            p.short_code,
            p.original_url,
            p.short_url,
            p.click_count,
            p.created_at,
        );
        LinkStats {
            link,
            updated_at: p.updated_at,
            analytics: p.analytics.map(LinkAnalytics::from),
        }
    }
}

/// Nested per-link analytics block.
#[derive(Debug, Default, Deserialize)]
pub struct LinkAnalyticsPayload {
    #[serde(default)]
    pub total_clicks: i64,
    #[serde(default)]
    pub unique_visitors: i64,
    #[serde(default)]
    pub top_countries: Vec<CountryCountPayload>,
    #[serde(default)]
    pub top_devices: Vec<DeviceCountPayload>,
    #[serde(default)]
    pub daily_clicks: Vec<DailyPointPayload>,
}

#[derive(Debug, Deserialize)]
pub struct CountryCountPayload {
    pub country: String,
    #[serde(default)]
    pub count: i64,
}

#[derive(Debug, Deserialize)]
pub struct DeviceCountPayload {
    pub device: String,
    #[serde(default)]
    pub count: i64,
}

impl From<LinkAnalyticsPayload> for LinkAnalytics {
    fn from(p: LinkAnalyticsPayload) -> Self {
        let mut daily: Vec<ClickPoint> = p
            .daily_clicks
            .into_iter()
            .map(|d| ClickPoint::new(Bucket::Day(d.date), d.clicks))
            .collect();
        crate::domain::series::normalize(&mut daily);

        LinkAnalytics {
            total_clicks: p.total_clicks,
            unique_visitors: p.unique_visitors,
            top_countries: p
                .top_countries
                .into_iter()
                .map(|c| (c.country, c.count))
                .collect(),
            top_devices: p
                .top_devices
                .into_iter()
                .map(|d| (d.device, d.count))
                .collect(),
            daily,
        }
    }
}

/// Serde helper: accepts a plain `YYYY-MM-DD` date or a full RFC3339
/// timestamp, which some series endpoints emit interchangeably.
mod flexible_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.date_naive())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::Bucket;

    #[test]
    fn test_envelope_with_falsy_status_is_invalid_shape() {
        let envelope: Envelope<AnalyticsPayload> =
            serde_json::from_str(r#"{"status": false, "message": "nope"}"#).unwrap();

        let err = envelope.into_data().unwrap_err();
        assert!(matches!(err, AppError::InvalidResponseShape { .. }));
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn test_envelope_missing_data_is_invalid_shape() {
        let envelope: Envelope<AnalyticsPayload> =
            serde_json::from_str(r#"{"status": true}"#).unwrap();

        let err = envelope.into_data().unwrap_err();
        assert!(matches!(err, AppError::InvalidResponseShape { .. }));
    }

    #[test]
    fn test_analytics_payload_decodes_mixed_conventions() {
        let json = r#"{
            "totalClicks": 42,
            "dailyClicks": [
                {"date": "2024-01-02", "clicks": 3},
                {"time": "2024-01-01T08:30:00Z", "clicks": 5}
            ],
            "monthlyClicks": [
                {"month": "11", "clicks": 9},
                {"month": "2", "clicks": 1}
            ],
            "urlStats": [{
                "id": 1,
                "short_code": "abc123",
                "original_url": "https://example.com",
                "short_url": "https://sho.rt/abc123",
                "click_count": 42,
                "created_at": "2024-01-01T00:00:00Z"
            }],
            "clickDetails": [{
                "id": 7,
                "url_id": 1,
                "ip_address": "10.0.0.1",
                "user_agent": "Mozilla/5.0",
                "referer": null,
                "clicked_at": "2024-01-02T10:00:00Z"
            }]
        }"#;

        let payload: AnalyticsPayload = serde_json::from_str(json).unwrap();
        let snapshot = payload.into_snapshot();

        assert_eq!(snapshot.total_clicks, 42);
        // daily sorted ascending even though the wire order was reversed
        assert_eq!(
            snapshot.daily[0].bucket,
            Bucket::Day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        // stringly months decode and sort ascending
        assert_eq!(snapshot.monthly[0].bucket, Bucket::Month(2));
        assert_eq!(snapshot.monthly[1].bucket, Bucket::Month(11));
        assert_eq!(snapshot.links[0].short_code, "abc123");
        assert_eq!(snapshot.clicks[0].url_id, 1);
    }

    #[test]
    fn test_analytics_payload_with_empty_series_is_valid() {
        let payload: AnalyticsPayload =
            serde_json::from_str(r#"{"totalClicks": 0, "dailyClicks": [], "urlStats": []}"#)
                .unwrap();
        let snapshot = payload.into_snapshot();

        assert!(snapshot.daily.is_empty());
        assert!(snapshot.monthly.is_empty());
        assert_eq!(snapshot.average_clicks_per_link(), 0);
    }

    #[test]
    fn test_numeric_month_also_decodes() {
        let point: MonthlyPointPayload =
            serde_json::from_str(r#"{"month": 4, "clicks": 2}"#).unwrap();
        assert_eq!(point.month, 4);
    }

    #[test]
    fn test_pagination_tolerates_stringly_numbers() {
        let json = r#"{
            "current_page": "2",
            "per_page": 5,
            "total": "11",
            "total_pages": 3,
            "has_next": true,
            "has_prev": true
        }"#;

        let meta: PageMeta = serde_json::from_str::<PaginationPayload>(json)
            .unwrap()
            .into();
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.total, 11);
        assert!(meta.has_next);
    }

    #[test]
    fn test_update_request_omits_absent_short_code() {
        let body = serde_json::to_string(&UpdateLinkRequest {
            original_url: "https://example.com",
            short_code: None,
        })
        .unwrap();
        assert!(!body.contains("short_code"));
    }

    #[test]
    fn test_link_stats_payload_without_analytics_block() {
        let json = r#"{
            "id": 3,
            "short_code": "abc",
            "original_url": "https://example.com",
            "short_url": "https://sho.rt/abc",
            "click_count": 0,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;

        let stats: LinkStats = serde_json::from_str::<LinkStatsPayload>(json).unwrap().into();
        assert!(stats.analytics.is_none());
        assert_eq!(stats.link.short_code, "abc");
    }
}
