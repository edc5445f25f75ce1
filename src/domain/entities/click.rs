//! Click event entity for the click-details table.

use chrono::{DateTime, Utc};

/// A single recorded click on a shortened link.
///
/// Metadata fields are optional to handle cases where client information
/// is unavailable or privacy settings restrict data collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub id: i64,
    pub url_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub clicked_at: DateTime<Utc>,
}

impl ClickEvent {
    pub fn new(
        id: i64,
        url_id: i64,
        ip_address: Option<String>,
        user_agent: Option<String>,
        referer: Option<String>,
        clicked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url_id,
            ip_address,
            user_agent,
            referer,
            clicked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_click_event_with_all_fields() {
        let now = Utc::now();
        let click = ClickEvent::new(
            1,
            42,
            Some("192.168.1.1".to_string()),
            Some("Mozilla/5.0".to_string()),
            Some("https://google.com".to_string()),
            now,
        );

        assert_eq!(click.url_id, 42);
        assert_eq!(click.clicked_at, now);
        assert_eq!(click.referer.as_deref(), Some("https://google.com"));
    }

    #[test]
    fn test_click_event_minimal() {
        let click = ClickEvent::new(1, 10, None, None, None, Utc::now());

        assert!(click.ip_address.is_none());
        assert!(click.user_agent.is_none());
        assert!(click.referer.is_none());
    }
}
