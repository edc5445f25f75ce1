//! Shared helpers for gateway integration tests.
//!
//! Tests run the real reqwest gateway against an in-process axum server
//! bound to an ephemeral local port, serving canned envelope bodies.

use std::sync::{Arc, Mutex};

use axum::Router;
use serde_json::{Value, json};

use linkdash::config::Config;

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    format!("http://{addr}")
}

/// Config pointing the gateway at the fake backend.
pub fn test_config(base_url: &str) -> Config {
    Config {
        api_url: base_url.to_string(),
        token_file: std::env::temp_dir().join(format!("linkdash-it-{}", std::process::id())),
        http_timeout_seconds: 5,
        log_level: "warn".to_string(),
        log_format: "text".to_string(),
    }
}

/// Thread-safe capture slot for asserting what the backend received.
pub type Captured = Arc<Mutex<Option<String>>>;

pub fn capture_slot() -> Captured {
    Arc::new(Mutex::new(None))
}

pub fn captured_value(slot: &Captured) -> String {
    slot.lock().expect("capture lock").clone().unwrap_or_default()
}

/// A realistic `/api/analytics` data block, months deliberately unsorted.
pub fn analytics_data() -> Value {
    json!({
        "totalClicks": 10,
        "dailyClicks": [
            {"date": "2024-01-02", "clicks": 4},
            {"date": "2024-01-01", "clicks": 6}
        ],
        "monthlyClicks": [
            {"month": "12", "clicks": 1},
            {"month": "1", "clicks": 9}
        ],
        "urlStats": [
            {
                "id": 1,
                "short_code": "abc123",
                "original_url": "https://example.com",
                "short_url": "https://sho.rt/abc123",
                "click_count": 10,
                "created_at": "2024-01-01T00:00:00Z"
            },
            {
                "id": 2,
                "short_code": "xyz789",
                "original_url": "https://example.org",
                "short_url": "https://sho.rt/xyz789",
                "click_count": 0,
                "created_at": "2024-01-02T00:00:00Z"
            }
        ],
        "clickDetails": [
            {
                "id": 5,
                "url_id": 1,
                "ip_address": "10.0.0.1",
                "user_agent": "Mozilla/5.0",
                "referer": "https://google.com",
                "clicked_at": "2024-01-02T10:00:00Z"
            }
        ]
    })
}
