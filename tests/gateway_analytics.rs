mod common;

use axum::extract::RawQuery;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use linkdash::domain::filters::FilterSet;
use linkdash::domain::gateways::AnalyticsGateway;
use linkdash::domain::series::Bucket;
use linkdash::domain::session::Session;
use linkdash::error::AppError;
use linkdash::infrastructure::HttpApiGateway;

use chrono::NaiveDate;

fn gateway(base_url: &str) -> HttpApiGateway {
    let config = common::test_config(base_url);
    HttpApiGateway::new(&config, Some(Session::new("test-token"))).unwrap()
}

#[tokio::test]
async fn test_overview_success_normalizes_and_aggregates() {
    let app = Router::new().route(
        "/api/analytics",
        get(|| async { Json(json!({ "status": true, "data": common::analytics_data() })) }),
    );
    let base_url = common::serve(app).await;

    let snapshot = gateway(&base_url)
        .fetch_overview(&FilterSet::all_links())
        .await
        .unwrap();

    assert_eq!(snapshot.total_clicks, 10);
    // daily sorted ascending by date
    assert_eq!(
        snapshot.daily[0].bucket,
        Bucket::Day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    );
    // months sorted ascending 1 -> 12 despite wire order
    assert_eq!(snapshot.monthly[0].bucket, Bucket::Month(1));
    assert_eq!(snapshot.monthly[1].bucket, Bucket::Month(12));
    // derived aggregates
    assert_eq!(snapshot.average_clicks_per_link(), 5);
    assert_eq!(snapshot.active_link_count(), 1);
}

#[tokio::test]
async fn test_overview_sends_exactly_the_set_filters() {
    let slot = common::capture_slot();
    let captured = slot.clone();

    let app = Router::new().route(
        "/api/analytics",
        get(move |RawQuery(query): RawQuery| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = Some(query.unwrap_or_default());
                Json(json!({ "status": true, "data": common::analytics_data() }))
            }
        }),
    );
    let base_url = common::serve(app).await;

    let filters = FilterSet::all_links().with_url_code("abc123").with_date_range(
        NaiveDate::from_ymd_opt(2024, 1, 1),
        NaiveDate::from_ymd_opt(2024, 2, 1),
    );

    gateway(&base_url).fetch_overview(&filters).await.unwrap();

    assert_eq!(
        common::captured_value(&slot),
        "url=abc123&start_date=2024-01-01&end_date=2024-02-01"
    );
}

#[tokio::test]
async fn test_unconstrained_overview_sends_no_query() {
    let slot = common::capture_slot();
    let captured = slot.clone();

    let app = Router::new().route(
        "/api/analytics",
        get(move |RawQuery(query): RawQuery| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = Some(query.unwrap_or_default());
                Json(json!({ "status": true, "data": common::analytics_data() }))
            }
        }),
    );
    let base_url = common::serve(app).await;

    gateway(&base_url)
        .fetch_overview(&FilterSet::all_links())
        .await
        .unwrap();

    assert_eq!(common::captured_value(&slot), "");
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let slot = common::capture_slot();
    let captured = slot.clone();

    let app = Router::new().route(
        "/api/analytics",
        get(move |headers: HeaderMap| {
            let captured = captured.clone();
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                *captured.lock().unwrap() = Some(auth);
                Json(json!({ "status": true, "data": common::analytics_data() }))
            }
        }),
    );
    let base_url = common::serve(app).await;

    gateway(&base_url)
        .fetch_overview(&FilterSet::all_links())
        .await
        .unwrap();

    assert_eq!(common::captured_value(&slot), "Bearer test-token");
}

#[tokio::test]
async fn test_falsy_envelope_is_invalid_shape() {
    let app = Router::new().route(
        "/api/analytics",
        get(|| async { Json(json!({ "status": false, "message": "Failed to load analytics" })) }),
    );
    let base_url = common::serve(app).await;

    let err = gateway(&base_url)
        .fetch_overview(&FilterSet::all_links())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidResponseShape { .. }));
    assert_eq!(err.to_string(), "Failed to load analytics");
}

#[tokio::test]
async fn test_server_error_is_fetch_failed_with_message() {
    let app = Router::new().route(
        "/api/analytics",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "database unavailable" })),
            )
                .into_response()
        }),
    );
    let base_url = common::serve(app).await;

    let err = gateway(&base_url)
        .fetch_overview(&FilterSet::all_links())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::FetchFailed { .. }));
    assert_eq!(err.to_string(), "database unavailable");
}

#[tokio::test]
async fn test_rejected_token_is_unauthenticated() {
    let app = Router::new().route(
        "/api/analytics",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({}))).into_response() }),
    );
    let base_url = common::serve(app).await;

    let err = gateway(&base_url)
        .fetch_overview(&FilterSet::all_links())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unauthenticated { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_fetch_failed() {
    // Nothing listens here; the connection is refused.
    let config = common::test_config("http://127.0.0.1:9");
    let gateway = HttpApiGateway::new(&config, Some(Session::new("t"))).unwrap();

    let err = gateway
        .fetch_overview(&FilterSet::all_links())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::FetchFailed { .. }));
}

#[tokio::test]
async fn test_link_stats_with_nested_analytics() {
    let app = Router::new().route(
        "/api/stats/{code}",
        get(|| async {
            Json(json!({
                "status": true,
                "data": {
                    "id": 1,
                    "short_code": "abc123",
                    "original_url": "https://example.com",
                    "short_url": "https://sho.rt/abc123",
                    "click_count": 9,
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-05T00:00:00Z",
                    "analytics": {
                        "total_clicks": 9,
                        "unique_visitors": 4,
                        "top_countries": [{"country": "DE", "count": 6}],
                        "top_devices": [{"device": "mobile", "count": 3}],
                        "daily_clicks": [
                            {"date": "2024-01-03", "clicks": 3},
                            {"date": "2024-01-01", "clicks": 6}
                        ]
                    }
                }
            }))
        }),
    );
    let base_url = common::serve(app).await;

    let stats = gateway(&base_url).fetch_link_stats("abc123").await.unwrap();

    assert_eq!(stats.link.short_code, "abc123");
    let analytics = stats.analytics.unwrap();
    assert_eq!(analytics.unique_visitors, 4);
    assert_eq!(analytics.average_per_day(), 5);
    // nested daily series is normalized too
    assert_eq!(
        analytics.daily[0].bucket,
        Bucket::Day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    );
}
