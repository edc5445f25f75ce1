//! Analytics commands: overview and single-link detail.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use colored::Color;
use std::sync::Arc;

use crate::application::AnalyticsViewModel;
use crate::cli::{render, require_session};
use crate::config::Config;
use crate::domain::filters::{FilterSet, Period, derived_range};
use crate::infrastructure::HttpApiGateway;

fn view_model(config: &Config) -> Result<AnalyticsViewModel<HttpApiGateway>> {
    let session = require_session(config)?;
    let gateway = Arc::new(HttpApiGateway::new(config, Some(session))?);
    Ok(AnalyticsViewModel::new(gateway))
}

/// Builds the filter set from command-line arguments.
///
/// Explicit `--from/--to` win; otherwise `--period` derives a range ending
/// today; with neither, no dates are sent and the backend's default window
/// applies.
fn build_filters(
    url: Option<String>,
    period: Option<Period>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> FilterSet {
    let mut filters = FilterSet::all_links().with_period(period.unwrap_or_default());

    if let Some(code) = url {
        filters = filters.with_url_code(code);
    }

    let (start, end) = match (from, to, period) {
        (None, None, Some(p)) => {
            let (s, e) = derived_range(p, Local::now().date_naive());
            (Some(s), Some(e))
        }
        (from, to, _) => (from, to),
    };

    filters.with_date_range(start, end)
}

pub async fn overview(
    config: &Config,
    url: Option<String>,
    period: Option<Period>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let filters = build_filters(url, period, from, to);

    let mut view_model = view_model(config)?;
    let snapshot = view_model.load(&filters).await?;

    render::summary(snapshot);
    render::series_chart("📅 Daily clicks", "last 7 days", &snapshot.daily, Color::Blue);
    render::series_chart(
        "🗓  Monthly clicks",
        "current year",
        &snapshot.monthly,
        Color::Green,
    );
    render::links_table(&snapshot.links);
    render::clicks_table(&snapshot.clicks);
    Ok(())
}

pub async fn link_detail(config: &Config, short_code: String) -> Result<()> {
    let view_model = view_model(config)?;
    let stats = view_model.load_link_stats(&short_code).await?;

    render::link_stats(&stats);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dates_win_over_period() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1);
        let to = NaiveDate::from_ymd_opt(2024, 2, 1);

        let filters = build_filters(None, Some(Period::Week), from, to);
        assert_eq!(filters.start_date, from);
        assert_eq!(filters.end_date, to);
    }

    #[test]
    fn test_period_alone_derives_a_range() {
        let filters = build_filters(None, Some(Period::Week), None, None);
        assert!(filters.start_date.is_some());
        assert!(filters.end_date.is_some());
    }

    #[test]
    fn test_no_period_no_dates_sends_nothing() {
        let filters = build_filters(Some("abc123".to_string()), None, None, None);
        assert_eq!(filters.query_string(), "url=abc123");
    }
}
