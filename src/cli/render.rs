//! Terminal rendering for tables, summary cards, and bar charts.

use colored::*;

use crate::domain::chart;
use crate::domain::entities::{ClickEvent, LinkSummary, PageMeta};
use crate::domain::series::ClickPoint;
use crate::domain::snapshot::{AnalyticsSnapshot, LinkStats};

/// Width of the widest chart bar, in terminal cells.
const CHART_WIDTH: usize = 40;

/// Click-details rows are capped to keep the screen readable.
const MAX_CLICK_ROWS: usize = 50;

pub fn summary(snapshot: &AnalyticsSnapshot) {
    println!("{}", "📊 Overview".bright_blue().bold());
    println!();
    println!(
        "  Total clicks:    {}",
        snapshot.total_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Total links:     {}",
        snapshot.links.len().to_string().bright_green().bold()
    );
    println!(
        "  Avg clicks/link: {}",
        snapshot
            .average_clicks_per_link()
            .to_string()
            .bright_green()
            .bold()
    );
    println!(
        "  Active links:    {}",
        snapshot
            .active_link_count()
            .to_string()
            .bright_green()
            .bold()
    );
    println!();
}

/// Renders a click series as horizontal bars, one bucket per row.
///
/// Bar lengths come from the shared chart-scale math, so zero buckets still
/// show a minimum-width bar instead of disappearing.
pub fn series_chart(title: &str, subtitle: &str, points: &[ClickPoint], color: Color) {
    println!("{}", title.bright_blue().bold());
    if !subtitle.is_empty() {
        println!("  {}", subtitle.bright_black());
    }
    println!();

    if points.is_empty() {
        println!("  {}", "No click data yet".yellow());
        println!();
        return;
    }

    let scale = chart::scale_max(points);
    let label_width = points
        .iter()
        .map(|p| p.bucket.label().len())
        .max()
        .unwrap_or(0);

    for point in points {
        let cells = (chart::bar_fraction(point.count, scale) * CHART_WIDTH as f64).round() as usize;
        let bar = "█".repeat(cells.max(1));
        let bar = if point.count > 0 {
            bar.color(color)
        } else {
            bar.bright_black()
        };

        println!(
            "  {:<label_width$}  {} {}",
            point.bucket.label().bright_white(),
            bar,
            point.count.to_string().bright_black()
        );
    }
    println!();
}

pub fn links_table(links: &[LinkSummary]) {
    println!("{}", "🔗 Link performance".bright_blue().bold());
    println!();

    if links.is_empty() {
        println!("  {}", "No links yet".yellow());
        println!();
        return;
    }

    println!(
        "  {:<5} {:<12} {:<34} {:<36} {:<8} {:<18}",
        "ID".bright_white().bold(),
        "CODE".bright_white().bold(),
        "SHORT URL".bright_white().bold(),
        "ORIGINAL".bright_white().bold(),
        "CLICKS".bright_white().bold(),
        "CREATED".bright_white().bold()
    );
    println!("  {}", "─".repeat(115).bright_black());

    for link in links {
        let clicks = if link.is_active() {
            link.click_count.to_string().green()
        } else {
            link.click_count.to_string().bright_black()
        };

        println!(
            "  {:<5} {:<12} {:<34} {:<36} {:<8} {:<18}",
            link.id.to_string().bright_black(),
            link.short_code.cyan(),
            truncate(&link.short_url, 32).bright_white(),
            truncate(&link.original_url, 34),
            clicks,
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }
    println!();
}

pub fn clicks_table(clicks: &[ClickEvent]) {
    if clicks.is_empty() {
        return;
    }

    println!("{}", "🕘 Click details".bright_blue().bold());
    println!();
    println!(
        "  {:<6} {:<16} {:<34} {:<24} {:<18}",
        "LINK".bright_white().bold(),
        "IP".bright_white().bold(),
        "USER AGENT".bright_white().bold(),
        "REFERER".bright_white().bold(),
        "CLICKED AT".bright_white().bold()
    );
    println!("  {}", "─".repeat(102).bright_black());

    for click in clicks.iter().take(MAX_CLICK_ROWS) {
        println!(
            "  {:<6} {:<16} {:<34} {:<24} {:<18}",
            click.url_id.to_string().bright_black(),
            click.ip_address.as_deref().unwrap_or("-"),
            truncate(click.user_agent.as_deref().unwrap_or("-"), 32),
            truncate(click.referer.as_deref().unwrap_or("-"), 22).bright_black(),
            click
                .clicked_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black()
        );
    }

    if clicks.len() > MAX_CLICK_ROWS {
        println!(
            "  {} more not shown",
            (clicks.len() - MAX_CLICK_ROWS).to_string().bright_black()
        );
    }
    println!();
}

pub fn page_meta(meta: &PageMeta) {
    let mut line = format!(
        "Page {}/{} · {} links",
        meta.current_page,
        meta.total_pages.max(1),
        meta.total
    );
    if meta.has_next {
        line.push_str(" · more available");
    }
    println!("  {}", line.bright_black());
    println!();
}

pub fn link_stats(stats: &LinkStats) {
    println!("{}", "🔍 Link details".bright_blue().bold());
    println!();
    println!("  Short URL: {}", stats.link.short_url.cyan());
    println!("  Code:      {}", stats.link.short_code.bright_white());
    println!("  Target:    {}", stats.link.original_url);
    println!(
        "  Created:   {}",
        stats
            .link
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    if let Some(updated) = stats.updated_at {
        println!(
            "  Updated:   {}",
            updated.format("%Y-%m-%d %H:%M").to_string().bright_black()
        );
    }
    println!(
        "  Clicks:    {}",
        stats.link.click_count.to_string().bright_green().bold()
    );
    println!();

    let Some(analytics) = &stats.analytics else {
        println!("  {}", "No analytics recorded for this link yet".yellow());
        println!();
        return;
    };

    println!(
        "  Total clicks: {}   Unique visitors: {}   Avg/day: {}",
        analytics.total_clicks.to_string().bright_green().bold(),
        analytics.unique_visitors.to_string().bright_green().bold(),
        analytics.average_per_day().to_string().bright_green().bold()
    );
    println!();

    series_chart("📈 Daily clicks", "", &analytics.daily, Color::Blue);
    breakdown("🌍 Top countries", &analytics.top_countries, analytics.total_clicks);
    breakdown("📱 Top devices", &analytics.top_devices, analytics.total_clicks);
}

/// Renders a labeled share-of-total breakdown (countries, devices).
fn breakdown(title: &str, rows: &[(String, i64)], total: i64) {
    if rows.is_empty() {
        return;
    }

    println!("{}", title.bright_blue().bold());
    println!();

    let label_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let scale = total.max(1);

    for (name, count) in rows {
        let cells = ((*count as f64 / scale as f64) * CHART_WIDTH as f64).round() as usize;
        println!(
            "  {:<label_width$}  {} {}",
            name.bright_white(),
            "█".repeat(cells.max(1)).green(),
            count.to_string().bright_black()
        );
    }
    println!();
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("abc", 5), "abc");
    }

    #[test]
    fn test_truncate_long_string_adds_ellipsis() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        assert_eq!(truncate("abcdefgh", 5).chars().count(), 5);
    }
}
