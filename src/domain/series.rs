//! Time-bucketed click series.
//!
//! The backend returns two series shapes: daily points keyed by calendar
//! date and monthly points keyed by month number (1-12). Both normalize to
//! an ordered sequence of [`ClickPoint`]s so the chart renders
//! chronologically left to right regardless of input order. Labels are
//! derived on demand, never stored.

use chrono::NaiveDate;

/// Fixed month-name table for labeling month buckets.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A single time-indexed aggregation unit of click counts.
///
/// Day buckets order by date; month buckets order by numeric month 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bucket {
    Day(NaiveDate),
    Month(u32),
}

impl Bucket {
    /// Human-readable axis label.
    ///
    /// Day buckets label as abbreviated weekday plus date; month buckets use
    /// the fixed month-name table. An out-of-range month number falls back
    /// to the raw number rather than panicking.
    pub fn label(&self) -> String {
        match self {
            Bucket::Day(date) => date.format("%a, %d %b %Y").to_string(),
            Bucket::Month(m) => MONTH_NAMES
                .get((m.wrapping_sub(1)) as usize)
                .map(|s| (*s).to_string())
                .unwrap_or_else(|| m.to_string()),
        }
    }

}

/// One point of a click series: a bucket and its non-negative count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickPoint {
    pub bucket: Bucket,
    pub count: i64,
}

impl ClickPoint {
    pub fn new(bucket: Bucket, count: i64) -> Self {
        Self { bucket, count }
    }
}

/// Sorts a series ascending by bucket, in place.
///
/// Guarantees chronological chart order even when the backend returns
/// buckets out of sequence. An empty series is valid and stays empty.
pub fn normalize(points: &mut [ClickPoint]) {
    points.sort_by_key(|p| p.bucket);
}
