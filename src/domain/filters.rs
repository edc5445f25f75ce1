//! Analytics filter model and client-side date-range derivation.

use chrono::{Datelike, Days, NaiveDate};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Sentinel `url_code` value meaning "all links".
pub const ALL_LINKS: &str = "all";

/// Time granularity selector.
///
/// Influences only which chart is emphasized and how a date range is derived
/// client-side; it is never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(format!(
                "unknown period '{other}', expected day, week, month or year"
            )),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        };
        f.write_str(s)
    }
}

/// Filter criteria for analytics queries.
///
/// Only set fields reach the backend; `None` and the [`ALL_LINKS`] sentinel
/// produce no query parameter at all.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub url_code: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub period: Period,
}

impl FilterSet {
    /// Filter matching every link with no date constraints.
    pub fn all_links() -> Self {
        Self::default()
    }

    /// Scopes the filter to a single short code.
    pub fn with_url_code(mut self, code: impl Into<String>) -> Self {
        self.url_code = Some(code.into());
        self
    }

    /// Adds date range filtering to the query.
    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// True when the filter targets all links rather than one short code.
    pub fn is_all_links(&self) -> bool {
        match &self.url_code {
            None => true,
            Some(code) => code == ALL_LINKS,
        }
    }

    /// Checks the `end_date >= start_date` invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when both dates are present and
    /// inverted.
    pub fn validate(&self) -> Result<(), AppError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            return Err(AppError::bad_request(
                "End date must not be before start date",
                json!({ "start_date": start.to_string(), "end_date": end.to_string() }),
            ));
        }
        Ok(())
    }

    /// Query parameters for the analytics endpoint, in wire order.
    ///
    /// Unset fields and the all-links sentinel are omitted entirely, so an
    /// unconstrained filter produces no parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if !self.is_all_links()
            && let Some(code) = &self.url_code
        {
            pairs.push(("url", code.clone()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }

        pairs
    }

    /// The encoded query string, empty for an unconstrained filter.
    pub fn query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

/// Derives an inclusive date range for a period ending at `anchor`.
///
/// Uniform across all periods: a day is itself, a week is the trailing seven
/// days, month and year are calendar-aligned up to the anchor.
pub fn derived_range(period: Period, anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = match period {
        Period::Day => anchor,
        Period::Week => anchor.checked_sub_days(Days::new(6)).unwrap_or(anchor),
        Period::Month => {
            NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1).unwrap_or(anchor)
        }
        Period::Year => NaiveDate::from_ymd_opt(anchor.year(), 1, 1).unwrap_or(anchor),
    };
    (start, anchor)
}
