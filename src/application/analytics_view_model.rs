//! Analytics view-model: the single stateful component of the dashboard.
//!
//! Translates a [`FilterSet`] into one gateway call, and owns the
//! Loading / Ready / Failed presentation state. A snapshot is replaced
//! wholesale on every load; nothing is patched incrementally.
//!
//! ## Last-filter-wins
//!
//! Rapid filter changes can leave multiple logical requests in flight at the
//! caller's discretion. Each load is tagged with a monotonically increasing
//! sequence number and [`AnalyticsViewModel::complete`] discards any result
//! whose tag is not the latest issued, so a slow early response can never
//! overwrite a fast later one.

use std::sync::Arc;

use crate::domain::filters::FilterSet;
use crate::domain::gateways::AnalyticsGateway;
use crate::domain::snapshot::{AnalyticsSnapshot, LinkStats};
use crate::error::AppError;

/// Presentation state of the analytics screen.
///
/// `Loading` is both the initial state and the state re-entered on every
/// filter change; there is no separate idle state.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Ready(AnalyticsSnapshot),
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn snapshot(&self) -> Option<&AnalyticsSnapshot> {
        match self {
            ViewState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fetches, normalizes, and exposes analytics snapshots for rendering.
pub struct AnalyticsViewModel<G: AnalyticsGateway> {
    gateway: Arc<G>,
    state: ViewState,
    issued_seq: u64,
}

impl<G: AnalyticsGateway> AnalyticsViewModel<G> {
    /// Creates a view-model in the `Loading` state.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            state: ViewState::default(),
            issued_seq: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Starts a new load: re-enters `Loading` and returns the sequence
    /// number that must accompany the eventual [`Self::complete`] call.
    pub fn begin_load(&mut self) -> u64 {
        self.issued_seq += 1;
        self.state = ViewState::Loading;
        self.issued_seq
    }

    /// Applies a load result.
    ///
    /// Returns `false` (leaving the state untouched) when `seq` is not the
    /// latest issued sequence number; otherwise transitions to `Ready` or
    /// `Failed` and returns `true`.
    pub fn complete(&mut self, seq: u64, result: Result<AnalyticsSnapshot, AppError>) -> bool {
        if seq != self.issued_seq {
            tracing::debug!(seq, latest = self.issued_seq, "discarding stale analytics response");
            return false;
        }

        self.state = match result {
            Ok(snapshot) => ViewState::Ready(snapshot),
            Err(e) => {
                tracing::warn!(code = e.code(), details = %e.details(), "analytics load failed");
                ViewState::Failed(e.to_string())
            }
        };
        true
    }

    /// Sequential convenience wrapper: validates the filter, issues the
    /// request, and applies the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an inverted date range before
    /// any network call, and the gateway's error taxonomy after one; either
    /// way the state machine reflects the outcome.
    pub async fn load(&mut self, filters: &FilterSet) -> Result<&AnalyticsSnapshot, AppError> {
        if let Err(e) = filters.validate() {
            self.state = ViewState::Failed(e.to_string());
            return Err(e);
        }

        let seq = self.begin_load();
        let result = self.gateway.fetch_overview(filters).await;
        match result {
            Ok(snapshot) => {
                self.complete(seq, Ok(snapshot));
                match &self.state {
                    ViewState::Ready(snapshot) => Ok(snapshot),
                    // complete() with the latest seq always lands in Ready here
                    _ => Err(AppError::internal(
                        "Analytics state out of sync",
                        serde_json::json!({}),
                    )),
                }
            }
            Err(e) => {
                self.complete(seq, Err(e.clone()));
                Err(e)
            }
        }
    }

    /// Loads the detail view for one short code.
    ///
    /// Stateless with respect to the overview snapshot: the detail screen
    /// renders from its own value.
    pub async fn load_link_stats(&self, short_code: &str) -> Result<LinkStats, AppError> {
        self.gateway.fetch_link_stats(short_code).await
    }
}
