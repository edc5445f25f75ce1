//! Application layer: the analytics view-model and services.

pub mod analytics_view_model;
pub mod services;

pub use analytics_view_model::{AnalyticsViewModel, ViewState};
