//! # linkdash
//!
//! A terminal dashboard client for a URL-shortening service: authentication,
//! link management, click analytics, and profile settings, all consuming the
//! backend's REST API with its `{status, data|message}` JSON envelope.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, filters, series math, and
//!   gateway traits
//! - **Application Layer** ([`application`]) - The analytics view-model and
//!   services orchestrating the gateways
//! - **Infrastructure Layer** ([`infrastructure`]) - The reqwest HTTP gateway
//!   and on-disk session persistence
//! - **CLI Layer** ([`cli`]) - Terminal command handlers and rendering
//!
//! ## Features
//!
//! - Bearer-token authentication with explicit session context
//! - Normalized daily/monthly click series in guaranteed chronological order
//! - Deterministic last-filter-wins handling for rapid filter changes
//! - Link CRUD with client-side validation
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the dashboard at your backend
//! export LINKDASH_API_URL="http://localhost:3000"
//!
//! # Log in, then look around
//! linkdash login
//! linkdash analytics --period week
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService, ProfileService};
    pub use crate::application::{AnalyticsViewModel, ViewState};
    pub use crate::domain::entities::{ClickEvent, LinkSummary, LinkUpdate, PageMeta};
    pub use crate::domain::filters::{FilterSet, Period};
    pub use crate::domain::session::Session;
    pub use crate::domain::snapshot::{AnalyticsSnapshot, LinkStats};
    pub use crate::error::AppError;
    pub use crate::infrastructure::{HttpApiGateway, SessionStore};
}
