//! Terminal dashboard commands and rendering.

pub mod analytics;
pub mod auth;
pub mod links;
pub mod profile;
pub mod render;

use serde_json::json;

use crate::config::Config;
use crate::domain::session::Session;
use crate::error::AppError;
use crate::infrastructure::SessionStore;

/// Loads the stored session, failing with the login hint when absent.
///
/// Every protected command goes through here before any network call, the
/// dashboard's equivalent of redirecting to the login screen.
pub fn require_session(config: &Config) -> Result<Session, AppError> {
    SessionStore::new(&config.token_file)
        .load()?
        .ok_or_else(|| {
            AppError::unauthenticated(
                "Not logged in. Run `linkdash login` first.",
                json!({ "token_file": config.token_file.display().to_string() }),
            )
        })
}
