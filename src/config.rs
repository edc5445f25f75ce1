//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command
//! runs.
//!
//! ## Variables
//!
//! - `LINKDASH_API_URL` - base URL of the shortener API
//!   (default: `http://localhost:3000`)
//! - `LINKDASH_TOKEN_FILE` - where the session token is persisted
//!   (default: `$HOME/.linkdash/token`, falling back to `.linkdash-token`
//!   when `HOME` is unset)
//! - `HTTP_TIMEOUT_SECONDS` - per-request timeout (default: 10, range 1-300)
//! - `RUST_LOG` - log level (default: `warn`; this is an interactive tool)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Dashboard configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the shortener API, without a trailing `/api`.
    pub api_url: String,
    /// Path of the file the bearer token is stored in between runs.
    pub token_file: PathBuf,
    /// Per-request timeout in seconds.
    pub http_timeout_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url =
            env::var("LINKDASH_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let token_file = env::var("LINKDASH_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_token_file());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_url,
            token_file,
            http_timeout_seconds,
            log_level,
            log_format,
        })
    }

    /// Default token location: `$HOME/.linkdash/token`, or a dotfile in the
    /// working directory when `HOME` is unavailable.
    fn default_token_file() -> PathBuf {
        match env::var("HOME") {
            Ok(home) => PathBuf::from(home).join(".linkdash").join("token"),
            Err(_) => PathBuf::from(".linkdash-token"),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LINKDASH_API_URL` is not an http(s) URL
    /// - `HTTP_TIMEOUT_SECONDS` is 0 or above 300
    /// - `LOG_FORMAT` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!(
                "LINKDASH_API_URL must start with 'http://' or 'https://', got '{}'",
                self.api_url
            );
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 300 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.http_timeout_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.token_file.as_os_str().is_empty() {
            anyhow::bail!("LINKDASH_TOKEN_FILE must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (token values are never logged).
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  API base URL: {}", self.api_url);
        tracing::debug!("  Token file: {}", self.token_file.display());
        tracing::debug!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
