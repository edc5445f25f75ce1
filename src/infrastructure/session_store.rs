//! On-disk session persistence.
//!
//! The terminal analog of the browser's token storage: one file holding the
//! bearer token between runs. Only the CLI boundary touches this; everything
//! else receives an explicit [`Session`].

use serde_json::json;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::session::Session;
use crate::error::AppError;

/// Stores the session token at a configured path.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored session, if any.
    ///
    /// A missing file or an empty/whitespace-only file means "not logged
    /// in", not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on unreadable files.
    pub fn load(&self) -> Result<Option<Session>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Session::new(token)))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error("read", e)),
        }
    }

    /// Persists the session token, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on write failures.
    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error("create directory for", e))?;
        }
        fs::write(&self.path, session.token()).map_err(|e| self.io_error("write", e))
    }

    /// Removes the stored session. Clearing an absent session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on removal failures other than the
    /// file not existing.
    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error("remove", e)),
        }
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> AppError {
        AppError::internal(
            format!("Failed to {action} the session token file"),
            json!({ "path": self.path.display().to_string(), "reason": e.to_string() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(name: &str) -> SessionStore {
        let path = std::env::temp_dir()
            .join("linkdash-tests")
            .join(format!("{}-{}", std::process::id(), name));
        let store = SessionStore::new(path);
        let _ = store.clear();
        store
    }

    #[test]
    fn test_load_without_file_is_none() {
        let store = store("absent");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = store("roundtrip");
        store.save(&Session::new("tok-123")).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token(), "tok-123");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_whitespace_only_file_is_none() {
        let store = store("blank");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "  \n").unwrap();

        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_clear_twice_is_fine() {
        let store = store("clear-twice");
        store.save(&Session::new("tok")).unwrap();
        store.clear().unwrap();
        assert!(store.clear().is_ok());
    }
}
