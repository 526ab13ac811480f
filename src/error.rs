//! Error types for storewatch operations.
//!
//! This module defines [`WatchError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `WatchError` for the few conditions that abort a run
//! - Per-call failures (a regional lookup timing out, a push backend
//!   rejecting a message) are modeled as outcome variants at the call site,
//!   not as errors; see `storefront::LookupOutcome` and
//!   `notify::DispatchOutcome`
//! - Use `anyhow::Error` (via `WatchError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for storewatch operations.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The configured application identifier list was empty.
    #[error("No application identifiers configured")]
    NoAppsConfigured,

    /// The version cache could not be serialized or written.
    #[error("Failed to write version cache at {path}: {message}")]
    CacheWrite { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for storewatch operations.
pub type Result<T> = std::result::Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_apps_configured_displays_message() {
        let err = WatchError::NoAppsConfigured;
        assert!(err.to_string().contains("No application identifiers"));
    }

    #[test]
    fn cache_write_displays_path_and_message() {
        let err = WatchError::CacheWrite {
            path: PathBuf::from("/tmp/version_cache.json"),
            message: "disk full".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/version_cache.json"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WatchError = io_err.into();
        assert!(matches!(err, WatchError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_to_other() {
        let err: WatchError = anyhow::anyhow!("unexpected").into();
        assert!(matches!(err, WatchError::Other(_)));
        assert!(err.to_string().contains("unexpected"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(WatchError::NoAppsConfigured)
        }
        assert!(returns_error().is_err());
    }
}
