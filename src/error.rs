//! Error types for ptt-dl
//!
//! Only a handful of conditions are fatal. A listing or detail page that
//! answers with a non-200 status is not an error at all: it surfaces as
//! [`FetchOutcome::Unavailable`](crate::types::FetchOutcome) so the caller
//! decides whether to skip it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ptt-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ptt-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "boards_file")
        key: Option<String>,
    },

    /// Board name is not present in the allow-list
    #[error("unknown board: {board}")]
    UnknownBoard {
        /// The rejected board name
        board: String,
    },

    /// The age-gate confirmation did not answer with 200
    ///
    /// Either the site is unreachable or the confirmation endpoint changed.
    #[error("age confirmation failed with HTTP status {status}")]
    Authentication {
        /// HTTP status returned by the confirmation endpoint
        status: u16,
    },

    /// Image download requested for a post whose detail page was never parsed
    #[error("images of post '{title}' have not been resolved yet")]
    ImagesNotResolved {
        /// Title of the offending post
        title: String,
    },

    /// No usable target path could be found for an image
    #[error("file collision at {path}: {reason}")]
    FileCollision {
        /// The path that collided
        path: PathBuf,
        /// Why the collision could not be resolved
        reason: String,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a [`Error::Config`] for the given configuration key
    pub fn config(message: impl Into<String>, key: &str) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// Whether this error means the site refused the session outright
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_error_mentions_status() {
        let err = Error::Authentication { status: 503 };
        assert_eq!(
            err.to_string(),
            "age confirmation failed with HTTP status 503"
        );
        assert!(err.is_authentication());
    }

    #[test]
    fn config_helper_records_key() {
        match Error::config("board must not be empty", "board") {
            Error::Config { message, key } => {
                assert_eq!(message, "board must not be empty");
                assert_eq!(key.as_deref(), Some("board"));
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn io_errors_convert_via_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_authentication());
    }
}
