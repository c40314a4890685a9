//! Custom error types for discogs-cli
//!
//! Every failure a command can hit is one of a small closed set of
//! categories, so callers decide whether to abort or continue instead of
//! relying on panics.

use thiserror::Error;

use crate::models::ReleaseId;

/// The main error type for discogs-cli operations
#[derive(Error, Debug)]
pub enum DiscogsError {
    /// The API answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, connection reset)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response body or backup file could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// File read errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Backup or export output could not be written
    #[error("Write error: {0}")]
    Write(String),

    /// Configuration errors (missing token, unreadable settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server kept reporting more pages than we are willing to fetch
    #[error("Pagination limit reached: stopped after {max_pages} pages")]
    PaginationLimit { max_pages: u32 },

    /// Some releases could not be added during a restore
    #[error("Restore incomplete: {} release(s) could not be added ({})", .failed.len(), join_ids(.failed))]
    PartialRestore { failed: Vec<ReleaseId> },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

fn join_ids(ids: &[ReleaseId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DiscogsError {
    /// Create an API error from a status code and server message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this error came from the API itself
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// HTTP status of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DiscogsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DiscogsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for DiscogsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Result type alias for discogs-cli operations
pub type DiscogsResult<T> = Result<T, DiscogsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_is_server_message() {
        let err = DiscogsError::api(404, "User does not exist or may have been deleted.");
        assert_eq!(
            err.to_string(),
            "User does not exist or may have been deleted."
        );
        assert!(err.is_api());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_partial_restore_lists_ids() {
        let err = DiscogsError::PartialRestore {
            failed: vec![ReleaseId::new(12), ReleaseId::new(345)],
        };
        assert_eq!(
            err.to_string(),
            "Restore incomplete: 2 release(s) could not be added (12, 345)"
        );
    }

    #[test]
    fn test_pagination_limit_display() {
        let err = DiscogsError::PaginationLimit { max_pages: 3 };
        assert_eq!(err.to_string(), "Pagination limit reached: stopped after 3 pages");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DiscogsError = io_err.into();
        assert!(matches!(err, DiscogsError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DiscogsError = json_err.into();
        assert!(matches!(err, DiscogsError::Decode(_)));
    }
}
