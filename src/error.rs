//! Unified error types for pr-scores.
//!
//! A fetch failure is the only error the running dashboard ever surfaces to
//! the user; everything downstream of a parsed [`Dataset`](crate::model::Dataset)
//! is a total function and cannot fail.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pr-scores operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScoresError {
    /// Errors while fetching or parsing the score dataset
    #[error("Failed to fetch scores: {context}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Errors during report generation
    #[error("Report generation failed: {0}")]
    Report(String),
}

/// Specific fetch error kinds.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Score store returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(String),

    #[error("Remote fetch support not compiled in (rebuild with the 'remote' feature)")]
    RemoteDisabled,
}

impl ScoresError {
    /// Build a fetch error with context.
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Build an IO error with an associated path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            path: Some(path.into()),
            source,
        }
    }
}

/// Convenience result type for pr-scores operations.
pub type Result<T> = std::result::Result<T, ScoresError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_carries_context_and_source() {
        let err = ScoresError::fetch(
            "GET https://example.test/users.json",
            FetchErrorKind::HttpStatus { status: 503 },
        );
        let msg = err.to_string();
        assert!(msg.contains("Failed to fetch scores"));
        assert!(msg.contains("users.json"));

        let source = std::error::Error::source(&err).expect("source");
        assert!(source.to_string().contains("503"));
    }

    #[test]
    fn io_error_includes_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ScoresError::io("/tmp/scores.json", io);
        assert!(err.to_string().contains("scores.json"));
    }
}
