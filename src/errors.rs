//! Shared error types for meetiq
//!
//! The computation core (cost, quality, risk, messaging, formatting) is total
//! and never produces these errors. They only surface at the edges: loading
//! configuration, reading or writing tracked meetings, and input
//! validation on the command line.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for meetiq operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error in {}: {message}", .path.display())]
    Configuration { message: String, path: PathBuf },

    /// Inputs outside the configured limits
    #[error("Validation error: {0}")]
    Validation(String),

    /// Only recurring meetings can be tracked
    #[error("Cannot save a {recurrence} meeting; only weekly or monthly meetings are tracked")]
    NotPersistable { recurrence: String },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error tied to a file
    pub fn configuration(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_prefixes_message() {
        let err = Error::validation("salary out of range").with_context("evaluate");
        assert_eq!(
            err.to_string(),
            "evaluate: Validation error: salary out of range"
        );
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(Error::validation("bad"));
        let err = result.context("loading").unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
    }

    #[test]
    fn test_configuration_message_names_file() {
        let err = Error::configuration("expected a table", "/tmp/team/.meetiq.toml");
        assert_eq!(
            err.to_string(),
            "Configuration error in /tmp/team/.meetiq.toml: expected a table"
        );
    }

    #[test]
    fn test_not_persistable_message() {
        let err = Error::NotPersistable {
            recurrence: "one-time".into(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot save a one-time meeting; only weekly or monthly meetings are tracked"
        );
    }
}
