//! Error handling module for the devcontainer wizard
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for the devcontainer wizard
#[derive(Error, Debug)]
pub enum DevWizError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Compatibility table lookup on an unrecognized version key.
    ///
    /// This is fatal: it indicates a bug in the static version tables,
    /// not bad user input.
    #[error("Unknown {kind} version: {key}")]
    UnknownKey { kind: &'static str, key: String },

    /// A chooser returned a value outside its declared closed set.
    ///
    /// The chooser contract forbids this, so it is a fatal contract
    /// violation rather than something to re-prompt for.
    #[error("Invalid choice for {field}: {value:?} (allowed: {allowed:?})")]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: Vec<String>,
    },

    /// Validation errors (user input, config values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Interactive prompt errors (terminal not available, read failure)
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, DevWizError>;

// Convenient error constructors
impl DevWizError {
    /// Create an unknown-key lookup error
    pub fn unknown_key(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            kind,
            key: key.into(),
        }
    }

    /// Create an invalid-choice contract violation
    pub fn invalid_choice(
        field: &'static str,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidChoice {
            field,
            value: value.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a prompt error
    pub fn prompt(msg: impl Into<String>) -> Self {
        Self::Prompt(msg.into())
    }
}
