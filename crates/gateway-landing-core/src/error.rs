//! Error types for the landing page core

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for clipboard operations
pub type CopyResult<T> = std::result::Result<T, CopyError>;

/// Page error types organized by concern
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Platform Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to schedule timer: {message}")]
    Timer { message: String },

    #[error("Failed to register event listener: {message}")]
    Listener { message: String },

    #[error("Platform capability missing: {0}")]
    Unsupported(String),
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn timer(message: impl Into<String>) -> Self {
        Self::Timer {
            message: message.into(),
        }
    }

    pub fn listener(message: impl Into<String>) -> Self {
        Self::Listener {
            message: message.into(),
        }
    }

    pub fn unsupported(what: impl Into<String>) -> Self {
        Self::Unsupported(what.into())
    }

    /// Platform errors leave the page usable with reduced interactivity
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Timer { .. } | Error::Listener { .. } | Error::Unsupported(_)
        )
    }
}

/// Failure of a copy-to-clipboard attempt.
///
/// Never escapes the page: the controller logs it and turns it into a
/// localized status message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    /// Neither the async clipboard nor a document-backed fallback exists
    #[error("Clipboard API unavailable")]
    Unavailable,

    /// A strategy was attempted and raised an error
    #[error("Copy failed: {reason}")]
    Failed { reason: String },
}

impl CopyError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}
