//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Settings/Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Panel/Data-Integrity Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unknown section: {section}")]
    UnknownSection { section: String },

    #[error("Unknown widget '{widget}' in section '{section}'")]
    UnknownWidget { section: String, widget: String },

    #[error("Widget index {index} out of range (section '{section}' has {len} widgets)")]
    IndexOutOfRange {
        section: String,
        index: usize,
        len: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // Persistence Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    // ─────────────────────────────────────────────────────────────
    // Repository Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Record not found: {id}")]
    RecordNotFound { id: String },

    #[error("Duplicate record id: {id}")]
    DuplicateRecord { id: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    pub fn unknown_section(section: impl Into<String>) -> Self {
        Self::UnknownSection {
            section: section.into(),
        }
    }

    pub fn unknown_widget(section: impl Into<String>, widget: impl Into<String>) -> Self {
        Self::UnknownWidget {
            section: section.into(),
            widget: widget.into(),
        }
    }

    pub fn index_out_of_range(section: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            section: section.into(),
            index,
            len,
        }
    }

    pub fn record_not_found(id: impl Into<String>) -> Self {
        Self::RecordNotFound { id: id.into() }
    }

    pub fn duplicate_record(id: impl Into<String>) -> Self {
        Self::DuplicateRecord { id: id.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// Data-integrity refusals and persistence failures leave the panel in a
    /// previously-valid state, so the caller can retry or carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. }
                | Error::UnknownSection { .. }
                | Error::UnknownWidget { .. }
                | Error::IndexOutOfRange { .. }
                | Error::Persistence { .. }
                | Error::RecordNotFound { .. }
                | Error::DuplicateRecord { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
