//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//! Provides error classification for mapping failures onto response statuses.
//!
//! ## Error Categories
//!
//! - **NotFound**: Repository or listing does not exist (404)
//! - **BadRequest**: Caller supplied invalid input (400)
//!
//! Malformed data coming back from a source is never the caller's fault and
//! lands in **Internal**.
//! - **Internal**: Anything else (500)
//!
//! The tree builder itself never fails; every variant here belongs to the
//! code around it (sources, configuration, output).

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// Error categories used to pick a response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Requested repository or listing does not exist
    NotFound,
    /// Invalid request - fix the input, don't retry
    BadRequest,
    /// Unexpected failure
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

impl ErrorCategory {
    /// HTTP status code for this category
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Internal => 500,
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum RepoTreeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid repository '{input}': expected 'owner/repo'")]
    InvalidRepoId { input: String },

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Source '{source_name}' failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },

    /// Source returned a document that is not a usable listing or metadata
    #[error("Invalid upstream data in '{field}': {message}")]
    InvalidData { field: String, message: String },

    #[error("Invalid glob pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

pub type Result<T> = std::result::Result<T, RepoTreeError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl RepoTreeError {
    /// Create a source error
    pub fn source_failed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid upstream data error
    pub fn invalid_data(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidData {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Classify this error for status mapping
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::InvalidRepoId { .. } | Self::Pattern { .. } => ErrorCategory::BadRequest,
            _ => ErrorCategory::Internal,
        }
    }

    /// HTTP status code a caller should answer with
    pub fn http_status(&self) -> u16 {
        self.category().http_status()
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Attribute an error to a named source
    fn with_source<C: Into<String>>(self, source_name: C) -> Result<T>;

    /// Add context using a closure (lazy evaluation)
    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_source<C: Into<String>>(self, source_name: C) -> Result<T> {
        self.map_err(|e| RepoTreeError::source_failed(source_name, e.to_string()))
    }

    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| RepoTreeError::Config(format!("{}: {}", f().into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
