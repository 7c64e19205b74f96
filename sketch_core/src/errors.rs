//! # Error Types
//!
//! Structured error types for sketch_core. Drawing helpers only fail on
//! degenerate geometry (zero-length vectors, empty spans); export fails when
//! Typst rejects the generated document or the output cannot be written.
//!
//! ## Example
//!
//! ```rust
//! use sketch_core::errors::{SketchError, SketchResult};
//!
//! fn validate_scale(scale: f64) -> SketchResult<()> {
//!     if scale <= 0.0 {
//!         return Err(SketchError::InvalidInput {
//!             field: "scale".to_string(),
//!             value: scale.to_string(),
//!             reason: "Scale must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sketch_core operations
pub type SketchResult<T> = Result<T, SketchError>;

/// Structured error type for drawing and export operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SketchError {
    /// An input value is invalid (degenerate geometry, bad format string, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Requested export format is not supported
    #[error("Unsupported export format: '{extension}'")]
    UnsupportedFormat { extension: String },

    /// Typst compilation or page rendering failed
    #[error("Render failed: {stage} - {reason}")]
    RenderFailed { stage: String, reason: String },

    /// File I/O error (image export only)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: sheet version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SketchError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SketchError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedFormat error
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        SketchError::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a RenderFailed error
    pub fn render_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        SketchError::RenderFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        SketchError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SketchError::InvalidInput { .. } => "INVALID_INPUT",
            SketchError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            SketchError::RenderFailed { .. } => "RENDER_FAILED",
            SketchError::FileError { .. } => "FILE_ERROR",
            SketchError::SerializationError { .. } => "SERIALIZATION_ERROR",
            SketchError::VersionMismatch { .. } => "VERSION_MISMATCH",
            SketchError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for SketchError {
    fn from(e: serde_json::Error) -> Self {
        SketchError::SerializationError {
            reason: e.to_string(),
        }
    }
}
