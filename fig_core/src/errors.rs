//! # Error Types
//!
//! Structured error types for fig_core. Every variant carries enough context
//! for a front end to explain what was rejected, and the whole enum
//! serializes to JSON so the CLI can emit it next to state dumps.
//!
//! ## Example
//!
//! ```rust
//! use fig_core::errors::{ViewError, ViewResult};
//!
//! fn require_sub_button(index: usize, count: usize) -> ViewResult<()> {
//!     if index >= count {
//!         return Err(ViewError::sub_button_out_of_range(index, count));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_sub_button(2, 2).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fig_core operations
pub type ViewResult<T> = Result<T, ViewError>;

/// Structured error type for view selector operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ViewError {
    /// No selector option with this identifier exists in the catalog
    #[error("Unknown option: '{option_id}'")]
    UnknownOption { option_id: String },

    /// Sub-button index does not name a rendered sub-button
    #[error("Sub-button {index} out of range (catalog has {count})")]
    SubButtonOutOfRange { index: usize, count: usize },

    /// Sub-button clicked while the button group is hidden
    #[error("Sub-buttons are hidden; select an option that has them first")]
    SubButtonsHidden,

    /// Catalog content is inconsistent
    #[error("Invalid catalog: {field} - {reason}")]
    InvalidCatalog { field: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl ViewError {
    /// Create an UnknownOption error
    pub fn unknown_option(option_id: impl Into<String>) -> Self {
        ViewError::UnknownOption {
            option_id: option_id.into(),
        }
    }

    /// Create a SubButtonOutOfRange error
    pub fn sub_button_out_of_range(index: usize, count: usize) -> Self {
        ViewError::SubButtonOutOfRange { index, count }
    }

    /// Create an InvalidCatalog error
    pub fn invalid_catalog(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ViewError::InvalidCatalog {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        ViewError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        ViewError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by an event that cannot apply to the current
    /// catalog or state. State is left untouched for these.
    pub fn is_rejected_event(&self) -> bool {
        matches!(
            self,
            ViewError::UnknownOption { .. }
                | ViewError::SubButtonOutOfRange { .. }
                | ViewError::SubButtonsHidden
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewError::UnknownOption { .. } => "UNKNOWN_OPTION",
            ViewError::SubButtonOutOfRange { .. } => "SUB_BUTTON_OUT_OF_RANGE",
            ViewError::SubButtonsHidden => "SUB_BUTTONS_HIDDEN",
            ViewError::InvalidCatalog { .. } => "INVALID_CATALOG",
            ViewError::FileError { .. } => "FILE_ERROR",
            ViewError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
