//! # Error Types
//!
//! Structured error types for codedef_core. A lookup that fails always names
//! the family and the identifier that was asked for, so a caller holding a
//! persisted project file can report exactly which entry is corrupt.
//!
//! ## Example
//!
//! ```rust
//! use codedef_core::codes::CodeFamily;
//! use codedef_core::errors::{CodeError, CodeResult};
//!
//! fn require_selected(family: CodeFamily, id: u16) -> CodeResult<u16> {
//!     if id == 0 {
//!         return Err(CodeError::unknown_code(family, 0));
//!     }
//!     Ok(id)
//! }
//!
//! assert!(require_selected(CodeFamily::Steel, 0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codes::CodeFamily;

/// Result type alias for codedef_core operations
pub type CodeResult<T> = Result<T, CodeError>;

/// Structured error type for registry operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CodeError {
    /// The identifier is not declared for the family
    #[error("Unknown {family} code id {id}")]
    UnknownCode { family: CodeFamily, id: i64 },

    /// No key, full name or short name in the family matches
    #[error("No {family} code named '{name}'")]
    UnknownName { family: CodeFamily, name: String },

    /// The family name could not be parsed
    #[error("Unknown code family: {name}")]
    UnknownFamily { name: String },

    /// A locale override entry was rejected
    #[error("Invalid override in {source_name}: {reason}")]
    InvalidOverride { source_name: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CodeError {
    /// Create an UnknownCode error
    pub fn unknown_code(family: CodeFamily, id: i64) -> Self {
        CodeError::UnknownCode { family, id }
    }

    /// Create an UnknownName error
    pub fn unknown_name(family: CodeFamily, name: impl Into<String>) -> Self {
        CodeError::UnknownName {
            family,
            name: name.into(),
        }
    }

    /// Create an UnknownFamily error
    pub fn unknown_family(name: impl Into<String>) -> Self {
        CodeError::UnknownFamily { name: name.into() }
    }

    /// Create an InvalidOverride error
    pub fn invalid_override(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        CodeError::InvalidOverride {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CodeError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CodeError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors that indicate a corrupt or hand-edited data file
    /// rather than a bad argument from the caller.
    pub fn is_data_corruption(&self) -> bool {
        matches!(
            self,
            CodeError::SerializationError { .. } | CodeError::VersionMismatch { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CodeError::UnknownCode { .. } => "UNKNOWN_CODE",
            CodeError::UnknownName { .. } => "UNKNOWN_NAME",
            CodeError::UnknownFamily { .. } => "UNKNOWN_FAMILY",
            CodeError::InvalidOverride { .. } => "INVALID_OVERRIDE",
            CodeError::FileError { .. } => "FILE_ERROR",
            CodeError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CodeError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
