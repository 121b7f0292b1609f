//! Error types for element access

use thiserror::Error;

use crate::types::TrackerType;

/// Result type for element operations
pub type Result<T> = std::result::Result<T, ElementError>;

/// Errors that can occur when reading or writing element values
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ElementError {
    /// Accessor used on an element of a different type
    #[error("type mismatch: expected {expected}, element is {actual}")]
    TypeMismatch {
        expected: TrackerType,
        actual: TrackerType,
    },

    /// Text could not be parsed as a MAC address
    #[error("invalid MAC address: {input}")]
    InvalidMac { input: String },
}
