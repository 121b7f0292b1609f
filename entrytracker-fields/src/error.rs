//! Error types for the field registry

use entrytracker_common::{ErrorSeverity, Provenance, Severity};
use entrytracker_element::FieldId;
use thiserror::Error;

use crate::definition::FieldRef;

/// Result type for field registry operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur in field registry operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldsError {
    /// A field with the same case-folded name is already registered
    #[error("duplicate field name: {name} (from {provenance}, already registered as {existing})")]
    DuplicateFieldName {
        name: String,
        provenance: Provenance,
        existing: FieldId,
    },

    /// No field matches the requested id or name
    #[error("field not found: {field}")]
    UnknownField { field: FieldRef },

    /// Every id has been handed out
    #[error("field id space exhausted while registering {name}")]
    IdsExhausted { name: String },
}

impl Severity for FieldsError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            FieldsError::DuplicateFieldName { .. } => ErrorSeverity::Warning,
            FieldsError::UnknownField { .. } => ErrorSeverity::Error,
            FieldsError::IdsExhausted { .. } => ErrorSeverity::Error,
        }
    }
}
