//! Severity classification for registry errors
//!
//! Every error type in the workspace reports how serious it is so that call
//! sites can pick a log level without matching on concrete variants.

/// Severity levels for error classification
///
/// - **Warning**: The request was refused but nothing is wrong with the
///   registry, e.g. registering a name that already exists.
/// - **Error**: The requested operation could not be completed, e.g. asking
///   for an instance of a field that was never registered.
/// - **Critical**: The registry can no longer serve requests. No registry
///   condition currently maps here.
///
/// # Examples
///
/// ```rust
/// use entrytracker_common::ErrorSeverity;
///
/// assert!(ErrorSeverity::Critical > ErrorSeverity::Warning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,

    /// Operation failed but the registry keeps serving other requests
    Error,

    /// Registry cannot continue, requires immediate attention
    Critical,
}

/// Trait for error types that have severity levels
///
/// # Example
///
/// ```rust
/// use entrytracker_common::{ErrorSeverity, Severity};
///
/// #[derive(Debug)]
/// enum LookupError {
///     Missing,
///     Shadowed,
/// }
///
/// impl Severity for LookupError {
///     fn severity(&self) -> ErrorSeverity {
///         match self {
///             LookupError::Missing => ErrorSeverity::Error,
///             LookupError::Shadowed => ErrorSeverity::Warning,
///         }
///     }
/// }
///
/// assert_eq!(LookupError::Missing.severity(), ErrorSeverity::Error);
/// ```
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}
