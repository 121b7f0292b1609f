//! Call-site descriptions attached to registrations.
//!
//! A provenance is a free-form `file:line function` string. The registry
//! stores it next to each definition and repeats it in diagnostics, but never
//! parses or compares it.

use std::fmt;

use serde::Serialize;

/// Where a registration came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Provenance {
    file: String,
    line: u32,
    function: String,
}

impl Provenance {
    /// Describe a call site. Usually built through [`provenance!`](crate::provenance!).
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// Placeholder for registrations that did not say where they came from.
    pub fn unknown() -> Self {
        Self::new("<unknown>", 0, "")
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

impl Default for Provenance {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if !self.function.is_empty() {
            write!(f, " {}", self.function)?;
        }
        Ok(())
    }
}

impl From<Provenance> for String {
    fn from(value: Provenance) -> Self {
        value.to_string()
    }
}

/// Capture the current source location as a [`Provenance`].
///
/// The function slot holds the enclosing module path.
///
/// ```rust
/// use entrytracker_common::provenance;
///
/// let here = provenance!();
/// assert!(here.line() > 0);
/// ```
#[macro_export]
macro_rules! provenance {
    () => {
        $crate::Provenance::new(file!(), line!(), module_path!())
    };
}
