//! Numeric field identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable numeric id of a registered field.
///
/// The registry hands these out in strictly increasing order starting at
/// [`FieldId::FIRST`]. Zero is never a valid field id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(u32);

impl FieldId {
    /// The id given to the first field registered in a registry.
    pub const FIRST: FieldId = FieldId(1);

    /// Wrap a raw id, rejecting zero.
    pub fn new(raw: u32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The id after this one, or `None` once the id space is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FieldId> for u32 {
    fn from(id: FieldId) -> Self {
        id.0
    }
}
