//! Case-folding of field names.
//!
//! Field identity is case-insensitive: `GPS/Lat` and `gps/lat` name the same
//! field. The folded form is only ever used as a lookup key; the original
//! spelling is kept separately for display.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// A field name normalized for identity comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FoldedKey(String);

impl FoldedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FoldedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FoldedKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FoldedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fold a field name to its canonical lookup key.
///
/// ASCII letters are lowercased; every other byte is left as-is, so the
/// transform is deterministic and locale-independent.
///
/// ```rust
/// use entrytracker_common::fold_key;
///
/// assert_eq!(fold_key("GPS/Lat"), fold_key("gps/LAT"));
/// assert_eq!(fold_key("Dot11.Device").as_str(), "dot11.device");
/// ```
pub fn fold_key(name: &str) -> FoldedKey {
    FoldedKey(name.to_ascii_lowercase())
}
