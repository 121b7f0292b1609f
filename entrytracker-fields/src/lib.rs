//! Field registry
//!
//! `entrytracker-fields` assigns stable numeric ids to named, typed fields and
//! manufactures independent instances of them on demand. A field is backed
//! either by a bare type tag or by a prototype instance that is cloned for
//! every request.
//!
//! # Architecture
//!
//! - **Dual identity**: every field has a case-insensitive name and a numeric
//!   id; both map to the same immutable definition for the registry's lifetime
//! - **Explicit handle**: there is no global registry; build an
//!   [`EntryTracker`] once and share it (usually as `Arc<EntryTracker>`)
//! - **Read-mostly**: lookups take a shared lock only long enough to resolve
//!   a definition; construction and cloning happen outside it
//!
//! ```rust
//! use entrytracker_common::provenance;
//! use entrytracker_element::TrackerType;
//! use entrytracker_fields::EntryTracker;
//!
//! let tracker: EntryTracker = EntryTracker::new();
//! let lat = tracker
//!     .register_field("GPS/Lat", TrackerType::Double, "latitude", provenance!())
//!     .unwrap();
//! assert_eq!(tracker.lookup_id("gps/lat"), Some(lat));
//!
//! let instance = tracker.get_tracked_instance(lat).unwrap();
//! assert_eq!(instance.id(), lat);
//! assert_eq!(instance.tag(), TrackerType::Double);
//! ```

pub mod definition;
pub mod error;
pub mod registry;

pub use definition::{FieldDefinition, FieldRef, FieldSource, FieldSummary};
pub use error::{FieldsError, Result};
pub use registry::{EntryTracker, RegistryOptions};

pub use entrytracker_element::{FieldId, TrackedInstance, TrackerElement, TrackerType};
