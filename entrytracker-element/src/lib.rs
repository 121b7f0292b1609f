//! Typed tracked elements
//!
//! `entrytracker-element` provides the value containers the field registry
//! hands out. An element is a typed value tagged with the numeric id of the
//! field it instantiates. Composite elements (maps of sub-fields) act as
//! prototypes: the registry stores one and clones its shape for every new
//! instance.
//!
//! # Architecture
//!
//! - **Tagged variants**: [`TrackerType`] is a closed set of type tags and
//!   [`TrackerValue`] holds one payload per tag
//! - **Shape cloning**: [`TrackerElement::clone_as`] copies structure, never data
//! - **Capability seam**: the registry only sees [`TrackedInstance`]

pub mod element;
pub mod error;
pub mod id;
pub mod instance;
pub mod types;

pub use element::{TrackerElement, TrackerValue};
pub use error::{ElementError, Result};
pub use id::FieldId;
pub use instance::TrackedInstance;
pub use types::{MacAddr, TrackerType};
