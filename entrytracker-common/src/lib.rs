//! # EntryTracker Common
//!
//! Foundational helpers shared by the field registry crates. Nothing in here
//! owns registry state; these are leaf utilities the registry consumes.
//!
//! ## Modules
//!
//! - [`fold`] - Case-folding of field names into lookup keys
//! - [`provenance`] - Call-site descriptions recorded with each registration
//! - [`error`] - Severity classification shared by every error type
//! - [`logging`] - Subscriber setup and the [`Pretty`] log wrapper

pub mod error;
pub mod fold;
pub mod logging;
pub mod provenance;

pub use error::{ErrorSeverity, Severity};
pub use fold::{fold_key, FoldedKey};
pub use logging::{init_tracing, Pretty};
pub use provenance::Provenance;
