//! Field definitions and the keys used to address them.

use std::fmt;

use entrytracker_common::{FoldedKey, Provenance};
use entrytracker_element::{FieldId, TrackedInstance, TrackerElement, TrackerType};
use serde::Serialize;

/// How instances of a field are produced.
#[derive(Debug)]
pub enum FieldSource<E: TrackedInstance> {
    /// Build a bare instance from a type tag.
    Type(E::Tag),
    /// Clone the shape of a previously built instance.
    Prototype(E),
}

impl From<TrackerType> for FieldSource<TrackerElement> {
    fn from(tag: TrackerType) -> Self {
        FieldSource::Type(tag)
    }
}

impl From<TrackerElement> for FieldSource<TrackerElement> {
    fn from(prototype: TrackerElement) -> Self {
        FieldSource::Prototype(prototype)
    }
}

impl<E: TrackedInstance> FieldSource<E> {
    pub fn is_prototype(&self) -> bool {
        matches!(self, FieldSource::Prototype(_))
    }

    /// Human-readable type, e.g. `double` or `map prototype`.
    pub fn describe(&self) -> String {
        match self {
            FieldSource::Type(tag) => tag.to_string(),
            FieldSource::Prototype(prototype) => format!("{} prototype", prototype.tag()),
        }
    }

    /// Whether `other` would produce instances of a different shape.
    pub fn conflicts_with(&self, other: &FieldSource<E>) -> bool {
        match (self, other) {
            (FieldSource::Type(a), FieldSource::Type(b)) => a != b,
            (FieldSource::Prototype(a), FieldSource::Prototype(b)) => !a.shape_matches(b),
            _ => true,
        }
    }
}

/// Address of a field: its id or its (case-insensitive) name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldRef {
    Id(FieldId),
    Name(String),
}

impl From<FieldId> for FieldRef {
    fn from(id: FieldId) -> Self {
        FieldRef::Id(id)
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        FieldRef::Name(name.to_string())
    }
}

impl From<String> for FieldRef {
    fn from(name: String) -> Self {
        FieldRef::Name(name)
    }
}

impl From<&String> for FieldRef {
    fn from(name: &String) -> Self {
        FieldRef::Name(name.clone())
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Id(id) => write!(f, "id {id}"),
            FieldRef::Name(name) => write!(f, "name '{name}'"),
        }
    }
}

/// A registered field. Immutable once created.
#[derive(Debug)]
pub struct FieldDefinition<E: TrackedInstance> {
    pub(crate) id: FieldId,
    pub(crate) name: String,
    pub(crate) key: FoldedKey,
    pub(crate) source: FieldSource<E>,
    pub(crate) description: String,
    pub(crate) provenance: Provenance,
}

impl<E: TrackedInstance> FieldDefinition<E> {
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Name as originally registered, case preserved.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Folded name used for identity.
    pub fn key(&self) -> &FoldedKey {
        &self.key
    }

    pub fn source(&self) -> &FieldSource<E> {
        &self.source
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Produce a fresh instance: a bare one for type-backed fields, a clone
    /// of the prototype re-tagged with this field's id otherwise.
    pub fn instantiate(&self) -> E {
        match &self.source {
            FieldSource::Type(tag) => E::construct(tag.clone(), self.id),
            FieldSource::Prototype(prototype) => prototype.clone_as(self.id),
        }
    }

    pub fn summary(&self) -> FieldSummary {
        FieldSummary {
            id: self.id,
            name: self.name.clone(),
            type_name: self.source.describe(),
            prototype: self.source.is_prototype(),
            description: self.description.clone(),
            provenance: self.provenance.to_string(),
        }
    }
}

/// Plain description of a registered field, for listings and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSummary {
    pub id: FieldId,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub prototype: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub provenance: String,
}
