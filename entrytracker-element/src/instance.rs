//! The capability contract the field registry relies on.

use std::fmt;

use crate::element::TrackerElement;
use crate::id::FieldId;
use crate::types::TrackerType;

/// Something the registry can manufacture for a field.
///
/// The registry never looks inside an instance. It only builds bare ones from
/// a type tag, clones prototypes under a new id, and compares shapes when it
/// needs to report a conflicting re-registration.
pub trait TrackedInstance: fmt::Debug + Send + Sync + Sized + 'static {
    /// Primitive or composite type marker used to build bare instances.
    type Tag: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Build a bare instance of `tag` carrying `id`.
    fn construct(tag: Self::Tag, id: FieldId) -> Self;

    /// Deep, storage-independent copy of this instance's shape, carrying `id`.
    fn clone_as(&self, id: FieldId) -> Self;

    fn tag(&self) -> Self::Tag;

    /// Whether two instances describe the same schema.
    fn shape_matches(&self, other: &Self) -> bool;
}

impl TrackedInstance for TrackerElement {
    type Tag = TrackerType;

    fn construct(tag: TrackerType, id: FieldId) -> Self {
        TrackerElement::new(tag, id)
    }

    fn clone_as(&self, id: FieldId) -> Self {
        TrackerElement::clone_as(self, id)
    }

    fn tag(&self) -> TrackerType {
        TrackerElement::tag(self)
    }

    fn shape_matches(&self, other: &Self) -> bool {
        TrackerElement::shape_matches(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build<E: TrackedInstance>(tag: E::Tag, raw: u32) -> E {
        E::construct(tag, FieldId::new(raw).unwrap())
    }

    #[test]
    fn construct_through_trait() {
        let el: TrackerElement = build(TrackerType::Float, 9);
        assert_eq!(TrackedInstance::tag(&el), TrackerType::Float);
        assert_eq!(el.id().get(), 9);
    }

    #[test]
    fn clone_through_trait_retags() {
        let proto: TrackerElement = build(TrackerType::Map, 1);
        let copy = TrackedInstance::clone_as(&proto, FieldId::new(2).unwrap());
        assert_eq!(copy.id().get(), 2);
        assert!(TrackedInstance::shape_matches(&copy, &proto));
    }
}
