//! Tracked element values.
//!
//! A [`TrackerElement`] couples a field id with a typed [`TrackerValue`].
//! Scalars are set and read through typed accessors; containers expose
//! insertion and lookup helpers. Accessors used on the wrong type fail with
//! [`ElementError::TypeMismatch`] instead of coercing.

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::error::{ElementError, Result};
use crate::id::FieldId;
use crate::types::{MacAddr, TrackerType};

/// The payload of an element, one variant per [`TrackerType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TrackerValue {
    String(String),
    Int8(i8),
    #[serde(rename = "uint8")]
    UInt8(u8),
    Int16(i16),
    #[serde(rename = "uint16")]
    UInt16(u16),
    Int32(i32),
    #[serde(rename = "uint32")]
    UInt32(u32),
    Int64(i64),
    #[serde(rename = "uint64")]
    UInt64(u64),
    Float(f32),
    Double(f64),
    Mac(MacAddr),
    Uuid(Uuid),
    ByteArray(Vec<u8>),
    Map(BTreeMap<FieldId, TrackerElement>),
    Vector(Vec<TrackerElement>),
    IntMap(BTreeMap<i64, TrackerElement>),
    StringMap(BTreeMap<String, TrackerElement>),
    MacMap(BTreeMap<MacAddr, TrackerElement>),
}

impl TrackerValue {
    /// The empty value of a type: zero, empty string, nil uuid, empty container.
    pub fn default_for(tag: TrackerType) -> Self {
        match tag {
            TrackerType::String => TrackerValue::String(String::new()),
            TrackerType::Int8 => TrackerValue::Int8(0),
            TrackerType::UInt8 => TrackerValue::UInt8(0),
            TrackerType::Int16 => TrackerValue::Int16(0),
            TrackerType::UInt16 => TrackerValue::UInt16(0),
            TrackerType::Int32 => TrackerValue::Int32(0),
            TrackerType::UInt32 => TrackerValue::UInt32(0),
            TrackerType::Int64 => TrackerValue::Int64(0),
            TrackerType::UInt64 => TrackerValue::UInt64(0),
            TrackerType::Float => TrackerValue::Float(0.0),
            TrackerType::Double => TrackerValue::Double(0.0),
            TrackerType::Mac => TrackerValue::Mac(MacAddr::ZERO),
            TrackerType::Uuid => TrackerValue::Uuid(Uuid::nil()),
            TrackerType::ByteArray => TrackerValue::ByteArray(Vec::new()),
            TrackerType::Map => TrackerValue::Map(BTreeMap::new()),
            TrackerType::Vector => TrackerValue::Vector(Vec::new()),
            TrackerType::IntMap => TrackerValue::IntMap(BTreeMap::new()),
            TrackerType::StringMap => TrackerValue::StringMap(BTreeMap::new()),
            TrackerType::MacMap => TrackerValue::MacMap(BTreeMap::new()),
        }
    }

    pub fn tag(&self) -> TrackerType {
        match self {
            TrackerValue::String(_) => TrackerType::String,
            TrackerValue::Int8(_) => TrackerType::Int8,
            TrackerValue::UInt8(_) => TrackerType::UInt8,
            TrackerValue::Int16(_) => TrackerType::Int16,
            TrackerValue::UInt16(_) => TrackerType::UInt16,
            TrackerValue::Int32(_) => TrackerType::Int32,
            TrackerValue::UInt32(_) => TrackerType::UInt32,
            TrackerValue::Int64(_) => TrackerType::Int64,
            TrackerValue::UInt64(_) => TrackerType::UInt64,
            TrackerValue::Float(_) => TrackerType::Float,
            TrackerValue::Double(_) => TrackerType::Double,
            TrackerValue::Mac(_) => TrackerType::Mac,
            TrackerValue::Uuid(_) => TrackerType::Uuid,
            TrackerValue::ByteArray(_) => TrackerType::ByteArray,
            TrackerValue::Map(_) => TrackerType::Map,
            TrackerValue::Vector(_) => TrackerType::Vector,
            TrackerValue::IntMap(_) => TrackerType::IntMap,
            TrackerValue::StringMap(_) => TrackerType::StringMap,
            TrackerValue::MacMap(_) => TrackerType::MacMap,
        }
    }
}

/// A typed value instantiated for a registered field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerElement {
    id: FieldId,
    #[serde(flatten)]
    value: TrackerValue,
}

macro_rules! scalar_accessors {
    ($($variant:ident => $set:ident, $get:ident: $ty:ty;)*) => {
        $(
            pub fn $set(&mut self, value: $ty) -> Result<()> {
                match &mut self.value {
                    TrackerValue::$variant(slot) => {
                        *slot = value;
                        Ok(())
                    }
                    other => Err(ElementError::TypeMismatch {
                        expected: TrackerType::$variant,
                        actual: other.tag(),
                    }),
                }
            }

            pub fn $get(&self) -> Option<$ty> {
                match &self.value {
                    TrackerValue::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        )*
    };
}

impl TrackerElement {
    /// Construct a bare element of `tag` holding the type's default value.
    pub fn new(tag: TrackerType, id: FieldId) -> Self {
        Self {
            id,
            value: TrackerValue::default_for(tag),
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn tag(&self) -> TrackerType {
        self.value.tag()
    }

    pub fn value(&self) -> &TrackerValue {
        &self.value
    }

    /// Deep structural copy re-tagged with `id`.
    ///
    /// Scalars come back as their type's default. `Map` sub-fields are cloned
    /// recursively and keep their own ids. Dynamic containers (`Vector` and the
    /// keyed maps) come back empty since their entries are data, not schema.
    pub fn clone_as(&self, id: FieldId) -> Self {
        let value = match &self.value {
            TrackerValue::Map(children) => TrackerValue::Map(
                children
                    .iter()
                    .map(|(child_id, child)| (*child_id, child.clone_as(*child_id)))
                    .collect(),
            ),
            other => TrackerValue::default_for(other.tag()),
        };
        Self { id, value }
    }

    /// True when `other` has the same type and, for maps, the same sub-field
    /// layout. Values are not compared.
    pub fn shape_matches(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (TrackerValue::Map(a), TrackerValue::Map(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|((ka, va), (kb, vb))| {
                        ka == kb && va.shape_matches(vb)
                    })
            }
            (a, b) => a.tag() == b.tag(),
        }
    }

    fn mismatch(&self, expected: TrackerType) -> ElementError {
        ElementError::TypeMismatch {
            expected,
            actual: self.tag(),
        }
    }

    // --- Scalars ---

    scalar_accessors! {
        Int8 => set_i8, as_i8: i8;
        UInt8 => set_u8, as_u8: u8;
        Int16 => set_i16, as_i16: i16;
        UInt16 => set_u16, as_u16: u16;
        Int32 => set_i32, as_i32: i32;
        UInt32 => set_u32, as_u32: u32;
        Int64 => set_i64, as_i64: i64;
        UInt64 => set_u64, as_u64: u64;
        Float => set_float, as_float: f32;
        Double => set_double, as_double: f64;
        Mac => set_mac, as_mac: MacAddr;
        Uuid => set_uuid, as_uuid: Uuid;
    }

    pub fn set_string(&mut self, value: impl Into<String>) -> Result<()> {
        match &mut self.value {
            TrackerValue::String(slot) => {
                *slot = value.into();
                Ok(())
            }
            _ => Err(self.mismatch(TrackerType::String)),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            TrackerValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn set_bytes(&mut self, value: impl Into<Vec<u8>>) -> Result<()> {
        match &mut self.value {
            TrackerValue::ByteArray(slot) => {
                *slot = value.into();
                Ok(())
            }
            _ => Err(self.mismatch(TrackerType::ByteArray)),
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.value {
            TrackerValue::ByteArray(b) => Some(b),
            _ => None,
        }
    }

    // --- Map of sub-fields ---

    /// Add a sub-field, replacing any existing child with the same id.
    pub fn add_child(&mut self, child: TrackerElement) -> Result<Option<TrackerElement>> {
        match &mut self.value {
            TrackerValue::Map(children) => Ok(children.insert(child.id, child)),
            _ => Err(self.mismatch(TrackerType::Map)),
        }
    }

    pub fn child(&self, id: FieldId) -> Option<&TrackerElement> {
        self.as_map().and_then(|children| children.get(&id))
    }

    pub fn child_mut(&mut self, id: FieldId) -> Option<&mut TrackerElement> {
        match &mut self.value {
            TrackerValue::Map(children) => children.get_mut(&id),
            _ => None,
        }
    }

    /// Sub-fields in id order; empty for anything but a map.
    pub fn children(&self) -> impl Iterator<Item = &TrackerElement> {
        self.as_map().into_iter().flat_map(|children| children.values())
    }

    pub fn as_map(&self) -> Option<&BTreeMap<FieldId, TrackerElement>> {
        match &self.value {
            TrackerValue::Map(children) => Some(children),
            _ => None,
        }
    }

    // --- Dynamic containers ---

    pub fn push(&mut self, item: TrackerElement) -> Result<()> {
        match &mut self.value {
            TrackerValue::Vector(items) => {
                items.push(item);
                Ok(())
            }
            _ => Err(self.mismatch(TrackerType::Vector)),
        }
    }

    /// Vector entries; empty for anything but a vector.
    pub fn items(&self) -> &[TrackerElement] {
        match &self.value {
            TrackerValue::Vector(items) => items,
            _ => &[],
        }
    }

    pub fn insert_int(&mut self, key: i64, item: TrackerElement) -> Result<Option<TrackerElement>> {
        match &mut self.value {
            TrackerValue::IntMap(entries) => Ok(entries.insert(key, item)),
            _ => Err(self.mismatch(TrackerType::IntMap)),
        }
    }

    pub fn get_int(&self, key: i64) -> Option<&TrackerElement> {
        match &self.value {
            TrackerValue::IntMap(entries) => entries.get(&key),
            _ => None,
        }
    }

    pub fn insert_str(
        &mut self,
        key: impl Into<String>,
        item: TrackerElement,
    ) -> Result<Option<TrackerElement>> {
        match &mut self.value {
            TrackerValue::StringMap(entries) => Ok(entries.insert(key.into(), item)),
            _ => Err(self.mismatch(TrackerType::StringMap)),
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&TrackerElement> {
        match &self.value {
            TrackerValue::StringMap(entries) => entries.get(key),
            _ => None,
        }
    }

    pub fn insert_mac(
        &mut self,
        key: MacAddr,
        item: TrackerElement,
    ) -> Result<Option<TrackerElement>> {
        match &mut self.value {
            TrackerValue::MacMap(entries) => Ok(entries.insert(key, item)),
            _ => Err(self.mismatch(TrackerType::MacMap)),
        }
    }

    pub fn get_mac(&self, key: MacAddr) -> Option<&TrackerElement> {
        match &self.value {
            TrackerValue::MacMap(entries) => entries.get(&key),
            _ => None,
        }
    }

    /// Number of contained elements; zero for scalars.
    pub fn len(&self) -> usize {
        match &self.value {
            TrackerValue::Map(m) => m.len(),
            TrackerValue::Vector(v) => v.len(),
            TrackerValue::IntMap(m) => m.len(),
            TrackerValue::StringMap(m) => m.len(),
            TrackerValue::MacMap(m) => m.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn id(raw: u32) -> FieldId {
        FieldId::new(raw).unwrap()
    }

    /// A device record: name, signal, and a nested location map.
    fn device_prototype() -> TrackerElement {
        let mut location = TrackerElement::new(TrackerType::Map, id(4));
        location.add_child(TrackerElement::new(TrackerType::Double, id(5))).unwrap();
        location.add_child(TrackerElement::new(TrackerType::Double, id(6))).unwrap();

        let mut device = TrackerElement::new(TrackerType::Map, id(1));
        device.add_child(TrackerElement::new(TrackerType::String, id(2))).unwrap();
        device.add_child(TrackerElement::new(TrackerType::Int32, id(3))).unwrap();
        device.add_child(location).unwrap();
        device
    }

    #[rstest]
    #[case(TrackerType::String)]
    #[case(TrackerType::UInt8)]
    #[case(TrackerType::Int64)]
    #[case(TrackerType::Double)]
    #[case(TrackerType::Mac)]
    #[case(TrackerType::Uuid)]
    #[case(TrackerType::Map)]
    #[case(TrackerType::MacMap)]
    fn new_element_has_tag_and_id(#[case] tag: TrackerType) {
        let el = TrackerElement::new(tag, id(7));
        assert_eq!(el.tag(), tag);
        assert_eq!(el.id(), id(7));
        assert_eq!(el.value(), &TrackerValue::default_for(tag));
    }

    #[test]
    fn scalar_set_and_get() {
        let mut el = TrackerElement::new(TrackerType::Double, id(1));
        el.set_double(51.5).unwrap();
        assert_eq!(el.as_double(), Some(51.5));
        assert_eq!(el.as_u64(), None);

        let mut name = TrackerElement::new(TrackerType::String, id(2));
        name.set_string("ap-01").unwrap();
        assert_eq!(name.as_str(), Some("ap-01"));
    }

    #[test]
    fn wrong_type_setter_is_rejected() {
        let mut el = TrackerElement::new(TrackerType::Double, id(1));
        let err = el.set_string("nope").unwrap_err();
        assert_eq!(
            err,
            ElementError::TypeMismatch {
                expected: TrackerType::String,
                actual: TrackerType::Double,
            }
        );
        let err = el.set_u32(1).unwrap_err();
        assert!(matches!(err, ElementError::TypeMismatch { expected: TrackerType::UInt32, .. }));
        assert_eq!(el.as_double(), Some(0.0));
    }

    #[test]
    fn map_children_by_id() {
        let device = device_prototype();
        assert_eq!(device.len(), 3);
        assert_eq!(device.child(id(2)).map(|c| c.tag()), Some(TrackerType::String));
        let ids: Vec<u32> = device.children().map(|c| c.id().get()).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert!(device.child(id(99)).is_none());
    }

    #[test]
    fn add_child_to_scalar_fails() {
        let mut el = TrackerElement::new(TrackerType::Int8, id(1));
        assert!(el.add_child(TrackerElement::new(TrackerType::Int8, id(2))).is_err());
        assert_eq!(el.children().count(), 0);
    }

    #[test]
    fn clone_as_retags_root_only() {
        let proto = device_prototype();
        let copy = proto.clone_as(id(10));
        assert_eq!(copy.id(), id(10));
        assert_eq!(copy.tag(), TrackerType::Map);
        let ids: Vec<u32> = copy.children().map(|c| c.id().get()).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert!(copy.shape_matches(&proto));
    }

    #[test]
    fn clone_as_resets_values() {
        let mut proto = device_prototype();
        proto.child_mut(id(2)).unwrap().set_string("filled").unwrap();
        proto
            .child_mut(id(4))
            .unwrap()
            .child_mut(id(5))
            .unwrap()
            .set_double(12.5)
            .unwrap();

        let copy = proto.clone_as(id(1));
        assert_eq!(copy.child(id(2)).unwrap().as_str(), Some(""));
        assert_eq!(
            copy.child(id(4)).unwrap().child(id(5)).unwrap().as_double(),
            Some(0.0)
        );
    }

    #[test]
    fn clone_as_is_independent() {
        let proto = device_prototype();
        let mut a = proto.clone_as(id(1));
        let b = proto.clone_as(id(1));

        a.child_mut(id(3)).unwrap().set_i32(-70).unwrap();
        assert_eq!(a.child(id(3)).unwrap().as_i32(), Some(-70));
        assert_eq!(b.child(id(3)).unwrap().as_i32(), Some(0));
        assert_eq!(proto.child(id(3)).unwrap().as_i32(), Some(0));
    }

    #[test]
    fn clone_as_empties_dynamic_containers() {
        let mut tags = TrackerElement::new(TrackerType::StringMap, id(1));
        tags.insert_str("owner", TrackerElement::new(TrackerType::String, id(2)))
            .unwrap();
        let mut seen = TrackerElement::new(TrackerType::Vector, id(3));
        seen.push(TrackerElement::new(TrackerType::UInt64, id(4))).unwrap();

        assert!(tags.clone_as(id(1)).is_empty());
        assert!(seen.clone_as(id(3)).is_empty());
        assert_eq!(tags.clone_as(id(1)).tag(), TrackerType::StringMap);
    }

    #[test]
    fn keyed_containers() {
        let mac: MacAddr = "AA:BB:CC:00:11:22".parse().unwrap();
        let mut by_mac = TrackerElement::new(TrackerType::MacMap, id(1));
        by_mac.insert_mac(mac, TrackerElement::new(TrackerType::UInt32, id(2)))
            .unwrap();
        assert!(by_mac.get_mac(mac).is_some());
        assert!(by_mac.get_mac(MacAddr::ZERO).is_none());

        let mut by_chan = TrackerElement::new(TrackerType::IntMap, id(3));
        by_chan.insert_int(6, TrackerElement::new(TrackerType::UInt64, id(4)))
            .unwrap();
        assert_eq!(by_chan.get_int(6).map(|e| e.id()), Some(id(4)));
        assert!(by_chan.insert_str("x", TrackerElement::new(TrackerType::Int8, id(5))).is_err());
    }

    #[test]
    fn shape_mismatch_detected() {
        let proto = device_prototype();
        let mut other = device_prototype();
        other.add_child(TrackerElement::new(TrackerType::UInt8, id(8))).unwrap();
        assert!(!proto.shape_matches(&other));
        assert!(!proto.shape_matches(&TrackerElement::new(TrackerType::Double, id(1))));
        assert!(TrackerElement::new(TrackerType::Double, id(1))
            .shape_matches(&TrackerElement::new(TrackerType::Double, id(2))));
    }

    #[test]
    fn serializes_with_type_and_value() {
        let mut el = TrackerElement::new(TrackerType::UInt16, id(3));
        el.set_u16(443).unwrap();
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "type": "uint16", "value": 443}));
    }
}
