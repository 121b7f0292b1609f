//! Type tags and small value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ElementError;

/// The type of a tracked element. Determines what shape its value takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerType {
    String,
    Int8,
    #[serde(rename = "uint8")]
    UInt8,
    Int16,
    #[serde(rename = "uint16")]
    UInt16,
    Int32,
    #[serde(rename = "uint32")]
    UInt32,
    Int64,
    #[serde(rename = "uint64")]
    UInt64,
    Float,
    Double,
    Mac,
    Uuid,
    ByteArray,
    /// Fixed set of sub-fields keyed by their field id.
    Map,
    /// Ordered list of elements.
    Vector,
    /// Elements keyed by an integer.
    IntMap,
    /// Elements keyed by a string.
    StringMap,
    /// Elements keyed by a MAC address.
    MacMap,
}

impl TrackerType {
    /// Stable lowercase name, also used as the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            TrackerType::String => "string",
            TrackerType::Int8 => "int8",
            TrackerType::UInt8 => "uint8",
            TrackerType::Int16 => "int16",
            TrackerType::UInt16 => "uint16",
            TrackerType::Int32 => "int32",
            TrackerType::UInt32 => "uint32",
            TrackerType::Int64 => "int64",
            TrackerType::UInt64 => "uint64",
            TrackerType::Float => "float",
            TrackerType::Double => "double",
            TrackerType::Mac => "mac",
            TrackerType::Uuid => "uuid",
            TrackerType::ByteArray => "byte_array",
            TrackerType::Map => "map",
            TrackerType::Vector => "vector",
            TrackerType::IntMap => "int_map",
            TrackerType::StringMap => "string_map",
            TrackerType::MacMap => "mac_map",
        }
    }

    /// True for types whose value holds other elements.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            TrackerType::Map
                | TrackerType::Vector
                | TrackerType::IntMap
                | TrackerType::StringMap
                | TrackerType::MacMap
        )
    }
}

impl fmt::Display for TrackerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 48-bit hardware address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    pub const ZERO: MacAddr = MacAddr([0; 6]);

    pub fn octets(self) -> [u8; 6] {
        self.0
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl FromStr for MacAddr {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ElementError::InvalidMac {
            input: s.to_string(),
        };
        let mut octets = [0u8; 6];
        let mut parts = s.split(':');
        for slot in octets.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.len() != 2 {
                return Err(invalid());
            }
            *slot = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(MacAddr(octets))
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
