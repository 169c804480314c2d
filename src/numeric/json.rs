// ============================================================================
// JSON Codec
// Int is always a JSON string, never a JSON number
// ============================================================================

use super::int::Int;
use super::nullable::NullableInt;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

impl Serialize for Int {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.marshal_text())
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(IntVisitor)
    }
}

struct IntVisitor;

impl<'de> Visitor<'de> for IntVisitor {
    type Value = Int;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("string-encoded integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Int::unmarshal_text(v).map_err(E::custom)
    }
}

// Nil has no JSON form of its own; it is written as zero.
impl Serialize for NullableInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.get() {
            Some(value) => value.serialize(serializer),
            None => Int::zero().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for NullableInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Int::deserialize(deserializer).map(NullableInt::from)
    }
}

impl Int {
    /// JSON bytes: the canonical decimal string, quoted.
    pub fn marshal_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decode a JSON string holding a decimal integer.
    pub fn unmarshal_json(bz: &[u8]) -> serde_json::Result<Int> {
        serde_json::from_slice(bz)
    }
}

impl NullableInt {
    /// JSON bytes; nil encodes as `"0"`.
    pub fn marshal_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn unmarshal_json(bz: &[u8]) -> serde_json::Result<NullableInt> {
        serde_json::from_slice(bz)
    }
}
