// Code generated by nullgen. DO NOT EDIT.
//
// Null-aware JSON wrapper for `fixtures::Data`.
// Needs serde_json's `raw_value` feature.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::fixtures::Data;

/// A `Data` that may be absent, `null` or `""` on the JSON boundary.
///
/// All three absent spellings decode to `Invalid`; `Invalid` encodes as `null`.
/// `Data` only has to be `Clone` and serde-capable.
#[derive(Clone, Default)]
pub enum NullableData {
    #[default]
    Invalid,
    Valid(Data),
}

impl NullableData {
    pub fn from_value(value: Data) -> Self {
        Self::Valid(value)
    }

    pub fn from_ref(value: Option<&Data>) -> Self {
        match value {
            Some(v) => Self::Valid(v.clone()),
            None => Self::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn extract(&self) -> Option<&Data> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid => None,
        }
    }

    pub fn extract_cloned(&self) -> Option<Data> {
        self.extract().cloned()
    }

    pub fn into_option(self) -> Option<Data> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid => None,
        }
    }

    /// On error `self` is left as it was; treat it as needing a reset.
    pub fn decode(&mut self, bytes: &[u8]) -> serde_json::Result<()> {
        *self = match bytes {
            b"" | b"\"\"" | b"null" => Self::Invalid,
            _ => serde_json::from_slice(bytes)?,
        };
        Ok(())
    }

    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl From<Option<Data>> for NullableData {
    fn from(value: Option<Data>) -> Self {
        match value {
            Some(v) => Self::Valid(v),
            None => Self::Invalid,
        }
    }
}

impl From<NullableData> for Option<Data> {
    fn from(value: NullableData) -> Self {
        value.into_option()
    }
}

impl Serialize for NullableData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid(v) => v.serialize(serializer),
            Self::Invalid => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullableData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        match raw.get() {
            "null" | "\"\"" => Ok(Self::Invalid),
            json => serde_json::from_str(json)
                .map(Self::Valid)
                .map_err(D::Error::custom),
        }
    }
}
