use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use super::Nullable;

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Valid(v) => v.serialize(serializer),
            Nullable::Invalid => serializer.serialize_none(),
        }
    }
}

/// `null` and `""` become [`Nullable::Invalid`]; anything else must
/// deserialize as `T`.
///
/// The input is captured as raw JSON text and parsed once as `T`, so numbers
/// outside the `i64`/`u64` range reach `T` intact. This only works under a
/// serde_json deserializer.
impl<'de, T: DeserializeOwned> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        match raw.get() {
            "null" | "\"\"" => Ok(Nullable::Invalid),
            json => serde_json::from_str(json)
                .map(Nullable::Valid)
                .map_err(D::Error::custom),
        }
    }
}
