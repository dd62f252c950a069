//! Null-aware wrapper for values that cross a JSON boundary.
//!
//! A field that is omitted, explicitly `null`, or the empty string `""` all
//! mean "no value". [`Nullable`] collapses those spellings into a single
//! [`Nullable::Invalid`] state and offers extraction that never panics.
//!
//! ```
//! use nullgen::Nullable;
//!
//! let mut n: Nullable<u32> = Nullable::default();
//! n.decode(b"null").unwrap();
//! assert_eq!(n.extract(), None);
//!
//! n.decode(b"7").unwrap();
//! assert_eq!(n.extract(), Some(&7));
//! assert_eq!(n.encode().unwrap(), b"7");
//! ```

mod codec;
mod error;

pub use error::Error;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// The JSON spellings of "no value" that [`Nullable::decode`] accepts
/// without parsing.
const ABSENT_SPELLINGS: [&[u8]; 3] = [b"", b"\"\"", b"null"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullable<T> {
    /// Absent, `null`, or `""`.
    #[default]
    Invalid,
    Valid(T),
}

impl<T> Nullable<T> {
    /// Wrap a value that is known to be present. Always valid.
    pub fn from_value(value: T) -> Self {
        Nullable::Valid(value)
    }

    /// Wrap a borrowed, possibly absent value. The wrapper owns a clone,
    /// never the caller's data.
    pub fn from_ref(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self::from_option(value.cloned())
    }

    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Valid(v),
            None => Nullable::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Nullable::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The held value, if and only if the wrapper is valid.
    pub fn extract(&self) -> Option<&T> {
        match self {
            Nullable::Valid(v) => Some(v),
            Nullable::Invalid => None,
        }
    }

    pub fn extract_cloned(&self) -> Option<T>
    where
        T: Clone,
    {
        self.extract().cloned()
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Valid(v) => Some(v),
            Nullable::Invalid => None,
        }
    }
}

impl<T: DeserializeOwned> Nullable<T> {
    /// Replace `self` with the value decoded from `bytes`.
    ///
    /// Empty input, `""` and `null` give [`Nullable::Invalid`]. Any other
    /// input must be JSON for `T`. On error `self` is not modified, but
    /// callers should reset it before relying on it again.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<(), Error> {
        *self = if ABSENT_SPELLINGS.contains(&bytes) {
            Nullable::Invalid
        } else {
            serde_json::from_slice(bytes).map_err(|e| Error::Decode { source: e })?
        };
        Ok(())
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        let mut nullable = Nullable::Invalid;
        nullable.decode(bytes)?;
        Ok(nullable)
    }
}

impl<T: Serialize> Nullable<T> {
    /// `null` when invalid, otherwise exactly the JSON of the held value.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(|e| Error::Encode { source: e })
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Nullable::from_option(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}
