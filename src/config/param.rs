use crate::error::{NullgenError, Result};

/// Validated generation input: the module the generated file lives in and
/// the type it wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    package: String,
    type_name: String,
}

impl Param {
    /// Checks `type` before `package`, so a run missing both reports `type`.
    pub fn new(package: Option<String>, type_name: Option<String>) -> Result<Self> {
        let type_name = require("type", type_name)?;
        let package = require("package", package)?;
        Ok(Self { package, type_name })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Name of the generated wrapper, e.g. `NullableUser`.
    pub fn wrapper_name(&self) -> String {
        format!("Nullable{}", self.type_name)
    }
}

fn require(name: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(NullgenError::MissingParameter { name }),
    }
}
