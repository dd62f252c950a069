#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Failed to decode nullable JSON value")]
    #[diagnostic(help("Expected null, \"\", empty input, or a JSON value of the wrapped type"))]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode nullable JSON value")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}
