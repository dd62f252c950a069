#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum NullgenError {
    #[error("Flag {name} is empty")]
    #[diagnostic(help("Pass a non-empty value with --{name}"))]
    MissingParameter { name: &'static str },

    #[error("Failed to parse the nullable template")]
    #[diagnostic(help("The bundled template is broken; this is a packaging bug, not a usage error"))]
    TemplateParse {
        #[source]
        source: tera::Error,
    },

    #[error("Template rendering failed")]
    #[diagnostic(help("--package must be a Rust module path and --type a Rust identifier"))]
    Render {
        #[source]
        source: tera::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, NullgenError>;
