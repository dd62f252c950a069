pub mod config;
pub mod error;
pub mod nullable;
pub mod output;
pub mod render;
pub mod template;

use std::path::PathBuf;

use crate::config::Param;
use crate::error::Result;
use crate::output::OutputSink;
use crate::render::generate_bundled;

pub use crate::nullable::Nullable;

/// Raw generation input, as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub package: Option<String>,
    pub type_name: Option<String>,
    pub dest: Option<PathBuf>,
}

/// Outcome of a completed generation.
pub struct Generated {
    pub param: Param,
    pub sink: OutputSink,
    pub bytes: usize,
}

/// Validate parameters, render the bundled template and write it out.
///
/// Nothing reaches the sink unless validation and rendering both succeed.
pub fn run_generation(options: GenerateOptions) -> Result<Generated> {
    let param = Param::new(options.package, options.type_name)?;
    let rendered = generate_bundled(&param)?;

    let sink = OutputSink::from_dest(options.dest);
    sink.write(&rendered)?;

    Ok(Generated {
        param,
        sink,
        bytes: rendered.len(),
    })
}
