use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "nullgen",
    about = "Generate a null-aware JSON wrapper for a Rust type",
    version
)]
pub struct Cli {
    /// Name of the type to wrap (e.g. User)
    #[arg(short, long = "type", value_name = "TYPE")]
    pub type_name: Option<String>,

    /// Module path, relative to the crate root, that declares the type (e.g. models)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Report what was generated on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
