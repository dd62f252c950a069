use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{NullgenError, Result};

/// Where rendered source goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    pub fn from_dest(dest: Option<PathBuf>) -> Self {
        match dest {
            Some(path) => OutputSink::File(path),
            None => OutputSink::Stdout,
        }
    }

    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            OutputSink::Stdout => write_stdout(content),
            OutputSink::File(path) => write_file_atomic(path, content),
        }
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSink::Stdout => write!(f, "stdout"),
            OutputSink::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| NullgenError::Io {
            context: "writing to stdout".into(),
            source: e,
        })
}

/// Write through a temp file in the destination directory and rename it into
/// place, so the destination is either the old file or the complete new one.
fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir).map_err(|e| NullgenError::Io {
        context: format!("creating directory {}", dir.display()),
        source: e,
    })?;

    let io_err = |source: std::io::Error| NullgenError::Io {
        context: format!("writing {}", path.display()),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
