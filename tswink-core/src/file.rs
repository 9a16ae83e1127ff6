use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Read a previously generated file; `None` when nothing is there yet.
pub fn read_existing(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).wrap_err_with(|| format!("failed to read '{}'", path.display())),
    }
}

/// Outcome of [`File::write`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file on disk already had this content
    Unchanged,
}

/// A generated file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, creating parent directories. Identical content on
    /// disk is left untouched.
    pub fn write(&self) -> Result<WriteResult> {
        if read_existing(&self.path)?.as_deref() == Some(self.content.as_str()) {
            return Ok(WriteResult::Unchanged);
        }
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;
        }
        std::fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        Ok(WriteResult::Written)
    }
}
