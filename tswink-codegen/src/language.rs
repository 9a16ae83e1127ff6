//! The interface between the CLI and a target-language generator.

use std::path::PathBuf;

use eyre::Result;

/// A target-language generator for a loaded project.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension of generated files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render every output file in memory without touching the disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Render and write every output file
    fn generate(&self) -> Result<GenerateResult>;
}

/// A rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content changed or that did not exist
    pub written: Vec<PathBuf>,
    /// Files already identical to the rendered output
    pub unchanged: Vec<PathBuf>,
}
