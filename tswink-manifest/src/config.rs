//! Project configuration (`tswink.toml`).

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, error::SourceContext, validate::validate_identifier};

/// Root configuration for tswink.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Output destinations
    pub output: OutputConfig,

    /// Where entity descriptions and the relational schema live
    pub sources: SourcesConfig,

    /// Rendering options
    #[serde(default)]
    pub options: OptionsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination directory for model and pivot files
    pub classes: PathBuf,
    /// Destination directory for enum files
    pub enums: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// Entity description files or directories (scanned recursively for `*.toml`)
    pub entities: Vec<PathBuf>,
    /// Relational schema file
    #[serde(default)]
    pub schema: Option<PathBuf>,
}

/// Quote character used for generated string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    Single,
    Double,
}

impl QuoteStyle {
    pub fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }

    /// Wrap `text` in quotes, escaping backslashes and the quote character.
    pub fn quote(self, text: &str) -> String {
        let q = self.as_char();
        let mut out = String::with_capacity(text.len() + 2);
        out.push(q);
        for c in text.chars() {
            if c == q || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(q);
        out
    }
}

/// Indentation as written in tswink.toml: a number of spaces or `"tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndentConfig {
    Spaces(u8),
    Keyword(IndentKeyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentKeyword {
    Tab,
}

/// The `[options]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsConfig {
    pub indent: IndentConfig,
    pub import_quotes: QuoteStyle,
    pub string_quotes: QuoteStyle,
    /// Render interfaces instead of classes
    pub interface: bool,
    pub semicolons: bool,
    /// Mark every property optional
    pub force_optional: bool,
    /// Also emit `New<Name>` variants of every model
    pub separate_new_models: bool,
    /// Base type injected into every model
    pub base_class: Option<String>,
    /// Module exporting the `SetRequired` utility type
    pub required_subset_module: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            indent: IndentConfig::Spaces(4),
            import_quotes: QuoteStyle::Double,
            string_quotes: QuoteStyle::Single,
            interface: false,
            semicolons: true,
            force_optional: true,
            separate_new_models: false,
            base_class: None,
            required_subset_module: "type-fest".to_string(),
        }
    }
}

impl FromStr for ProjectConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "tswink.toml")
    }
}

impl ProjectConfig {
    /// Parse a tswink.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a tswink.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<ProjectConfig> {
    let ctx = SourceContext::new(content, filename);
    let config: ProjectConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

fn validate_config(config: &ProjectConfig, ctx: &SourceContext) -> Result<()> {
    if config.sources.entities.is_empty() {
        return Err(ctx.validation_error_near(
            "at least one entity source path is required",
            "entities",
        ));
    }

    let options = &config.options;
    if let IndentConfig::Spaces(n) = options.indent {
        if n == 0 || n > 16 {
            return Err(ctx.validation_error_near(
                format!("indent must be between 1 and 16 spaces, got {n}"),
                "indent",
            ));
        }
    }

    if let Some(base) = &options.base_class {
        if let Some(reason) = validate_identifier(base) {
            return Err(ctx.invalid_identifier_error(base, "base class", reason));
        }
    }

    if options.required_subset_module.trim().is_empty() {
        return Err(ctx.validation_error_near(
            "required_subset_module cannot be empty",
            "required_subset_module",
        ));
    }

    Ok(())
}
