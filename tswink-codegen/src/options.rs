//! Rendering options for a generation run.

use tswink_manifest::{OptionsConfig, QuoteStyle};

use crate::builder::Indent;

/// Output formatting and shape options, shared by every file of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub indent: Indent,
    /// Quote style for module specifiers in import lines
    pub import_quotes: QuoteStyle,
    /// Quote style for string literal values
    pub string_quotes: QuoteStyle,
    /// Render structural interfaces instead of classes
    pub interface: bool,
    pub semicolons: bool,
    pub force_optional: bool,
    pub separate_new_models: bool,
    pub base_class: Option<String>,
    pub required_subset_module: String,
}

impl GenerationOptions {
    /// Statement terminator.
    pub fn terminator(&self) -> &'static str {
        if self.semicolons { ";" } else { "" }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::from(&OptionsConfig::default())
    }
}

impl From<&OptionsConfig> for GenerationOptions {
    fn from(config: &OptionsConfig) -> Self {
        Self {
            indent: config.indent.into(),
            import_quotes: config.import_quotes,
            string_quotes: config.string_quotes,
            interface: config.interface,
            semicolons: config.semicolons,
            force_optional: config.force_optional,
            separate_new_models: config.separate_new_models,
            base_class: config.base_class.clone(),
            required_subset_module: config.required_subset_module.clone(),
        }
    }
}
