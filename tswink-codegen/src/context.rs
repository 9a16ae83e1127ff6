//! Per-render generation context.

use std::collections::HashMap;

use crate::options::GenerationOptions;

/// How a single file is rendered: the run options plus whether this is the
/// regular model or its `New<Name>` variant.
///
/// New-model renders force every property optional, skip the required-subset
/// wrapper, and rename model references through the type mapping.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    options: GenerationOptions,
    new_model: bool,
    force_optional: bool,
    type_mappings: HashMap<String, String>,
}

impl GenerationContext {
    pub fn regular(options: &GenerationOptions) -> Self {
        Self {
            options: options.clone(),
            new_model: false,
            force_optional: options.force_optional,
            type_mappings: HashMap::new(),
        }
    }

    pub fn new_model(options: &GenerationOptions) -> Self {
        Self {
            options: options.clone(),
            new_model: true,
            force_optional: true,
            type_mappings: HashMap::new(),
        }
    }

    /// Rename `original` to `renamed` wherever a type name is rendered.
    pub fn with_type_mapping(
        mut self,
        original: impl Into<String>,
        renamed: impl Into<String>,
    ) -> Self {
        self.type_mappings.insert(original.into(), renamed.into());
        self
    }

    pub fn mapped_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.type_mappings
            .get(name)
            .map(String::as_str)
            .unwrap_or(name)
    }

    pub fn is_for_new_model(&self) -> bool {
        self.new_model
    }

    pub fn interface(&self) -> bool {
        self.options.interface
    }

    pub fn force_optional(&self) -> bool {
        self.force_optional
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn terminator(&self) -> &'static str {
        self.options.terminator()
    }
}
