//! Resolved target-language type references.

use indexmap::IndexSet;
use tswink_codegen::GenerationContext;

pub const UNDEFINED: &str = "undefined";
pub const ANY: &str = "any";
pub const DATE: &str = "Date";

const PRIMITIVES: &[&str] = &["string", "number", "boolean", ANY, UNDEFINED, "null"];

/// One alternative of a member's type union.
///
/// `undefined` never renders; it only marks the member optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    is_collection: bool,
    force_primitive: bool,
    pivot_required_columns: Option<IndexSet<String>>,
    pivot_accessor_name: Option<String>,
}

impl TypeDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_collection: false,
            force_primitive: false,
            pivot_required_columns: None,
            pivot_accessor_name: None,
        }
    }

    pub fn any() -> Self {
        Self::named(ANY)
    }

    pub fn undefined() -> Self {
        Self::named(UNDEFINED)
    }

    pub fn collection(mut self) -> Self {
        self.is_collection = true;
        self
    }

    /// Never construct values of this type, even if it names an entity.
    pub fn forced_primitive(mut self) -> Self {
        self.force_primitive = true;
        self
    }

    /// Require these pivot columns in the rendered type.
    pub fn with_required_columns(mut self, columns: IndexSet<String>) -> Self {
        self.pivot_required_columns = Some(columns);
        self
    }

    /// Require the pivot accessor property in the rendered type.
    pub fn with_pivot_accessor(mut self, accessor: impl Into<String>) -> Self {
        self.pivot_accessor_name = Some(accessor.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_collection(&self) -> bool {
        self.is_collection
    }

    pub fn is_force_primitive(&self) -> bool {
        self.force_primitive
    }

    pub fn is_any(&self) -> bool {
        self.name == ANY
    }

    pub fn is_undefined(&self) -> bool {
        self.name == UNDEFINED
    }

    pub fn is_date(&self) -> bool {
        self.name == DATE
    }

    pub fn is_primitive(&self) -> bool {
        PRIMITIVES.contains(&self.name.as_str())
    }

    /// Whether a constructor can wrap raw values in `new Name(...)`.
    pub fn is_constructible(&self) -> bool {
        !self.force_primitive
            && !self.is_primitive()
            && !self.is_date()
            && self
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// The keys a regular render wraps this type with, if any.
    fn required_keys(&self) -> Option<Vec<&str>> {
        match (&self.pivot_required_columns, &self.pivot_accessor_name) {
            (Some(columns), _) if !columns.is_empty() => {
                Some(columns.iter().map(String::as_str).collect())
            }
            (_, Some(accessor)) => Some(vec![accessor.as_str()]),
            _ => None,
        }
    }

    /// Whether a regular render needs the required-subset utility type.
    pub fn needs_required_subset(&self) -> bool {
        self.required_keys().is_some()
    }

    pub fn render(&self, ctx: &GenerationContext) -> String {
        let name = ctx.mapped_name(&self.name);
        let mut text = if self.is_date() && ctx.interface() {
            "string".to_string()
        } else {
            name.to_string()
        };

        if !ctx.is_for_new_model() {
            if let Some(keys) = self.required_keys() {
                let quotes = ctx.options().string_quotes;
                let keys = keys
                    .iter()
                    .map(|key| quotes.quote(key))
                    .collect::<Vec<_>>()
                    .join(" | ");
                text = format!("SetRequired<{text}, {keys}>");
            }
        }

        if self.is_collection {
            text.push_str("[]");
        }
        text
    }
}
