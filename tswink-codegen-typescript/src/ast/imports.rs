//! TypeScript import builder.

use tswink_manifest::QuoteStyle;

/// Builder for TypeScript import statements.
///
/// Import lines are rendered without a statement terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type ...`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    /// Render the import line, quoting the module with `quotes`.
    pub fn render(&self, quotes: QuoteStyle) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        let from = quotes.quote(&self.from);

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {type_kw}{def} from {from}"),
            (Some(def), false) => format!(
                "import {type_kw}{def}, {{ {} }} from {from}",
                self.named.join(", ")
            ),
            (None, false) => format!(
                "import {type_kw}{{ {} }} from {from}",
                self.named.join(", ")
            ),
            (None, true) => format!("import {from}"),
        }
    }
}
