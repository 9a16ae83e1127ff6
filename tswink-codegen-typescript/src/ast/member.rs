//! Class and interface members.

use tswink_codegen::GenerationContext;
use tswink_manifest::QuoteStyle;

use crate::types::{ANY, TypeDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Instance,
    /// `static readonly` in classes; moved to the constants container in
    /// interfaces
    Const,
}

/// One property of a generated entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub access: AccessKind,
    /// `None` renders as `any`
    pub types: Option<Vec<TypeDescriptor>>,
    /// Target-language source text, JSON-encoded unless `no_convert`
    pub initial_value: Option<String>,
    pub is_optional: bool,
    /// Hand-written member: never rendered and its value is never requoted
    pub no_convert: bool,
}

impl Member {
    pub fn instance(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessKind::Instance,
            types: None,
            initial_value: None,
            is_optional: false,
            no_convert: false,
        }
    }

    pub fn constant(name: impl Into<String>, initial_value: impl Into<String>) -> Self {
        Self {
            access: AccessKind::Const,
            initial_value: Some(initial_value.into()),
            ..Self::instance(name)
        }
    }

    /// An instance member typed by `types`; an `undefined` alternative makes
    /// it optional.
    pub fn typed(name: impl Into<String>, types: Vec<TypeDescriptor>) -> Self {
        Self::instance(name).with_types(types)
    }

    pub fn with_types(mut self, types: Vec<TypeDescriptor>) -> Self {
        if types.iter().any(TypeDescriptor::is_undefined) {
            self.is_optional = true;
        }
        self.types = Some(types);
        self
    }

    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn no_convert(mut self) -> Self {
        self.no_convert = true;
        self
    }

    pub fn is_const(&self) -> bool {
        self.access == AccessKind::Const
    }

    /// Rendered type alternatives, without `undefined`.
    pub fn rendered_types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter().flatten().filter(|t| !t.is_undefined())
    }

    /// The single rendered type alternative, if there is exactly one.
    pub fn sole_type(&self) -> Option<&TypeDescriptor> {
        let mut types = self.rendered_types();
        match (types.next(), types.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    pub fn is_sole_collection(&self) -> bool {
        self.sole_type().is_some_and(TypeDescriptor::is_collection)
    }

    /// The ` | ` joined union; `any` when nothing renders.
    pub fn type_union(&self, ctx: &GenerationContext) -> String {
        let mut parts: Vec<String> = Vec::new();
        for ty in self.rendered_types() {
            let rendered = ty.render(ctx);
            if !parts.contains(&rendered) {
                parts.push(rendered);
            }
        }
        if parts.is_empty() {
            ANY.to_string()
        } else {
            parts.join(" | ")
        }
    }

    /// Whether the rendered declaration carries the `?` marker.
    ///
    /// Sole collections in classes are only marked when every member is
    /// forced optional.
    pub fn renders_optional(&self, ctx: &GenerationContext) -> bool {
        if self.is_const() {
            return false;
        }
        ctx.force_optional() || ctx.interface() || !self.is_sole_collection()
    }

    /// The initial value as target source text.
    pub fn rendered_initial_value(&self, ctx: &GenerationContext) -> Option<String> {
        let value = self.initial_value.as_deref()?;
        Some(if self.no_convert {
            value.to_string()
        } else {
            requote(value, ctx.options().string_quotes)
        })
    }

    /// The declaration without its terminator.
    pub fn render(&self, ctx: &GenerationContext) -> String {
        let mut out = String::new();
        if !ctx.interface() {
            out.push_str("public ");
            if self.is_const() {
                out.push_str("static readonly ");
            }
        }
        out.push_str(&self.name);
        if self.renders_optional(ctx) {
            out.push('?');
        }
        out.push_str(": ");
        out.push_str(&self.type_union(ctx));
        if !ctx.interface() {
            if let Some(value) = self.rendered_initial_value(ctx) {
                out.push_str(" = ");
                out.push_str(&value);
            }
        }
        out
    }
}

/// Convert JSON-encoded text to the configured string quote style.
///
/// Escaped double quotes lose their escape, other escapes are kept, bare
/// double quotes become single quotes and single quotes get escaped.
pub fn requote(text: &str, style: QuoteStyle) -> String {
    if style == QuoteStyle::Double {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            '"' => out.push('\''),
            '\'' => out.push_str("\\'"),
            other => out.push(other),
        }
    }
    out
}
