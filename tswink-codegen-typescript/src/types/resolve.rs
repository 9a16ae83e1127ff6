//! Turning type signals into TypeScript type descriptors.

use std::collections::HashSet;

use log::warn;
use tswink_core::base_name;

use super::{
    descriptor::{ANY, TypeDescriptor, UNDEFINED},
    signal::TypeSignal,
};

/// Resolves signals against the names an entity imports.
///
/// Entity names that are not imported resolve to `any`, as does anything
/// the resolver does not understand. A union with an `any` branch is `any`.
#[derive(Debug, Clone, Default)]
pub struct TypeResolver {
    known: HashSet<String>,
}

impl TypeResolver {
    pub fn new(known: impl IntoIterator<Item = String>) -> Self {
        Self {
            known: known.into_iter().collect(),
        }
    }

    /// Parse and resolve a textual signal; malformed input resolves to `any`.
    pub fn resolve_str(&self, signal: &str) -> Vec<TypeDescriptor> {
        match signal.parse::<TypeSignal>() {
            Ok(parsed) => self.resolve(&parsed),
            Err(e) => {
                warn!("{e}; using {ANY}");
                vec![TypeDescriptor::any()]
            }
        }
    }

    pub fn resolve(&self, signal: &TypeSignal) -> Vec<TypeDescriptor> {
        match signal {
            TypeSignal::Named(name) => vec![TypeDescriptor::named(self.named(name))],
            TypeSignal::Nullable(inner) => self.resolve(&TypeSignal::Union(vec![
                (**inner).clone(),
                TypeSignal::Named("null".to_string()),
            ])),
            TypeSignal::Union(items) => {
                let mut resolved: Vec<TypeDescriptor> = Vec::new();
                for item in items {
                    for descriptor in self.resolve(item) {
                        if descriptor.is_any() {
                            return vec![TypeDescriptor::any()];
                        }
                        if !resolved.contains(&descriptor) {
                            resolved.push(descriptor);
                        }
                    }
                }
                resolved
            }
            TypeSignal::Generic { name, args } if is_collection_class(name) => {
                let Some(element) = args.last() else {
                    return vec![TypeDescriptor::any()];
                };
                self.resolve(element)
                    .into_iter()
                    .map(TypeDescriptor::collection)
                    .collect()
            }
            TypeSignal::Generic { name, .. } => vec![TypeDescriptor::named(self.named(name))],
            TypeSignal::List { .. } | TypeSignal::Shape(_) => {
                vec![TypeDescriptor::named(self.expression(signal))]
            }
        }
    }

    fn named(&self, name: &str) -> String {
        let short = base_name(name);
        let target = match short.to_ascii_lowercase().as_str() {
            "int" | "integer" | "float" | "double" | "number" | "numeric" => "number",
            "bool" | "boolean" | "true" | "false" => "boolean",
            "string" | "non-empty-string" | "class-string" => "string",
            "null" | "void" => UNDEFINED,
            "array" | "list" | "iterable" => "Array<any>",
            _ if self.known.contains(short) => short,
            _ => ANY,
        };
        target.to_string()
    }

    /// Inline TypeScript text for a nested signal.
    fn expression(&self, signal: &TypeSignal) -> String {
        match signal {
            TypeSignal::Named(name) => match self.named(name).as_str() {
                UNDEFINED => "null".to_string(),
                other => other.to_string(),
            },
            TypeSignal::Nullable(inner) => {
                let inner = self.expression(inner);
                if inner == ANY {
                    inner
                } else {
                    format!("{inner} | null")
                }
            }
            TypeSignal::Union(items) => {
                let mut parts: Vec<String> = Vec::new();
                for item in items {
                    let part = self.expression(item);
                    if part == ANY {
                        return part;
                    }
                    if !parts.contains(&part) {
                        parts.push(part);
                    }
                }
                parts.join(" | ")
            }
            TypeSignal::List { key: None, value } => format!("Array<{}>", self.expression(value)),
            TypeSignal::List {
                key: Some(key),
                value,
            } => format!(
                "{{ [key: {}]: {} }}",
                self.expression(key),
                self.expression(value)
            ),
            TypeSignal::Shape(fields) if fields.is_empty() => "{}".to_string(),
            TypeSignal::Shape(fields) => {
                let fields = fields
                    .iter()
                    .map(|field| {
                        let mark = if field.optional { "?" } else { "" };
                        format!("{}{mark}: {}", field.key, self.expression(&field.ty))
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{ {fields} }}")
            }
            TypeSignal::Generic { name, args } if is_collection_class(name) => match args.last() {
                Some(element) => format!("Array<{}>", self.expression(element)),
                None => ANY.to_string(),
            },
            TypeSignal::Generic { name, .. } => self.named(name),
        }
    }
}

fn is_collection_class(name: &str) -> bool {
    base_name(name) == "Collection"
}
