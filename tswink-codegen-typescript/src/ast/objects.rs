//! Exported object literals: the constants container of interface files and
//! the service object of enum files.

use tswink_codegen::{CodeFragment, Renderable};

/// A property in an object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A raw expression, emitted as is.
    Raw(String),
    /// An arrow function.
    ArrowFn(ArrowFn),
}

/// An arrow function for use as a property value.
#[derive(Debug, Clone, Default)]
pub struct ArrowFn {
    pub params: String,
    pub body: Vec<CodeFragment>,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            body: Vec::new(),
        }
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }
}

/// `export const <name> = { ... }`, closed without a terminator.
#[derive(Debug, Clone)]
pub struct ExportedObject {
    name: String,
    properties: Vec<Property>,
}

impl ExportedObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property with a raw expression value.
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        });
        self
    }

    /// Add an arrow function property.
    pub fn arrow_fn(mut self, key: impl Into<String>, value: ArrowFn) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::ArrowFn(value),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Renderable for ExportedObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .properties
            .iter()
            .map(|prop| match &prop.value {
                PropertyValue::Raw(value) => CodeFragment::Line(format!("{}: {value},", prop.key)),
                PropertyValue::ArrowFn(func) => CodeFragment::Block {
                    header: format!("{}: ({}) => {{", prop.key, func.params),
                    body: func.body.clone(),
                    close: Some("},".to_string()),
                },
            })
            .collect();

        vec![CodeFragment::Block {
            header: format!("export const {} = {{", self.name),
            body,
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use tswink_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_raw_properties() {
        let object = ExportedObject::new("TagConstants")
            .raw("MAX", "10")
            .raw("LABEL", "'tag'");
        let mut builder = CodeBuilder::default();
        builder.emit(&object);
        assert_eq!(
            builder.build(),
            "export const TagConstants = {\n    MAX: 10,\n    LABEL: 'tag',\n}\n"
        );
    }

    #[test]
    fn test_arrow_fn_property() {
        let object = ExportedObject::new("StatusService").arrow_fn(
            "open",
            ArrowFn::new("").body_line("return [];"),
        );
        let mut builder = CodeBuilder::default();
        builder.emit(&object);
        assert_eq!(
            builder.build(),
            "export const StatusService = {\n    open: () => {\n        return [];\n    },\n}\n"
        );
    }
}
