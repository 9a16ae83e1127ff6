//! Enum entity descriptions and build-time evaluation of service methods.

use serde::Deserialize;
use tswink_core::qualify;

#[derive(Debug, Clone, Deserialize)]
pub struct EnumSource {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub cases: Vec<CaseSource>,
    #[serde(default)]
    pub methods: Vec<MethodSource>,
}

impl EnumSource {
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    pub fn has_case(&self, name: &str) -> bool {
        self.cases.iter().any(|c| c.name == name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseSource {
    pub name: String,
    /// Backing value; pure cases have none
    #[serde(default)]
    pub value: Option<CaseValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CaseValue {
    Integer(i64),
    String(String),
}

/// Export marker on a method: `true`, `false`, or an explicit export name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ExportMarker {
    Flag(bool),
    Named(String),
}

impl Default for ExportMarker {
    fn default() -> Self {
        Self::Flag(false)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodSource {
    pub name: String,
    #[serde(default = "yes")]
    pub public: bool,
    #[serde(default = "yes", rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub export: ExportMarker,
    /// The value the method evaluates to
    #[serde(default)]
    pub returns: Option<toml::Value>,
    /// Evaluation fails with this message
    #[serde(default)]
    pub throws: Option<String>,
}

fn yes() -> bool {
    true
}

impl MethodSource {
    /// Name under which the method is exported, if it is exported at all.
    ///
    /// Only public static methods can be exported.
    pub fn export_name(&self) -> Option<&str> {
        if !self.public || !self.is_static {
            return None;
        }
        match &self.export {
            ExportMarker::Flag(true) => Some(&self.name),
            ExportMarker::Flag(false) => None,
            ExportMarker::Named(name) => Some(name),
        }
    }

    /// Evaluate the method on its declaring enum.
    ///
    /// Returns the failure message when the method throws.
    pub fn evaluate(&self, declaring: &EnumSource) -> std::result::Result<ServiceValue, String> {
        if let Some(message) = &self.throws {
            return Err(message.clone());
        }
        Ok(match &self.returns {
            Some(value) => ServiceValue::from_toml(value, declaring),
            None => ServiceValue::Null,
        })
    }
}

/// A value produced by evaluating an enum service method.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceValue {
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<ServiceValue>),
    Object,
    /// A case of some enum, identified by the enum's qualified name
    Case { enum_name: String, case: String },
}

impl ServiceValue {
    /// Convert a TOML value; tables with a `case` key are enum case references.
    pub fn from_toml(value: &toml::Value, declaring: &EnumSource) -> Self {
        match value {
            toml::Value::String(s) => Self::String(s.clone()),
            toml::Value::Integer(i) => Self::Integer(*i),
            toml::Value::Float(f) => Self::Float(*f),
            toml::Value::Boolean(b) => Self::Boolean(*b),
            toml::Value::Datetime(dt) => Self::String(dt.to_string()),
            toml::Value::Array(items) => {
                Self::Array(items.iter().map(|v| Self::from_toml(v, declaring)).collect())
            }
            toml::Value::Table(table) => match table.get("case").and_then(|c| c.as_str()) {
                Some(case) => {
                    let enum_name = match table.get("enum").and_then(|e| e.as_str()) {
                        Some(e) if e.contains('\\') => e.trim_start_matches('\\').to_string(),
                        Some(e) => qualify(&declaring.namespace, e),
                        None => declaring.qualified_name(),
                    };
                    Self::Case {
                        enum_name,
                        case: case.to_string(),
                    }
                }
                None => Self::Object,
            },
        }
    }

    /// Runtime type name used in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Object => "object",
            Self::Case { enum_name, .. } => enum_name,
        }
    }
}
