//! Entity source descriptions: one TOML file per model or enum.

mod enums;
mod model;

use std::{collections::HashSet, path::Path};

pub use enums::{CaseSource, CaseValue, EnumSource, ExportMarker, MethodSource, ServiceValue};
pub use model::{MemberSource, ModelSource, PivotSource, RelationKind, RelationSource};
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext, validate::validate_identifier};

/// Kind discriminator at the top of a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Model,
    Enum,
}

#[derive(Deserialize)]
struct SourceHeader {
    #[serde(default)]
    kind: SourceKind,
}

/// A parsed entity description.
#[derive(Debug, Clone)]
pub enum EntitySource {
    Model(ModelSource),
    Enum(EnumSource),
}

impl EntitySource {
    /// Parse an entity source file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_source(&content, &path.display().to_string())
    }

    /// Parse an entity source with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_source(content, filename)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Model(m) => &m.name,
            Self::Enum(e) => &e.name,
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Model(_) => SourceKind::Model,
            Self::Enum(_) => SourceKind::Enum,
        }
    }

    pub fn as_model(&self) -> Option<&ModelSource> {
        match self {
            Self::Model(m) => Some(m),
            Self::Enum(_) => None,
        }
    }
}

fn parse_source(content: &str, filename: &str) -> Result<EntitySource> {
    let ctx = SourceContext::new(content, filename);
    let header: SourceHeader = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let source = match header.kind {
        SourceKind::Model => {
            let model: ModelSource = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
            validate_model(&model, &ctx)?;
            EntitySource::Model(model)
        }
        SourceKind::Enum => {
            let source: EnumSource = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
            validate_enum(&source, &ctx)?;
            EntitySource::Enum(source)
        }
    };
    Ok(source)
}

fn validate_name(name: &str, context: &str, ctx: &SourceContext) -> Result<()> {
    match validate_identifier(name) {
        Some(reason) => Err(ctx.invalid_identifier_error(name, context, reason)),
        None => Ok(()),
    }
}

fn validate_model(model: &ModelSource, ctx: &SourceContext) -> Result<()> {
    validate_name(&model.name, "model", ctx)?;

    let mut seen = HashSet::new();
    for relation in &model.relations {
        if !seen.insert(relation.name.as_str()) {
            return Err(ctx.validation_error(format!(
                "relation '{}' is declared more than once",
                relation.name
            )));
        }
        if relation.target.trim().is_empty() {
            return Err(ctx.validation_error(format!(
                "relation '{}' has an empty target",
                relation.name
            )));
        }
        if let Some(pivot) = &relation.pivot {
            if pivot.table.trim().is_empty() {
                return Err(ctx.validation_error(format!(
                    "relation '{}' has an empty pivot table",
                    relation.name
                )));
            }
        }
    }

    for member in &model.members {
        if member.name.trim().is_empty() {
            return Err(ctx.validation_error_near("member name cannot be empty", "name"));
        }
    }
    Ok(())
}

fn validate_enum(source: &EnumSource, ctx: &SourceContext) -> Result<()> {
    validate_name(&source.name, "enum", ctx)?;

    let mut seen = HashSet::new();
    for case in &source.cases {
        validate_name(&case.name, "enum case", ctx)?;
        if !seen.insert(case.name.as_str()) {
            return Err(ctx.validation_error(format!(
                "enum case '{}' is declared more than once",
                case.name
            )));
        }
    }

    let mut exports = HashSet::new();
    for method in &source.methods {
        if let Some(export) = method.export_name() {
            if !exports.insert(export) {
                return Err(ctx.validation_error(format!(
                    "export name '{export}' is used by more than one method"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults_to_model() {
        let source = EntitySource::from_str_with_filename(
            "namespace = \"App\\\\Models\"\nname = \"Tag\"\ntable = \"tags\"\n",
            "Tag.toml",
        )
        .unwrap();
        let model = source.as_model().unwrap();
        assert_eq!(model.qualified_name(), "App\\Models\\Tag");
        assert_eq!(model.table.as_deref(), Some("tags"));
        assert_eq!(source.kind(), SourceKind::Model);
    }

    #[test]
    fn test_parse_enum() {
        let source = EntitySource::from_str_with_filename(
            "kind = \"enum\"\nname = \"Permissions\"\n[[cases]]\nname = \"ADMIN\"\nvalue = 1\n",
            "Permissions.toml",
        )
        .unwrap();
        assert_eq!(source.kind(), SourceKind::Enum);
        assert_eq!(source.name(), "Permissions");
        assert!(source.as_model().is_none());
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = EntitySource::from_str_with_filename("kind = \"trait\"\nname = \"X\"\n", "X.toml")
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_relation_kind_is_parse_error() {
        let err = EntitySource::from_str_with_filename(
            "name = \"Tag\"\n[[relations]]\nname = \"x\"\nkind = \"has_some\"\ntarget = \"Y\"\n",
            "Tag.toml",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_model_name() {
        let err =
            EntitySource::from_str_with_filename("name = \"Bad-Name\"\n", "Bad.toml").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_duplicate_relation_rejected() {
        let err = EntitySource::from_str_with_filename(
            r#"
            name = "Tag"
            [[relations]]
            name = "users"
            kind = "has_many"
            target = "User"
            [[relations]]
            name = "users"
            kind = "has_many"
            target = "User"
            "#,
            "Tag.toml",
        )
        .unwrap_err();
        assert!(err.to_string().contains("declared more than once"));
    }

    #[test]
    fn test_duplicate_export_name_rejected() {
        let err = EntitySource::from_str_with_filename(
            r#"
            kind = "enum"
            name = "Permissions"
            [[methods]]
            name = "a"
            export = "shared"
            [[methods]]
            name = "b"
            export = "shared"
            "#,
            "Permissions.toml",
        )
        .unwrap_err();
        assert!(err.to_string().contains("'shared'"));
    }
}
