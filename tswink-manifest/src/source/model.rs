//! Model entity descriptions.

use indexmap::IndexMap;
use serde::Deserialize;
use tswink_core::qualify;

/// A relational model: reflected members, constants, relations and the
/// documentation block carrying `@property` tags.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSource {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    /// Backing table in the relational schema
    #[serde(default)]
    pub table: Option<String>,
    /// Explicit base type, overriding the configured base class
    #[serde(default)]
    pub extends: Option<String>,
    /// Documentation block with `@property` style tags
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub constants: IndexMap<String, toml::Value>,
    #[serde(default)]
    pub members: Vec<MemberSource>,
    #[serde(default)]
    pub relations: Vec<RelationSource>,
}

impl ModelSource {
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }
}

/// A declared member of a model.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberSource {
    pub name: String,
    /// Declared type signal; absent means the type is unknown
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    /// Computed accessor (`get<Name>Attribute` style)
    #[serde(default)]
    pub accessor: bool,
    /// Verbatim literal value; the member is carried but never converted
    #[serde(default)]
    pub literal: Option<String>,
}

/// The closed set of relation kinds a model may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    HasOne,
    BelongsTo,
    HasOneThrough,
    MorphOne,
    MorphTo,
    HasMany,
    BelongsToMany,
    HasManyThrough,
    MorphMany,
    MorphToMany,
}

impl RelationKind {
    /// Whether the relation yields a collection of related entities.
    pub fn is_to_many(self) -> bool {
        matches!(
            self,
            Self::HasMany
                | Self::BelongsToMany
                | Self::HasManyThrough
                | Self::MorphMany
                | Self::MorphToMany
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationSource {
    pub name: String,
    pub kind: RelationKind,
    /// Related entity, optionally namespace-qualified
    pub target: String,
    #[serde(default)]
    pub pivot: Option<PivotSource>,
}

/// Pivot (join table) data exposed on a relation.
#[derive(Debug, Clone, Deserialize)]
pub struct PivotSource {
    pub table: String,
    #[serde(default = "default_pivot_accessor")]
    pub accessor: String,
    /// Explicitly exposed columns; empty means infer from the schema
    #[serde(default)]
    pub columns: Vec<String>,
}

fn default_pivot_accessor() -> String {
    "pivot".to_string()
}
