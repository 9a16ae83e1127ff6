//! Assembling entities from their sources.
//!
//! Members are collected in a fixed order, each step overriding members of
//! the same name from the previous ones:
//!
//! 1. constants and declared members
//! 2. schema columns, then relations and their pivot accessors
//! 3. documented properties, with `@tswink-property` applied last
//! 4. the `qualifiedClassName` constant

use log::debug;
use serde_json::{Map, Number, Value};
use tswink_codegen::GenerationOptions;
use tswink_core::{base_name, to_camel_case, to_snake_case};
use tswink_manifest::{
    CaseValue, DocTagKind, EnumSource, MemberSource, ModelSource, Schema, parse_doc_properties,
};

use crate::{
    ast::Member,
    entity::{Entity, EntityImport, ImportOrigin},
    enums::service_methods,
    error::{Error, Result},
    pivot::{PivotRegistry, PivotUse},
    types::{ANY, TypeDescriptor, TypeResolver, column_type},
};

/// Name of the constant carrying the entity's fully qualified source name.
pub const QUALIFIED_NAME_CONSTANT: &str = "qualifiedClassName";

/// Builds entities for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct EntityBuilder<'a> {
    options: &'a GenerationOptions,
    schema: Option<&'a Schema>,
}

impl<'a> EntityBuilder<'a> {
    pub fn new(options: &'a GenerationOptions, schema: Option<&'a Schema>) -> Self {
        Self { options, schema }
    }

    /// Build a model entity. Its pivots must already be registered in `pivots`.
    pub fn build_model(&self, source: &ModelSource, pivots: &PivotRegistry<'_>) -> Result<Entity> {
        debug!("building model {}", source.qualified_name());

        let extends = source
            .extends
            .as_deref()
            .or(self.options.base_class.as_deref())
            .map(|base| base_name(base).to_string())
            .filter(|base| *base != source.name);
        let mut entity = Entity::model(&source.namespace, &source.name, extends);

        if let Some(base) = entity.extends().map(str::to_string) {
            entity.add_import(EntityImport::local(base, ImportOrigin::Base));
        }
        let mut pivot_members: Vec<(String, PivotUse)> = Vec::new();
        for relation in &source.relations {
            let target = base_name(&relation.target);
            if target != source.name {
                entity.add_import(EntityImport::local(target, ImportOrigin::Entity));
            }
            if let Some(pivot) = &relation.pivot {
                let used = pivots.reference(&relation.name, pivot)?;
                entity.add_import(EntityImport::local(&used.interface_name, ImportOrigin::Pivot));
                pivot_members.push((pivot.accessor.clone(), used));
            }
        }
        let resolver = TypeResolver::new(entity.import_names().chain([source.name.clone()]));

        for (name, value) in &source.constants {
            entity.insert_member(constant_member(name, value));
        }
        for member in &source.members {
            entity.insert_member(self.declared_member(member, &resolver));
        }

        if let Some(table_name) = &source.table {
            let table = self
                .schema
                .and_then(|s| s.table(table_name))
                .ok_or_else(|| Error::TableNotFound {
                    entity: source.name.clone(),
                    table: table_name.clone(),
                })?;
            for column in &table.columns {
                let ty = column_type(&column.ty).ok_or_else(|| Error::UnknownColumnType {
                    table: table_name.clone(),
                    column: column.name.clone(),
                    ty: column.ty.clone(),
                })?;
                let mut types = vec![TypeDescriptor::named(ty)];
                if column.nullable {
                    types.push(TypeDescriptor::undefined());
                }
                entity.insert_member(Member::typed(&column.name, types));
            }
        }

        for relation in &source.relations {
            let mut descriptor = TypeDescriptor::named(base_name(&relation.target));
            if relation.kind.is_to_many() {
                descriptor = descriptor.collection();
            }
            if let Some(pivot) = &relation.pivot {
                descriptor = descriptor.with_pivot_accessor(&pivot.accessor);
            }
            entity.insert_member(Member::typed(to_snake_case(&relation.name), vec![descriptor]));
        }
        for (accessor, used) in pivot_members {
            let descriptor = TypeDescriptor::named(used.interface_name)
                .with_required_columns(used.required)
                .forced_primitive();
            entity.insert_member(Member::typed(accessor, vec![descriptor]));
        }

        let documented = parse_doc_properties(&source.doc);
        let (overrides, regular): (Vec<_>, Vec<_>) = documented
            .into_iter()
            .filter(|p| p.kind != DocTagKind::Write)
            .partition(|p| p.kind == DocTagKind::Override);
        for property in regular.into_iter().chain(overrides) {
            let types = resolver
                .resolve_str(&property.ty)
                .into_iter()
                .map(TypeDescriptor::forced_primitive)
                .collect();
            entity.insert_member(Member::typed(property.name, types));
        }

        entity.insert_member(
            Member::constant(
                QUALIFIED_NAME_CONSTANT,
                Value::String(source.qualified_name()).to_string(),
            )
            .with_types(vec![TypeDescriptor::named("string")]),
        );

        let wraps = entity
            .members()
            .flat_map(Member::rendered_types)
            .any(TypeDescriptor::needs_required_subset);
        if wraps {
            entity.add_import(EntityImport::utility(&self.options.required_subset_module));
        }

        Ok(entity)
    }

    pub fn build_enum(&self, source: &EnumSource) -> Result<Entity> {
        debug!("building enum {}", source.qualified_name());

        let quotes = self.options.string_quotes;
        let mut entity = Entity::enumeration(&source.namespace, &source.name);
        for case in &source.cases {
            let value = match &case.value {
                Some(CaseValue::Integer(i)) => i.to_string(),
                Some(CaseValue::String(s)) => quotes.quote(s),
                None => quotes.quote(&case.name),
            };
            entity.insert_member(Member::constant(&case.name, value));
        }
        entity.set_service_methods(service_methods(source)?);
        Ok(entity)
    }

    fn declared_member(&self, member: &MemberSource, resolver: &TypeResolver) -> Member {
        if let Some(literal) = &member.literal {
            return Member::instance(&member.name)
                .with_initial_value(self.options.string_quotes.quote(literal))
                .no_convert();
        }

        let name = if member.accessor {
            accessor_property_name(&member.name)
        } else {
            member.name.clone()
        };
        match &member.ty {
            Some(ty) => Member::typed(name, resolver.resolve_str(ty)),
            None => Member::instance(name),
        }
    }
}

/// `getFullNameAttribute` and `fullName` both become `fullName`.
fn accessor_property_name(name: &str) -> String {
    let inner = name
        .strip_prefix("get")
        .and_then(|rest| rest.strip_suffix("Attribute"))
        .filter(|inner| !inner.is_empty())
        .unwrap_or(name);
    to_camel_case(inner)
}

fn constant_member(name: &str, value: &toml::Value) -> Member {
    Member::constant(name, to_json(value).to_string()).with_types(vec![constant_type(value)])
}

fn constant_type(value: &toml::Value) -> TypeDescriptor {
    if let Some(ty) = scalar_type(value) {
        return TypeDescriptor::named(ty);
    }
    match value {
        toml::Value::Array(items) => {
            let mut types = items.iter().map(scalar_type);
            let element = match types.next() {
                Some(Some(first)) if types.all(|ty| ty == Some(first)) => first,
                _ => ANY,
            };
            TypeDescriptor::named(format!("Array<{element}>"))
        }
        _ => TypeDescriptor::any(),
    }
}

fn scalar_type(value: &toml::Value) -> Option<&'static str> {
    match value {
        toml::Value::String(_) | toml::Value::Datetime(_) => Some("string"),
        toml::Value::Integer(_) | toml::Value::Float(_) => Some("number"),
        toml::Value::Boolean(_) => Some("boolean"),
        toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}

fn to_json(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::Number((*i).into()),
        toml::Value::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.iter().map(to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect::<Map<_, _>>(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
[[tables.users.columns]]
name = "id"
type = "bigint"

[[tables.users.columns]]
name = "email"
type = "string"

[[tables.users.columns]]
name = "deleted_at"
type = "datetime"
nullable = true
"#;

    fn model(text: &str) -> ModelSource {
        toml::from_str(text).expect("valid model source")
    }

    fn build(options: &GenerationOptions, text: &str) -> Result<Entity> {
        let schema: Schema = SCHEMA.parse().expect("valid schema");
        let source = model(text);
        let mut pivots = PivotRegistry::new(Some(&schema));
        pivots.register_model(&source)?;
        EntityBuilder::new(options, Some(&schema)).build_model(&source, &pivots)
    }

    fn type_names(entity: &Entity, member: &str) -> Vec<String> {
        entity
            .member(member)
            .unwrap_or_else(|| panic!("missing member {member}"))
            .types
            .iter()
            .flatten()
            .map(|t| t.name().to_string())
            .collect()
    }

    #[test]
    fn test_schema_columns() {
        let entity = build(
            &GenerationOptions::default(),
            "namespace = \"App\\\\Models\"\nname = \"User\"\ntable = \"users\"\n",
        )
        .expect("builds");

        assert_eq!(type_names(&entity, "id"), ["number"]);
        assert_eq!(type_names(&entity, "deleted_at"), ["Date", "undefined"]);
        assert!(entity.member("deleted_at").is_some_and(|m| m.is_optional));
        let qualified = entity
            .member(QUALIFIED_NAME_CONSTANT)
            .and_then(|m| m.initial_value.clone());
        assert_eq!(qualified.as_deref(), Some("\"App\\\\Models\\\\User\""));
    }

    #[test]
    fn test_missing_table() {
        let err = build(&GenerationOptions::default(), "name = \"Post\"\ntable = \"posts\"\n")
            .expect_err("table is missing");
        assert!(matches!(err, Error::TableNotFound { ref table, .. } if table == "posts"));
    }

    #[test]
    fn test_doc_properties_override_schema_and_write_only_is_skipped() {
        let entity = build(
            &GenerationOptions::default(),
            r#"
name = "User"
table = "users"
doc = """
@property int $email
@tswink-property string|null $email
@property-write string $password
@property-read \\Illuminate\\Support\\Collection<\\App\\Models\\User> $friends
"""
"#,
        )
        .expect("builds");

        assert_eq!(type_names(&entity, "email"), ["string", "undefined"]);
        assert!(entity.member("password").is_none());
        let friends = entity.member("friends").and_then(Member::sole_type).expect("typed");
        assert_eq!(friends.name(), "User");
        assert!(friends.is_collection());
        assert!(!friends.is_constructible());
    }

    #[test]
    fn test_constants_and_declared_members() {
        let entity = build(
            &GenerationOptions::default(),
            r#"
name = "User"

[constants]
LIMIT = 10
RATIO = 0.5
LABELS = ["a", "b"]
MIXED = ["a", 1]

[[members]]
name = "getFullNameAttribute"
type = "string"
accessor = true

[[members]]
name = "table"
literal = "users"
"#,
        )
        .expect("builds");

        let limit = entity.member("LIMIT").expect("constant");
        assert!(limit.is_const());
        assert_eq!(limit.initial_value.as_deref(), Some("10"));
        assert_eq!(type_names(&entity, "RATIO"), ["number"]);
        assert_eq!(type_names(&entity, "LABELS"), ["Array<string>"]);
        assert_eq!(type_names(&entity, "MIXED"), ["Array<any>"]);
        assert_eq!(
            entity.member("LABELS").and_then(|m| m.initial_value.as_deref()),
            Some("[\"a\",\"b\"]")
        );

        assert_eq!(type_names(&entity, "fullName"), ["string"]);
        let table = entity.member("table").expect("literal member");
        assert!(table.no_convert);
        assert_eq!(table.initial_value.as_deref(), Some("'users'"));
    }

    #[test]
    fn test_relations_imports_and_base() {
        let mut options = GenerationOptions::default();
        options.base_class = Some("BaseModel".to_string());
        let entity = build(
            &options,
            r#"
name = "User"

[[relations]]
name = "bestFriend"
kind = "has_one"
target = "App\\Models\\User"

[[relations]]
name = "posts"
kind = "has_many"
target = "App\\Models\\Post"
"#,
        )
        .expect("builds");

        assert_eq!(entity.extends(), Some("BaseModel"));
        let imports: Vec<_> = entity.imports().map(|i| i.symbol.as_str()).collect();
        assert_eq!(imports, ["BaseModel", "Post"]);

        let posts = entity.member("posts").and_then(Member::sole_type).expect("relation");
        assert!(posts.is_collection());
        assert_eq!(type_names(&entity, "best_friend"), ["User"]);
    }

    #[test]
    fn test_base_class_is_not_applied_to_itself() {
        let mut options = GenerationOptions::default();
        options.base_class = Some("BaseModel".to_string());
        let entity = build(&options, "name = \"BaseModel\"\n").expect("builds");
        assert_eq!(entity.extends(), None);
        assert_eq!(entity.imports().count(), 0);
    }

    #[test]
    fn test_accessor_property_name() {
        assert_eq!(accessor_property_name("getTestAccessorAttribute"), "testAccessor");
        assert_eq!(accessor_property_name("fullName"), "fullName");
        assert_eq!(accessor_property_name("getAttribute"), "getAttribute");
    }

    #[test]
    fn test_enum_cases() {
        let source: EnumSource = toml::from_str(
            r#"
name = "Status"

[[cases]]
name = "OPEN"
value = "open"

[[cases]]
name = "CLOSED"

[[cases]]
name = "ARCHIVED"
value = 3
"#,
        )
        .expect("valid enum");
        let entity = EntityBuilder::new(&GenerationOptions::default(), None)
            .build_enum(&source)
            .expect("builds");

        let values: Vec<_> = entity
            .members()
            .map(|m| (m.name.as_str(), m.initial_value.as_deref().unwrap_or_default()))
            .collect();
        assert_eq!(
            values,
            [("ARCHIVED", "3"), ("CLOSED", "'CLOSED'"), ("OPEN", "'open'")]
        );
    }
}
