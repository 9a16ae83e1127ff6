//! The in-memory form of one generated file.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use tswink_codegen::{GenerationContext, generation::PreservedRegions};
use tswink_core::qualify;

use crate::{ast::{Import, Member}, enums::ServiceMethod};

/// Where an import comes from, which decides how it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOrigin {
    /// The required-subset utility type from an external module
    Utility,
    /// The base class or interface
    Base,
    /// Another generated entity; renamed in new-model renders
    Entity,
    /// A generated pivot interface
    Pivot,
}

/// A symbol an entity imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityImport {
    pub symbol: String,
    pub module: String,
    pub origin: ImportOrigin,
}

impl EntityImport {
    pub fn utility(module: impl Into<String>) -> Self {
        Self {
            symbol: "SetRequired".to_string(),
            module: module.into(),
            origin: ImportOrigin::Utility,
        }
    }

    pub fn local(symbol: impl Into<String>, origin: ImportOrigin) -> Self {
        let symbol = symbol.into();
        Self {
            module: format!("./{symbol}"),
            symbol,
            origin,
        }
    }

    pub fn is_external(&self) -> bool {
        self.origin == ImportOrigin::Utility
    }

    /// The import statement for this symbol in the given render.
    pub fn to_import(&self, ctx: &GenerationContext) -> Import {
        match self.origin {
            ImportOrigin::Utility => Import::new(&self.module)
                .named(&self.symbol)
                .type_only(),
            ImportOrigin::Entity => {
                let name = ctx.mapped_name(&self.symbol);
                let import = Import::new(format!("./{name}")).default(name);
                if ctx.interface() { import.type_only() } else { import }
            }
            ImportOrigin::Base | ImportOrigin::Pivot => {
                let import = Import::new(&self.module).default(&self.symbol);
                if ctx.interface() { import.type_only() } else { import }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Model { extends: Option<String> },
    Enum { service_methods: Vec<ServiceMethod> },
}

/// A model or enum ready to render.
///
/// Members are kept sorted by name; a later insert under the same name
/// replaces the earlier one. Imports keep the first registration of a
/// symbol.
#[derive(Debug, Clone)]
pub struct Entity {
    pub namespace: String,
    pub name: String,
    pub kind: EntityKind,
    pub preserved: PreservedRegions,
    members: BTreeMap<String, Member>,
    imports: IndexMap<String, EntityImport>,
}

impl Entity {
    pub fn model(namespace: &str, name: &str, extends: Option<String>) -> Self {
        Self::new(namespace, name, EntityKind::Model { extends })
    }

    pub fn enumeration(namespace: &str, name: &str) -> Self {
        Self::new(
            namespace,
            name,
            EntityKind::Enum {
                service_methods: Vec::new(),
            },
        )
    }

    fn new(namespace: &str, name: &str, kind: EntityKind) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            kind,
            preserved: PreservedRegions::default(),
            members: BTreeMap::new(),
            imports: IndexMap::new(),
        }
    }

    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, EntityKind::Enum { .. })
    }

    pub fn extends(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::Model { extends } => extends.as_deref(),
            EntityKind::Enum { .. } => None,
        }
    }

    pub fn service_methods(&self) -> &[ServiceMethod] {
        match &self.kind {
            EntityKind::Enum { service_methods } => service_methods,
            EntityKind::Model { .. } => &[],
        }
    }

    pub fn set_service_methods(&mut self, methods: Vec<ServiceMethod>) {
        if let EntityKind::Enum { service_methods } = &mut self.kind {
            *service_methods = methods;
        }
    }

    pub fn insert_member(&mut self, member: Member) {
        self.members.insert(member.name.clone(), member);
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Members in lexicographic name order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn add_import(&mut self, import: EntityImport) {
        self.imports.entry(import.symbol.clone()).or_insert(import);
    }

    /// Imports in registration order.
    pub fn imports(&self) -> impl Iterator<Item = &EntityImport> {
        self.imports.values()
    }

    pub fn import_names(&self) -> impl Iterator<Item = String> + '_ {
        self.imports.keys().cloned()
    }
}

#[cfg(test)]
mod tests {
    use tswink_codegen::GenerationOptions;
    use tswink_manifest::QuoteStyle;

    use super::*;
    use crate::{render::render_entity, types::TypeDescriptor};

    #[test]
    fn test_members_sorted_and_last_insert_wins() {
        let mut entity = Entity::model("App\\Models", "Tag", None);
        entity.insert_member(Member::typed("name", vec![TypeDescriptor::named("number")]));
        entity.insert_member(Member::typed("id", vec![TypeDescriptor::named("number")]));
        entity.insert_member(Member::typed("name", vec![TypeDescriptor::named("string")]));

        let names: Vec<_> = entity.members().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["id", "name"]);
        let name = entity.member("name").expect("member exists");
        assert_eq!(name.sole_type().map(TypeDescriptor::name), Some("string"));
    }

    #[test]
    fn test_members_render_in_name_order() {
        let mut options = GenerationOptions::default();
        options.interface = true;
        let mut entity = Entity::model("App\\Models", "Tag", None);
        for name in ["zeta", "alpha", "id"] {
            entity.insert_member(Member::typed(name, vec![TypeDescriptor::named("number")]));
        }

        let names: Vec<_> = entity.members().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["alpha", "id", "zeta"]);

        let rendered = render_entity(&entity, &GenerationContext::regular(&options));
        let position = |line: &str| {
            rendered
                .find(line)
                .unwrap_or_else(|| panic!("missing {line:?} in:\n{rendered}"))
        };
        assert!(position("alpha?: number;") < position("id?: number;"));
        assert!(position("id?: number;") < position("zeta?: number;"));
    }

    #[test]
    fn test_first_import_wins() {
        let mut entity = Entity::model("", "Tag", None);
        entity.add_import(EntityImport::local("User", ImportOrigin::Entity));
        entity.add_import(EntityImport::local("User", ImportOrigin::Pivot));
        let imports: Vec<_> = entity.imports().collect();
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].origin, ImportOrigin::Entity);
    }

    #[test]
    fn test_entity_import_is_mapped_in_new_model_render() {
        let mut options = GenerationOptions::default();
        options.interface = true;
        let ctx = GenerationContext::new_model(&options).with_type_mapping("User", "NewUser");

        let import = EntityImport::local("User", ImportOrigin::Entity).to_import(&ctx);
        assert_eq!(
            import.render(QuoteStyle::Single),
            "import type NewUser from './NewUser'"
        );
        let base = EntityImport::local("BaseModel", ImportOrigin::Base).to_import(&ctx);
        assert_eq!(
            base.render(QuoteStyle::Single),
            "import type BaseModel from './BaseModel'"
        );
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(
            Entity::enumeration("App\\Enums", "Permissions").qualified_name(),
            "App\\Enums\\Permissions"
        );
    }
}
