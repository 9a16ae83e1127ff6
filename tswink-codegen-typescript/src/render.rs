//! Rendering entities to TypeScript source.

use tswink_codegen::{
    CodeBuilder, CodeFragment, GenerationContext,
    generation::{Region, RegionBlock},
};

use crate::{
    ast::{ExportedObject, Member},
    entity::{Entity, EntityImport},
    enums::service_object,
    types::TypeDescriptor,
};

/// Render an entity as a class, an interface or an enum, depending on the
/// entity and the context.
pub fn render_entity(entity: &Entity, ctx: &GenerationContext) -> String {
    if entity.is_enum() {
        render_enum(entity, ctx)
    } else {
        render_model(entity, ctx)
    }
}

fn region<'a>(entity: &'a Entity, region: Region, close_indent: &str) -> RegionBlock<'a> {
    RegionBlock::new(region, entity.preserved.get(region), close_indent)
}

fn render_model(entity: &Entity, ctx: &GenerationContext) -> String {
    let options = ctx.options();
    let term = ctx.terminator();
    let name = ctx.mapped_name(&entity.name);
    let mut builder = CodeBuilder::new(options.indent);

    let imports = ordered_imports(entity, ctx);
    for import in &imports {
        builder.push_line(&import.to_import(ctx).render(options.import_quotes));
    }
    if !imports.is_empty() {
        builder.push_blank();
    }
    builder
        .emit(&region(entity, Region::ImportDeclarations, ""))
        .push_blank();

    let keyword = if ctx.interface() { "interface" } else { "class" };
    let header = match entity.extends() {
        Some(base) => format!("export default {keyword} {name} extends {base} {{"),
        None => format!("export default {keyword} {name} {{"),
    };
    builder.push_line(&header).push_indent();

    let members: Vec<&Member> = entity
        .members()
        .filter(|m| !m.no_convert && !(ctx.interface() && m.is_const()))
        .collect();
    for member in &members {
        builder.push_line(&format!("{}{term}", member.render(ctx)));
    }
    if !ctx.interface() {
        builder.push_blank().emit(&constructor(entity, name, ctx));
    }
    if !members.is_empty() || !ctx.interface() {
        builder.push_blank();
    }
    let close_indent = builder.indent_unit().to_string();
    builder
        .emit(&region(entity, Region::ClassDeclarations, &close_indent))
        .push_dedent()
        .push_line("}")
        .push_blank()
        .emit(&region(entity, Region::Code, ""));

    if ctx.interface() {
        let constants = entity
            .members()
            .filter(|m| m.is_const() && !m.no_convert)
            .fold(ExportedObject::new(format!("{name}Constants")), |object, m| {
                let value = m.rendered_initial_value(ctx).unwrap_or_default();
                object.raw(&m.name, value)
            });
        if !constants.is_empty() {
            builder.push_blank().emit(&constants);
        }
    }

    builder.build()
}

/// External imports first, then local ones in registration order.
///
/// New-model renders drop the required-subset utility; they never wrap.
fn ordered_imports<'a>(entity: &'a Entity, ctx: &GenerationContext) -> Vec<&'a EntityImport> {
    let (external, local): (Vec<_>, Vec<_>) = entity
        .imports()
        .filter(|i| !(i.is_external() && ctx.is_for_new_model()))
        .partition(|i| i.is_external());
    external.into_iter().chain(local).collect()
}

fn constructor(entity: &Entity, name: &str, ctx: &GenerationContext) -> CodeFragment {
    let term = ctx.terminator();
    let mut body = Vec::new();
    if entity.extends().is_some() {
        body.push(CodeFragment::line(format!("super(init){term}")));
    }
    body.push(CodeFragment::line(format!("Object.assign(this, init){term}")));

    for member in entity.members().filter(|m| !m.is_const() && !m.no_convert) {
        let Some(ty) = member.sole_type() else {
            continue;
        };
        if let Some(value) = initializer(&member.name, ty, ctx) {
            body.push(CodeFragment::line(format!(
                "this.{} = {value}{term}",
                member.name
            )));
        }
    }

    CodeFragment::block(
        format!("constructor(init?: Partial<{name}>) {{"),
        body,
        Some("}".to_string()),
    )
}

/// The expression assigned to a member in the constructor, if it needs one.
fn initializer(field: &str, ty: &TypeDescriptor, ctx: &GenerationContext) -> Option<String> {
    let element = ctx.mapped_name(ty.name());
    if ty.is_collection() {
        Some(if ty.is_date() && !ty.is_force_primitive() {
            format!("init?.{field} ? init.{field}.map(v => new Date(v)) : []")
        } else if ty.is_constructible() {
            format!("init?.{field} ? init.{field}.map(v => new {element}(v)) : []")
        } else {
            format!("init?.{field} ?? []")
        })
    } else if ty.is_date() && !ty.is_force_primitive() {
        Some(format!("init?.{field} ? new Date(init.{field}) : undefined"))
    } else if ty.is_constructible() {
        Some(format!("init?.{field} ? new {element}(init.{field}) : undefined"))
    } else {
        None
    }
}

fn render_enum(entity: &Entity, ctx: &GenerationContext) -> String {
    let name = &entity.name;
    let mut builder = CodeBuilder::new(ctx.options().indent);

    builder
        .push_line(&format!("export enum {name} {{"))
        .push_indent();
    for member in entity.members().filter(|m| !m.no_convert) {
        let value = member.initial_value.as_deref().unwrap_or_default();
        builder.push_line(&format!("{} = {value},", member.name));
    }
    builder.push_dedent().push_line("}").push_blank();

    let methods = entity.service_methods();
    if !methods.is_empty() {
        builder
            .emit(&service_object(name, methods, ctx))
            .push_blank();
    }
    builder.emit(&region(entity, Region::Code, ""));
    builder.build()
}
