//! TypeScript code generation for tswink.
//!
//! Entity sources are turned into [`Entity`] values by the [`EntityBuilder`],
//! then rendered as classes, interfaces or enums. Pivot tables referenced by
//! relations get their own interface files. The [`Generator`] drives a whole
//! project through both steps.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
mod builder;
mod entity;
mod enums;
mod error;
mod generator;
mod pivot;
mod render;
pub mod types;

pub use builder::{EntityBuilder, QUALIFIED_NAME_CONSTANT};
pub use entity::{Entity, EntityImport, EntityKind, ImportOrigin};
pub use enums::{ServiceMethod, service_methods, service_object};
pub use error::{Error, Result};
pub use generator::Generator;
pub use tswink_codegen::LanguageCodegen;
pub use pivot::{PivotInterface, PivotRegistry, PivotUse};
pub use render::render_entity;
