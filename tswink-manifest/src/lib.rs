//! Input formats for the tswink generator.
//!
//! - [`ProjectConfig`] - the `tswink.toml` project configuration
//! - [`EntitySource`] - one model or enum description per TOML file
//! - [`Schema`] - tables and columns backing models and pivots
//! - [`parse_doc_properties`] - `@property` tags from documentation blocks
//! - [`Project`] - all of the above, loaded and validated together
//!
//! Every parse or validation failure is reported as a [`miette`] diagnostic
//! pointing into the offending file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod doc;
mod error;
mod project;
mod schema;
mod source;
mod validate;

pub use config::{
    IndentConfig, IndentKeyword, OptionsConfig, OutputConfig, ProjectConfig, QuoteStyle,
    SourcesConfig,
};
pub use doc::{DocProperty, DocTagKind, parse_doc_properties};
pub use error::{Error, Result, SourceContext};
pub use project::{Project, SourceFile};
pub use schema::{ColumnSchema, Schema, TableSchema};
pub use source::{
    CaseSource, CaseValue, EntitySource, EnumSource, ExportMarker, MemberSource, MethodSource,
    ModelSource, PivotSource, RelationKind, RelationSource, ServiceValue, SourceKind,
};
