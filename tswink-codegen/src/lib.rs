//! Shared code generation utilities for the tswink model generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Preserved hand-written regions of generated files
//! - [`language`] - The generator trait used by the CLI
//! - [`GenerationOptions`] / [`GenerationContext`] - how a run and a single file are rendered

pub mod builder;
mod context;
pub mod generation;
pub mod language;
mod options;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use context::GenerationContext;
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use options::GenerationOptions;
pub use tswink_manifest::QuoteStyle;
