//! Text building for generated files.
//!
//! Renderers either write lines into a [`CodeBuilder`] directly or build
//! [`CodeFragment`]s through [`Renderable`] and emit them in one go.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
