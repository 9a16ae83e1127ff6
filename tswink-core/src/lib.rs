//! Core utilities for the tswink TypeScript model generator.
//!
//! This crate provides file output and string helpers shared by the
//! other tswink crates.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult, read_existing};
// String utilities
pub use utils::{base_name, qualify, to_camel_case, to_pascal_case, to_snake_case};
