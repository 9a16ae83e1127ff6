//! TypeScript syntax builders rendered through the shared code builder.

mod imports;
mod member;
mod objects;

pub use imports::Import;
pub use member::{AccessKind, Member, requote};
pub use objects::{ArrowFn, ExportedObject, Property, PropertyValue};
