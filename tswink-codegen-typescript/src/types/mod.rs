//! Type signals, their resolution, and schema column types.

mod column;
mod descriptor;
mod resolve;
mod signal;

pub use column::column_type;
pub use descriptor::{ANY, DATE, TypeDescriptor, UNDEFINED};
pub use resolve::TypeResolver;
pub use signal::{ShapeField, SignalError, TypeSignal};
