//! Output management shared by every generated file.

mod preserve;

pub use preserve::{PreservedRegions, Region, RegionBlock};
