#![allow(dead_code)]
mod contour_modifiers;
mod contour_properties;
mod debug;
mod fixtures;

pub use contour_modifiers::*;
pub use contour_properties::*;
pub use debug::*;
pub use fixtures::*;
