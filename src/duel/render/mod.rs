//! Board rendering
//!
//! Rendering produces a [`DisplayList`]; adapters decide how to paint it.

pub mod raster;
pub mod scene;
pub mod shape;
pub mod surface;

pub use raster::*;
pub use scene::*;
pub use shape::*;
pub use surface::*;
