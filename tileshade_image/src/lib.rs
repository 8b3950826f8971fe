//! Raster output for decoded geometries: colors, a blending canvas and PNG encoding.

mod canvas;
mod color;
mod png;

pub use canvas::*;
pub use color::*;
pub use png::*;
