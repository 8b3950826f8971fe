//! Decodes binary geometry records into pixel-space rings and polygons.

pub mod pixel;
pub mod wkb;

pub use pixel::*;
pub use wkb::*;
