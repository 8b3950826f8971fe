// Pixel-space shapes produced by the WKB decoder: rings of `PixelPoint`s, polygons made of an
// outer ring plus holes, and the `PixelGeometry` wrapper that keeps single and multi polygons apart.

mod geometry;
mod macros;
mod polygon;
mod ring;

pub use geometry::*;
pub use polygon::*;
pub use ring::*;
