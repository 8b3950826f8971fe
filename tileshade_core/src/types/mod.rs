//! Contains point types, rectangles, bounding boxes, tile coordinates and byte blobs.

mod blob;
pub use blob::*;

mod geo_bbox;
pub use geo_bbox::*;

mod point;
pub use point::*;

mod projected_rect;
pub use projected_rect::*;

mod tile_coord;
pub use tile_coord::*;
