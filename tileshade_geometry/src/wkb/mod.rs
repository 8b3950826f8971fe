//! Well-known binary (WKB) polygon records.
//!
//! Only `Polygon` and `MultiPolygon` are decoded, straight into pixel space for one tile.

mod byte_order;
mod decimate;
mod decode;
mod encode;
mod error;
mod geometry_kind;

pub use byte_order::*;
pub use decimate::*;
pub use decode::*;
pub use encode::*;
pub use error::*;
pub use geometry_kind::*;
