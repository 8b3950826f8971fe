//! Contains the numeric foundation of the tile pipeline: byte-order aware readers and writers,
//! point and bounding box types, tile coordinates, the projection chain and the classification table.

pub mod classification;
pub mod io;
pub mod projection;
pub mod types;

pub use classification::*;
pub use projection::*;
pub use types::*;
