//! Renders choropleth map tiles from WKB polygon records.
//!
//! A [`TileRenderer`] asks a [`GeometrySource`] for the records around a tile, decodes each
//! one into pixel space, colors it by its value with the classification from a [`StyleConfig`],
//! and paints it onto a 256×256 canvas.
//!
//! ```
//! use tileshade::{MemorySource, StyleConfig, TileRenderer};
//! use tileshade_core::TileCoord;
//!
//! let renderer = TileRenderer::new(MemorySource::default(), StyleConfig::default()).unwrap();
//! let (canvas, stats) = renderer.render(&"0/0/0".parse::<TileCoord>().unwrap()).unwrap();
//! assert_eq!(stats.drawn, 0);
//! assert_eq!(canvas.image().dimensions(), (256, 256));
//! ```

pub mod config;
pub mod renderer;
pub mod source;

pub use config::*;
pub use renderer::*;
pub use source::*;
