//! Tile keys of a Web Mercator tile pyramid.
//!
//! [`TileCoord`] is the validated form of a tile key. The projection functions in
//! [`crate::projection`] accept raw `x, y, z` values and never validate; the
//! caller rejects malformed keys by going through [`TileCoord::new`] or
//! [`str::parse`] first.
//!
//! # Examples
//!
//! ```
//! use tileshade_core::TileCoord;
//!
//! let coord: TileCoord = "3/4/2".parse().unwrap();
//! assert_eq!(coord, TileCoord::new(3, 4, 2).unwrap());
//! assert!(TileCoord::new(3, 8, 0).is_err());
//! ```

use crate::{GeoBBox, ProjectedRect, TileProjector, tile_to_geo_bounds, tile_to_projected_bounds};
use anyhow::{Context, Result, ensure};
use std::{
	fmt::{self, Debug, Display},
	str::FromStr,
};

/// A tile key: zoom level plus x and y index.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	/// The zoom level of the tile.
	pub level: u8,
	/// The x index of the tile, counted from the west.
	pub x: u32,
	/// The y index of the tile, counted from the north.
	pub y: u32,
}

impl TileCoord {
	/// Create a new `TileCoord` at the given zoom `level` and tile indices `x`, `y`.
	///
	/// # Errors
	/// Returns an error if `level` > 31 or if `x` or `y` is not below `2^level`.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= 31, "level ({level}) must be <= 31");
		let max = 1u32 << level;
		ensure!(x < max, "x ({x}) out of bounds for level {level}");
		ensure!(y < max, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// Bounds of this tile in unit spherical Mercator.
	#[must_use]
	pub fn projected_bounds(&self) -> ProjectedRect {
		tile_to_projected_bounds(self.x, self.y, u32::from(self.level))
	}

	/// Geographic bounds of this tile, padded by `bleed_pixels` on every side.
	#[must_use]
	pub fn geo_bounds(&self, bleed_pixels: i32) -> GeoBBox {
		tile_to_geo_bounds(self.x, self.y, u32::from(self.level), bleed_pixels)
	}

	/// A projector mapping geographic points into this tile's 256×256 raster.
	#[must_use]
	pub fn projector(&self) -> TileProjector {
		TileProjector::new(self.x, self.y, u32::from(self.level))
	}

	/// The four tiles one level deeper that cover this tile, in the order
	/// north-west, north-east, south-west, south-east.
	///
	/// # Errors
	/// Returns an error if this tile is already at level 31.
	pub fn children(&self) -> Result<[TileCoord; 4]> {
		ensure!(self.level < 31, "cannot increase level above 31");
		let level = self.level + 1;
		let (x, y) = (self.x * 2, self.y * 2);
		Ok([
			TileCoord { level, x, y },
			TileCoord { level, x: x + 1, y },
			TileCoord { level, x, y: y + 1 },
			TileCoord {
				level,
				x: x + 1,
				y: y + 1,
			},
		])
	}
}

/// Parses `z/x/y`, the order used in tile URLs.
impl FromStr for TileCoord {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let parts: Vec<&str> = s.trim().trim_matches('/').split('/').collect();
		ensure!(parts.len() == 3, "tile key '{s}' must have the form z/x/y");
		let level = parts[0].parse::<u8>().with_context(|| format!("invalid zoom level in '{s}'"))?;
		let x = parts[1].parse::<u32>().with_context(|| format!("invalid x in '{s}'"))?;
		let y = parts[2].parse::<u32>().with_context(|| format!("invalid y in '{s}'"))?;
		TileCoord::new(level, x, y)
	}
}

impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.level, self.x, self.y)
	}
}

/// Custom `Debug` format as `TileCoord(z, [x, y])` for readability.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}
