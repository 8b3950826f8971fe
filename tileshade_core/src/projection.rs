//! The coordinate transform chain between geographic coordinates, unit spherical
//! Mercator and tile-relative pixel space.
//!
//! All functions are pure. When working with tiles the actual earth radius cancels
//! out, so the projection uses a sphere of radius 1: the whole world spans
//! `[-π, π]` in both projected axes. Multiply by 6378137 to get "Google Mercator"
//! metres.
//!
//! # Examples
//!
//! ```
//! use tileshade_core::{GeoPoint, TileProjector};
//!
//! // the north-west corner of the world maps to the top-left pixel of tile 0/0/0
//! let projector = TileProjector::new(0, 0, 0);
//! let pixel = projector.project(GeoPoint::new(-180.0, 85.06));
//! assert_eq!((pixel.x, pixel.y), (0.0, 0.0));
//! ```

use crate::{GeoBBox, GeoPoint, PixelPoint, ProjectedPoint, ProjectedRect};
use std::f64::consts::{FRAC_PI_4, PI};

/// Edge length of a tile raster in pixels.
pub const TILE_SIZE: u32 = 256;

/// Latitude cutoff applied before projecting, close to the point where
/// spherical Mercator covers a square world.
pub const DEFAULT_CLIP_LATITUDE: f64 = 85.05;

/// How fractional pixel positions become whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelRounding {
	/// Truncate toward zero.
	#[default]
	Truncate,
	/// Round to the nearest pixel.
	Round,
}

impl PixelRounding {
	fn apply(self, value: f64) -> f64 {
		match self {
			PixelRounding::Truncate => value.trunc(),
			PixelRounding::Round => value.round(),
		}
	}
}

/// Projects a geographic point onto the unit sphere Mercator plane.
///
/// Diverges towards ±∞ as the latitude approaches ±90°; clip first with
/// [`clip_latitude`] when finite output is required.
#[must_use]
pub fn geo_to_projected(p: GeoPoint) -> ProjectedPoint {
	ProjectedPoint {
		x: p.lon * PI / 180.0,
		y: (FRAC_PI_4 + p.lat * PI / 360.0).tan().ln(),
	}
}

/// The exact inverse of [`geo_to_projected`].
#[must_use]
pub fn projected_to_geo(p: ProjectedPoint) -> GeoPoint {
	GeoPoint {
		lon: (180.0 / PI) * p.x,
		lat: (360.0 / PI) * (p.y.exp().atan() - FRAC_PI_4),
	}
}

/// Computes the projected bounds of tile `(x, y)` at zoom `z`.
///
/// The key is not validated: indices outside `0..2^z` yield a rectangle outside
/// the world extent.
#[must_use]
pub fn tile_to_projected_bounds(x: u32, y: u32, z: u32) -> ProjectedRect {
	// the width of a tile on a sphere of radius 1
	let arc = PI * 2.0 / 2.0f64.powf(f64::from(z));

	let left = -PI + f64::from(x) * arc;
	let top = PI - f64::from(y) * arc;

	ProjectedRect {
		left,
		top,
		right: left + arc,
		bottom: top - arc,
	}
}

/// Computes the geographic bounds of a tile, used to parametrize the geometry query.
///
/// With `bleed_pixels != 0` the projected rectangle is first grown by
/// `bleed_pixels / 256 * 2` of its width and height on every side, so that shapes
/// whose stroke reaches into the tile from outside are fetched as well.
#[must_use]
pub fn tile_to_geo_bounds(x: u32, y: u32, z: u32, bleed_pixels: i32) -> GeoBBox {
	let mut rect = tile_to_projected_bounds(x, y, z);

	if bleed_pixels != 0 {
		let factor = f64::from(bleed_pixels) / f64::from(TILE_SIZE) * 2.0;
		rect = rect.inflated(rect.width() * factor, rect.height() * factor);
	}

	GeoBBox::from_corners(projected_to_geo(rect.top_left()), projected_to_geo(rect.bottom_right()))
}

/// Clamps the latitude of `p` to `±max_degrees`.
///
/// Only the magnitude of the bound is used. A `NaN` bound leaves `p` unchanged.
#[must_use]
pub fn clip_latitude(p: GeoPoint, max_degrees: f64) -> GeoPoint {
	let bound = max_degrees.abs();
	let lat = if p.lat > bound {
		bound
	} else if p.lat < -bound {
		-bound
	} else {
		p.lat
	};
	GeoPoint { lon: p.lon, lat }
}

/// Maps a projected point into an image covering `bounds`, truncating to whole pixels.
///
/// Image y grows downward while projected y grows upward, so the top (northern)
/// edge of `bounds` maps to row 0.
#[must_use]
pub fn projected_to_pixel(bounds: &ProjectedRect, image_size: (u32, u32), p: ProjectedPoint) -> PixelPoint {
	projected_to_pixel_with(bounds, image_size, p, PixelRounding::Truncate)
}

/// Like [`projected_to_pixel`], with an explicit rounding policy.
#[must_use]
pub fn projected_to_pixel_with(
	bounds: &ProjectedRect,
	image_size: (u32, u32),
	p: ProjectedPoint,
	rounding: PixelRounding,
) -> PixelPoint {
	let width = f64::from(image_size.0);
	let height = f64::from(image_size.1);
	PixelPoint {
		x: rounding.apply((p.x - bounds.left) / (bounds.right - bounds.left) * width),
		y: rounding.apply(height - (p.y - bounds.bottom) / (bounds.top - bounds.bottom) * height),
	}
}

/// Projects a geographic point into the 256×256 raster of tile `(x, y, z)`.
///
/// The latitude is clipped to `±clip_at_degrees` first; a bound of 90° or more
/// disables clipping.
#[must_use]
pub fn geo_to_pixel(x: u32, y: u32, z: u32, p: GeoPoint, clip_at_degrees: f64) -> PixelPoint {
	TileProjector::new(x, y, z)
		.with_clip_latitude(clip_at_degrees)
		.project(p)
}

/// [`geo_to_pixel`] with the tile bounds computed once.
///
/// This is the per-vertex callback handed to the geometry decoder. It is `Copy`
/// and holds no mutable state, so a single projector may be shared by any number
/// of threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileProjector {
	bounds: ProjectedRect,
	image_size: (u32, u32),
	clip_latitude: f64,
	rounding: PixelRounding,
}

impl TileProjector {
	/// Creates a projector for tile `(x, y, z)` with a 256×256 raster, the default
	/// latitude clip and truncating rounding.
	#[must_use]
	pub fn new(x: u32, y: u32, z: u32) -> TileProjector {
		TileProjector {
			bounds: tile_to_projected_bounds(x, y, z),
			image_size: (TILE_SIZE, TILE_SIZE),
			clip_latitude: DEFAULT_CLIP_LATITUDE,
			rounding: PixelRounding::Truncate,
		}
	}

	#[must_use]
	pub fn with_clip_latitude(mut self, degrees: f64) -> TileProjector {
		self.clip_latitude = degrees;
		self
	}

	#[must_use]
	pub fn with_rounding(mut self, rounding: PixelRounding) -> TileProjector {
		self.rounding = rounding;
		self
	}

	#[must_use]
	pub fn bounds(&self) -> &ProjectedRect {
		&self.bounds
	}

	/// Projects a geographic point to a pixel of this tile.
	#[must_use]
	pub fn project(&self, p: GeoPoint) -> PixelPoint {
		let p = if self.clip_latitude < 90.0 {
			clip_latitude(p, self.clip_latitude)
		} else {
			p
		};
		projected_to_pixel_with(&self.bounds, self.image_size, geo_to_projected(p), self.rounding)
	}
}
