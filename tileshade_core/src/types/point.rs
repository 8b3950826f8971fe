//! Point types for the three coordinate spaces of the projection chain.
//!
//! - [`GeoPoint`]: longitude/latitude in degrees (WGS84).
//! - [`ProjectedPoint`]: spherical Mercator on a sphere of radius 1.
//! - [`PixelPoint`]: pixel position inside a tile raster, origin top-left, y growing downward.

use std::fmt::{self, Debug};

/// A geographic coordinate in degrees.
///
/// Values outside `[-180, 180]` / `[-90, 90]` are carried through unchanged;
/// see [`clip_latitude`](crate::clip_latitude) before projecting.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
	pub lon: f64,
	pub lat: f64,
}

impl GeoPoint {
	#[must_use]
	pub fn new(lon: f64, lat: f64) -> GeoPoint {
		GeoPoint { lon, lat }
	}
}

impl From<[f64; 2]> for GeoPoint {
	fn from(value: [f64; 2]) -> Self {
		GeoPoint::new(value[0], value[1])
	}
}

impl Debug for GeoPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "GeoPoint({}, {})", self.lon, self.lat)
	}
}

/// A point in the unit-radius spherical Mercator projection.
///
/// `x` is typically in `[-π, π]`; `y` is unbounded towards the poles.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct ProjectedPoint {
	pub x: f64,
	pub y: f64,
}

impl ProjectedPoint {
	#[must_use]
	pub fn new(x: f64, y: f64) -> ProjectedPoint {
		ProjectedPoint { x, y }
	}
}

impl Debug for ProjectedPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ProjectedPoint({}, {})", self.x, self.y)
	}
}

/// A position in a tile raster.
///
/// Coordinates are stored as `f64` so that points far outside the tile (and
/// at high zoom levels) never overflow; with the default truncating projection
/// they always hold whole numbers.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
	pub x: f64,
	pub y: f64,
}

impl PixelPoint {
	#[must_use]
	pub fn new(x: f64, y: f64) -> PixelPoint {
		PixelPoint { x, y }
	}

	/// Returns `true` if `other` lies at least one pixel away along either axis.
	///
	/// This is the visibility test used when thinning rings: anything closer is
	/// invisible at tile resolution.
	#[must_use]
	pub fn is_distinct_from(&self, other: &PixelPoint) -> bool {
		(self.x - other.x).abs() >= 1.0 || (self.y - other.y).abs() >= 1.0
	}
}

impl From<[f64; 2]> for PixelPoint {
	fn from(value: [f64; 2]) -> Self {
		PixelPoint::new(value[0], value[1])
	}
}

impl<'a, T> From<&'a [T; 2]> for PixelPoint
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		PixelPoint::new(value[0].into(), value[1].into())
	}
}

impl Debug for PixelPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.x, self.y)
	}
}
