use super::GeoPoint;
use std::fmt::Debug;

/// A geographical bounding box in degrees, defined by its minimum and maximum
/// longitude (x) and latitude (y).
///
/// - `x_min` (west): Minimum longitude.
/// - `y_min` (south): Minimum latitude.
/// - `x_max` (east): Maximum longitude.
/// - `y_max` (north): Maximum latitude.
///
/// Tile bounds of out-of-range tile keys are allowed to leave the normal world
/// extent, so the values are not range checked.
///
/// # Examples
///
/// ```
/// use tileshade_core::{GeoBBox, GeoPoint};
///
/// let bbox = GeoBBox::from_corners(GeoPoint::new(10.0, 5.0), GeoPoint::new(-10.0, -5.0));
/// assert_eq!(bbox.as_array(), [-10.0, -5.0, 10.0, 5.0]);
/// assert_eq!(bbox.as_string_list(), "-10,-5,10,5");
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from `west, south, east, north`.
	#[must_use]
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> GeoBBox {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	/// Creates the bounding box spanned by two opposite corners, in any order.
	#[must_use]
	pub fn from_corners(a: GeoPoint, b: GeoPoint) -> GeoBBox {
		GeoBBox {
			x_min: a.lon.min(b.lon),
			y_min: a.lat.min(b.lat),
			x_max: a.lon.max(b.lon),
			y_max: a.lat.max(b.lat),
		}
	}

	/// Returns the bounding box as `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Returns the bounding box as `west,south,east,north`, the argument order of
	/// an MBR intersection filter.
	#[must_use]
	pub fn as_string_list(&self) -> String {
		format!("{},{},{},{}", self.x_min, self.y_min, self.x_max, self.y_max)
	}

	/// Returns `true` if `point` lies inside or on the border of the box.
	#[must_use]
	pub fn contains(&self, point: &GeoPoint) -> bool {
		point.lon >= self.x_min && point.lon <= self.x_max && point.lat >= self.y_min && point.lat <= self.y_max
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoBBox({}, {}, {}, {})", self.x_min, self.y_min, self.x_max, self.y_max)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn corners_are_normalized() {
		let bbox = GeoBBox::from_corners(GeoPoint::new(-180.0, 85.0), GeoPoint::new(180.0, -85.0));
		assert_eq!(bbox, GeoBBox::new(-180.0, -85.0, 180.0, 85.0));
		assert_eq!(format!("{bbox:?}"), "GeoBBox(-180, -85, 180, 85)");
	}

	#[test]
	fn contains_points() {
		let bbox = GeoBBox::new(0.0, 0.0, 10.0, 10.0);
		assert!(bbox.contains(&GeoPoint::new(5.0, 5.0)));
		assert!(bbox.contains(&GeoPoint::new(10.0, 0.0)));
		assert!(!bbox.contains(&GeoPoint::new(10.1, 5.0)));
		assert!(!bbox.contains(&GeoPoint::new(5.0, -0.1)));
	}
}
