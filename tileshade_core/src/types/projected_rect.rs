use super::ProjectedPoint;
use std::fmt::{self, Debug};

/// An axis-aligned rectangle in unit spherical Mercator space.
///
/// Projected y grows northwards, so `top > bottom` for every rectangle produced
/// by [`tile_to_projected_bounds`](crate::tile_to_projected_bounds).
#[derive(Clone, Copy, PartialEq)]
pub struct ProjectedRect {
	pub left: f64,
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
}

impl ProjectedRect {
	#[must_use]
	pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> ProjectedRect {
		ProjectedRect {
			left,
			top,
			right,
			bottom,
		}
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	/// Height measured from `bottom` up to `top`.
	#[must_use]
	pub fn height(&self) -> f64 {
		self.top - self.bottom
	}

	/// Grows the rectangle by `dx` on the left and right and by `dy` on the top and bottom.
	#[must_use]
	pub fn inflated(&self, dx: f64, dy: f64) -> ProjectedRect {
		ProjectedRect {
			left: self.left - dx,
			top: self.top + dy,
			right: self.right + dx,
			bottom: self.bottom - dy,
		}
	}

	#[must_use]
	pub fn top_left(&self) -> ProjectedPoint {
		ProjectedPoint::new(self.left, self.top)
	}

	#[must_use]
	pub fn bottom_right(&self) -> ProjectedPoint {
		ProjectedPoint::new(self.right, self.bottom)
	}
}

impl Debug for ProjectedRect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"ProjectedRect(left: {}, top: {}, right: {}, bottom: {})",
			self.left, self.top, self.right, self.bottom
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn size_and_inflate() {
		let rect = ProjectedRect::new(-1.0, 2.0, 1.0, 0.0);
		assert_eq!(rect.width(), 2.0);
		assert_eq!(rect.height(), 2.0);

		let grown = rect.inflated(0.5, 0.25);
		assert_eq!(grown, ProjectedRect::new(-1.5, 2.25, 1.5, -0.25));
		assert_eq!(grown.top_left(), ProjectedPoint::new(-1.5, 2.25));
		assert_eq!(grown.bottom_right(), ProjectedPoint::new(1.5, -0.25));
	}
}
