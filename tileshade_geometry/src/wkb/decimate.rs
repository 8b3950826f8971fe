//! Vertex thinning at tile resolution.
//!
//! Points are fed in ring order, already projected to pixels. The first point is always
//! kept. Every following point is kept only if it lies at least one pixel away (along
//! either axis) from the last kept point. The final point is compared with the *first*
//! point instead, so a closed ring does not repeat its start and a ring that collapsed
//! into a single pixel stays collapsed.

use crate::PixelRing;
use tileshade_core::PixelPoint;

/// Incremental ring decimation; see the module documentation for the rules.
#[derive(Debug, Default)]
pub struct RingDecimator {
	points: Vec<PixelPoint>,
}

impl RingDecimator {
	#[must_use]
	pub fn with_capacity(capacity: usize) -> RingDecimator {
		RingDecimator {
			points: Vec::with_capacity(capacity),
		}
	}

	/// Offers the next point. `is_last` marks the final point of the encoded ring.
	pub fn push(&mut self, point: PixelPoint, is_last: bool) {
		let reference = if is_last { self.points.first() } else { self.points.last() };
		match reference {
			None => self.points.push(point),
			Some(reference) if point.is_distinct_from(reference) => self.points.push(point),
			Some(_) => {}
		}
	}

	/// Number of points kept so far.
	#[must_use]
	pub fn len(&self) -> usize {
		self.points.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Returns the ring, or `None` if fewer than three points survived.
	#[must_use]
	pub fn finish(self) -> Option<PixelRing> {
		let ring = PixelRing(self.points);
		if ring.is_degenerate() { None } else { Some(ring) }
	}
}

/// Decimates a complete sequence of pixel points.
pub fn decimate_ring<I>(points: I) -> Option<PixelRing>
where
	I: IntoIterator<Item = PixelPoint>,
	I::IntoIter: ExactSizeIterator,
{
	let points = points.into_iter();
	let count = points.len();
	let mut decimator = RingDecimator::with_capacity(count);
	for (index, point) in points.enumerate() {
		decimator.push(point, index + 1 == count);
	}
	decimator.finish()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn ring(points: &[[f64; 2]]) -> Option<PixelRing> {
		decimate_ring(points.iter().map(|p| PixelPoint::from(*p)).collect::<Vec<_>>())
	}

	#[test]
	fn drops_closing_point() {
		let result = ring(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]]);
		assert_eq!(result, Some(PixelRing::from(&[[0, 0], [10, 0], [10, 10]])));
	}

	#[test]
	fn keeps_distinct_closing_point() {
		let result = ring(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
		assert_eq!(result.as_ref().map(PixelRing::len), Some(4));
	}

	#[test]
	fn drops_sub_pixel_interior_points() {
		let result = ring(&[
			[0.0, 0.0],
			[0.5, 0.5],
			[10.0, 0.0],
			[10.4, 0.9],
			[10.0, 10.0],
			[10.0, 10.0],
			[0.0, 10.0],
		]);
		assert_eq!(result, Some(PixelRing::from(&[[0, 0], [10, 0], [10, 10], [0, 10]])));
	}

	#[test]
	fn compares_with_last_kept_point() {
		// 1.2 is measured against the kept start, not against the dropped 0.6
		let result = ring(&[[0.0, 0.0], [0.6, 0.0], [1.2, 0.0], [1.8, 5.0], [9.0, 9.0]]);
		assert_eq!(
			result,
			Some(PixelRing::from(&[[0.0, 0.0], [1.2, 0.0], [1.8, 5.0], [9.0, 9.0]]))
		);
	}

	#[test]
	fn collapsed_ring_is_degenerate() {
		assert_eq!(ring(&[[3.0, 3.0], [3.2, 3.4], [3.9, 3.1], [3.0, 3.0]]), None);
		assert_eq!(ring(&[[0.0, 0.0], [10.0, 10.0]]), None);
		assert_eq!(ring(&[]), None);
	}

	#[test]
	fn single_point_is_kept() {
		let mut decimator = RingDecimator::default();
		decimator.push(PixelPoint::new(4.0, 4.0), true);
		assert_eq!(decimator.len(), 1);
		assert_eq!(decimator.finish(), None);
	}
}
