use super::PixelRing;
use std::fmt::Debug;

/// A polygon in pixel space: the outer ring first, followed by its holes.
#[derive(Clone, Default, PartialEq)]
pub struct PixelPolygon(pub Vec<PixelRing>);

impl PixelPolygon {
	/// Creates a polygon from an outer ring and its holes.
	#[must_use]
	pub fn new(outer: PixelRing, holes: Vec<PixelRing>) -> PixelPolygon {
		let mut rings = Vec::with_capacity(holes.len() + 1);
		rings.push(outer);
		rings.extend(holes);
		PixelPolygon(rings)
	}

	#[must_use]
	pub fn outer(&self) -> Option<&PixelRing> {
		self.0.first()
	}

	#[must_use]
	pub fn holes(&self) -> &[PixelRing] {
		self.0.get(1..).unwrap_or(&[])
	}

	/// All rings, outer ring first.
	#[must_use]
	pub fn rings(&self) -> &[PixelRing] {
		&self.0
	}

	#[must_use]
	pub fn point_count(&self) -> usize {
		self.0.iter().map(PixelRing::len).sum()
	}
}

impl Debug for PixelPolygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PixelPolygon, PixelRing);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn outer_and_holes() {
		let polygon = PixelPolygon::new(
			PixelRing::from(&[[0, 0], [10, 0], [10, 10], [0, 10]]),
			vec![PixelRing::from(&[[2, 2], [4, 2], [4, 4]])],
		);
		assert_eq!(polygon.outer().map(PixelRing::len), Some(4));
		assert_eq!(polygon.holes().len(), 1);
		assert_eq!(polygon.rings().len(), 2);
		assert_eq!(polygon.point_count(), 7);
	}

	#[test]
	fn empty_polygon() {
		let polygon = PixelPolygon::default();
		assert!(polygon.outer().is_none());
		assert!(polygon.holes().is_empty());
	}
}
