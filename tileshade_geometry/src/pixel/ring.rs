use std::fmt::Debug;
use tileshade_core::PixelPoint;

/// An ordered ring of pixel positions.
///
/// Rings produced by the decoder are implicitly closed: the closing point is only
/// stored when it differs visibly from the first point.
#[derive(Clone, Default, PartialEq)]
pub struct PixelRing(pub Vec<PixelPoint>);

impl PixelRing {
	#[must_use]
	pub fn new() -> PixelRing {
		PixelRing(Vec::new())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// A ring with fewer than three points encloses no area and is never drawn.
	#[must_use]
	pub fn is_degenerate(&self) -> bool {
		self.0.len() < 3
	}

	#[must_use]
	pub fn points(&self) -> &[PixelPoint] {
		&self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, PixelPoint> {
		self.0.iter()
	}

	/// Returns `[x_min, y_min, x_max, y_max]`, or `None` for an empty ring.
	#[must_use]
	pub fn bounds(&self) -> Option<[f64; 4]> {
		let first = self.0.first()?;
		Some(self.0.iter().fold([first.x, first.y, first.x, first.y], |b, p| {
			[b[0].min(p.x), b[1].min(p.y), b[2].max(p.x), b[3].max(p.y)]
		}))
	}
}

impl<'a> IntoIterator for &'a PixelRing {
	type Item = &'a PixelPoint;
	type IntoIter = std::slice::Iter<'a, PixelPoint>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl Debug for PixelRing {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PixelRing, PixelPoint);
