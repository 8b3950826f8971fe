use super::{PixelPolygon, PixelRing};
use std::fmt::Debug;

/// A decoded shape, ready to hand to a raster canvas.
///
/// Rings keep the order of the encoded record: polygons in sequence, and within
/// each polygon the outer ring before its holes.
#[derive(Clone, PartialEq)]
pub enum PixelGeometry {
	Polygon(PixelPolygon),
	MultiPolygon(Vec<PixelPolygon>),
}

impl PixelGeometry {
	#[must_use]
	pub fn polygons(&self) -> &[PixelPolygon] {
		match self {
			PixelGeometry::Polygon(polygon) => std::slice::from_ref(polygon),
			PixelGeometry::MultiPolygon(polygons) => polygons,
		}
	}

	/// Iterates over every ring of every polygon, in drawing order.
	pub fn rings(&self) -> impl Iterator<Item = &PixelRing> {
		self.polygons().iter().flat_map(|polygon| polygon.rings().iter())
	}

	#[must_use]
	pub fn point_count(&self) -> usize {
		self.polygons().iter().map(PixelPolygon::point_count).sum()
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			PixelGeometry::Polygon(_) => "Polygon",
			PixelGeometry::MultiPolygon(_) => "MultiPolygon",
		}
	}
}

impl Debug for PixelGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}(", self.type_name())?;
		f.debug_list().entries(self.polygons()).finish()?;
		write!(f, ")")
	}
}
