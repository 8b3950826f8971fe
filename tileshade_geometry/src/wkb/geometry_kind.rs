use super::WkbError;
use std::fmt::{self, Display};

/// The geometry type tag following the byte order of a WKB record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WkbGeometryKind {
	Point = 1,
	LineString = 2,
	Polygon = 3,
	MultiPoint = 4,
	MultiLineString = 5,
	MultiPolygon = 6,
	GeometryCollection = 7,
}

impl WkbGeometryKind {
	#[must_use]
	pub fn as_u32(self) -> u32 {
		self as u32
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			WkbGeometryKind::Point => "Point",
			WkbGeometryKind::LineString => "LineString",
			WkbGeometryKind::Polygon => "Polygon",
			WkbGeometryKind::MultiPoint => "MultiPoint",
			WkbGeometryKind::MultiLineString => "MultiLineString",
			WkbGeometryKind::MultiPolygon => "MultiPolygon",
			WkbGeometryKind::GeometryCollection => "GeometryCollection",
		}
	}
}

impl TryFrom<u32> for WkbGeometryKind {
	type Error = WkbError;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		Ok(match value {
			1 => WkbGeometryKind::Point,
			2 => WkbGeometryKind::LineString,
			3 => WkbGeometryKind::Polygon,
			4 => WkbGeometryKind::MultiPoint,
			5 => WkbGeometryKind::MultiLineString,
			6 => WkbGeometryKind::MultiPolygon,
			7 => WkbGeometryKind::GeometryCollection,
			_ => return Err(WkbError::UnknownGeometryKind(value)),
		})
	}
}

impl Display for WkbGeometryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
