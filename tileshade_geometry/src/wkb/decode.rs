//! Decoding of WKB polygon records into pixel space.
//!
//! The byte order tag is read once per record and selects a monomorphized reader; every
//! integer and double after it honors that order. Each coordinate is projected as soon
//! as it is read and then thinned with [`RingDecimator`], so no geographic copy of the
//! ring is ever built.

use super::{RingDecimator, WkbByteOrder, WkbError, WkbGeometryKind};
use crate::{PixelGeometry, PixelPolygon, PixelRing};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::{debug, trace};
use tileshade_core::{
	GeoPoint, PixelPoint,
	io::{ValueReader, ValueReaderSlice},
};

/// Bytes taken by one encoded coordinate pair.
const POINT_SIZE: u64 = 16;

/// Decodes one WKB record, projecting every vertex with `project`.
///
/// Returns `Ok(None)` when the record is well formed but nothing visible remains after
/// decimation: a polygon whose outer ring collapsed, or a multipolygon whose members all
/// did. Degenerate holes are dropped silently.
///
/// # Errors
/// Fails for a malformed byte order tag, an unknown or unsupported geometry kind, or a
/// record that ends early. The error only concerns this record.
pub fn decode_wkb<F>(bytes: &[u8], project: F) -> Result<Option<PixelGeometry>, WkbError>
where
	F: Fn(GeoPoint) -> PixelPoint,
{
	let tag = *bytes
		.first()
		.ok_or_else(|| WkbError::Truncated("missing byte order".to_string()))?;

	match WkbByteOrder::try_from(tag)? {
		WkbByteOrder::Xdr => RecordReader::<BigEndian>::new(bytes).read_geometry(&project),
		WkbByteOrder::Ndr => RecordReader::<LittleEndian>::new(bytes).read_geometry(&project),
	}
}

struct RecordReader<'a, E: ByteOrder> {
	inner: ValueReaderSlice<'a, E>,
}

impl<'a, E: ByteOrder + 'a> RecordReader<'a, E> {
	/// Starts right after the byte order tag.
	fn new(bytes: &'a [u8]) -> Self {
		RecordReader {
			inner: ValueReaderSlice::new_at(bytes, 1),
		}
	}

	fn read_u8(&mut self, what: &str) -> Result<u8, WkbError> {
		self
			.inner
			.read_u8()
			.map_err(|e| WkbError::Truncated(format!("{what}: {e}")))
	}

	fn read_u32(&mut self, what: &str) -> Result<u32, WkbError> {
		self
			.inner
			.read_u32()
			.map_err(|e| WkbError::Truncated(format!("{what}: {e}")))
	}

	fn read_point(&mut self) -> Result<GeoPoint, WkbError> {
		self
			.inner
			.read_f64_pair()
			.map(GeoPoint::from)
			.map_err(|e| WkbError::Truncated(format!("{e:#}")))
	}

	fn read_geometry<F>(&mut self, project: &F) -> Result<Option<PixelGeometry>, WkbError>
	where
		F: Fn(GeoPoint) -> PixelPoint,
	{
		let kind = WkbGeometryKind::try_from(self.read_u32("geometry kind")?)?;
		match kind {
			WkbGeometryKind::Polygon => Ok(self.read_polygon(project)?.map(PixelGeometry::Polygon)),
			WkbGeometryKind::MultiPolygon => self.read_multi_polygon(project),
			other => Err(WkbError::UnsupportedGeometryKind(other)),
		}
	}

	fn read_multi_polygon<F>(&mut self, project: &F) -> Result<Option<PixelGeometry>, WkbError>
	where
		F: Fn(GeoPoint) -> PixelPoint,
	{
		let count = self.read_u32("polygon count")?;
		let mut polygons = Vec::new();

		for index in 0..count {
			// member headers are read with the outer byte order and not enforced
			let order = self.read_u8("member byte order")?;
			let kind = self.read_u32("member geometry kind")?;
			if WkbByteOrder::try_from(order).is_err() || kind != WkbGeometryKind::Polygon.as_u32() {
				debug!("multipolygon member {index} has header ({order}, {kind}), decoding it as a polygon");
			}

			if let Some(polygon) = self.read_polygon(project)? {
				polygons.push(polygon);
			}
		}

		Ok(if polygons.is_empty() {
			None
		} else {
			Some(PixelGeometry::MultiPolygon(polygons))
		})
	}

	fn read_polygon<F>(&mut self, project: &F) -> Result<Option<PixelPolygon>, WkbError>
	where
		F: Fn(GeoPoint) -> PixelPoint,
	{
		let ring_count = self.read_u32("ring count")?;
		if ring_count == 0 {
			return Ok(None);
		}

		let outer = self.read_ring(project)?;

		// holes are always consumed so that the reader stays aligned for the next member
		let mut holes = Vec::new();
		for _ in 1..ring_count {
			if let Some(hole) = self.read_ring(project)? {
				holes.push(hole);
			}
		}

		Ok(outer.map(|outer| PixelPolygon::new(outer, holes)))
	}

	fn read_ring<F>(&mut self, project: &F) -> Result<Option<PixelRing>, WkbError>
	where
		F: Fn(GeoPoint) -> PixelPoint,
	{
		let count = self.read_u32("point count")?;
		let capacity = u64::from(count).min(self.inner.remaining() / POINT_SIZE);
		let mut decimator = RingDecimator::with_capacity(usize::try_from(capacity).unwrap_or(0));

		for index in 0..count {
			let point = project(self.read_point()?);
			decimator.push(point, index + 1 == count);
		}

		trace!("ring decimated from {count} to {} points", decimator.len());
		Ok(decimator.finish())
	}
}
