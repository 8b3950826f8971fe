//! Writing of WKB polygon records, for fixtures and for the CLI.

use super::{WkbByteOrder, WkbGeometryKind};
use anyhow::{Context, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tileshade_core::{
	Blob,
	io::{ValueWriter, ValueWriterBlob},
};

/// Encodes a polygon given as rings of `[lon, lat]`, outer ring first.
///
/// Rings are written as given; nothing is closed or reordered.
///
/// # Errors
/// Fails if a count exceeds `u32`.
pub fn encode_wkb_polygon(rings: &[Vec<[f64; 2]>], order: WkbByteOrder) -> Result<Blob> {
	match order {
		WkbByteOrder::Xdr => write_record::<BigEndian>(order, |w| write_polygon(w, rings)),
		WkbByteOrder::Ndr => write_record::<LittleEndian>(order, |w| write_polygon(w, rings)),
	}
}

/// Encodes a multipolygon; every member gets its own header in the same byte order.
///
/// # Errors
/// Fails if a count exceeds `u32`.
pub fn encode_wkb_multi_polygon(polygons: &[Vec<Vec<[f64; 2]>>], order: WkbByteOrder) -> Result<Blob> {
	match order {
		WkbByteOrder::Xdr => write_record::<BigEndian>(order, |w| write_multi_polygon(w, order, polygons)),
		WkbByteOrder::Ndr => write_record::<LittleEndian>(order, |w| write_multi_polygon(w, order, polygons)),
	}
}

fn write_record<E: ByteOrder>(
	order: WkbByteOrder,
	body: impl FnOnce(&mut ValueWriterBlob<E>) -> Result<()>,
) -> Result<Blob> {
	let mut writer = ValueWriterBlob::<E>::new();
	writer.write_u8(order.as_u8())?;
	body(&mut writer)?;
	Ok(writer.into_blob())
}

fn write_count<E: ByteOrder>(writer: &mut ValueWriterBlob<E>, count: usize) -> Result<()> {
	writer.write_u32(u32::try_from(count).context("count does not fit into u32")?)
}

fn write_multi_polygon<E: ByteOrder>(
	writer: &mut ValueWriterBlob<E>,
	order: WkbByteOrder,
	polygons: &[Vec<Vec<[f64; 2]>>],
) -> Result<()> {
	writer.write_u32(WkbGeometryKind::MultiPolygon.as_u32())?;
	write_count(writer, polygons.len())?;
	for rings in polygons {
		writer.write_u8(order.as_u8())?;
		write_polygon(writer, rings)?;
	}
	Ok(())
}

fn write_polygon<E: ByteOrder>(writer: &mut ValueWriterBlob<E>, rings: &[Vec<[f64; 2]>]) -> Result<()> {
	writer.write_u32(WkbGeometryKind::Polygon.as_u32())?;
	write_count(writer, rings.len())?;
	for ring in rings {
		write_count(writer, ring.len())?;
		for [x, y] in ring {
			writer.write_f64(*x)?;
			writer.write_f64(*y)?;
		}
	}
	Ok(())
}
