//! This module defines the `ValueWriter` trait for writing fixed-width values with a given byte order.
//!
//! It is the counterpart of [`ValueReader`](super::ValueReader) and is used to produce binary
//! geometry records in either byte order.

use anyhow::Result;
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// A trait for writing values to a destination with a fixed byte order `E`.
pub trait ValueWriter<E: ByteOrder> {
	/// Returns a mutable reference to the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Returns the current write position.
	///
	/// # Errors
	/// Returns an error if the position cannot be determined.
	fn position(&mut self) -> Result<u64>;

	/// Returns `true` if nothing has been written yet.
	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	/// Writes a single byte.
	fn write_u8(&mut self, value: u8) -> Result<()> {
		Ok(self.get_writer().write_u8(value)?)
	}

	/// Writes a 32-bit unsigned integer using the byte order `E`.
	fn write_u32(&mut self, value: u32) -> Result<()> {
		Ok(self.get_writer().write_u32::<E>(value)?)
	}

	/// Writes a 64-bit float using the byte order `E`.
	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	/// Writes raw bytes unchanged.
	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		Ok(self.get_writer().write_all(buf)?)
	}
}

#[cfg(test)]
mod tests {
	use super::super::ValueWriterBlob;
	use super::*;
	use byteorder::{BigEndian, LittleEndian};

	#[test]
	fn test_write_u8() -> Result<()> {
		let mut writer = ValueWriterBlob::<LittleEndian>::new();
		assert!(writer.is_empty()?);
		writer.write_u8(0xFF)?;
		assert!(!writer.is_empty()?);
		assert_eq!(writer.into_blob().into_vec(), vec![0xFF]);
		Ok(())
	}

	#[test]
	fn test_write_u32() -> Result<()> {
		let mut writer = ValueWriterBlob::<LittleEndian>::new();
		writer.write_u32(6)?;
		assert_eq!(writer.into_blob().into_vec(), vec![6, 0, 0, 0]);

		let mut writer = ValueWriterBlob::<BigEndian>::new();
		writer.write_u32(6)?;
		assert_eq!(writer.into_blob().into_vec(), vec![0, 0, 0, 6]);
		Ok(())
	}

	#[test]
	fn test_write_f64() -> Result<()> {
		let mut writer = ValueWriterBlob::<BigEndian>::new();
		writer.write_f64(1.0)?;
		assert_eq!(writer.into_blob().into_vec(), vec![0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
		Ok(())
	}

	#[test]
	fn test_write_slice() -> Result<()> {
		let mut writer = ValueWriterBlob::<LittleEndian>::new();
		writer.write_slice(&[1, 2, 3])?;
		assert_eq!(writer.position()?, 3);
		assert_eq!(writer.into_blob().into_vec(), vec![1, 2, 3]);
		Ok(())
	}
}
