//! This module provides the `ValueReaderSlice` struct for reading values from a byte slice.
//!
//! # Examples
//!
//! ```rust
//! use tileshade_core::io::{ValueReader, ValueReaderSlice};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let data = &[0x01, 0x02, 0x03, 0x04];
//!
//!     // Reading data with little-endian byte order
//!     let mut reader_le = ValueReaderSlice::new_le(data);
//!     assert_eq!(reader_le.read_u32()?, 0x0403_0201);
//!
//!     // Reading data with big-endian byte order
//!     let mut reader_be = ValueReaderSlice::new_be(data);
//!     assert_eq!(reader_be.read_u32()?, 0x0102_0304);
//!
//!     Ok(())
//! }
//! ```

use super::{SeekRead, ValueReader};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::{io::Cursor, marker::PhantomData};

/// Reads values from a borrowed byte slice using byte order `E`.
///
/// The slice is only borrowed for the lifetime of the reader; nothing is copied.
pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	/// Creates a new `ValueReaderSlice` positioned at the start of `slice`.
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}

	/// Creates a reader that starts at byte `position` of `slice`.
	///
	/// Positions past the end are clamped, leaving nothing to read.
	#[must_use]
	pub fn new_at(slice: &'a [u8], position: u64) -> ValueReaderSlice<'a, E> {
		let mut reader = ValueReaderSlice::new(slice);
		reader.cursor.set_position(position.min(reader.len));
		reader
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	/// Creates a new `ValueReaderSlice` with little-endian byte order.
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<'a> ValueReaderSlice<'a, BigEndian> {
	/// Creates a new `ValueReaderSlice` with big-endian byte order.
	#[must_use]
	pub fn new_be(slice: &'a [u8]) -> ValueReaderSlice<'a, BigEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl<'a, E: ByteOrder + 'a> ValueReader<'a, E> for ValueReaderSlice<'a, E> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	#[test]
	fn test_len() {
		let reader = ValueReaderSlice::new_le(&[0x80; 42]);
		assert_eq!(reader.len(), 42);
	}

	#[test]
	fn test_read_sequence() -> Result<()> {
		let blob = vec![0x01, 0x03, 0x00, 0x00, 0x00];
		let mut reader = ValueReaderSlice::new_le(&blob);

		assert_eq!(reader.read_u8()?, 0x01);
		assert_eq!(reader.position(), 1);
		assert_eq!(reader.read_u32()?, 3);
		assert_eq!(reader.position(), 5);
		assert!(reader.read_u8().is_err());
		Ok(())
	}

	#[test]
	fn test_new_at() -> Result<()> {
		let blob = vec![0x00, 0x00, 0x00, 0x00, 0x06];
		let mut reader = ValueReaderSlice::<LittleEndian>::new_at(&blob, 1);
		assert_eq!(reader.read_u32()?, 0x0600_0000);

		let mut reader = ValueReaderSlice::<BigEndian>::new_at(&blob, 1);
		assert_eq!(reader.read_u32()?, 6);

		let mut reader = ValueReaderSlice::<BigEndian>::new_at(&blob, 99);
		assert_eq!(reader.position(), 5);
		assert!(!reader.has_remaining());
		Ok(())
	}
}
