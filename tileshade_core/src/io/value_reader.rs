// This module defines the `ValueReader` trait for reading fixed-width values with a given byte order.
//
// # Overview
//
// The byte order is a type parameter (`byteorder::LittleEndian` or `byteorder::BigEndian`), so a
// parser that learns the byte order from its input (like the WKB decoder, which reads it from the
// first byte of every record) dispatches once and then runs fully monomorphized code for either
// order. Integers and IEEE-754 doubles are both read honoring that order.
//
// # Examples
//
// ```rust
// use tileshade_core::io::{ValueReader, ValueReaderSlice};
//
// let data = &[0x00, 0x00, 0x00, 0x03];
// assert_eq!(ValueReaderSlice::new_be(data).read_u32()?, 3);
// assert_eq!(ValueReaderSlice::new_le(data).read_u32()?, 0x0300_0000);
// ```

use anyhow::{Context, Result};
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::{Read, Seek};

/// A simple alias for types implementing both `Seek` and `Read`, used for convenience.
pub trait SeekRead: Seek + Read {}

/// A trait for reading values from a byte source with a fixed byte order `E`.
pub trait ValueReader<'a, E: ByteOrder + 'a> {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current position within the readable data.
	fn position(&mut self) -> u64;

	/// Checks if there is no data to read.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of bytes remaining to be read.
	fn remaining(&mut self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	/// Checks if there are any bytes remaining to be read.
	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Reads a single byte. Byte order does not apply.
	///
	/// # Errors
	/// Returns an error if the data is exhausted.
	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	/// Reads an unsigned 32-bit integer.
	///
	/// # Errors
	/// Returns an error if fewer than four bytes remain.
	fn read_u32(&mut self) -> Result<u32> {
		Ok(self.get_reader().read_u32::<E>()?)
	}

	/// Reads a 64-bit floating point number.
	///
	/// # Errors
	/// Returns an error if fewer than eight bytes remain.
	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<E>()?)
	}

	/// Reads an `(x, y)` pair of doubles.
	///
	/// # Errors
	/// Returns an error if fewer than sixteen bytes remain.
	fn read_f64_pair(&mut self) -> Result<[f64; 2]> {
		let x = self.read_f64().context("Failed to read x")?;
		let y = self.read_f64().context("Failed to read y")?;
		Ok([x, y])
	}
}
