//! This module provides the [`Blob`] struct, an owned buffer of raw bytes.
//!
//! Blobs carry encoded geometry records from the geometry store into the decoder and
//! encoded PNG tiles out of the renderer.
//!
//! # Examples
//!
//! ```rust
//! use tileshade_core::Blob;
//!
//! let blob = Blob::from(vec![1, 0, 0, 0, 3]);
//! assert_eq!(blob.len(), 5);
//! assert_eq!(blob.as_slice()[4], 3);
//! ```

use anyhow::{Context, Result};
use std::fmt::Debug;
use std::path::Path;

/// An owned byte buffer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns a reference to the underlying byte slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	/// Consumes this [`Blob`] and returns the underlying `Vec<u8>`.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns a hexadecimal string of the bytes, each byte separated by a space.
	///
	/// # Examples
	///
	/// ```rust
	/// use tileshade_core::Blob;
	///
	/// let blob = Blob::from(&[0x01, 0x03, 0x00, 0x00, 0x00][..]);
	/// assert_eq!(blob.as_hex(), "01 03 00 00 00");
	/// ```
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|byte| format!("{byte:02x}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Returns the number of bytes.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Writes the bytes to `path`, replacing an existing file.
	pub fn save_to_file(&self, path: &Path) -> Result<()> {
		std::fs::write(path, &self.0).with_context(|| format!("Failed to write {path:?}"))
	}

	/// Reads a whole file into a `Blob`.
	pub fn load_from_file(path: &Path) -> Result<Self> {
		Ok(Blob::from(
			std::fs::read(path).with_context(|| format!("Failed to read {path:?}"))?,
		))
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.0.len() <= 16 {
			write!(f, "Blob({}): {}", self.0.len(), self.as_hex())
		} else {
			write!(f, "Blob({}): {} ...", self.0.len(), Blob::from(&self.0[0..16]).as_hex())
		}
	}
}
