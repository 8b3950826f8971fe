//! Where the renderer gets its geometries from.

mod memory;

pub use memory::*;

use anyhow::Result;
use std::fmt::Debug;
use tileshade_core::{Blob, GeoBBox};

/// One stored shape: an identifier, an optional numeric attribute and the WKB bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryRecord {
	pub id: String,
	/// `None` when the attribute is missing; such shapes get the default color.
	pub value: Option<f64>,
	pub wkb: Blob,
}

impl GeometryRecord {
	pub fn new(id: impl Into<String>, value: Option<f64>, wkb: impl Into<Blob>) -> GeometryRecord {
		GeometryRecord {
			id: id.into(),
			value,
			wkb: wkb.into(),
		}
	}
}

/// A store that can be asked for the records near a geographic bounding box.
///
/// Implementations may return records that do not intersect `bbox`; the renderer
/// draws whatever it gets, and the canvas clips it.
pub trait GeometrySource: Debug {
	/// # Errors
	/// Fails if the store itself cannot be read. A single unreadable record is not
	/// an error of the query.
	fn query(&self, bbox: &GeoBBox) -> Result<Vec<GeometryRecord>>;

	/// A short description for log messages.
	fn source_type(&self) -> &str;
}
