use super::WkbGeometryKind;
use std::fmt::{self, Display};

/// Reasons a single WKB record cannot be decoded.
///
/// Each of these aborts only the record being decoded. A record that decodes
/// fine but collapses to nothing visible is not an error; see [`decode_wkb`](super::decode_wkb).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WkbError {
	/// The first byte is neither 0 (big endian) nor 1 (little endian).
	MalformedByteOrder(u8),
	/// The geometry type tag is not one of the seven WKB kinds.
	UnknownGeometryKind(u32),
	/// A valid kind that cannot be drawn as an area.
	UnsupportedGeometryKind(WkbGeometryKind),
	/// The record ended before a field could be read.
	Truncated(String),
}

impl Display for WkbError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			WkbError::MalformedByteOrder(tag) => write!(f, "malformed byte order tag {tag}"),
			WkbError::UnknownGeometryKind(tag) => write!(f, "unknown geometry kind {tag}"),
			WkbError::UnsupportedGeometryKind(kind) => write!(f, "unsupported geometry kind {kind}"),
			WkbError::Truncated(what) => write!(f, "record is truncated: {what}"),
		}
	}
}

impl std::error::Error for WkbError {}
