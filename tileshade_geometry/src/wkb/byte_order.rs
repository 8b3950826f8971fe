use super::WkbError;
use std::fmt::{self, Display};

/// The byte order tag that starts every WKB record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WkbByteOrder {
	/// Big endian (XDR).
	Xdr = 0,
	/// Little endian (NDR).
	Ndr = 1,
}

impl WkbByteOrder {
	#[must_use]
	pub fn as_u8(self) -> u8 {
		self as u8
	}
}

impl TryFrom<u8> for WkbByteOrder {
	type Error = WkbError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(WkbByteOrder::Xdr),
			1 => Ok(WkbByteOrder::Ndr),
			_ => Err(WkbError::MalformedByteOrder(value)),
		}
	}
}

impl Display for WkbByteOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			WkbByteOrder::Xdr => "big endian",
			WkbByteOrder::Ndr => "little endian",
		})
	}
}
