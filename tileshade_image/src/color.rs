//! Colors for fills and strokes.
//!
//! A [`Color`] can be written as a hex string (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, the `#`
//! is optional) or as one of the palette names used by the default classification:
//! `white`, `black`, `green`, `lightgreen`, `yellow`, `orange`, `red`, `darkred`, `purple`
//! and `transparent`.

use anyhow::{Result, bail};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::{
	fmt::{self, Debug, Display},
	str::FromStr,
};

/// Parses a hex color string into RGB or RGBA bytes.
///
/// Supports formats:
/// - "RGB" (3 chars) -> expands to RRGGBB
/// - "RGBA" (4 chars) -> expands to RRGGBBAA
/// - "RRGGBB" (6 chars)
/// - "RRGGBBAA" (8 chars)
///
/// An optional leading `#` is stripped.
///
/// # Examples
///
/// ```
/// use tileshade_image::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#90EE90").unwrap(), vec![144, 238, 144]);
/// assert_eq!(parse_hex_color("F00").unwrap(), vec![255, 0, 0]);
/// assert_eq!(parse_hex_color("8B000080").unwrap(), vec![139, 0, 0, 128]);
/// ```
pub fn parse_hex_color(hex: &str) -> Result<Vec<u8>> {
	let hex = hex.trim_start_matches('#');
	if !hex.is_ascii() {
		bail!("Invalid hex color '{hex}': contains non-ASCII characters");
	}

	let expanded: String = match hex.len() {
		// RGB(A) -> RRGGBB(AA)
		3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
		6 | 8 => hex.to_string(),
		_ => bail!("Invalid hex color '{hex}': expected 3, 4, 6, or 8 hex characters"),
	};

	let bytes: Result<Vec<u8>, _> = (0..expanded.len())
		.step_by(2)
		.map(|i| u8::from_str_radix(&expanded[i..i + 2], 16))
		.collect();

	bytes.map_err(|e| anyhow::anyhow!("Invalid hex color '{hex}': {e}"))
}

/// An 8-bit RGBA color, not premultiplied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
	pub const WHITE: Color = Color::rgb(255, 255, 255);
	pub const BLACK: Color = Color::rgb(0, 0, 0);
	pub const GREEN: Color = Color::rgb(0, 128, 0);
	pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);
	pub const YELLOW: Color = Color::rgb(255, 255, 0);
	pub const ORANGE: Color = Color::rgb(255, 165, 0);
	pub const RED: Color = Color::rgb(255, 0, 0);
	pub const DARK_RED: Color = Color::rgb(139, 0, 0);
	pub const PURPLE: Color = Color::rgb(128, 0, 128);

	const NAMED: [(&'static str, Color); 10] = [
		("transparent", Color::TRANSPARENT),
		("white", Color::WHITE),
		("black", Color::BLACK),
		("green", Color::GREEN),
		("lightgreen", Color::LIGHT_GREEN),
		("yellow", Color::YELLOW),
		("orange", Color::ORANGE),
		("red", Color::RED),
		("darkred", Color::DARK_RED),
		("purple", Color::PURPLE),
	];

	#[must_use]
	pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
		Color { r, g, b, a: 255 }
	}

	#[must_use]
	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
		Color { r, g, b, a }
	}

	#[must_use]
	pub const fn with_alpha(self, a: u8) -> Color {
		Color { a, ..self }
	}

	/// Looks up a palette name, ignoring ASCII case.
	#[must_use]
	pub fn from_name(name: &str) -> Option<Color> {
		Color::NAMED
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, c)| *c)
	}

	pub fn from_hex(hex: &str) -> Result<Color> {
		Ok(match parse_hex_color(hex)?.as_slice() {
			[r, g, b] => Color::rgb(*r, *g, *b),
			[r, g, b, a] => Color::rgba(*r, *g, *b, *a),
			bytes => bail!("Invalid hex color '{hex}': got {} bytes", bytes.len()),
		})
	}

	#[must_use]
	pub fn is_opaque(&self) -> bool {
		self.a == 255
	}

	/// Returns `true` if no channel differs from `other` by more than `tolerance`.
	///
	/// Compositing translucent colors works on 8-bit channels, so results can be one step off.
	#[must_use]
	pub fn is_close_to(&self, other: &Color, tolerance: u8) -> bool {
		self.to_rgba()
			.0
			.iter()
			.zip(other.to_rgba().0)
			.all(|(a, b)| a.abs_diff(b) <= tolerance)
	}

	/// Formats as `#rrggbb`, or `#rrggbbaa` when not opaque.
	#[must_use]
	pub fn to_hex(&self) -> String {
		if self.is_opaque() {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
		}
	}

	#[must_use]
	pub fn to_rgba(self) -> Rgba<u8> {
		Rgba([self.r, self.g, self.b, self.a])
	}
}

impl FromStr for Color {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let s = s.trim();
		match Color::from_name(s) {
			Some(color) => Ok(color),
			None => Color::from_hex(s),
		}
	}
}

impl TryFrom<String> for Color {
	type Error = anyhow::Error;

	fn try_from(value: String) -> Result<Self> {
		value.parse()
	}
}

impl From<Color> for String {
	fn from(color: Color) -> Self {
		color.to_hex()
	}
}

impl From<Rgba<u8>> for Color {
	fn from(value: Rgba<u8>) -> Self {
		let [r, g, b, a] = value.0;
		Color::rgba(r, g, b, a)
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

impl Debug for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Color({})", self.to_hex())
	}
}
