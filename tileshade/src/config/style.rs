//! Styling of rendered tiles, read from YAML.
//!
//! Every field is optional; an empty document gives the classic population density
//! map: seven classes from green to purple, half transparent fills, black outlines as
//! wide as the zoom level.
//!
//! ```yaml
//! min_value: 0
//! default_color: white
//! classes:
//!   - below: 50
//!     color: green
//!   - below: 100
//!     color: '#90ee90'
//! fill_alpha: 128
//! stroke_color: black
//! stroke_width: 2
//! bleed_pixels: 4
//! clip_latitude: 85.05
//! rounding: truncate
//! ```

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path};
use tileshade_core::{ClassificationTable, DEFAULT_CLIP_LATITUDE, PixelRounding};
use tileshade_image::{Color, Stroke};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct StyleConfig {
	/// Values below this get `default_color`.
	pub min_value: f64,

	/// Color for missing values, values below `min_value` and values past the last class.
	pub default_color: Color,

	/// Class breakpoints in strictly increasing order.
	/// A value belongs to the first class whose `below` is greater than the value.
	pub classes: Vec<ClassConfig>,

	/// Alpha applied to the class color when filling.
	pub fill_alpha: u8,

	pub stroke_color: Color,

	/// Outline width in pixels. Defaults to the zoom level (at least a hairline); `0` disables outlines.
	pub stroke_width: Option<f32>,

	/// Extra margin, in pixels of the tile, around the queried area.
	pub bleed_pixels: i32,

	/// Latitudes beyond ±this are clamped before projecting. `90` or more disables clamping.
	pub clip_latitude: f64,

	pub rounding: RoundingConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClassConfig {
	pub below: f64,
	pub color: Color,
}

impl ClassConfig {
	pub fn new(below: f64, color: Color) -> ClassConfig {
		ClassConfig { below, color }
	}
}

/// How projected pixel coordinates become whole pixels.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoundingConfig {
	#[default]
	Truncate,
	Round,
}

impl From<RoundingConfig> for PixelRounding {
	fn from(value: RoundingConfig) -> Self {
		match value {
			RoundingConfig::Truncate => PixelRounding::Truncate,
			RoundingConfig::Round => PixelRounding::Round,
		}
	}
}

impl Default for StyleConfig {
	fn default() -> Self {
		StyleConfig {
			min_value: 0.0,
			default_color: Color::WHITE,
			classes: vec![
				ClassConfig::new(50.0, Color::GREEN),
				ClassConfig::new(100.0, Color::LIGHT_GREEN),
				ClassConfig::new(250.0, Color::YELLOW),
				ClassConfig::new(500.0, Color::ORANGE),
				ClassConfig::new(1000.0, Color::RED),
				ClassConfig::new(2500.0, Color::DARK_RED),
				ClassConfig::new(f64::MAX, Color::PURPLE),
			],
			fill_alpha: 128,
			stroke_color: Color::BLACK,
			stroke_width: None,
			bleed_pixels: 0,
			clip_latitude: DEFAULT_CLIP_LATITUDE,
			rounding: RoundingConfig::Truncate,
		}
	}
}

impl StyleConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let style: StyleConfig = serde_yaml_ng::from_reader(reader)?;
		style.validate()?;
		Ok(style)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		// an empty document is not a mapping, but it still means "all defaults"
		if text.trim().is_empty() {
			return Ok(StyleConfig::default());
		}
		StyleConfig::from_reader(text.as_bytes())
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening style {}", path.display()))?;
		StyleConfig::from_reader(BufReader::new(file)).with_context(|| format!("parsing style {}", path.display()))
	}

	pub fn validate(&self) -> Result<()> {
		ensure!(
			self.clip_latitude.is_finite() && self.clip_latitude > 0.0,
			"clip_latitude must be a positive number, got {}",
			self.clip_latitude
		);
		if let Some(width) = self.stroke_width {
			ensure!(width.is_finite() && width >= 0.0, "stroke_width must not be negative, got {width}");
		}
		self.classification()?;
		Ok(())
	}

	/// Builds the value → color lookup. Colors are returned opaque; see [`fill_color`](Self::fill_color).
	pub fn classification(&self) -> Result<ClassificationTable<f64, Color>> {
		ClassificationTable::new(
			self.min_value,
			self.default_color,
			self.classes.iter().map(|class| (class.below, class.color)).collect(),
		)
		.context("invalid classes")
	}

	/// The fill for a classified color.
	pub fn fill_color(&self, class_color: Color) -> Color {
		class_color.with_alpha(self.fill_alpha)
	}

	/// The outline for tiles of the given zoom level, or `None` if outlines are off.
	pub fn stroke(&self, level: u8) -> Option<Stroke> {
		let width = self.stroke_width.unwrap_or_else(|| f32::from(level).max(1.0));
		let stroke = Stroke::new(self.stroke_color, width);
		stroke.is_visible().then_some(stroke)
	}
}
