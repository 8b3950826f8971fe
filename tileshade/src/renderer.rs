//! Turns the records around one tile into a picture of that tile.

use crate::{GeometrySource, StyleConfig};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fmt::{self, Display};
use tileshade_core::{Blob, ClassificationTable, TILE_SIZE, TileCoord};
use tileshade_geometry::decode_wkb;
use tileshade_image::{Color, ImageCanvas, RasterCanvas};

/// What happened to the records of one tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
	/// Records that were painted.
	pub drawn: usize,
	/// Records that decoded fine but collapsed below one pixel.
	pub degenerate: usize,
	/// Records that could not be decoded or drawn.
	pub skipped: usize,
}

impl RenderStats {
	pub fn total(&self) -> usize {
		self.drawn + self.degenerate + self.skipped
	}
}

impl Display for RenderStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} drawn, {} degenerate, {} skipped",
			self.drawn, self.degenerate, self.skipped
		)
	}
}

#[derive(Debug)]
pub struct TileRenderer<S: GeometrySource> {
	source: S,
	style: StyleConfig,
	classification: ClassificationTable<f64, Color>,
}

impl<S: GeometrySource> TileRenderer<S> {
	/// # Errors
	/// Fails if the style's classes are not strictly increasing.
	pub fn new(source: S, style: StyleConfig) -> Result<TileRenderer<S>> {
		let classification = style.classification()?;
		Ok(TileRenderer {
			source,
			style,
			classification,
		})
	}

	pub fn style(&self) -> &StyleConfig {
		&self.style
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// Renders a tile onto a fresh transparent canvas.
	pub fn render(&self, coord: &TileCoord) -> Result<(ImageCanvas, RenderStats)> {
		let mut canvas = ImageCanvas::new(TILE_SIZE, TILE_SIZE);
		let stats = self.draw(coord, &mut canvas)?;
		Ok((canvas, stats))
	}

	/// Renders a tile and encodes it as PNG.
	pub fn render_png(&self, coord: &TileCoord) -> Result<(Blob, RenderStats)> {
		let (canvas, stats) = self.render(coord)?;
		Ok((canvas.to_png()?, stats))
	}

	/// Paints every record near `coord` onto `canvas`.
	///
	/// Records that fail to decode are logged and counted, and never abort the tile.
	///
	/// # Errors
	/// Fails only if the source cannot be queried.
	pub fn draw(&self, coord: &TileCoord, canvas: &mut impl RasterCanvas) -> Result<RenderStats> {
		let bbox = coord.geo_bounds(self.style.bleed_pixels);
		let records = self
			.source
			.query(&bbox)
			.with_context(|| format!("querying {} source for tile {coord}", self.source.source_type()))?;
		debug!("tile {coord}: {} records in {bbox:?}", records.len());

		let projector = coord
			.projector()
			.with_clip_latitude(self.style.clip_latitude)
			.with_rounding(self.style.rounding.into());
		let stroke = self.style.stroke(coord.level);

		let mut stats = RenderStats::default();
		for record in records {
			match decode_wkb(record.wkb.as_slice(), |p| projector.project(p)) {
				Ok(Some(geometry)) => {
					let color = self.style.fill_color(*self.classification.classify(record.value));
					match canvas.draw_geometry(&geometry, color, stroke.as_ref()) {
						Ok(()) => stats.drawn += 1,
						Err(error) => {
							warn!("could not draw record '{}' in tile {coord}: {error:#}", record.id);
							stats.skipped += 1;
						}
					}
				}
				Ok(None) => {
					debug!("record '{}' is too small for tile {coord}", record.id);
					stats.degenerate += 1;
				}
				Err(error) => {
					warn!("skipping record '{}' in tile {coord}: {error}", record.id);
					stats.skipped += 1;
				}
			}
		}

		debug!("tile {coord}: {stats}");
		Ok(stats)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeometryRecord, MemorySource};
	use anyhow::bail;
	use pretty_assertions::assert_eq;
	use std::path::Path;
	use tileshade_core::GeoBBox;
	use tileshade_geometry::wkb::{WkbByteOrder, encode_wkb_polygon};
	use tileshade_image::decode_png;

	fn regions() -> TileRenderer<MemorySource> {
		let source = MemorySource::from_csv_path(Path::new("../testdata/regions.csv")).unwrap();
		TileRenderer::new(source, StyleConfig::default()).unwrap()
	}

	fn tile(text: &str) -> TileCoord {
		text.parse().unwrap()
	}

	fn assert_close(actual: Option<Color>, expected: Color) {
		let actual = actual.expect("pixel inside the tile");
		assert!(actual.is_close_to(&expected, 1), "{actual:?} is not close to {expected:?}");
	}

	#[test]
	fn counts_every_record() -> Result<()> {
		let (_, stats) = regions().render(&tile("4/8/5"))?;
		assert_eq!(
			stats,
			RenderStats {
				drawn: 3,
				degenerate: 1,
				skipped: 1
			}
		);
		assert_eq!(stats.total(), 5);
		assert_eq!(stats.to_string(), "3 drawn, 1 degenerate, 1 skipped");
		Ok(())
	}

	#[test]
	fn fills_by_class() -> Result<()> {
		let (canvas, _) = regions().render(&tile("4/8/5"))?;
		// berlin, 4200 per km²
		assert_close(canvas.pixel(153, 63), Color::PURPLE.with_alpha(128));
		// brandenburg, 85 per km², with berlin cut out
		assert_close(canvas.pixel(140, 40), Color::LIGHT_GREEN.with_alpha(128));
		// far from everything
		assert_eq!(canvas.pixel(10, 200), Some(Color::TRANSPARENT));
		// outline of brandenburg's west edge
		assert_eq!(canvas.pixel(130, 60), Some(Color::BLACK));
		Ok(())
	}

	#[test]
	fn renders_png() -> Result<()> {
		let (blob, stats) = regions().render_png(&tile("4/8/5"))?;
		assert_eq!(stats.drawn, 3);
		let image = decode_png(&blob)?;
		assert_eq!(image.dimensions(), (256, 256));
		Ok(())
	}

	#[test]
	fn shapes_outside_the_tile_leave_it_empty() -> Result<()> {
		// the memory source does not filter, so everything is drawn far off the canvas
		let (canvas, stats) = regions().render(&tile("4/0/15"))?;
		assert_eq!(stats.drawn, 3);
		assert!(canvas.image().pixels().all(|p| p.0[3] == 0));
		Ok(())
	}

	#[test]
	fn missing_value_uses_default_color() -> Result<()> {
		let wkb = encode_wkb_polygon(
			&[vec![[-90.0, -45.0], [90.0, -45.0], [90.0, 45.0], [-90.0, 45.0]]],
			WkbByteOrder::Xdr,
		)?;
		let source = MemorySource::new(vec![GeometryRecord::new("world", None, wkb)]);
		let style = StyleConfig {
			stroke_width: Some(0.0),
			fill_alpha: 255,
			..StyleConfig::default()
		};
		let (canvas, stats) = TileRenderer::new(source, style)?.render(&tile("0/0/0"))?;
		assert_eq!(stats.drawn, 1);
		assert_eq!(canvas.pixel(128, 128), Some(Color::WHITE));
		assert_eq!(canvas.pixel(128, 5), Some(Color::TRANSPARENT));
		Ok(())
	}

	#[derive(Debug)]
	struct FailingSource;

	impl GeometrySource for FailingSource {
		fn query(&self, _bbox: &GeoBBox) -> Result<Vec<GeometryRecord>> {
			bail!("connection refused")
		}

		fn source_type(&self) -> &str {
			"failing"
		}
	}

	#[test]
	fn source_errors_abort_the_tile() {
		let renderer = TileRenderer::new(FailingSource, StyleConfig::default()).unwrap();
		let error = renderer.render(&tile("1/0/0")).unwrap_err();
		assert_eq!(format!("{error:#}"), "querying failing source for tile 1/0/0: connection refused");
	}

	#[test]
	fn rejects_bad_style() {
		let style = StyleConfig::from_string("classes: [{below: 2, color: red}]").unwrap();
		let style = StyleConfig {
			classes: vec![style.classes[0].clone(), style.classes[0].clone()],
			..style
		};
		assert!(TileRenderer::new(MemorySource::default(), style).is_err());
	}
}
