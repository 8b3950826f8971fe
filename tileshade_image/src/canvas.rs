//! Drawing of pixel-space polygons onto a raster.
//!
//! [`RasterCanvas`] is the seam between decoded geometry and whatever surface receives it.
//! [`ImageCanvas`] implements it on an in-memory RGBA image:
//!
//! - rings are clipped to the canvas plus a small margin, then tessellated with `lyon`
//! - fills use the even-odd rule over all rings of a polygon, so holes stay empty
//! - wide strokes get round joins; hairlines (width ≤ 1) are antialiased `imageproc` lines
//! - triangles are rasterized by `imageproc` into a coverage mask, and every covered pixel is
//!   composited once with `image`'s source-over blend

use crate::png::encode_png;
use anyhow::{Result, anyhow};
use image::{GrayImage, Luma, Pixel, Rgba, RgbaImage};
use imageproc::{
	drawing::{draw_antialiased_line_segment_mut, draw_line_segment_mut, draw_polygon_with_mut},
	point::Point,
};
use lyon::{
	math::{Point as LyonPoint, point},
	path::{FillRule, LineJoin, Path},
	tessellation::{
		BuffersBuilder, FillOptions, FillTessellator, FillVertex, StrokeOptions, StrokeTessellator, StrokeVertex,
		VertexBuffers,
	},
};
use tileshade_core::{Blob, PixelPoint};
use tileshade_geometry::{PixelGeometry, PixelPolygon, PixelRing};

use super::Color;

/// How far beyond the canvas rings are kept when clipping.
const CLIP_MARGIN: f64 = 2.0;

const COVERED: Luma<u8> = Luma([255]);

/// Outline settings for [`RasterCanvas::stroke_ring`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
	pub color: Color,
	pub width: f32,
}

impl Stroke {
	#[must_use]
	pub fn new(color: Color, width: f32) -> Stroke {
		Stroke { color, width }
	}

	/// A stroke that draws nothing can be skipped entirely.
	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.width > 0.0 && self.color.a > 0
	}
}

/// A surface that polygons can be filled and outlined on.
pub trait RasterCanvas {
	/// Returns `(width, height)` in pixels.
	fn size(&self) -> (u32, u32);

	/// Fills the area enclosed by the polygon's rings with the even-odd rule.
	fn fill_polygon(&mut self, polygon: &PixelPolygon, color: Color) -> Result<()>;

	/// Outlines a ring, closing it back to its first point.
	fn stroke_ring(&mut self, ring: &PixelRing, stroke: &Stroke) -> Result<()>;

	/// Fills every polygon of `geometry` and then outlines its rings.
	fn draw_geometry(&mut self, geometry: &PixelGeometry, fill: Color, stroke: Option<&Stroke>) -> Result<()> {
		let stroke = stroke.filter(|s| s.is_visible());
		for polygon in geometry.polygons() {
			self.fill_polygon(polygon, fill)?;
			if let Some(stroke) = stroke {
				for ring in polygon.rings() {
					self.stroke_ring(ring, stroke)?;
				}
			}
		}
		Ok(())
	}
}

/// A [`RasterCanvas`] backed by an `RgbaImage`.
#[derive(Clone, Debug)]
pub struct ImageCanvas {
	image: RgbaImage,
}

impl ImageCanvas {
	/// Creates a fully transparent canvas.
	#[must_use]
	pub fn new(width: u32, height: u32) -> ImageCanvas {
		ImageCanvas::with_background(width, height, Color::TRANSPARENT)
	}

	#[must_use]
	pub fn with_background(width: u32, height: u32, background: Color) -> ImageCanvas {
		ImageCanvas {
			image: RgbaImage::from_pixel(width, height, background.to_rgba()),
		}
	}

	#[must_use]
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	#[must_use]
	pub fn into_image(self) -> RgbaImage {
		self.image
	}

	/// Returns the color at `(x, y)`, or `None` outside the canvas.
	#[must_use]
	pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
		self.image.get_pixel_checked(x, y).map(|p| Color::from(*p))
	}

	/// Encodes the canvas as PNG.
	pub fn to_png(&self) -> Result<Blob> {
		encode_png(&self.image, None)
	}
}

impl RasterCanvas for ImageCanvas {
	fn size(&self) -> (u32, u32) {
		self.image.dimensions()
	}

	fn fill_polygon(&mut self, polygon: &PixelPolygon, color: Color) -> Result<()> {
		if color.a == 0 {
			return Ok(());
		}
		let rect = self.clip_rect(CLIP_MARGIN);
		let rings: Vec<Vec<PixelPoint>> = polygon
			.rings()
			.iter()
			.filter(|ring| !ring.is_degenerate())
			.map(|ring| clip_ring(ring.points(), rect))
			.filter(|points| points.len() >= 3)
			.collect();
		if rings.is_empty() {
			return Ok(());
		}

		let mut buffers: VertexBuffers<LyonPoint, u32> = VertexBuffers::new();
		FillTessellator::new()
			.tessellate_path(
				&ring_path(&rings),
				&FillOptions::default().with_fill_rule(FillRule::EvenOdd),
				&mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| vertex.position()),
			)
			.map_err(|error| anyhow!("tessellating polygon fill: {error:?}"))?;
		self.paint_triangles(&buffers, color);
		Ok(())
	}

	fn stroke_ring(&mut self, ring: &PixelRing, stroke: &Stroke) -> Result<()> {
		if !stroke.is_visible() || ring.len() < 2 {
			return Ok(());
		}
		if stroke.width <= 1.0 {
			self.stroke_hairline(ring, stroke.color);
			return Ok(());
		}

		// edges added along the clip border stay outside the canvas
		let margin = f64::from(stroke.width) / 2.0 + CLIP_MARGIN;
		let points = clip_ring(ring.points(), self.clip_rect(margin));
		if points.len() < 2 {
			return Ok(());
		}

		let options = StrokeOptions::default()
			.with_line_width(stroke.width)
			.with_line_join(LineJoin::Round);
		let mut buffers: VertexBuffers<LyonPoint, u32> = VertexBuffers::new();
		StrokeTessellator::new()
			.tessellate_path(
				&ring_path(&[points]),
				&options,
				&mut BuffersBuilder::new(&mut buffers, |vertex: StrokeVertex| vertex.position()),
			)
			.map_err(|error| anyhow!("tessellating ring outline: {error:?}"))?;
		self.paint_triangles(&buffers, stroke.color);
		Ok(())
	}
}

impl ImageCanvas {
	fn stroke_hairline(&mut self, ring: &PixelRing, color: Color) {
		let clip = self.clip_rect(1.0);
		for (a, b) in edges(ring.points()) {
			let Some((a, b)) = clip_segment(*a, *b, clip) else {
				continue;
			};
			draw_antialiased_line_segment_mut(
				&mut self.image,
				(a.x.round() as i32, a.y.round() as i32),
				(b.x.round() as i32, b.y.round() as i32),
				color.to_rgba(),
				|line, original, weight| {
					let mut out = original;
					out.blend(&with_coverage(line, weight));
					out
				},
			);
		}
	}

	/// Rasterizes tessellated triangles into a coverage mask, then blends `color` once into every
	/// covered pixel, so triangles sharing an edge never darken it twice.
	fn paint_triangles(&mut self, buffers: &VertexBuffers<LyonPoint, u32>, color: Color) {
		let bounds = buffers.vertices.iter().fold(None, |bounds, p| {
			let (x, y) = (f64::from(p.x), f64::from(p.y));
			Some(match bounds {
				None => [x, y, x, y],
				Some([x0, y0, x1, y1]) => [x0.min(x), y0.min(y), x1.max(x), y1.max(y)],
			})
		});
		let Some([left, top, right, bottom]) = self.window(bounds, 1.0) else {
			return;
		};

		let mut mask = GrayImage::new(right - left, bottom - top);
		let snap = |p: &LyonPoint| Point::new(p.x.floor() as i32 - left as i32, p.y.floor() as i32 - top as i32);
		for triangle in buffers.indices.chunks_exact(3) {
			let mut corners = [0, 1, 2].map(|i| snap(&buffers.vertices[triangle[i] as usize]));
			// imageproc wants distinct first and last corners
			if corners[0] == corners[2] {
				corners.rotate_left(1);
			}
			if corners[0] == corners[2] {
				if let (Ok(x), Ok(y)) = (u32::try_from(corners[0].x), u32::try_from(corners[0].y)) {
					if let Some(pixel) = mask.get_pixel_mut_checked(x, y) {
						*pixel = COVERED;
					}
				}
				continue;
			}
			draw_polygon_with_mut(&mut mask, &corners, COVERED, plot_clipped);
		}

		let rgba = color.to_rgba();
		for (x, y, coverage) in mask.enumerate_pixels() {
			if coverage[0] > 0 {
				self.image.get_pixel_mut(left + x, top + y).blend(&rgba);
			}
		}
	}

	/// The canvas grown by `margin` on every side, as `[x_min, y_min, x_max, y_max]`.
	fn clip_rect(&self, margin: f64) -> [f64; 4] {
		let (width, height) = self.size();
		[-margin, -margin, f64::from(width) + margin, f64::from(height) + margin]
	}

	/// Converts `[x_min, y_min, x_max, y_max]` grown by `margin` into a pixel window
	/// clipped to the canvas, or `None` if nothing of it is visible.
	fn window(&self, bounds: Option<[f64; 4]>, margin: f64) -> Option<[u32; 4]> {
		let [x0, y0, x1, y1] = bounds?;
		let (width, height) = self.size();
		let left = (x0 - margin).floor().max(0.0);
		let top = (y0 - margin).floor().max(0.0);
		let right = (x1 + margin).ceil().min(f64::from(width));
		let bottom = (y1 + margin).ceil().min(f64::from(height));
		if left >= right || top >= bottom {
			return None;
		}
		Some([left as u32, top as u32, right as u32, bottom as u32])
	}
}

/// Edge plotter for `draw_polygon_with_mut` that skips the parts of an edge off the mask.
fn plot_clipped(mask: &mut GrayImage, start: (f32, f32), end: (f32, f32), value: Luma<u8>) {
	let (width, height) = mask.dimensions();
	let clip = [-1.0, -1.0, f64::from(width) + 1.0, f64::from(height) + 1.0];
	let start = PixelPoint::new(f64::from(start.0), f64::from(start.1));
	let end = PixelPoint::new(f64::from(end.0), f64::from(end.1));
	if let Some((a, b)) = clip_segment(start, end, clip) {
		draw_line_segment_mut(mask, (a.x as f32, a.y as f32), (b.x as f32, b.y as f32), value);
	}
}

/// Scales the alpha of `pixel` by an antialiasing weight.
fn with_coverage(pixel: Rgba<u8>, coverage: f32) -> Rgba<u8> {
	let Rgba([r, g, b, a]) = pixel;
	Rgba([r, g, b, (f32::from(a) * coverage.clamp(0.0, 1.0)).round() as u8])
}

/// Builds one closed lyon sub-path per ring.
fn ring_path(rings: &[Vec<PixelPoint>]) -> Path {
	let mut builder = Path::builder();
	for points in rings {
		let Some((first, rest)) = points.split_first() else {
			continue;
		};
		builder.begin(point(first.x as f32, first.y as f32));
		for p in rest {
			builder.line_to(point(p.x as f32, p.y as f32));
		}
		builder.end(true);
	}
	builder.build()
}

/// Iterates over the edges of an implicitly closed ring.
fn edges(points: &[PixelPoint]) -> impl Iterator<Item = (&PixelPoint, &PixelPoint)> {
	points.iter().zip(points.iter().cycle().skip(1)).take(points.len())
}

/// Clips a closed ring to `[x_min, y_min, x_max, y_max]` (Sutherland–Hodgman).
///
/// The result may run along the border of the rectangle. Non-finite vertices are dropped.
fn clip_ring(points: &[PixelPoint], rect: [f64; 4]) -> Vec<PixelPoint> {
	let [x_min, y_min, x_max, y_max] = rect;
	let mut output: Vec<PixelPoint> = points
		.iter()
		.filter(|p| p.x.is_finite() && p.y.is_finite())
		.copied()
		.collect();

	for side in 0..4 {
		let inside = |p: &PixelPoint| match side {
			0 => p.x >= x_min,
			1 => p.x <= x_max,
			2 => p.y >= y_min,
			_ => p.y <= y_max,
		};
		let crossing = |a: &PixelPoint, b: &PixelPoint| {
			let t = match side {
				0 => (x_min - a.x) / (b.x - a.x),
				1 => (x_max - a.x) / (b.x - a.x),
				2 => (y_min - a.y) / (b.y - a.y),
				_ => (y_max - a.y) / (b.y - a.y),
			};
			PixelPoint::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
		};

		let input = std::mem::take(&mut output);
		let Some(mut previous) = input.last().copied() else {
			break;
		};
		for current in input {
			match (inside(&previous), inside(&current)) {
				(true, true) => output.push(current),
				(true, false) => output.push(crossing(&previous, &current)),
				(false, true) => {
					output.push(crossing(&previous, &current));
					output.push(current);
				}
				(false, false) => {}
			}
			previous = current;
		}
	}
	output
}

/// Clips the segment `a`–`b` to `[x_min, y_min, x_max, y_max]` (Liang–Barsky).
fn clip_segment(a: PixelPoint, b: PixelPoint, rect: [f64; 4]) -> Option<(PixelPoint, PixelPoint)> {
	let [x_min, y_min, x_max, y_max] = rect;
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	let mut t0: f64 = 0.0;
	let mut t1: f64 = 1.0;

	for (p, q) in [(-dx, a.x - x_min), (dx, x_max - a.x), (-dy, a.y - y_min), (dy, y_max - a.y)] {
		if p == 0.0 {
			if q < 0.0 {
				return None;
			}
			continue;
		}
		let r = q / p;
		if p < 0.0 {
			if r > t1 {
				return None;
			}
			t0 = t0.max(r);
		} else {
			if r < t0 {
				return None;
			}
			t1 = t1.min(r);
		}
	}

	Some((
		PixelPoint::new(a.x + t0 * dx, a.y + t0 * dy),
		PixelPoint::new(a.x + t1 * dx, a.y + t1 * dy),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashSet;

	fn square(x: i32, y: i32, size: i32) -> PixelRing {
		PixelRing::from(&[[x, y], [x + size, y], [x + size, y + size], [x, y + size]])
	}

	fn count(canvas: &ImageCanvas, color: Color) -> usize {
		canvas.image().pixels().filter(|p| Color::from(**p) == color).count()
	}

	fn assert_close(actual: Option<Color>, expected: Color) {
		let actual = actual.expect("pixel inside the canvas");
		assert!(actual.is_close_to(&expected, 1), "{actual:?} is not close to {expected:?}");
	}

	#[test]
	fn fill_covers_interior_and_boundary() -> Result<()> {
		let mut canvas = ImageCanvas::new(32, 32);
		canvas.fill_polygon(&PixelPolygon(vec![square(10, 10, 10)]), Color::RED)?;
		assert_eq!(canvas.pixel(10, 10), Some(Color::RED));
		assert_eq!(canvas.pixel(15, 15), Some(Color::RED));
		assert_eq!(canvas.pixel(19, 19), Some(Color::RED));
		assert_eq!(canvas.pixel(8, 15), Some(Color::TRANSPARENT));
		assert_eq!(canvas.pixel(22, 15), Some(Color::TRANSPARENT));
		assert_eq!(canvas.pixel(15, 23), Some(Color::TRANSPARENT));
		Ok(())
	}

	#[test]
	fn holes_stay_empty() -> Result<()> {
		let mut canvas = ImageCanvas::new(32, 32);
		let polygon = PixelPolygon::new(square(0, 0, 30), vec![square(10, 10, 10)]);
		canvas.fill_polygon(&polygon, Color::GREEN)?;
		assert_eq!(canvas.pixel(5, 5), Some(Color::GREEN));
		assert_eq!(canvas.pixel(25, 15), Some(Color::GREEN));
		assert_eq!(canvas.pixel(15, 15), Some(Color::TRANSPARENT));
		assert_eq!(canvas.pixel(12, 17), Some(Color::TRANSPARENT));
		Ok(())
	}

	#[test]
	fn fill_is_clipped_to_canvas() -> Result<()> {
		let mut canvas = ImageCanvas::new(16, 16);
		let huge = PixelRing::from(&[[-1e9, -1e9], [1e9, -1e9], [1e9, 1e9], [-1e9, 1e9]]);
		canvas.fill_polygon(&PixelPolygon(vec![huge]), Color::BLACK)?;
		assert_eq!(count(&canvas, Color::BLACK), 256);
		Ok(())
	}

	#[test]
	fn degenerate_rings_are_ignored() -> Result<()> {
		let mut canvas = ImageCanvas::new(16, 16);
		canvas.fill_polygon(&PixelPolygon::from(&[[[0, 0], [15, 15]]]), Color::BLACK)?;
		assert_eq!(count(&canvas, Color::TRANSPARENT), 256);
		Ok(())
	}

	#[test]
	fn fill_blends_with_background() -> Result<()> {
		let mut canvas = ImageCanvas::with_background(8, 8, Color::WHITE);
		canvas.fill_polygon(&PixelPolygon(vec![square(0, 0, 8)]), Color::RED.with_alpha(128))?;
		assert_close(canvas.pixel(3, 3), Color::rgb(255, 127, 127));
		Ok(())
	}

	#[test]
	fn translucent_fill_is_uniform() -> Result<()> {
		// a concave outline tessellates into many triangles sharing edges
		let mut canvas = ImageCanvas::with_background(40, 40, Color::WHITE);
		let star = PixelRing::from(&[
			[20, 2],
			[25, 15],
			[38, 15],
			[28, 24],
			[32, 38],
			[20, 30],
			[8, 38],
			[12, 24],
			[2, 15],
			[15, 15],
		]);
		canvas.fill_polygon(&PixelPolygon(vec![star]), Color::PURPLE.with_alpha(100))?;
		let colors: HashSet<Color> = canvas
			.image()
			.pixels()
			.map(|p| Color::from(*p))
			.filter(|c| *c != Color::WHITE)
			.collect();
		assert_eq!(colors.len(), 1, "{colors:?}");
		Ok(())
	}

	#[test]
	fn fill_onto_transparent_keeps_color() -> Result<()> {
		let mut canvas = ImageCanvas::new(8, 8);
		canvas.fill_polygon(&PixelPolygon(vec![square(0, 0, 8)]), Color::ORANGE.with_alpha(128))?;
		assert_close(canvas.pixel(4, 4), Color::ORANGE.with_alpha(128));
		Ok(())
	}

	#[rstest]
	#[case(1.0, 255)]
	#[case(0.5, 128)]
	#[case(0.0, 0)]
	#[case(2.0, 255)]
	fn coverage_scales_alpha(#[case] coverage: f32, #[case] alpha: u8) {
		assert_eq!(with_coverage(Rgba([1, 2, 3, 255]), coverage), Rgba([1, 2, 3, alpha]));
	}

	#[test]
	fn wide_stroke_covers_outline() -> Result<()> {
		let mut canvas = ImageCanvas::new(32, 32);
		canvas.stroke_ring(&square(8, 8, 16), &Stroke::new(Color::BLACK, 4.0))?;
		assert_eq!(canvas.pixel(8, 16), Some(Color::BLACK));
		assert_eq!(canvas.pixel(16, 23), Some(Color::BLACK));
		assert_eq!(canvas.pixel(16, 16), Some(Color::TRANSPARENT));
		assert_eq!(canvas.pixel(0, 0), Some(Color::TRANSPARENT));
		Ok(())
	}

	#[test]
	fn hairline_stroke_touches_edges() -> Result<()> {
		let mut canvas = ImageCanvas::new(32, 32);
		canvas.stroke_ring(&square(4, 4, 20), &Stroke::new(Color::BLACK, 1.0))?;
		assert_eq!(canvas.pixel(14, 4), Some(Color::BLACK));
		assert_eq!(canvas.pixel(24, 14), Some(Color::BLACK));
		assert_eq!(canvas.pixel(14, 14), Some(Color::TRANSPARENT));
		Ok(())
	}

	#[test]
	fn far_away_strokes_are_cheap_and_invisible() -> Result<()> {
		let mut canvas = ImageCanvas::new(16, 16);
		let ring = PixelRing::from(&[[1e8, 1e8], [2e8, 1e8], [2e8, 2e8]]);
		canvas.stroke_ring(&ring, &Stroke::new(Color::BLACK, 1.0))?;
		canvas.stroke_ring(&ring, &Stroke::new(Color::BLACK, 8.0))?;
		assert_eq!(count(&canvas, Color::TRANSPARENT), 256);
		Ok(())
	}

	#[test]
	fn enclosing_ring_stroke_stays_off_canvas() -> Result<()> {
		let mut canvas = ImageCanvas::new(16, 16);
		let ring = PixelRing::from(&[[-1e6, -1e6], [1e6, -1e6], [1e6, 1e6], [-1e6, 1e6]]);
		canvas.stroke_ring(&ring, &Stroke::new(Color::BLACK, 6.0))?;
		assert_eq!(count(&canvas, Color::TRANSPARENT), 256);
		Ok(())
	}

	#[test]
	fn draw_geometry_fills_then_strokes() -> Result<()> {
		let mut canvas = ImageCanvas::new(32, 32);
		let geometry = PixelGeometry::Polygon(PixelPolygon(vec![square(4, 4, 24)]));
		canvas.draw_geometry(&geometry, Color::YELLOW, Some(&Stroke::new(Color::BLACK, 2.0)))?;
		assert_eq!(canvas.pixel(16, 16), Some(Color::YELLOW));
		assert_eq!(canvas.pixel(4, 16), Some(Color::BLACK));

		let mut unstroked = ImageCanvas::new(32, 32);
		unstroked.draw_geometry(&geometry, Color::YELLOW, Some(&Stroke::new(Color::BLACK, 0.0)))?;
		assert_eq!(unstroked.pixel(4, 16), Some(Color::YELLOW));
		Ok(())
	}

	#[rstest]
	#[case([-5.0, 5.0], [15.0, 5.0], Some(([0.0, 5.0], [10.0, 5.0])))]
	#[case([2.0, 2.0], [8.0, 8.0], Some(([2.0, 2.0], [8.0, 8.0])))]
	#[case([-5.0, -5.0], [-1.0, 20.0], None)]
	#[case([5.0, 12.0], [5.0, -4.0], Some(([5.0, 10.0], [5.0, 0.0])))]
	fn clipping(#[case] a: [f64; 2], #[case] b: [f64; 2], #[case] expected: Option<([f64; 2], [f64; 2])>) {
		let result = clip_segment(PixelPoint::from(a), PixelPoint::from(b), [0.0, 0.0, 10.0, 10.0]);
		assert_eq!(result, expected.map(|(a, b)| (PixelPoint::from(a), PixelPoint::from(b))));
	}

	#[test]
	fn ring_clipping() {
		let rect = [0.0, 0.0, 10.0, 10.0];
		let inside = square(2, 2, 4);
		assert_eq!(clip_ring(inside.points(), rect), inside.points());

		let outside = square(20, 20, 4);
		assert!(clip_ring(outside.points(), rect).is_empty());

		let overlapping = square(5, 5, 10);
		let clipped = clip_ring(overlapping.points(), rect);
		assert!(clipped.iter().all(|p| (5.0..=10.0).contains(&p.x) && (5.0..=10.0).contains(&p.y)));
		assert!(clipped.contains(&PixelPoint::new(10.0, 10.0)));
		assert!(clipped.contains(&PixelPoint::new(5.0, 5.0)));

		let enclosing = square(-5, -5, 20);
		let clipped = clip_ring(enclosing.points(), rect);
		for corner in [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]] {
			assert!(clipped.contains(&PixelPoint::from(corner)), "{clipped:?}");
		}

		let with_infinity = PixelRing::from(&[[1.0, 1.0], [f64::INFINITY, 1.0], [5.0, 5.0], [1.0, 5.0]]);
		assert_eq!(clip_ring(with_infinity.points(), rect).len(), 3);
	}

	#[test]
	fn closed_edges() {
		let points = [PixelPoint::new(0.0, 0.0), PixelPoint::new(1.0, 0.0), PixelPoint::new(1.0, 1.0)];
		let pairs: Vec<_> = edges(&points).collect();
		assert_eq!(pairs.len(), 3);
		assert_eq!(pairs[2], (&points[2], &points[0]));
	}
}
