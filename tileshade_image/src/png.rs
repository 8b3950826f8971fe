use anyhow::{Result, anyhow};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage, codecs::png, load_from_memory_with_format};
use tileshade_core::Blob;

/// Encodes an RGBA image as PNG.
///
/// `speed` ranges from 0 (smallest file) to 100 (fastest), defaulting to 10.
pub fn encode_png(image: &RgbaImage, speed: Option<u8>) -> Result<Blob> {
	let speed = speed.unwrap_or(10).clamp(0, 100);

	use png::{CompressionType, FilterType};
	let (compression_type, filter_type) = match speed {
		0..20 => (CompressionType::Best, FilterType::Adaptive),
		20..60 => (CompressionType::Default, FilterType::Adaptive),
		60..90 => (CompressionType::Fast, FilterType::Avg),
		_ => (CompressionType::Fast, FilterType::NoFilter),
	};

	let mut buffer: Vec<u8> = Vec::new();
	png::PngEncoder::new_with_quality(&mut buffer, compression_type, filter_type).write_image(
		image.as_raw(),
		image.width(),
		image.height(),
		ExtendedColorType::Rgba8,
	)?;

	Ok(Blob::from(buffer))
}

/// Decodes a PNG into an RGBA image, converting other color types.
pub fn decode_png(blob: &Blob) -> Result<RgbaImage> {
	load_from_memory_with_format(blob.as_slice(), ImageFormat::Png)
		.map(|image| image.to_rgba8())
		.map_err(|e| anyhow!("Failed to decode PNG image: {e}"))
}
