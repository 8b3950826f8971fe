use anyhow::{Context, Result, ensure};
use clap::Args;
use std::path::PathBuf;
use tileshade_core::{Blob, DEFAULT_CLIP_LATITUDE, PixelRounding, TileCoord};
use tileshade_geometry::decode_wkb;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// file containing one WKB record, raw or hex encoded (see --hex)
	#[arg(required = true)]
	filename: PathBuf,

	/// tile as "z/x/y"
	#[arg(required = true)]
	tile: TileCoord,

	/// read the file as hex text instead of raw bytes
	#[arg(long)]
	hex: bool,

	/// round pixel positions to the nearest pixel instead of truncating
	#[arg(long)]
	round: bool,

	/// clamp latitudes beyond ± this value before projecting
	#[arg(long, default_value_t = DEFAULT_CLIP_LATITUDE)]
	clip_latitude: f64,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", describe(arguments)?);
	Ok(())
}

fn describe(arguments: &Subcommand) -> Result<String> {
	ensure!(
		arguments.clip_latitude > 0.0,
		"--clip-latitude must be a positive number of degrees, got {}",
		arguments.clip_latitude
	);
	let blob = load(arguments)?;
	let rounding = if arguments.round {
		PixelRounding::Round
	} else {
		PixelRounding::Truncate
	};
	let projector = arguments
		.tile
		.projector()
		.with_clip_latitude(arguments.clip_latitude)
		.with_rounding(rounding);

	let geometry = decode_wkb(blob.as_slice(), |p| projector.project(p))
		.with_context(|| format!("decoding {}", arguments.filename.display()))?;

	Ok(match geometry {
		Some(geometry) => {
			let mut text = format!("{} with {} points", geometry.type_name(), geometry.point_count());
			for (index, polygon) in geometry.polygons().iter().enumerate() {
				for (ring_index, ring) in polygon.rings().iter().enumerate() {
					let role = if ring_index == 0 { "outer" } else { "hole" };
					text.push_str(&format!("\npolygon {index} {role}: {ring:?}"));
				}
			}
			text
		}
		None => format!("degenerate: nothing visible in tile {}", arguments.tile),
	})
}

fn load(arguments: &Subcommand) -> Result<Blob> {
	let blob = Blob::load_from_file(&arguments.filename)?;
	if !arguments.hex {
		return Ok(blob);
	}
	let text = String::from_utf8(blob.into_vec()).context("hex file is not valid UTF-8")?;
	let text = text.trim().trim_start_matches("\\x").trim_start_matches("0x");
	Ok(Blob::from(hex::decode(text).context("invalid hex")?))
}
