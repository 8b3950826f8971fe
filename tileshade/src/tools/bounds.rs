use anyhow::Result;
use clap::Args;
use tileshade_core::TileCoord;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile as "z/x/y"
	#[arg(required = true)]
	tile: TileCoord,

	/// padding around the tile in pixels, as used when querying geometries
	#[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
	bleed: i32,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", describe(arguments));
	Ok(())
}

fn describe(arguments: &Subcommand) -> String {
	let tile = &arguments.tile;
	let bbox = tile.geo_bounds(arguments.bleed);
	let rect = tile.projected_bounds();
	format!(
		"tile: {tile}\nbbox: {}\nprojected: {rect:?}",
		bbox.as_string_list()
	)
}
