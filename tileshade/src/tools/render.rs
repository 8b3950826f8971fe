use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::path::PathBuf;
use tileshade::{MemorySource, RenderStats, StyleConfig, TileRenderer};
use tileshade_core::TileCoord;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// CSV file with the columns id, value and wkb (hex encoded)
	#[arg(required = true, verbatim_doc_comment)]
	csv: PathBuf,

	/// tile as "z/x/y"
	#[arg(required = true)]
	tile: TileCoord,

	/// where to write the PNG
	#[arg(long, short)]
	output: PathBuf,

	/// YAML style; the population density default is used without it
	#[arg(long, short)]
	style: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let stats = render(arguments)?;
	info!("{}", summary(arguments, &stats));
	Ok(())
}

fn summary(arguments: &Subcommand, stats: &RenderStats) -> String {
	format!("rendered tile {} to {:?}: {stats}", arguments.tile, arguments.output)
}

fn render(arguments: &Subcommand) -> Result<RenderStats> {
	let style = match &arguments.style {
		Some(path) => StyleConfig::from_path(path)?,
		None => StyleConfig::default(),
	};
	let source = MemorySource::from_csv_path(&arguments.csv)?;
	info!("loaded {} records from {:?}", source.len(), arguments.csv);

	let renderer = TileRenderer::new(source, style)?;
	let (png, stats) = renderer.render_png(&arguments.tile)?;
	png.save_to_file(&arguments.output)
		.with_context(|| format!("writing {:?}", arguments.output))?;
	Ok(stats)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use assert_fs::TempDir;
	use tileshade_core::Blob;
	use tileshade_image::{Color, decode_png};

	#[test]
	fn renders_fixture() -> Result<()> {
		let dir = TempDir::new()?;
		let output = dir.path().join("tile.png");
		let stats = render(&Subcommand {
			csv: PathBuf::from("../testdata/regions.csv"),
			tile: "4/8/5".parse()?,
			output: output.clone(),
			style: None,
		})?;
		assert_eq!(stats.drawn, 3);
		assert_eq!(stats.skipped, 1);
		let arguments = Subcommand {
			csv: PathBuf::new(),
			tile: "4/8/5".parse()?,
			output: PathBuf::from("tile.png"),
			style: None,
		};
		assert_eq!(
			summary(&arguments, &stats),
			"rendered tile 4/8/5 to \"tile.png\": 3 drawn, 1 degenerate, 1 skipped"
		);

		let image = decode_png(&Blob::load_from_file(&output)?)?;
		assert!(Color::from(*image.get_pixel(153, 63)).is_close_to(&Color::PURPLE.with_alpha(128), 1));
		Ok(())
	}

	#[test]
	fn renders_with_style() -> Result<()> {
		let dir = TempDir::new()?;
		let output = dir.path().join("styled.png");
		render(&Subcommand {
			csv: PathBuf::from("../testdata/regions.csv"),
			tile: "4/8/5".parse()?,
			output: output.clone(),
			style: Some(PathBuf::from("../testdata/style.yml")),
		})?;

		let image = decode_png(&Blob::load_from_file(&output)?)?;
		assert!(Color::from(*image.get_pixel(153, 63)).is_close_to(&Color::RED.with_alpha(200), 1));
		assert!(Color::from(*image.get_pixel(140, 40)).is_close_to(&Color::GREEN.with_alpha(200), 1));
		Ok(())
	}

	#[test]
	fn run_via_cli() -> Result<()> {
		let dir = TempDir::new()?;
		let output = dir.path().join("cli.png");
		let output = output.to_str().context("temp path is not UTF-8")?;
		run_command(vec!["tileshade", "-q", "render", "../testdata/regions.csv", "4/8/5", "-o", output])?;
		assert!(std::path::Path::new(output).exists());

		assert!(run_command(vec!["tileshade", "render", "../testdata/regions.csv", "4/8/5"]).is_err());
		Ok(())
	}
}
