mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Show the geographic query area and projected bounds of a tile
	Bounds(tools::bounds::Subcommand),

	/// Decode a WKB file into the pixel rings of a tile
	Decode(tools::decode::Subcommand),

	/// Render a tile from a CSV of WKB records into a PNG
	Render(tools::render::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Bounds(arguments) => tools::bounds::run(arguments),
		Commands::Decode(arguments) => tools::decode::run(arguments),
		Commands::Render(arguments) => tools::render::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["tileshade"]).unwrap_err().to_string();
		assert!(err.contains("Usage: tileshade [OPTIONS] <COMMAND>"), "{err}");
		assert!(err.contains("bounds"));
		assert!(err.contains("render"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["tileshade", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("tileshade "));
	}

	#[test]
	fn bounds_subcommand() {
		let output = run_command(vec!["tileshade", "bounds"]).unwrap_err().to_string();
		assert!(output.starts_with("Show the geographic query area and projected bounds of a tile"));
	}

	#[test]
	fn decode_subcommand() {
		let output = run_command(vec!["tileshade", "decode"]).unwrap_err().to_string();
		assert!(output.starts_with("Decode a WKB file into the pixel rings of a tile"));
	}

	#[test]
	fn render_subcommand() {
		let output = run_command(vec!["tileshade", "render"]).unwrap_err().to_string();
		assert!(output.starts_with("Render a tile from a CSV of WKB records into a PNG"));
	}

	#[test]
	fn quiet_flag() {
		let msg = run_command(vec!["tileshade", "-q", "bounds", "0/0/0"]).unwrap();
		assert!(msg.contains("Bounds"));
	}
}
