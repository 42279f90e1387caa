use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `spring-init` binary.
#[derive(Parser, Debug)]
#[command(
	name = "spring-init",
	version,
	long_version = long_version(),
	about = "Generate Spring Boot projects from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SPRING_INIT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		value_name = "DIR",
		help = "Directory the project is written to (default: current directory)"
	)]
	pub(crate) target: Option<PathBuf>,
	#[arg(
		short = 'd',
		long = "directory",
		value_name = "DIR",
		conflicts_with = "target",
		help = "Same as the positional DIR"
	)]
	pub(crate) directory: Option<PathBuf>,
	#[arg(
		short = 'u',
		long,
		value_name = "URL",
		help = "Spring Initializr service to use (default: https://start.spring.io)"
	)]
	pub(crate) url: Option<String>,
	#[arg(
		short = 't',
		long = "timeout",
		value_name = "SECS",
		help = "Request timeout in seconds (default: 10)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: spring)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log level: off, error, warn, info, debug or trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Log file (default: spring-init.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(long = "list-themes", help = "Print the available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before starting"
	)]
	pub(crate) print_config: bool,
}

impl CliArgs {
	/// Output directory from either the positional argument or `--directory`.
	pub(crate) fn output_directory(&self) -> Option<&PathBuf> {
		self.directory.as_ref().or(self.target.as_ref())
	}
}
