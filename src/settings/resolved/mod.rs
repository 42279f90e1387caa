use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;
use url::Url;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub service_url: Url,
	pub timeout: Duration,
	pub output_dir: PathBuf,
	pub theme: Option<String>,
	pub log_level: LevelFilter,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
