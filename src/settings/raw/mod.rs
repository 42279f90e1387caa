use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use serde::Deserialize;
use spring_init::service::{DEFAULT_TIMEOUT, DEFAULT_URL};

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, validation};
use crate::cli::CliArgs;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ServiceSection {
	pub(super) url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
	pub(super) directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

/// Mirror of the configuration files before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) service: ServiceSection,
	pub(super) output: OutputSection,
	pub(super) ui: UiSection,
	pub(super) log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = &cli.url {
			self.service.url = Some(url.clone());
		}
		if let Some(timeout) = cli.timeout {
			self.service.timeout_secs = Some(timeout);
		}
		if let Some(directory) = cli.output_directory() {
			self.output.directory = Some(directory.clone());
		}
		if let Some(theme) = &cli.theme {
			self.ui.theme = Some(theme.clone());
		}
		if let Some(level) = &cli.log_level {
			self.log.level = Some(level.clone());
		}
		if let Some(file) = &cli.log_file {
			self.log.file = Some(file.clone());
		}
	}

	/// Fill defaults and validate, producing a [`ResolvedConfig`].
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			service_url: detect_source(
				cli.url.is_some(),
				self.service.url.is_some(),
				"SPRING_INIT__SERVICE__URL",
				"--url",
				"service.url",
			),
			timeout: detect_source(
				cli.timeout.is_some(),
				self.service.timeout_secs.is_some(),
				"SPRING_INIT__SERVICE__TIMEOUT_SECS",
				"--timeout",
				"service.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"SPRING_INIT__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.log.level.is_some(),
				"SPRING_INIT__LOG__LEVEL",
				"--log-level",
				"log.level",
			),
		};

		let service_url = validation::service_url(
			self.service.url.as_deref().unwrap_or(DEFAULT_URL),
			sources.source_for_url(),
		)
		.map_err(Error::new)?;
		let timeout = match self.service.timeout_secs {
			Some(secs) => validation::timeout(secs, sources.source_for_timeout()).map_err(Error::new)?,
			None => DEFAULT_TIMEOUT,
		};
		let log_level = match self.log.level.as_deref() {
			Some(level) => {
				validation::log_level(level, sources.source_for_log_level()).map_err(Error::new)?
			}
			None => log::LevelFilter::Info,
		};

		let config = ResolvedConfig {
			service_url,
			timeout,
			output_dir: self.output.directory.unwrap_or_else(|| PathBuf::from(".")),
			theme: self.ui.theme,
			log_level,
			log_file: self.log.file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
