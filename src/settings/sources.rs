use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use spring_init::app_dirs;

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "SPRING_INIT";

/// Build a [`Config`] from the default file locations, `--config` files and
/// the environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Config files consulted unless `--no-config` is given, lowest priority
/// first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".spring-init.toml"));
		files.push(current_dir.join("spring-init.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".spring-init.toml")));
		assert!(files.iter().any(|path| path.ends_with("spring-init.toml")));
	}

	#[test]
	fn explicit_config_files_are_read() {
		let temp = tempfile::tempdir().expect("tempdir");
		let path = temp.path().join("custom.toml");
		fs::write(&path, "[service]\ntimeout_secs = 42\n").expect("write config");

		let mut cli = CliArgs::parse_from(["spring-init", "--no-config"]);
		cli.config = vec![path];
		let config = build_config(&cli).expect("config");
		assert_eq!(config.get_int("service.timeout_secs").expect("timeout"), 42);
	}

	#[test]
	fn missing_explicit_config_is_an_error() {
		let mut cli = CliArgs::parse_from(["spring-init", "--no-config"]);
		cli.config = vec![PathBuf::from("/definitely/not/here.toml")];
		assert!(build_config(&cli).is_err());
	}
}
