//! Resolve configuration and cache directories for `spring-init`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::{BaseDirs, ProjectDirs};

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "spring-init";
const APPLICATION: &str = "spring-init";

const CONFIG_DIR_ENV: &str = "SPRING_INIT_CONFIG_DIR";
const CACHE_DIR_ENV: &str = "SPRING_INIT_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for spring-init"))
}

/// Read a directory override. An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory for the log file.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// The user's home directory, used to expand `~` in paths.
pub fn home_dir() -> Option<PathBuf> {
	BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}
