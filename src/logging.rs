//! File logging through `fern`.
//!
//! The terminal belongs to the form while it runs, so every record goes to a
//! log file instead of stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use log::LevelFilter;

pub const LOG_FILE_NAME: &str = "spring-init.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Install the global logger. Must be called at most once.
pub fn initialize(level: LevelFilter, file: &Path) -> Result<()> {
	if let Some(parent) = file.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	let output = fern::log_file(file)
		.with_context(|| format!("failed to open log file {}", file.display()))?;

	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!(
				"{} {:<5} {}: {}",
				timestamp(&Local::now()),
				record.level(),
				record.target(),
				message
			))
		})
		.level(level)
		.level_for("reqwest", LevelFilter::Warn)
		.level_for("hyper_util", LevelFilter::Warn)
		.chain(output)
		.apply()
		.context("logger already initialised")?;

	log::debug!("logging to {} at {level}", file.display());
	Ok(())
}

fn timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
	Tz::Offset: std::fmt::Display,
{
	time.format(TIMESTAMP_FORMAT).to_string()
}
