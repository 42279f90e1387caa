use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"spring-init",
		"--url",
		"https://initializr.internal",
		"--timeout",
		"30",
		"--theme",
		"mono",
		"--log-level",
		"debug",
		"--log-file",
		"/tmp/init.log",
		"projects",
	]);

	let mut config = RawConfig::default();
	config.service.url = Some("https://ignored.example".into());
	config.ui.theme = Some("spring".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.service.url.as_deref(), Some("https://initializr.internal"));
	assert_eq!(config.service.timeout_secs, Some(30));
	assert_eq!(config.ui.theme.as_deref(), Some("mono"));
	assert_eq!(config.log.level.as_deref(), Some("debug"));
	assert_eq!(config.log.file, Some(PathBuf::from("/tmp/init.log")));
	assert_eq!(config.output.directory, Some(PathBuf::from("projects")));
}

#[test]
fn defaults_fill_unset_values() {
	let cli = CliArgs::parse_from(["spring-init"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolves");

	assert_eq!(resolved.service_url.as_str(), "https://start.spring.io/");
	assert_eq!(resolved.timeout, Duration::from_secs(10));
	assert_eq!(resolved.output_dir, PathBuf::from("."));
	assert_eq!(resolved.log_level, LevelFilter::Info);
	assert!(resolved.theme.is_none());
	assert!(resolved.log_file.is_none());
}

#[test]
fn invalid_cli_values_name_the_flag() {
	let cli = CliArgs::parse_from(["spring-init", "--timeout", "0"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let err = config.resolve(&cli).expect_err("zero timeout");
	let message = err.to_string();
	assert!(message.contains("service.timeout_secs"));
	assert!(message.contains("CLI flag `--timeout`"));
}

#[test]
fn unknown_theme_is_rejected() {
	let cli = CliArgs::parse_from(["spring-init", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let err = config.resolve(&cli).expect_err("unknown theme");
	assert!(err.to_string().contains("ui.theme"));
}
