use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use url::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(theme) = &config.theme
		&& spring_init_tui::style::by_name(theme).is_none()
	{
		let known = spring_init_tui::style::names().join(", ");
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme (available: {known})"),
		));
	}

	Ok(())
}

/// Parse the service URL; only `http` and `https` are accepted.
pub(crate) fn service_url(value: &str, origin: SettingSource) -> Result<Url, ConfigError> {
	let url = Url::parse(value)
		.map_err(|err| ConfigError::invalid("service.url", value, origin.clone(), err.to_string()))?;
	match url.scheme() {
		"http" | "https" => Ok(url),
		scheme => Err(ConfigError::invalid(
			"service.url",
			value,
			origin,
			format!("unsupported scheme `{scheme}`"),
		)),
	}
}

pub(crate) fn timeout(secs: u64, origin: SettingSource) -> Result<Duration, ConfigError> {
	if secs == 0 {
		return Err(ConfigError::invalid(
			"service.timeout_secs",
			secs.to_string(),
			origin,
			"must be greater than zero",
		));
	}
	Ok(Duration::from_secs(secs))
}

pub(crate) fn log_level(value: &str, origin: SettingSource) -> Result<LevelFilter, ConfigError> {
	LevelFilter::from_str(value).map_err(|_| {
		ConfigError::invalid(
			"log.level",
			value,
			origin,
			"expected one of off, error, warn, info, debug, trace",
		)
	})
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	fn origin() -> SettingSource {
		SettingSource::ConfigKey("test")
	}

	#[test]
	fn urls_must_be_http() {
		assert!(service_url("https://start.spring.io", origin()).is_ok());
		assert!(service_url("http://localhost:8080/initializr", origin()).is_ok());

		let err = service_url("ftp://start.spring.io", origin()).expect_err("ftp");
		assert!(err.reason.contains("ftp"));
		assert!(service_url("not a url", origin()).is_err());
	}

	#[test]
	fn zero_timeout_is_rejected() {
		assert_eq!(timeout(5, origin()).expect("timeout"), Duration::from_secs(5));
		assert!(timeout(0, origin()).is_err());
	}

	#[test]
	fn log_levels_parse_case_insensitively() {
		assert_eq!(log_level("DEBUG", origin()).expect("level"), LevelFilter::Debug);
		assert_eq!(log_level("off", origin()).expect("level"), LevelFilter::Off);
		assert!(log_level("loud", origin()).is_err());
	}

	#[test]
	fn themes_must_be_registered() {
		let mut config = ResolvedConfig {
			service_url: Url::parse("https://start.spring.io").expect("url"),
			timeout: Duration::from_secs(10),
			output_dir: PathBuf::from("."),
			theme: Some("spring".into()),
			log_level: LevelFilter::Info,
			log_file: None,
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());

		config.theme = Some("neon".into());
		let err = validate(&config, &ConfigSources::default()).expect_err("unknown theme");
		assert_eq!(err.key, "ui.theme");
	}
}
