use std::fmt;

/// Where a setting came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) service_url: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_url(&self) -> SettingSource {
		self.service_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("service.url"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("service.timeout_secs"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		self.log_level
			.clone()
			.unwrap_or(SettingSource::ConfigKey("log.level"))
	}
}
