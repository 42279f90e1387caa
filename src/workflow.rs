use std::sync::Arc;

use anyhow::Result;
use spring_init::tui::style::{self, Theme};
use spring_init::tui::{GeneratedProject, ProjectService};
use spring_init::{ClientOptions, InitializrClient};

use crate::settings::ResolvedConfig;

/// Coordinates building the service client and running the terminal form.
pub(crate) struct GenerateWorkflow {
	service: Arc<dyn ProjectService>,
	theme: Theme,
}

impl GenerateWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			service_url,
			timeout,
			output_dir,
			theme,
			..
		} = config;

		let client = InitializrClient::new(ClientOptions {
			base_url: service_url,
			timeout,
			output_dir,
		})?;
		let theme = theme
			.as_deref()
			.and_then(style::by_name)
			.unwrap_or_else(style::default_theme);

		Ok(Self {
			service: Arc::new(client),
			theme,
		})
	}

	/// Run the form until the user quits; returns every project written.
	pub(crate) fn run(self) -> Result<Vec<GeneratedProject>> {
		log::info!("starting form against {}", self.service.endpoint());
		spring_init::tui::run(self.service, self.theme)
	}
}
