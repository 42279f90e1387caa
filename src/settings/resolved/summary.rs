use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Service URL: {}", config.service_url);
	println!("  Timeout: {}s", config.timeout.as_secs());
	println!("  Output directory: {}", config.output_dir.display());
	println!(
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	println!("  Log level: {}", config.log_level);
	match &config.log_file {
		Some(path) => println!("  Log file: {}", path.display()),
		None => println!("  Log file: (cache directory)"),
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use log::LevelFilter;
	use url::Url;

	use super::*;

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			service_url: Url::parse("https://start.spring.io").expect("url"),
			timeout: Duration::from_secs(10),
			output_dir: PathBuf::from("."),
			theme: Some("spring".into()),
			log_level: LevelFilter::Debug,
			log_file: None,
		};

		print_summary(&config);
	}
}
