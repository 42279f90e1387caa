mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use settings::ResolvedConfig;
use spring_init::{app_dirs, logging};
use workflow::GenerateWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for theme in spring_init::tui::style::descriptors() {
			let marker = if theme.is_default { " (default)" } else { "" };
			if theme.aliases.is_empty() {
				println!("{}{marker}", theme.name);
			} else {
				println!("{}{marker} [aliases: {}]", theme.name, theme.aliases.join(", "));
			}
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(&resolved)?;
	run_form(resolved)
}

fn init_logging(config: &ResolvedConfig) -> Result<()> {
	let file = match &config.log_file {
		Some(path) => path.clone(),
		None => app_dirs::get_cache_dir()?.join(logging::LOG_FILE_NAME),
	};
	logging::initialize(config.log_level, &file)
}

/// Run the form and report every project written during the session.
fn run_form(settings: ResolvedConfig) -> Result<()> {
	let workflow = GenerateWorkflow::from_config(settings)?;
	let generated = workflow.run()?;

	for project in generated {
		let verb = if project.extracted { "Extracted" } else { "Saved" };
		println!("{verb} {}", project.path.display());
	}

	Ok(())
}
