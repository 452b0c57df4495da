mod cli;
mod settings;
mod workflow;

use std::process;

use anyhow::{Context, Result};
use checksift::logging::{self, LogConfig};
use checksift::{Theme, app_dirs};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::CheckboxWorkflow;

/// Exit status reported when the prompt is cancelled, as for SIGINT.
const CANCELLED_EXIT_CODE: i32 = 130;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in Theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let log_file = match cli.log_file.clone() {
		Some(path) => Some(path),
		None => app_dirs::get_data_dir()
			.ok()
			.map(|dir| dir.join(logging::LOG_FILE_NAME)),
	};
	logging::initialize(&LogConfig::from_verbosity(cli.verbose).with_log_file(log_file))
		.context("failed to initialise logging")?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_prompt(cli.output, resolved)
}

/// Run the checkbox workflow and print the answer in the chosen format.
fn run_prompt(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = CheckboxWorkflow::from_config(settings)?;
	let Some(answer) = workflow.run()? else {
		process::exit(CANCELLED_EXIT_CODE);
	};

	match format {
		OutputFormat::Plain => print_plain(&answer),
		OutputFormat::Json => print_json(&answer)?,
	}

	Ok(())
}
