mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliCommand, parse_cli};
use prompt_partner::{LogTarget, logging};
use workflow::Workflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in prompt_partner_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let command = cli.command.clone().unwrap_or(CliCommand::Tui);
	let target = if command.is_interactive() {
		LogTarget::File(resolved.data_dir.clone())
	} else {
		LogTarget::Stderr
	};
	logging::initialize(&target)?;

	Workflow::new(resolved, cli.output).run(command)
}
