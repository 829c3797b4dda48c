use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use prompt_partner::app_dirs;
use prompt_partner_core::PromptId;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("prompt-partner {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "prompt-partner",
	version,
	long_version = long_version(),
	about = "Store, search and compose prompts",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `prompt-partner` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PROMPT_PARTNER_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "data-dir",
		value_name = "DIR",
		global = true,
		help = "Directory holding prompts.json and state.json (default: platform data directory)"
	)]
	pub(crate) data_dir: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		global = true,
		help = "Initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		global = true,
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "preview-lines",
		value_name = "NUM",
		global = true,
		help = "Content lines shown for collapsed prompts, 1 to 3 (default: 2)"
	)]
	pub(crate) preview_lines: Option<usize>,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, global = true, help = "Choose how to print results")]
	pub(crate) output: OutputFormat,
	#[command(subcommand)]
	pub(crate) command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum CliCommand {
	/// Browse, select and copy prompts interactively (default).
	Tui,
	/// Print prompts matching --query.
	List {
		/// Show every prompt fully expanded.
		#[arg(long)]
		expanded: bool,
	},
	/// Create a prompt.
	Add {
		#[arg(long)]
		name: String,
		#[arg(long)]
		content: String,
		/// Comma-separated tags.
		#[arg(long, default_value = "")]
		tags: String,
	},
	/// Replace fields of an existing prompt.
	Edit {
		id: PromptId,
		#[arg(long)]
		name: Option<String>,
		#[arg(long)]
		content: Option<String>,
		#[arg(long)]
		tags: Option<String>,
	},
	/// Delete a prompt.
	Rm { id: PromptId },
	/// Print the master prompt for the given ids, in order.
	Compose {
		#[arg(required = true)]
		ids: Vec<PromptId>,
		/// Also copy the master prompt to the system clipboard.
		#[arg(long)]
		copy: bool,
	},
	/// Toggle the stored expand flag of a prompt.
	Expand { id: PromptId },
	/// Collapse every prompt.
	CollapseAll,
}

impl CliCommand {
	/// Whether the command takes over the terminal.
	pub(crate) fn is_interactive(&self) -> bool {
		matches!(self, CliCommand::Tui)
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
