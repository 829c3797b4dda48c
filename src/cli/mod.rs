mod args;
mod output;

pub(crate) use args::{CliArgs, CliCommand, OutputFormat, parse_cli};
pub(crate) use output::{print_master, print_outcome, print_prompt, print_prompts};
