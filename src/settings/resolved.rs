use std::path::PathBuf;

use prompt_partner_core::PresentationPolicy;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) data_dir: PathBuf,
	pub(crate) prompts_path: PathBuf,
	pub(crate) state_path: PathBuf,
	pub(crate) initial_query: String,
	pub(crate) policy: PresentationPolicy,
	pub(crate) theme_name: Option<String>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Data directory: {}", self.data_dir.display());
		println!("  Prompts file: {}", self.prompts_path.display());
		println!("  State file: {}", self.state_path.display());
		println!("  Preview lines: {}", self.policy.preview_lines);
		println!("  Tags shown collapsed: {}", self.policy.tag_preview_count);
		println!(
			"  UI theme: {}",
			self.theme_name.as_deref().unwrap_or("(use the library default)")
		);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
	}
}
