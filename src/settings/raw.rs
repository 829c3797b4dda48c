use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};
use prompt_partner::app_dirs;
use prompt_partner_core::PresentationPolicy;
use prompt_partner_core::presentation::{
	DEFAULT_PREVIEW_LINES, DEFAULT_TAG_PREVIEW_COUNT, MAX_PREVIEW_LINES,
};
use serde::Deserialize;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

const DEFAULT_PROMPTS_FILE: &str = "prompts.json";
const DEFAULT_STATE_FILE: &str = "state.json";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	storage: StorageSection,
	ui: UiSection,
}

/// Where prompts and UI state are kept.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct StorageSection {
	data_dir: Option<PathBuf>,
	prompts_file: Option<PathBuf>,
	state_file: Option<PathBuf>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	initial_query: Option<String>,
	preview_lines: Option<usize>,
	tag_preview_count: Option<usize>,
	theme: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(dir) = cli.data_dir.clone() {
			self.storage.data_dir = Some(dir);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(lines) = cli.preview_lines {
			self.ui.preview_lines = Some(lines);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let mut data_dir = match self.storage.data_dir {
			Some(dir) => dir,
			None => app_dirs::get_data_dir()?,
		};
		if data_dir.is_relative() {
			data_dir = env::current_dir()
				.context("failed to resolve current directory for data_dir")?
				.join(data_dir);
		}

		let prompts_path = data_dir.join(
			self.storage
				.prompts_file
				.unwrap_or_else(|| PathBuf::from(DEFAULT_PROMPTS_FILE)),
		);
		let state_path = data_dir.join(
			self.storage
				.state_file
				.unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE)),
		);
		ensure!(
			prompts_path != state_path,
			"prompts_file and state_file must be different files"
		);

		let preview_lines = self.ui.preview_lines.unwrap_or(DEFAULT_PREVIEW_LINES);
		ensure!(
			(1..=MAX_PREVIEW_LINES).contains(&preview_lines),
			"preview_lines must be between 1 and {MAX_PREVIEW_LINES}, got {preview_lines}"
		);
		let tag_preview_count = self
			.ui
			.tag_preview_count
			.unwrap_or(DEFAULT_TAG_PREVIEW_COUNT);
		ensure!(tag_preview_count > 0, "tag_preview_count must be at least 1");

		let theme_name = match self.ui.theme {
			Some(name) if prompt_partner_tui::theme_by_name(&name).is_none() => {
				bail!(
					"unknown theme '{name}' (available: {})",
					prompt_partner_tui::style::names().join(", ")
				)
			}
			other => other,
		};

		Ok(ResolvedConfig {
			data_dir,
			prompts_path,
			state_path,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			policy: PresentationPolicy::new(preview_lines, tag_preview_count),
			theme_name,
		})
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	fn with_data_dir(dir: &str) -> RawConfig {
		let mut raw = RawConfig::default();
		raw.storage.data_dir = Some(PathBuf::from(dir));
		raw
	}

	#[test]
	fn cli_overrides_take_precedence() {
		let cli = CliArgs::parse_from([
			"prompt-partner",
			"--data-dir",
			"/tmp/pp",
			"-q",
			"python",
			"--preview-lines",
			"3",
			"--theme",
			"mono",
		]);
		let mut config = with_data_dir("/elsewhere");
		config.ui.theme = Some("paper".into());
		config.apply_cli_overrides(&cli);

		assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/pp")));
		assert_eq!(config.ui.initial_query.as_deref(), Some("python"));
		assert_eq!(config.ui.preview_lines, Some(3));
		assert_eq!(config.ui.theme.as_deref(), Some("mono"));
	}

	#[test]
	fn defaults_fill_file_names() {
		let resolved = with_data_dir("/tmp/pp").resolve().unwrap();
		assert_eq!(resolved.prompts_path, PathBuf::from("/tmp/pp/prompts.json"));
		assert_eq!(resolved.state_path, PathBuf::from("/tmp/pp/state.json"));
		assert_eq!(resolved.policy, PresentationPolicy::default());
		assert_eq!(resolved.initial_query, "");
	}

	#[test]
	fn out_of_range_preview_lines_are_rejected() {
		let mut raw = with_data_dir("/tmp/pp");
		raw.ui.preview_lines = Some(4);
		assert!(raw.resolve().is_err());
	}

	#[test]
	fn unknown_theme_is_rejected() {
		let mut raw = with_data_dir("/tmp/pp");
		raw.ui.theme = Some("neon".into());
		let err = raw.resolve().unwrap_err();
		assert!(err.to_string().contains("slate"));
	}

	#[test]
	fn shared_storage_file_is_rejected() {
		let mut raw = with_data_dir("/tmp/pp");
		raw.storage.state_file = Some(PathBuf::from("prompts.json"));
		assert!(raw.resolve().is_err());
	}
}
