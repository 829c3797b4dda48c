//! Resolve configuration and data directories for `prompt-partner`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "prompt-partner";
const APPLICATION: &str = "prompt-partner";

pub const CONFIG_DIR_ENV: &str = "PROMPT_PARTNER_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "PROMPT_PARTNER_DATA_DIR";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for prompt-partner"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value so that callers can
/// use shell defaults without worrying about trailing whitespace.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	dir_from_value(env::var_os(name))
}

fn dir_from_value(value: Option<OsString>) -> Option<PathBuf> {
	let value = value?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory that holds `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory that stores prompts, UI state and the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_counts_as_unset() {
		assert_eq!(dir_from_value(Some(OsString::new())), None);
		assert_eq!(dir_from_value(None), None);
		assert_eq!(
			dir_from_value(Some(OsString::from("/tmp/prompts"))),
			Some(PathBuf::from("/tmp/prompts"))
		);
	}
}
