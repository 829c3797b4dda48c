//! Key-value state persisted as a flat JSON object.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use prompt_partner_core::{KeyValueStore, KvError};
use tracing::warn;

/// A [`KeyValueStore`] over one JSON file such as `state.json`.
///
/// The file is read once when opened; every `set` rewrites it before
/// returning. A missing file starts empty. An unreadable or corrupt file also
/// starts empty and is replaced on the first write.
#[derive(Debug, Clone)]
pub struct JsonFileKv {
	path: PathBuf,
	entries: BTreeMap<String, String>,
}

impl JsonFileKv {
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let entries = match fs::read_to_string(&path) {
			Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
				warn!(path = %path.display(), error = %err, "state file is corrupt, starting empty");
				BTreeMap::new()
			}),
			Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
			Err(err) => {
				warn!(path = %path.display(), error = %err, "state file is unreadable, starting empty");
				BTreeMap::new()
			}
		};
		Self { path, entries }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn flush(&self, key: &str) -> Result<(), KvError> {
		let write_error = |reason: String| KvError::Write {
			key: key.to_string(),
			reason,
		};
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|err| write_error(err.to_string()))?;
		}
		let json = serde_json::to_string_pretty(&self.entries)
			.map_err(|err| write_error(err.to_string()))?;
		let tmp = self.path.with_extension("json.tmp");
		fs::write(&tmp, json).map_err(|err| write_error(err.to_string()))?;
		fs::rename(&tmp, &self.path).map_err(|err| write_error(err.to_string()))
	}
}

impl KeyValueStore for JsonFileKv {
	fn get(&self, key: &str) -> Result<Option<String>, KvError> {
		Ok(self.entries.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
		self.entries.insert(key.to_string(), value);
		self.flush(key)
	}
}

#[cfg(test)]
mod tests {
	use prompt_partner_core::{EXPANDED_STATES_KEY, ExpandState, PromptId};
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn values_survive_reopening() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("state.json");
		let mut kv = JsonFileKv::open(&path);
		kv.set("greeting", "hello".into()).unwrap();

		let reopened = JsonFileKv::open(&path);
		assert_eq!(reopened.get("greeting").unwrap().as_deref(), Some("hello"));
		assert_eq!(reopened.get("missing").unwrap(), None);
	}

	#[test]
	fn corrupt_file_starts_empty() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("state.json");
		fs::write(&path, "[1, 2").unwrap();
		let kv = JsonFileKv::open(&path);
		assert_eq!(kv.get(EXPANDED_STATES_KEY).unwrap(), None);
	}

	#[test]
	fn expand_flags_round_trip_through_the_file() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("state.json");
		let mut state = ExpandState::open(JsonFileKv::open(&path));
		state.toggle(PromptId(1));

		let state = ExpandState::open(JsonFileKv::open(&path));
		assert!(state.is_expanded(PromptId(1)));
		assert!(!state.is_expanded(PromptId(2)));
	}
}
