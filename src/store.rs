//! Prompt collection persisted as one JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use prompt_partner_core::{Prompt, PromptDraft, PromptId, PromptStore, StoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// On-disk shape of `prompts.json`.
#[derive(Debug, Serialize, Deserialize)]
struct PromptFile {
	next_id: u64,
	#[serde(default)]
	prompts: Vec<Prompt>,
}

impl Default for PromptFile {
	fn default() -> Self {
		Self {
			next_id: 1,
			prompts: Vec::new(),
		}
	}
}

/// A [`PromptStore`] backed by a JSON file.
///
/// The file is read on every call and rewritten on every change, so several
/// processes pointed at the same file see each other's writes. A missing file
/// is an empty collection.
#[derive(Debug, Clone)]
pub struct JsonPromptStore {
	path: PathBuf,
}

impl JsonPromptStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load(&self) -> Result<PromptFile, StoreError> {
		let text = match fs::read_to_string(&self.path) {
			Ok(text) => text,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(PromptFile::default()),
			Err(err) => {
				return Err(StoreError::Unavailable(format!(
					"{}: {err}",
					self.path.display()
				)));
			}
		};
		let mut file: PromptFile = serde_json::from_str(&text)
			.map_err(|err| StoreError::Corrupt(format!("{}: {err}", self.path.display())))?;
		let highest = file.prompts.iter().map(|prompt| prompt.id.0).max().unwrap_or(0);
		file.next_id = file.next_id.max(highest + 1);
		Ok(file)
	}

	fn save(&self, file: &PromptFile) -> Result<(), StoreError> {
		let unavailable =
			|err: std::io::Error| StoreError::Unavailable(format!("{}: {err}", self.path.display()));

		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(unavailable)?;
		}
		let json = serde_json::to_string_pretty(file)
			.map_err(|err| StoreError::Unavailable(err.to_string()))?;
		let tmp = self.path.with_extension("json.tmp");
		fs::write(&tmp, json).map_err(unavailable)?;
		fs::rename(&tmp, &self.path).map_err(unavailable)?;
		debug!(path = %self.path.display(), prompts = file.prompts.len(), "saved prompts");
		Ok(())
	}
}

impl PromptStore for JsonPromptStore {
	fn list(&self) -> Result<Vec<Prompt>, StoreError> {
		Ok(self.load()?.prompts)
	}

	fn create(&mut self, draft: PromptDraft) -> Result<Prompt, StoreError> {
		let draft = draft.validate()?;
		let mut file = self.load()?;
		let prompt = Prompt::from_draft(PromptId(file.next_id), draft, Utc::now());
		file.next_id += 1;
		file.prompts.push(prompt.clone());
		self.save(&file)?;
		info!(id = %prompt.id, name = %prompt.name, "created prompt");
		Ok(prompt)
	}

	fn update(&mut self, id: PromptId, draft: PromptDraft) -> Result<Prompt, StoreError> {
		let draft = draft.validate()?;
		let mut file = self.load()?;
		let slot = file
			.prompts
			.iter_mut()
			.find(|prompt| prompt.id == id)
			.ok_or(StoreError::NotFound(id))?;
		*slot = Prompt::from_draft(id, draft, slot.created_at);
		let updated = slot.clone();
		self.save(&file)?;
		info!(%id, "updated prompt");
		Ok(updated)
	}

	fn delete(&mut self, id: PromptId) -> Result<(), StoreError> {
		let mut file = self.load()?;
		let before = file.prompts.len();
		file.prompts.retain(|prompt| prompt.id != id);
		if file.prompts.len() == before {
			return Err(StoreError::NotFound(id));
		}
		self.save(&file)?;
		info!(%id, "deleted prompt");
		Ok(())
	}
}
