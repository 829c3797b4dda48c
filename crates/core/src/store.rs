//! Prompt persistence port.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::prompt::{DraftError, Prompt, PromptDraft, PromptId};

#[derive(Debug, Error)]
pub enum StoreError {
	#[error(transparent)]
	Invalid(#[from] DraftError),
	#[error("prompt {0} does not exist")]
	NotFound(PromptId),
	#[error("prompt store is unavailable: {0}")]
	Unavailable(String),
	#[error("prompt store is corrupt: {0}")]
	Corrupt(String),
}

/// CRUD access to the prompt collection.
///
/// `create` and `update` validate the draft before touching storage, so an
/// invalid draft never produces a write.
pub trait PromptStore {
	fn list(&self) -> Result<Vec<Prompt>, StoreError>;
	fn create(&mut self, draft: PromptDraft) -> Result<Prompt, StoreError>;
	fn update(&mut self, id: PromptId, draft: PromptDraft) -> Result<Prompt, StoreError>;
	fn delete(&mut self, id: PromptId) -> Result<(), StoreError>;
}

/// Result of fetching the collection, kept distinct from an empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
	Loaded(Vec<Prompt>),
	Unavailable { reason: String },
}

impl Listing {
	pub fn fetch<S: PromptStore + ?Sized>(store: &S) -> Self {
		let result = store.list();
		if let Err(err) = &result {
			warn!(error = %err, "failed to list prompts");
		}
		Self::from(result)
	}

	/// The loaded prompts; empty when the store failed.
	pub fn prompts(&self) -> &[Prompt] {
		match self {
			Self::Loaded(prompts) => prompts,
			Self::Unavailable { .. } => &[],
		}
	}

	pub fn failure(&self) -> Option<&str> {
		match self {
			Self::Loaded(_) => None,
			Self::Unavailable { reason } => Some(reason),
		}
	}
}

impl Default for Listing {
	fn default() -> Self {
		Self::Loaded(Vec::new())
	}
}

impl From<Result<Vec<Prompt>, StoreError>> for Listing {
	fn from(result: Result<Vec<Prompt>, StoreError>) -> Self {
		match result {
			Ok(prompts) => Self::Loaded(prompts),
			Err(err) => Self::Unavailable {
				reason: err.to_string(),
			},
		}
	}
}

/// Prompts held in memory, ids assigned sequentially from 1.
#[derive(Debug, Clone)]
pub struct MemoryPromptStore {
	prompts: Vec<Prompt>,
	next_id: u64,
}

impl Default for MemoryPromptStore {
	fn default() -> Self {
		Self {
			prompts: Vec::new(),
			next_id: 1,
		}
	}
}

impl MemoryPromptStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
		let next_id = prompts.iter().map(|prompt| prompt.id.0).max().unwrap_or(0) + 1;
		Self { prompts, next_id }
	}
}

impl PromptStore for MemoryPromptStore {
	fn list(&self) -> Result<Vec<Prompt>, StoreError> {
		Ok(self.prompts.clone())
	}

	fn create(&mut self, draft: PromptDraft) -> Result<Prompt, StoreError> {
		let draft = draft.validate()?;
		let id = PromptId(self.next_id);
		self.next_id += 1;
		let prompt = Prompt::from_draft(id, draft, Utc::now());
		self.prompts.push(prompt.clone());
		debug!(%id, "created prompt");
		Ok(prompt)
	}

	fn update(&mut self, id: PromptId, draft: PromptDraft) -> Result<Prompt, StoreError> {
		let draft = draft.validate()?;
		let slot = self
			.prompts
			.iter_mut()
			.find(|prompt| prompt.id == id)
			.ok_or(StoreError::NotFound(id))?;
		*slot = Prompt::from_draft(id, draft, slot.created_at);
		Ok(slot.clone())
	}

	fn delete(&mut self, id: PromptId) -> Result<(), StoreError> {
		let before = self.prompts.len();
		self.prompts.retain(|prompt| prompt.id != id);
		if self.prompts.len() == before {
			return Err(StoreError::NotFound(id));
		}
		Ok(())
	}
}
