//! Prompt records and the drafts used to create or replace them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier assigned to a prompt by its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(pub u64);

impl fmt::Display for PromptId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl FromStr for PromptId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.trim().parse().map(PromptId)
	}
}

impl From<u64> for PromptId {
	fn from(value: u64) -> Self {
		Self(value)
	}
}

/// A stored prompt snapshot.
///
/// The engine never edits a prompt in place: edits arrive as a whole
/// replacement record from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
	/// Identifier assigned by the store.
	pub id: PromptId,
	/// Display name.
	pub name: String,
	/// Free text copied into the master prompt.
	pub content: String,
	/// Comma-separated tag list, kept exactly as entered.
	#[serde(default)]
	pub tags: String,
	/// Creation time. Informational only.
	pub created_at: DateTime<Utc>,
}

impl Prompt {
	/// Build a prompt from a validated draft.
	pub fn from_draft(id: PromptId, draft: PromptDraft, created_at: DateTime<Utc>) -> Self {
		Self {
			id,
			name: draft.name,
			content: draft.content,
			tags: draft.tags,
			created_at,
		}
	}

	/// Iterate over the individual, trimmed tags. Empty segments are skipped.
	pub fn tag_list(&self) -> impl Iterator<Item = &str> {
		split_tags(&self.tags)
	}
}

pub(crate) fn split_tags(tags: &str) -> impl Iterator<Item = &str> {
	tags.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

/// Reasons a draft is refused before it reaches a store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
	#[error("prompt content must not be empty")]
	MissingContent,
	#[error("prompt name must not be empty")]
	MissingName,
}

/// Name, content and tags submitted for creation or as an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDraft {
	pub name: String,
	pub content: String,
	#[serde(default)]
	pub tags: String,
}

impl PromptDraft {
	pub fn new(name: impl Into<String>, content: impl Into<String>, tags: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			content: content.into(),
			tags: tags.into(),
		}
	}

	/// Check the draft and normalise the tag string's outer whitespace.
	///
	/// Content is checked first: a prompt without content is never a valid
	/// request, whatever else is filled in.
	pub fn validate(mut self) -> Result<Self, DraftError> {
		if self.content.trim().is_empty() {
			return Err(DraftError::MissingContent);
		}
		if self.name.trim().is_empty() {
			return Err(DraftError::MissingName);
		}
		self.tags = self.tags.trim().to_string();
		Ok(self)
	}

	/// Start an edit from an existing prompt's fields.
	pub fn from_prompt(prompt: &Prompt) -> Self {
		Self {
			name: prompt.name.clone(),
			content: prompt.content.clone(),
			tags: prompt.tags.clone(),
		}
	}
}
