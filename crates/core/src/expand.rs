//! Per-prompt expand/collapse flags, persisted through a [`KeyValueStore`].
//!
//! The whole map is serialised as one JSON object under
//! [`EXPANDED_STATES_KEY`] and rewritten after every mutation. Any problem
//! reading it back (missing key, unavailable storage, malformed JSON) starts
//! the session with every prompt collapsed instead of failing.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::kv::{KeyValueStore, KvError};
use crate::prompt::PromptId;

/// Storage key holding the serialised map.
pub const EXPANDED_STATES_KEY: &str = "prompt-partner.expanded-states";

type ExpandedMap = BTreeMap<PromptId, bool>;

pub struct ExpandState<S> {
	entries: ExpandedMap,
	store: S,
	last_persist_error: Option<KvError>,
}

impl<S: KeyValueStore> ExpandState<S> {
	/// Hydrate from `store`, degrading to an empty map on any read problem.
	pub fn open(store: S) -> Self {
		let entries = match store.get(EXPANDED_STATES_KEY) {
			Ok(Some(raw)) => match serde_json::from_str::<ExpandedMap>(&raw) {
				Ok(entries) => {
					debug!(count = entries.len(), "hydrated expanded states");
					entries
				}
				Err(err) => {
					warn!(error = %err, "discarding corrupt expanded states");
					ExpandedMap::new()
				}
			},
			Ok(None) => ExpandedMap::new(),
			Err(err) => {
				warn!(error = %err, "expanded states unavailable; starting collapsed");
				ExpandedMap::new()
			}
		};

		Self {
			entries,
			store,
			last_persist_error: None,
		}
	}

	/// Prompts without an explicit entry are collapsed.
	pub fn is_expanded(&self, id: PromptId) -> bool {
		self.entries.get(&id).copied().unwrap_or(false)
	}

	/// Flip the flag for `id` and return the new value.
	pub fn toggle(&mut self, id: PromptId) -> bool {
		let expanded = !self.is_expanded(id);
		self.entries.insert(id, expanded);
		self.persist();
		expanded
	}

	pub fn collapse_all(&mut self) {
		self.entries.clear();
		self.persist();
	}

	/// Forget entries for prompts that no longer exist.
	pub fn prune(&mut self, mut known: impl FnMut(PromptId) -> bool) {
		let before = self.entries.len();
		self.entries.retain(|id, _| known(*id));
		if self.entries.len() != before {
			self.persist();
		}
	}

	/// Ids currently shown expanded, ascending.
	pub fn expanded_ids(&self) -> impl Iterator<Item = PromptId> + '_ {
		self.entries
			.iter()
			.filter(|(_, expanded)| **expanded)
			.map(|(id, _)| *id)
	}

	/// The error from the most recent write, cleared by the next successful one.
	pub fn last_persist_error(&self) -> Option<&KvError> {
		self.last_persist_error.as_ref()
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn into_store(self) -> S {
		self.store
	}

	fn persist(&mut self) {
		let result = serde_json::to_string(&self.entries)
			.map_err(|err| KvError::Write {
				key: EXPANDED_STATES_KEY.to_string(),
				reason: err.to_string(),
			})
			.and_then(|raw| self.store.set(EXPANDED_STATES_KEY, raw));

		match result {
			Ok(()) => self.last_persist_error = None,
			Err(err) => {
				warn!(error = %err, "failed to persist expanded states");
				self.last_persist_error = Some(err);
			}
		}
	}
}
