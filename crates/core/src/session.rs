//! One user session over a prompt collection.
//!
//! [`Session`] bundles the collection snapshot with the query, the selection
//! and the expand flags, and exposes every user action as a method. Front ends
//! read from it to render and call into it on input; they hold no state of
//! their own beyond cursor position.

use std::sync::Arc;

use tracing::debug;

use crate::clipboard::{ClipboardError, ClipboardSink, PendingExport, export_to_clipboard};
use crate::compose::compose;
use crate::expand::ExpandState;
use crate::filter::filter;
use crate::kv::KeyValueStore;
use crate::presentation::{PresentationPolicy, PromptView};
use crate::prompt::{Prompt, PromptId};
use crate::selection::Selection;
use crate::store::{Listing, PromptStore};

pub struct Session<K> {
	listing: Listing,
	query: String,
	selection: Selection,
	expanded: ExpandState<K>,
	policy: PresentationPolicy,
}

impl<K: KeyValueStore> Session<K> {
	/// Start a session; expand flags are hydrated from `kv`.
	pub fn new(listing: Listing, kv: K) -> Self {
		Self {
			listing,
			query: String::new(),
			selection: Selection::new(),
			expanded: ExpandState::open(kv),
			policy: PresentationPolicy::default(),
		}
	}

	pub fn with_policy(mut self, policy: PresentationPolicy) -> Self {
		self.policy = policy.normalized();
		self
	}

	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.query = query.into();
		self
	}

	pub fn listing(&self) -> &Listing {
		&self.listing
	}

	/// The full collection, ignoring the query.
	pub fn prompts(&self) -> &[Prompt] {
		self.listing.prompts()
	}

	pub fn prompt(&self, id: PromptId) -> Option<&Prompt> {
		self.prompts().iter().find(|prompt| prompt.id == id)
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	pub fn clear_query(&mut self) {
		self.query.clear();
	}

	/// Prompts matching the current query, in collection order.
	pub fn visible(&self) -> Vec<&Prompt> {
		filter(self.prompts(), &self.query)
	}

	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	pub fn is_selected(&self, id: PromptId) -> bool {
		self.selection.is_selected(id)
	}

	pub fn toggle_selected(&mut self, id: PromptId) -> bool {
		let selected = self.selection.toggle(id);
		debug!(%id, selected, "toggled selection");
		selected
	}

	pub fn clear_selection(&mut self) {
		self.selection.clear();
	}

	pub fn is_expanded(&self, id: PromptId) -> bool {
		self.expanded.is_expanded(id)
	}

	pub fn toggle_expanded(&mut self, id: PromptId) -> bool {
		self.expanded.toggle(id)
	}

	pub fn collapse_all(&mut self) {
		self.expanded.collapse_all();
	}

	pub fn expand_state(&self) -> &ExpandState<K> {
		&self.expanded
	}

	pub fn policy(&self) -> PresentationPolicy {
		self.policy
	}

	/// What a renderer should show for `prompt` right now.
	pub fn view<'a>(&self, prompt: &'a Prompt) -> PromptView<'a> {
		self.policy.view(prompt, self.is_expanded(prompt.id))
	}

	/// The selected prompts' content, in selection order.
	pub fn master_prompt(&self) -> String {
		compose(self.prompts(), self.selection.ids())
	}

	/// Whether the copy action should be enabled.
	pub fn can_export(&self) -> bool {
		!self.master_prompt().is_empty()
	}

	/// Start copying the master prompt. Fails with
	/// [`ClipboardError::EmptyText`] when nothing is selected.
	pub fn export<C>(&self, sink: Arc<C>) -> Result<PendingExport, ClipboardError>
	where
		C: ClipboardSink + ?Sized + 'static,
	{
		export_to_clipboard(sink, &self.master_prompt())
	}

	/// Re-read the collection from `store`.
	pub fn refresh<S: PromptStore + ?Sized>(&mut self, store: &S) {
		self.replace_listing(Listing::fetch(store));
	}

	/// Swap in a new snapshot, dropping selected ids that no longer exist.
	///
	/// A failed fetch keeps the selection as it is; composition already skips
	/// ids it cannot resolve.
	pub fn replace_listing(&mut self, listing: Listing) {
		self.listing = listing;
		if let Listing::Loaded(prompts) = &self.listing {
			self.selection
				.retain(|id| prompts.iter().any(|prompt| prompt.id == id));
		}
	}

	/// Insert or replace one prompt in the loaded snapshot.
	///
	/// Returns `false` when the collection is not loaded.
	pub fn upsert_prompt(&mut self, prompt: Prompt) -> bool {
		let Listing::Loaded(prompts) = &mut self.listing else {
			return false;
		};
		match prompts.iter_mut().find(|existing| existing.id == prompt.id) {
			Some(existing) => *existing = prompt,
			None => prompts.push(prompt),
		}
		true
	}

	/// Drop a deleted prompt along with its selection and expand entries.
	pub fn remove_prompt(&mut self, id: PromptId) {
		if let Listing::Loaded(prompts) = &mut self.listing {
			prompts.retain(|prompt| prompt.id != id);
		}
		self.selection.retain(|selected| selected != id);
		self.expanded.prune(|known| known != id);
	}
}
