//! State container for the terminal front end.
//!
//! [`App`] wraps a core [`Session`] with the pieces only a terminal needs: the
//! query editor, the list cursor, the theme, and the status line. Everything
//! the user can change about the prompts themselves lives in the session.

use std::sync::Arc;

use prompt_partner_core::{
	ClipboardSink, KeyValueStore, PendingExport, Prompt, PromptId, PromptStore, Session,
};
use ratatui::widgets::TableState;
use tracing::debug;

use crate::components::Status;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::Theme;

/// What the user left the browser with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOutcome {
	/// `true` when the user confirmed with Enter.
	pub accepted: bool,
	/// The master prompt at the moment the browser closed.
	pub master_prompt: String,
}

pub struct App<K> {
	pub(crate) session: Session<K>,
	pub(crate) store: Box<dyn PromptStore>,
	pub(crate) clipboard: Arc<dyn ClipboardSink>,
	pub(crate) query: QueryInput,
	pub(crate) table_state: TableState,
	pub(crate) theme: Theme,
	pub(crate) labels: UiLabels,
	pub(crate) pending_export: Option<PendingExport>,
	pub(crate) status: Option<Status>,
}

impl<K: KeyValueStore> App<K> {
	/// Build the browser around an existing session.
	///
	/// The query editor starts with the session's query.
	pub fn new(
		session: Session<K>,
		store: Box<dyn PromptStore>,
		clipboard: Arc<dyn ClipboardSink>,
	) -> Self {
		let labels = UiLabels::default();
		let query = QueryInput::new(session.query(), labels.query_placeholder.clone());
		let mut app = Self {
			session,
			store,
			clipboard,
			query,
			table_state: TableState::default(),
			theme: Theme::default(),
			labels,
			pending_export: None,
			status: None,
		};
		app.ensure_cursor();
		app
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.query = QueryInput::new(self.query.text(), labels.query_placeholder.clone());
		self.labels = labels;
		self
	}

	pub fn session(&self) -> &Session<K> {
		&self.session
	}

	pub fn into_session(self) -> Session<K> {
		self.session
	}

	/// The status line message, if any.
	pub fn status(&self) -> Option<&Status> {
		self.status.as_ref()
	}

	pub(crate) fn visible_len(&self) -> usize {
		self.session.visible().len()
	}

	/// The prompt under the cursor.
	pub(crate) fn highlighted(&self) -> Option<&Prompt> {
		let index = self.table_state.selected()?;
		self.session.visible().get(index).copied()
	}

	pub(crate) fn highlighted_id(&self) -> Option<PromptId> {
		self.highlighted().map(|prompt| prompt.id)
	}

	/// Keep the cursor on a visible row, or clear it when nothing is visible.
	pub(crate) fn ensure_cursor(&mut self) {
		let len = self.visible_len();
		if len == 0 {
			self.table_state.select(None);
			return;
		}
		let index = self.table_state.selected().unwrap_or(0).min(len - 1);
		self.table_state.select(Some(index));
	}

	/// Copy the editor's text into the session's query.
	pub(crate) fn sync_query(&mut self) {
		self.session.set_query(self.query.text());
		self.table_state.select(Some(0));
		self.ensure_cursor();
	}

	/// Surface the outcome of a finished clipboard export.
	pub(crate) fn pump_export(&mut self) {
		let Some(pending) = self.pending_export.as_mut() else {
			return;
		};
		let chars = pending.chars();
		let Some(outcome) = pending.try_outcome() else {
			return;
		};
		self.pending_export = None;
		self.status = Some(match outcome {
			Ok(()) => {
				debug!(chars, "master prompt copied");
				Status::success(format!("Copied {chars} characters to the clipboard"))
			}
			Err(err) => Status::error(format!("Copy failed: {err}")),
		});
	}

	pub(crate) fn outcome(&self, accepted: bool) -> AppOutcome {
		AppOutcome {
			accepted,
			master_prompt: self.session.master_prompt(),
		}
	}
}
