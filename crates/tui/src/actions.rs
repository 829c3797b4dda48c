use std::sync::Arc;

use anyhow::Result;
use prompt_partner_core::{ClipboardError, KeyValueStore};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::warn;

use super::app::{App, AppOutcome};
use crate::components::Status;

/// Rows skipped by PageUp/PageDown.
const PAGE_ROWS: usize = 5;

impl<K: KeyValueStore> App<K> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<AppOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome(false))),
			KeyCode::Esc => {
				if self.query.is_empty() {
					return Ok(Some(self.outcome(false)));
				}
				self.query.clear();
				self.sync_query();
			}
			KeyCode::Enter => return Ok(Some(self.outcome(true))),
			KeyCode::Tab => self.toggle_highlighted_selection(),
			KeyCode::Char('e') if ctrl => self.toggle_highlighted_expansion(),
			KeyCode::Char('o') if ctrl => {
				self.session.collapse_all();
				self.report_persist_error();
			}
			KeyCode::Char('x') if ctrl => {
				self.session.clear_selection();
				self.status = Some(Status::info("Selection cleared"));
			}
			KeyCode::Char('y') if ctrl => self.copy_master_prompt(),
			KeyCode::Char('d') if ctrl => self.delete_highlighted()?,
			KeyCode::Up => self.move_cursor_up(1),
			KeyCode::Down => self.move_cursor_down(1),
			KeyCode::PageUp => self.move_cursor_up(PAGE_ROWS),
			KeyCode::PageDown => self.move_cursor_down(PAGE_ROWS),
			KeyCode::Home => self.table_state.select_first(),
			KeyCode::End => {
				let len = self.visible_len();
				if len > 0 {
					self.table_state.select(Some(len - 1));
				}
			}
			_ => {
				if self.query.input(key) {
					self.sync_query();
				}
			}
		}
		self.ensure_cursor();
		Ok(None)
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::ScrollUp => self.move_cursor_up(1),
			MouseEventKind::ScrollDown => self.move_cursor_down(1),
			_ => {}
		}
	}

	fn toggle_highlighted_selection(&mut self) {
		if let Some(id) = self.highlighted_id() {
			self.session.toggle_selected(id);
			self.status = None;
		}
	}

	fn toggle_highlighted_expansion(&mut self) {
		if let Some(id) = self.highlighted_id() {
			self.session.toggle_expanded(id);
			self.report_persist_error();
		}
	}

	fn report_persist_error(&mut self) {
		if let Some(err) = self.session.expand_state().last_persist_error() {
			self.status = Some(Status::error(format!("Expand state not saved: {err}")));
		}
	}

	fn copy_master_prompt(&mut self) {
		if self.pending_export.is_some() {
			self.status = Some(Status::info("Copy already in progress"));
			return;
		}
		match self.session.export(Arc::clone(&self.clipboard)) {
			Ok(pending) => {
				self.status = Some(Status::info("Copying..."));
				self.pending_export = Some(pending);
			}
			Err(ClipboardError::EmptyText) => {
				self.status = Some(Status::info("Nothing to copy: select a prompt first"));
			}
			Err(err) => self.status = Some(Status::error(format!("Copy failed: {err}"))),
		}
	}

	fn delete_highlighted(&mut self) -> Result<()> {
		let Some(prompt) = self.highlighted() else {
			return Ok(());
		};
		let (id, name) = (prompt.id, prompt.name.clone());
		match self.store.delete(id) {
			Ok(()) => {
				self.session.remove_prompt(id);
				self.status = Some(Status::success(format!("Deleted \"{name}\"")));
			}
			Err(err) => {
				warn!(%id, error = %err, "failed to delete prompt");
				self.status = Some(Status::error(format!("Delete failed: {err}")));
			}
		}
		Ok(())
	}

	fn move_cursor_up(&mut self, rows: usize) {
		if let Some(selected) = self.table_state.selected() {
			self.table_state.select(Some(selected.saturating_sub(rows)));
		}
	}

	fn move_cursor_down(&mut self, rows: usize) {
		if let Some(selected) = self.table_state.selected() {
			let last = self.visible_len().saturating_sub(1);
			self.table_state.select(Some((selected + rows).min(last)));
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use prompt_partner_core::{
		Listing, MemoryClipboard, MemoryKv, MemoryPromptStore, PromptDraft, PromptId, PromptStore,
		Session,
	};

	use super::*;
	use crate::components::StatusKind;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(ch: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
	}

	fn app_with(clipboard: Arc<MemoryClipboard>) -> App<MemoryKv> {
		let mut store = MemoryPromptStore::new();
		for (name, content, tags) in [
			("Coding Guide", "Write a function", "test-tutorial, test-javascript"),
			("Writing Tutorial", "Write a story", "test-creative, test-guide"),
			("Python Tips", "Document your code", "test-coding, test-python"),
		] {
			store.create(PromptDraft::new(name, content, tags)).unwrap();
		}
		let session = Session::new(Listing::fetch(&store), MemoryKv::new());
		App::new(session, Box::new(store), clipboard)
	}

	fn app() -> App<MemoryKv> {
		app_with(Arc::new(MemoryClipboard::new()))
	}

	fn type_text(app: &mut App<MemoryKv>, text: &str) {
		for ch in text.chars() {
			app.handle_key(key(KeyCode::Char(ch))).unwrap();
		}
	}

	fn finish_export(app: &mut App<MemoryKv>) {
		for _ in 0..200 {
			app.pump_export();
			if app.pending_export.is_none() {
				return;
			}
			std::thread::sleep(Duration::from_millis(5));
		}
		panic!("clipboard export never finished");
	}

	#[test]
	fn typing_filters_and_resets_the_cursor() {
		let mut app = app();
		app.handle_key(key(KeyCode::End)).unwrap();
		type_text(&mut app, "Writing Tutorial");
		assert_eq!(app.session.query(), "Writing Tutorial");
		assert_eq!(app.visible_len(), 1);
		assert_eq!(app.table_state.selected(), Some(0));
	}

	#[test]
	fn tab_toggles_the_highlighted_prompt() {
		let mut app = app();
		app.handle_key(key(KeyCode::Down)).unwrap();
		app.handle_key(key(KeyCode::Tab)).unwrap();
		assert!(app.session.is_selected(PromptId(2)));
		app.handle_key(key(KeyCode::Tab)).unwrap();
		assert!(!app.session.is_selected(PromptId(2)));
	}

	#[test]
	fn escape_clears_the_query_before_quitting() {
		let mut app = app();
		type_text(&mut app, "java");
		assert!(app.handle_key(key(KeyCode::Esc)).unwrap().is_none());
		assert_eq!(app.visible_len(), 3);

		let outcome = app.handle_key(key(KeyCode::Esc)).unwrap();
		assert_eq!(outcome.map(|o| o.accepted), Some(false));
	}

	#[test]
	fn enter_returns_the_master_prompt() {
		let mut app = app();
		app.handle_key(key(KeyCode::End)).unwrap();
		app.handle_key(key(KeyCode::Tab)).unwrap();
		app.handle_key(key(KeyCode::Home)).unwrap();
		app.handle_key(key(KeyCode::Tab)).unwrap();

		let outcome = app.handle_key(key(KeyCode::Enter)).unwrap().unwrap();
		assert!(outcome.accepted);
		assert_eq!(outcome.master_prompt, "Document your code\n\nWrite a function");
	}

	#[test]
	fn copy_with_nothing_selected_never_reaches_the_clipboard() {
		let clipboard = Arc::new(MemoryClipboard::new());
		let mut app = app_with(Arc::clone(&clipboard));
		app.handle_key(ctrl('y')).unwrap();
		assert!(app.pending_export.is_none());
		assert_eq!(app.status().map(|s| s.kind), Some(StatusKind::Info));
		assert!(clipboard.writes().is_empty());
	}

	#[test]
	fn copy_reports_success_once_the_worker_finishes() {
		let clipboard = Arc::new(MemoryClipboard::new());
		let mut app = app_with(Arc::clone(&clipboard));
		app.handle_key(key(KeyCode::Tab)).unwrap();
		app.handle_key(ctrl('y')).unwrap();
		finish_export(&mut app);

		assert_eq!(clipboard.last().as_deref(), Some("Write a function"));
		let status = app.status().unwrap();
		assert_eq!(status.kind, StatusKind::Success);
		assert_eq!(status.message, "Copied 16 characters to the clipboard");
	}

	#[test]
	fn copy_failure_is_shown_and_selection_survives() {
		let clipboard = Arc::new(MemoryClipboard::failing(ClipboardError::Unavailable(
			"no display".into(),
		)));
		let mut app = app_with(clipboard);
		app.handle_key(key(KeyCode::Tab)).unwrap();
		app.handle_key(ctrl('y')).unwrap();
		finish_export(&mut app);

		assert_eq!(app.status().map(|s| s.kind), Some(StatusKind::Error));
		assert!(app.session.is_selected(PromptId(1)));
	}

	#[test]
	fn ctrl_e_and_ctrl_o_drive_expand_state() {
		let mut app = app();
		app.handle_key(ctrl('e')).unwrap();
		assert!(app.session.is_expanded(PromptId(1)));
		app.handle_key(ctrl('o')).unwrap();
		assert!(!app.session.is_expanded(PromptId(1)));
	}

	#[test]
	fn delete_removes_the_prompt_and_its_selection() {
		let mut app = app();
		app.handle_key(key(KeyCode::Tab)).unwrap();
		app.handle_key(ctrl('d')).unwrap();

		assert_eq!(app.visible_len(), 2);
		assert!(app.session.selection().is_empty());
		assert_eq!(app.store.list().unwrap().len(), 2);
		assert_eq!(app.table_state.selected(), Some(0));
	}

	#[test]
	fn ctrl_x_clears_every_selection() {
		let mut app = app();
		app.handle_key(key(KeyCode::Tab)).unwrap();
		app.handle_key(key(KeyCode::Down)).unwrap();
		app.handle_key(key(KeyCode::Tab)).unwrap();
		app.handle_key(ctrl('x')).unwrap();
		assert!(app.session.selection().is_empty());
		assert_eq!(app.session.master_prompt(), "");
	}
}
