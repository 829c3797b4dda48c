//! Single-line query input backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::TextArea;

pub struct QueryInput {
	textarea: TextArea<'static>,
	placeholder: String,
}

impl QueryInput {
	pub fn new(initial: impl Into<String>, placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		Self {
			textarea: build_textarea(initial.into(), &placeholder),
			placeholder,
		}
	}

	/// Feed a key press to the editor. Returns `true` when the text changed.
	///
	/// Line breaks are never inserted; the caller handles Enter itself.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_line_break(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	pub fn clear(&mut self) {
		self.textarea = build_textarea(String::new(), &self.placeholder);
	}

	pub fn textarea(&self) -> &TextArea<'static> {
		&self.textarea
	}
}

fn inserts_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

fn build_textarea(initial: String, placeholder: &str) -> TextArea<'static> {
	let mut textarea = TextArea::new(vec![initial]);
	textarea.set_cursor_line_style(Style::default());
	textarea.set_placeholder_text(placeholder.to_string());
	textarea.move_cursor(tui_textarea::CursorMove::End);
	textarea
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_after_initial_text() {
		let mut input = QueryInput::new("pyt", "Search");
		assert!(input.input(key(KeyCode::Char('h'))));
		assert_eq!(input.text(), "pyth");
	}

	#[test]
	fn line_breaks_are_ignored() {
		let mut input = QueryInput::new("Writing", "Search");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		input.input(key(KeyCode::Char(' ')));
		input.input(key(KeyCode::Char('T')));
		assert_eq!(input.text(), "Writing T");
		assert_eq!(input.textarea().lines().len(), 1);
	}

	#[test]
	fn clear_resets_text() {
		let mut input = QueryInput::new("guide", "Search");
		input.clear();
		assert!(input.is_empty());
		input.input(key(KeyCode::Char('x')));
		assert_eq!(input.text(), "x");
	}
}
