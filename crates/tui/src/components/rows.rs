use prompt_partner_core::{PromptId, PromptView};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Row};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

pub(crate) const CHECKED: &str = "[x]";
pub(crate) const UNCHECKED: &str = "[ ]";
pub(crate) const EXPANDED_MARK: &str = "▾";
pub(crate) const COLLAPSED_MARK: &str = "▸";
const ELLIPSIS: &str = "…";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Rows for the prompt table plus the line counts the scrollbar needs.
pub struct PromptRows {
	pub rows: Vec<Row<'static>>,
	/// Height of each row, in the same order as `rows`.
	pub heights: Vec<u16>,
}

impl PromptRows {
	/// Total number of terminal lines the rows occupy.
	#[must_use]
	pub fn total_height(&self) -> usize {
		self.heights.iter().map(|&h| usize::from(h)).sum()
	}

	/// Line offset of the first line of row `index`.
	#[must_use]
	pub fn line_offset(&self, index: usize) -> usize {
		self.heights
			.iter()
			.take(index)
			.map(|&h| usize::from(h))
			.sum()
	}
}

/// Build one table row per visible prompt.
///
/// `content_width` is the width of the text column; lines wider than that are
/// cut with a trailing ellipsis.
#[must_use]
pub fn build_prompt_rows(
	views: &[PromptView<'_>],
	is_selected: impl Fn(PromptId) -> bool,
	theme: &Theme,
	content_width: Option<u16>,
) -> PromptRows {
	let mut rows = Vec::with_capacity(views.len());
	let mut heights = Vec::with_capacity(views.len());

	for view in views {
		let lines = prompt_lines(view, theme, content_width.map(usize::from));
		let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

		let mark = if is_selected(view.prompt.id) {
			Span::styled(CHECKED, theme.selected)
		} else {
			Span::styled(UNCHECKED, theme.muted)
		};
		let toggle = if view.expanded {
			EXPANDED_MARK
		} else {
			COLLAPSED_MARK
		};

		rows.push(
			Row::new([
				Cell::from(mark),
				Cell::from(Span::styled(toggle, theme.muted)),
				Cell::from(Text::from(lines)),
			])
			.height(height),
		);
		heights.push(height);
	}

	PromptRows { rows, heights }
}

fn prompt_lines(view: &PromptView<'_>, theme: &Theme, width: Option<usize>) -> Vec<Line<'static>> {
	let mut lines = vec![name_line(view, theme, width)];

	let last = view.body.len().saturating_sub(1);
	for (idx, body) in view.body.iter().enumerate() {
		let mut text = (*body).to_string();
		if view.body_truncated && idx == last {
			text.push(' ');
			text.push_str(ELLIPSIS);
		}
		lines.push(Line::raw(fit(&text, width)));
	}

	if !view.tags.is_empty() {
		lines.push(Line::from(Span::styled(
			fit(&format!("Tags: {}", view.tags), width),
			theme.muted,
		)));
	}

	if let Some(created_at) = view.created_at {
		lines.push(Line::from(Span::styled(
			fit(
				&format!("Created: {}", created_at.format(TIMESTAMP_FORMAT)),
				width,
			),
			theme.muted,
		)));
	}

	lines
}

/// The prompt name followed by its dimmed token estimate. The estimate is
/// dropped when the name alone fills the width.
fn name_line(view: &PromptView<'_>, theme: &Theme, width: Option<usize>) -> Line<'static> {
	let suffix = format!(" · {}", view.token_label());
	let name_width = width.map(|w| w.saturating_sub(suffix.width()));
	if name_width == Some(0) {
		return Line::from(Span::styled(fit(&view.prompt.name, width), theme.name));
	}
	Line::from(vec![
		Span::styled(fit(&view.prompt.name, name_width), theme.name),
		Span::styled(suffix, theme.muted),
	])
}

/// Cut `text` to `width` columns, marking the cut with an ellipsis.
pub(crate) fn fit(text: &str, width: Option<usize>) -> String {
	let Some(width) = width else {
		return text.to_string();
	};
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let (head, _) = text.unicode_truncate(width - 1);
	format!("{head}{ELLIPSIS}")
}
