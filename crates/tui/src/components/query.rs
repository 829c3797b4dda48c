use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the query row.
pub struct QueryContext<'a> {
	pub input: &'a QueryInput,
	pub title: &'a str,
	/// Prompts shown under the current query.
	pub visible: usize,
	/// Prompts in the collection.
	pub total: usize,
	pub theme: &'a Theme,
}

/// Render `title > query` with the match count on the right.
pub fn render_query(frame: &mut Frame, area: Rect, ctx: QueryContext<'_>) {
	let QueryContext {
		input,
		title,
		visible,
		total,
		theme,
	} = ctx;

	let prompt = format!("{title} > ");
	let counts = format!("{visible}/{total}");
	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt.width() as u16),
			Constraint::Min(1),
			Constraint::Length(counts.width() as u16 + 1),
		])
		.split(area);

	frame.render_widget(Paragraph::new(prompt).style(theme.header), columns[0]);
	frame.render_widget(input.textarea(), columns[1]);
	frame.render_widget(
		Paragraph::new(counts)
			.style(theme.muted)
			.alignment(ratatui::layout::Alignment::Right),
		columns[2],
	);
}
