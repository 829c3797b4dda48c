use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::style::Theme;

/// Argument bundle for the master prompt pane.
pub struct MasterContext<'a> {
	pub text: &'a str,
	/// Number of selected prompts.
	pub selected: usize,
	pub title: &'a str,
	pub placeholder: &'a str,
	pub theme: &'a Theme,
}

/// Render the composed master prompt, or a placeholder while it is empty.
pub fn render_master(frame: &mut Frame, area: Rect, ctx: MasterContext<'_>) {
	let MasterContext {
		text,
		selected,
		title,
		placeholder,
		theme,
	} = ctx;

	let title = if selected == 0 {
		title.to_string()
	} else {
		format!("{title} ({selected} selected, {} chars)", text.chars().count())
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(title)
		.title_style(theme.header);

	let body = if text.is_empty() {
		Paragraph::new(Line::from(Span::styled(placeholder, theme.empty)))
	} else {
		Paragraph::new(text)
	};
	frame.render_widget(body.block(block).wrap(Wrap { trim: false }), area);
}
