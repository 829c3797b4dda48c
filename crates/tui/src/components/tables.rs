use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, HighlightSpacing, Row, Table, TableState};

use crate::components::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Checkbox and expand indicator columns.
pub(crate) const MARK_WIDTH: u16 = 3;
pub(crate) const TOGGLE_WIDTH: u16 = 1;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Title for the bordered table.
	pub title: String,
	/// Lines occupied by all rows.
	pub content_height: usize,
	/// First line of the highlighted row.
	pub cursor_line: usize,
}

/// Column widths for the prompt list.
#[must_use]
pub fn prompt_columns() -> Vec<Constraint> {
	vec![
		Constraint::Length(MARK_WIDTH),
		Constraint::Length(TOGGLE_WIDTH),
		Constraint::Fill(1),
	]
}

/// Width left for the text column inside a bordered table of `outer_width`.
#[must_use]
pub fn content_width(outer_width: u16) -> u16 {
	let fixed = 2 // borders
		+ HIGHLIGHT_SYMBOL.chars().count() as u16
		+ MARK_WIDTH
		+ TOGGLE_WIDTH
		+ 2 * TABLE_COLUMN_SPACING
		+ 1; // scrollbar
	outer_width.saturating_sub(fixed)
}

/// Render a bordered table; returns the inner area.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) -> Rect {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(spec.title)
		.title_style(theme.header);

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let metrics = ScrollMetrics::compute(spec.content_height, usize::from(inner.height));
	let table_area = render_scrollbar(frame, inner, metrics, spec.cursor_line, theme);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	inner
}
