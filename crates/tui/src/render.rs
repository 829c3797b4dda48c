use prompt_partner_core::{KeyValueStore, Listing};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app::App;
use crate::components::tables::{content_width, prompt_columns};
use crate::components::{
	MasterContext, QueryContext, TableSpec, build_prompt_rows, render_master, render_query,
	render_status, render_table,
};

/// Share of the body width given to the prompt list.
const LIST_PERCENT: u16 = 55;

impl<K: KeyValueStore> App<K> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(area);

		render_query(
			frame,
			layout[0],
			QueryContext {
				input: &self.query,
				title: &self.labels.query_title,
				visible: self.visible_len(),
				total: self.session.prompts().len(),
				theme: &self.theme,
			},
		);

		let body = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([
				Constraint::Percentage(LIST_PERCENT),
				Constraint::Percentage(100 - LIST_PERCENT),
			])
			.split(layout[1]);

		self.render_list(frame, body[0]);

		let master = self.session.master_prompt();
		render_master(
			frame,
			body[1],
			MasterContext {
				text: &master,
				selected: self.session.selection().len(),
				title: &self.labels.master_title,
				placeholder: &self.labels.master_placeholder,
				theme: &self.theme,
			},
		);

		render_status(
			frame,
			layout[2],
			self.status.as_ref(),
			!master.is_empty(),
			&self.theme,
		);
	}

	fn render_list(&mut self, frame: &mut Frame, area: Rect) {
		let visible = self.session.visible();
		if visible.is_empty() {
			let (message, style) = match self.session.listing() {
				Listing::Unavailable { reason } => {
					(format!("{}: {reason}", self.labels.unavailable_prefix), self.theme.error)
				}
				Listing::Loaded(_) => (self.labels.empty_message.clone(), self.theme.empty),
			};
			let block = Block::default()
				.borders(Borders::ALL)
				.border_set(ratatui::symbols::border::ROUNDED)
				.border_style(self.theme.border_style())
				.title(self.labels.list_title.as_str())
				.title_style(self.theme.header);
			let inner = block.inner(area);
			frame.render_widget(block, area);
			if inner.height > 0 {
				let centered = Rect {
					y: inner.y + inner.height / 2,
					height: 1,
					..inner
				};
				let paragraph = Paragraph::new(Line::from(Span::styled(message, style)))
					.alignment(Alignment::Center);
				frame.render_widget(paragraph, centered);
			}
			return;
		}

		let views: Vec<_> = visible
			.iter()
			.map(|prompt| self.session.view(prompt))
			.collect();
		let rows = build_prompt_rows(
			&views,
			|id| self.session.is_selected(id),
			&self.theme,
			Some(content_width(area.width)),
		);
		let cursor_line = rows.line_offset(self.table_state.selected().unwrap_or(0));
		let spec = TableSpec {
			content_height: rows.total_height(),
			cursor_line,
			rows: rows.rows,
			widths: prompt_columns(),
			title: format!(
				"{} ({} selected)",
				self.labels.list_title,
				self.session.selection().len()
			),
		};

		render_table(frame, area, &mut self.table_state, spec, &self.theme);
	}
}
