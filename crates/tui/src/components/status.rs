use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Key hints shown when there is no status message.
pub(crate) const KEY_HINTS: &str =
	"Tab select · C-e expand · C-o collapse all · C-x clear · C-y copy · C-d delete · Enter accept";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
	Info,
	Success,
	Error,
}

/// A one-line message for the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
	pub kind: StatusKind,
	pub message: String,
}

impl Status {
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			kind: StatusKind::Info,
			message: message.into(),
		}
	}

	pub fn success(message: impl Into<String>) -> Self {
		Self {
			kind: StatusKind::Success,
			message: message.into(),
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			kind: StatusKind::Error,
			message: message.into(),
		}
	}
}

/// Render the status message, or the key hints when there is none.
///
/// The copy hint is dimmed while there is nothing to copy.
pub fn render_status(
	frame: &mut Frame,
	area: Rect,
	status: Option<&Status>,
	can_copy: bool,
	theme: &Theme,
) {
	let line = match status {
		Some(status) => {
			let style = match status.kind {
				StatusKind::Info => theme.muted,
				StatusKind::Success => theme.success,
				StatusKind::Error => theme.error,
			};
			Line::from(Span::styled(status.message.clone(), style))
		}
		None if can_copy => Line::from(Span::styled(KEY_HINTS, theme.muted)),
		None => {
			let (before, after) = KEY_HINTS
				.split_once("C-y copy")
				.unwrap_or((KEY_HINTS, ""));
			Line::from(vec![
				Span::styled(before, theme.muted),
				Span::styled("C-y copy", theme.disabled_style()),
				Span::styled(after, theme.muted),
			])
		}
	};
	frame.render_widget(Paragraph::new(line), area);
}
