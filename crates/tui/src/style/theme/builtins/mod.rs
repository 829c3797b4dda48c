use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::types::{Theme, ThemeRegistration};

/// Get the default built-in theme.
pub fn default_theme() -> Theme {
	slate()
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration {
			name: "slate",
			theme: slate(),
			aliases: &["default", "dark"],
		},
		ThemeRegistration {
			name: "paper",
			theme: paper(),
			aliases: &["light"],
		},
		ThemeRegistration {
			name: "mono",
			theme: mono(),
			aliases: &["plain"],
		},
	]
}

fn slate() -> Theme {
	Theme {
		header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().bg(Color::Rgb(45, 52, 64)),
		name: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
		selected: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
		muted: Style::new().fg(Color::Gray),
		empty: Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
		success: Style::new().fg(Color::Green),
		error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
	}
}

fn paper() -> Theme {
	Theme {
		header: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().bg(Color::Rgb(225, 230, 240)),
		name: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
		selected: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
		muted: Style::new().fg(Color::DarkGray),
		empty: Style::new().fg(Color::Gray).add_modifier(Modifier::ITALIC),
		success: Style::new().fg(Color::Green),
		error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
	}
}

fn mono() -> Theme {
	Theme {
		header: Style::new().add_modifier(Modifier::BOLD),
		row_highlight: Style::new().add_modifier(Modifier::REVERSED),
		name: Style::new().add_modifier(Modifier::BOLD),
		selected: Style::new().add_modifier(Modifier::BOLD),
		muted: Style::new(),
		empty: Style::new().add_modifier(Modifier::ITALIC),
		success: Style::new(),
		error: Style::new().add_modifier(Modifier::BOLD),
	}
}
