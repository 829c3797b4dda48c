use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the prompt browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Pane borders and titles.
	pub header: Style,
	/// The row under the cursor.
	pub row_highlight: Style,
	/// Prompt names.
	pub name: Style,
	/// Checked prompts' checkbox.
	pub selected: Style,
	/// Tags, timestamps and placeholders.
	pub muted: Style,
	/// Empty-state text.
	pub empty: Style,
	/// Success messages in the status line.
	pub success: Style,
	/// Error messages in the status line.
	pub error: Style,
}

impl Theme {
	/// Returns the style for disabled actions.
	#[must_use]
	pub fn disabled_style(&self) -> Style {
		self.muted.add_modifier(Modifier::DIM)
	}

	/// Returns the border style derived from the header colour.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

/// Describes a theme instance that can be selected by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: &'static str,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: &'static [&'static str],
}

impl ThemeRegistration {
	/// Whether `name` refers to this theme, ignoring ASCII case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
