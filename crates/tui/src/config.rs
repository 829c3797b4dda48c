/// Textual configuration used when rendering the panes and status line.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title above the query input.
	pub query_title: String,
	/// Placeholder shown while the query is empty.
	pub query_placeholder: String,
	/// Title of the prompt list pane.
	pub list_title: String,
	/// Title of the master prompt pane.
	pub master_title: String,
	/// Placeholder shown in the master pane while nothing is selected.
	pub master_placeholder: String,
	/// Message shown when the list has no rows to draw.
	pub empty_message: String,
	/// Prefix for the message shown when the prompt store failed.
	pub unavailable_prefix: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			query_title: "Search".to_string(),
			query_placeholder: "Search by name or tag".to_string(),
			list_title: "Prompts".to_string(),
			master_title: "Master Prompt".to_string(),
			master_placeholder: "Selected prompts will appear here...".to_string(),
			empty_message: "No prompts found. Add a new prompt.".to_string(),
			unavailable_prefix: "Could not load prompts".to_string(),
		}
	}
}

impl UiLabels {
	/// Override the query title, ignoring blank values.
	#[must_use]
	pub fn with_query_title(mut self, title: impl Into<String>) -> Self {
		let title = title.into();
		if !title.trim().is_empty() {
			self.query_title = title;
		}
		self
	}
}
