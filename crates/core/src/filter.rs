//! Query filtering over a prompt collection.
//!
//! Matching is plain case-insensitive substring containment against either the
//! prompt's name or its raw tag string. The tag string is searched as a whole,
//! so `java` matches a prompt tagged `test-javascript` and a query containing
//! spaces must appear verbatim in one of the two fields.

use crate::prompt::Prompt;

/// Lowercased query, prepared once per filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(Option<String>);

impl Needle {
	/// An empty or all-whitespace query matches everything.
	pub fn new(query: &str) -> Self {
		if query.trim().is_empty() {
			Self(None)
		} else {
			Self(Some(query.to_lowercase()))
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_none()
	}

	pub fn matches(&self, prompt: &Prompt) -> bool {
		let Some(needle) = &self.0 else {
			return true;
		};
		prompt.name.to_lowercase().contains(needle.as_str())
			|| prompt.tags.to_lowercase().contains(needle.as_str())
	}
}

/// Return the prompts matching `query`, in their original order.
pub fn filter<'a>(prompts: &'a [Prompt], query: &str) -> Vec<&'a Prompt> {
	let needle = Needle::new(query);
	prompts.iter().filter(|prompt| needle.matches(prompt)).collect()
}

/// Owned variant of [`filter`].
pub fn filter_owned(prompts: &[Prompt], query: &str) -> Vec<Prompt> {
	filter(prompts, query).into_iter().cloned().collect()
}
