//! How much of a prompt a renderer shows, given its expand flag.
//!
//! A collapsed prompt shows the first few lines of its content and the first
//! few tags. An expanded prompt shows everything plus its creation time.
//! Both carry a rough token estimate for the content.

use chrono::{DateTime, Utc};

use crate::prompt::{Prompt, split_tags};

pub const DEFAULT_PREVIEW_LINES: usize = 2;
pub const MAX_PREVIEW_LINES: usize = 3;
pub const DEFAULT_TAG_PREVIEW_COUNT: usize = 2;
/// Appended to a shortened tag list.
pub const TAG_ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationPolicy {
	/// Content lines shown while collapsed, clamped to `1..=3`.
	pub preview_lines: usize,
	/// Tags shown while collapsed before the list is cut short.
	pub tag_preview_count: usize,
}

impl Default for PresentationPolicy {
	fn default() -> Self {
		Self {
			preview_lines: DEFAULT_PREVIEW_LINES,
			tag_preview_count: DEFAULT_TAG_PREVIEW_COUNT,
		}
	}
}

/// The parts of one prompt a renderer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView<'a> {
	pub prompt: &'a Prompt,
	pub expanded: bool,
	pub body: Vec<&'a str>,
	/// Whether `body` omits lines of the content.
	pub body_truncated: bool,
	/// Full tag string when expanded, a shortened list otherwise.
	pub tags: String,
	/// Present only when expanded.
	pub created_at: Option<DateTime<Utc>>,
	/// Estimated token count of the whole content, see [`token_count`].
	pub tokens: usize,
}

impl PromptView<'_> {
	/// The token estimate as a short label, such as `1 token` or `8 tokens`.
	pub fn token_label(&self) -> String {
		match self.tokens {
			1 => "1 token".to_string(),
			n => format!("{n} tokens"),
		}
	}
}

impl PresentationPolicy {
	pub fn new(preview_lines: usize, tag_preview_count: usize) -> Self {
		Self {
			preview_lines,
			tag_preview_count,
		}
		.normalized()
	}

	/// Clamp out-of-range settings into their supported ranges.
	pub fn normalized(self) -> Self {
		Self {
			preview_lines: self.preview_lines.clamp(1, MAX_PREVIEW_LINES),
			tag_preview_count: self.tag_preview_count.max(1),
		}
	}

	pub fn view<'a>(&self, prompt: &'a Prompt, expanded: bool) -> PromptView<'a> {
		if expanded {
			return PromptView {
				prompt,
				expanded,
				body: prompt.content.lines().collect(),
				body_truncated: false,
				tags: prompt.tags.clone(),
				created_at: Some(prompt.created_at),
				tokens: token_count(&prompt.content),
			};
		}

		let policy = self.normalized();
		let mut lines = prompt.content.lines();
		let body: Vec<&str> = lines.by_ref().take(policy.preview_lines).collect();
		let body_truncated = lines.next().is_some();

		PromptView {
			prompt,
			expanded,
			body,
			body_truncated,
			tags: tag_preview(&prompt.tags, policy.tag_preview_count),
			created_at: None,
			tokens: token_count(&prompt.content),
		}
	}
}

/// Estimate the tokens in `content` as its number of whitespace-separated
/// words.
pub fn token_count(content: &str) -> usize {
	content.split_whitespace().count()
}

/// The first `count` tags joined with `", "`, followed by `...` when more
/// tags exist.
pub fn tag_preview(tags: &str, count: usize) -> String {
	let mut all = split_tags(tags);
	let shown: Vec<&str> = all.by_ref().take(count).collect();
	let mut preview = shown.join(", ");
	if all.next().is_some() {
		preview.push_str(", ");
		preview.push_str(TAG_ELLIPSIS);
	}
	preview
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::prompt::PromptId;

	fn prompt_a() -> Prompt {
		Prompt {
			id: PromptId(1),
			name: "Prompt A".into(),
			content: "Content A line 1\nContent A line 2\nContent A line 3\nContent A line 4".into(),
			tags: "tag1, tag2, tag3".into(),
			created_at: Utc::now(),
		}
	}

	#[test]
	fn collapsed_view_shows_a_prefix() {
		let prompt = prompt_a();
		let view = PresentationPolicy::default().view(&prompt, false);
		assert_eq!(view.body, ["Content A line 1", "Content A line 2"]);
		assert!(view.body_truncated);
		assert_eq!(view.tags, "tag1, tag2, ...");
		assert_eq!(view.created_at, None);
	}

	#[test]
	fn expanded_view_shows_everything() {
		let prompt = prompt_a();
		let view = PresentationPolicy::default().view(&prompt, true);
		assert_eq!(view.body.len(), 4);
		assert!(!view.body_truncated);
		assert_eq!(view.tags, "tag1, tag2, tag3");
		assert_eq!(view.created_at, Some(prompt.created_at));
	}

	#[test]
	fn short_content_is_not_marked_truncated() {
		let mut prompt = prompt_a();
		prompt.content = "Content B".into();
		prompt.tags = "work, personal".into();
		let view = PresentationPolicy::default().view(&prompt, false);
		assert_eq!(view.body, ["Content B"]);
		assert!(!view.body_truncated);
		assert_eq!(view.tags, "work, personal");
	}

	#[test]
	fn preview_lines_are_clamped() {
		let prompt = prompt_a();
		let view = PresentationPolicy::new(10, 2).view(&prompt, false);
		assert_eq!(view.body.len(), MAX_PREVIEW_LINES);

		let view = PresentationPolicy::new(0, 2).view(&prompt, false);
		assert_eq!(view.body.len(), 1);
	}

	#[test]
	fn token_count_ignores_collapsing() {
		let prompt = prompt_a();
		let policy = PresentationPolicy::default();
		assert_eq!(policy.view(&prompt, false).tokens, 16);
		assert_eq!(policy.view(&prompt, true).tokens, 16);
		assert_eq!(policy.view(&prompt, true).token_label(), "16 tokens");
	}

	#[test]
	fn token_count_splits_on_any_whitespace() {
		assert_eq!(token_count(""), 0);
		assert_eq!(token_count("   \n\t "), 0);
		assert_eq!(token_count("Write a\nfunction\tnow "), 4);

		let mut prompt = prompt_a();
		prompt.content = "Summarize".into();
		let view = PresentationPolicy::default().view(&prompt, false);
		assert_eq!(view.token_label(), "1 token");
	}

	#[test]
	fn tag_preview_handles_sparse_lists() {
		assert_eq!(tag_preview("", 2), "");
		assert_eq!(tag_preview("solo", 2), "solo");
		insta::assert_snapshot!(tag_preview(" a ,b,  , c,d", 3), @"a, b, c, ...");
	}
}
