use std::collections::HashMap;

use crate::prompt::{Prompt, PromptId};

/// Text placed between the contents of consecutive selected prompts.
pub const MASTER_PROMPT_SEPARATOR: &str = "\n\n";

/// Join the content of the selected prompts, in selection order.
///
/// Ids without a matching prompt are skipped. An empty selection, or one that
/// resolves to no prompts, produces an empty string.
pub fn compose(prompts: &[Prompt], selection: impl IntoIterator<Item = PromptId>) -> String {
	let by_id: HashMap<PromptId, &Prompt> =
		prompts.iter().map(|prompt| (prompt.id, prompt)).collect();

	selection
		.into_iter()
		.filter_map(|id| by_id.get(&id))
		.map(|prompt| prompt.content.as_str())
		.collect::<Vec<_>>()
		.join(MASTER_PROMPT_SEPARATOR)
}

#[cfg(test)]
mod tests {
	use chrono::Utc;

	use super::*;
	use crate::selection::Selection;

	fn prompt(id: u64, content: &str) -> Prompt {
		Prompt {
			id: PromptId(id),
			name: format!("Prompt {id}"),
			content: content.into(),
			tags: String::new(),
			created_at: Utc::now(),
		}
	}

	fn fixture() -> Vec<Prompt> {
		vec![
			prompt(1, "Write a function"),
			prompt(2, "Write a story"),
			prompt(3, "Document your code"),
		]
	}

	#[test]
	fn empty_selection_composes_to_nothing() {
		assert_eq!(compose(&fixture(), Selection::new().ids()), "");
		assert_eq!(compose(&[], [PromptId(1)]), "");
	}

	#[test]
	fn follows_selection_order_not_list_order() {
		let mut selection = Selection::new();
		selection.toggle(PromptId(2));
		selection.toggle(PromptId(1));
		assert_eq!(
			compose(&fixture(), selection.ids()),
			"Write a story\n\nWrite a function"
		);
	}

	#[test]
	fn stale_ids_are_skipped() {
		let with_stale = compose(&fixture(), [PromptId(1), PromptId(42), PromptId(3)]);
		let without = compose(&fixture(), [PromptId(1), PromptId(3)]);
		assert_eq!(with_stale, without);

		assert_eq!(compose(&fixture(), [PromptId(42)]), "");
	}

	#[test]
	fn single_prompt_has_no_separator() {
		insta::assert_snapshot!(compose(&fixture(), [PromptId(3)]), @"Document your code");
	}

	#[test]
	fn content_is_copied_verbatim() {
		let prompts = vec![prompt(1, "  line one\nline two\n"), prompt(2, "tail")];
		assert_eq!(
			compose(&prompts, [PromptId(1), PromptId(2)]),
			"  line one\nline two\n\n\ntail"
		);
	}
}
