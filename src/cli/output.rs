use anyhow::Result;
use prompt_partner_core::{Prompt, PromptId, PromptView};
use prompt_partner_tui::AppOutcome;
use serde_json::{Value, json};

use super::OutputFormat;

/// Render the listed prompts as indented plain text.
pub(crate) fn format_prompts_plain(views: &[PromptView<'_>]) -> String {
	let mut out = String::new();
	for view in views {
		out.push_str(&format!(
			"[{}] {} ({})\n",
			view.prompt.id,
			view.prompt.name,
			view.token_label()
		));
		for line in &view.body {
			out.push_str(&format!("    {line}\n"));
		}
		if view.body_truncated {
			out.push_str("    …\n");
		}
		if !view.tags.is_empty() {
			out.push_str(&format!("    Tags: {}\n", view.tags));
		}
		if let Some(created_at) = view.created_at {
			out.push_str(&format!("    Created: {}\n", created_at.to_rfc3339()));
		}
	}
	out
}

fn prompt_json(prompt: &Prompt) -> Value {
	json!({
		"id": prompt.id,
		"name": prompt.name,
		"content": prompt.content,
		"tags": prompt.tags,
		"created_at": prompt.created_at,
	})
}

/// Print listed prompts in the chosen format.
pub(crate) fn print_prompts(views: &[PromptView<'_>], format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			if views.is_empty() {
				println!("No prompts found.");
			} else {
				print!("{}", format_prompts_plain(views));
			}
		}
		OutputFormat::Json => {
			let items: Vec<Value> = views
				.iter()
				.map(|view| {
					let mut item = prompt_json(view.prompt);
					item["expanded"] = Value::Bool(view.expanded);
					item["tokens"] = json!(view.tokens);
					item
				})
				.collect();
			println!("{}", serde_json::to_string_pretty(&items)?);
		}
	}
	Ok(())
}

/// Print a prompt that was just created or updated.
pub(crate) fn print_prompt(action: &str, prompt: &Prompt, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{action} prompt {}: {}", prompt.id, prompt.name),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&prompt_json(prompt))?),
	}
	Ok(())
}

/// Format a composed master prompt as JSON.
pub(crate) fn format_master_json(text: &str, selected: &[PromptId], copied: bool) -> Result<String> {
	let payload = json!({
		"master_prompt": text,
		"selected": selected,
		"copied": copied,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print a composed master prompt.
pub(crate) fn print_master(
	text: &str,
	selected: &[PromptId],
	copied: bool,
	format: OutputFormat,
) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			if !text.is_empty() {
				println!("{text}");
			}
			if copied {
				eprintln!("Copied {} characters to the clipboard", text.chars().count());
			}
		}
		OutputFormat::Json => println!("{}", format_master_json(text, selected, copied)?),
	}
	Ok(())
}

/// Print what the user left the browser with.
pub(crate) fn print_outcome(outcome: &AppOutcome, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			if outcome.accepted && !outcome.master_prompt.is_empty() {
				println!("{}", outcome.master_prompt);
			}
		}
		OutputFormat::Json => {
			let payload = json!({
				"accepted": outcome.accepted,
				"master_prompt": outcome.master_prompt,
			});
			println!("{}", serde_json::to_string_pretty(&payload)?);
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use chrono::Utc;
	use prompt_partner_core::PresentationPolicy;

	use super::*;

	fn prompt() -> Prompt {
		Prompt {
			id: PromptId(3),
			name: "Python Tips".into(),
			content: "Document your code\nUse type hints\nWrite tests".into(),
			tags: "test-coding, test-python, test-tips".into(),
			created_at: Utc::now(),
		}
	}

	#[test]
	fn plain_listing_uses_the_collapsed_view() {
		let prompt = prompt();
		let view = PresentationPolicy::default().view(&prompt, false);
		let text = format_prompts_plain(&[view]);
		assert_eq!(
			text,
			"[3] Python Tips (8 tokens)\n    Document your code\n    Use type hints\n    …\n    Tags: test-coding, test-python, ...\n"
		);
	}

	#[test]
	fn master_json_carries_ids_and_copy_flag() {
		let json = format_master_json("a\n\nb", &[PromptId(2), PromptId(1)], true).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["master_prompt"], "a\n\nb");
		assert_eq!(value["selected"], json!([2, 1]));
		assert_eq!(value["copied"], true);
	}
}
