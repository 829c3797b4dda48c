use std::sync::Arc;

use anyhow::{Context, Result, bail};
use prompt_partner::{JsonFileKv, JsonPromptStore, SystemClipboard};
use prompt_partner_core::{
	ClipboardError, Listing, PromptDraft, PromptId, PromptStore, Selection, Session,
};
use prompt_partner_tui::{App, Theme, theme_by_name};
use tracing::{info, warn};

use crate::cli::{CliCommand, OutputFormat, print_master, print_outcome, print_prompt, print_prompts};
use crate::settings::ResolvedConfig;

/// Runs one subcommand against the configured storage.
pub(crate) struct Workflow {
	config: ResolvedConfig,
	output: OutputFormat,
}

impl Workflow {
	pub(crate) fn new(config: ResolvedConfig, output: OutputFormat) -> Self {
		Self { config, output }
	}

	pub(crate) fn run(self, command: CliCommand) -> Result<()> {
		match command {
			CliCommand::Tui => self.browse(),
			CliCommand::List { expanded } => self.list(expanded),
			CliCommand::Add {
				name,
				content,
				tags,
			} => self.add(PromptDraft::new(name, content, tags)),
			CliCommand::Edit {
				id,
				name,
				content,
				tags,
			} => self.edit(id, name, content, tags),
			CliCommand::Rm { id } => self.remove(id),
			CliCommand::Compose { ids, copy } => self.compose(ids, copy),
			CliCommand::Expand { id } => self.expand(id),
			CliCommand::CollapseAll => self.collapse_all(),
		}
	}

	fn store(&self) -> JsonPromptStore {
		JsonPromptStore::new(&self.config.prompts_path)
	}

	/// A session over the stored prompts with the persisted expand flags.
	fn session(&self, store: &JsonPromptStore) -> Session<JsonFileKv> {
		Session::new(
			Listing::fetch(store),
			JsonFileKv::open(&self.config.state_path),
		)
		.with_policy(self.config.policy)
		.with_query(self.config.initial_query.clone())
	}

	fn loaded(&self, session: &Session<JsonFileKv>) -> Result<()> {
		if let Some(reason) = session.listing().failure() {
			bail!("could not load prompts: {reason}");
		}
		Ok(())
	}

	fn theme(&self) -> Theme {
		self.config
			.theme_name
			.as_deref()
			.and_then(theme_by_name)
			.unwrap_or_default()
	}

	fn browse(self) -> Result<()> {
		let store = self.store();
		let session = self.session(&store);
		let app = App::new(session, Box::new(store), Arc::new(SystemClipboard::new()))
			.with_theme(self.theme());
		let outcome = prompt_partner_tui::run(app)?;
		info!(accepted = outcome.accepted, "browser closed");
		print_outcome(&outcome, self.output)
	}

	fn list(&self, expanded: bool) -> Result<()> {
		let store = self.store();
		let session = self.session(&store);
		self.loaded(&session)?;

		let policy = session.policy();
		let views: Vec<_> = session
			.visible()
			.into_iter()
			.map(|prompt| {
				if expanded {
					policy.view(prompt, true)
				} else {
					session.view(prompt)
				}
			})
			.collect();
		print_prompts(&views, self.output)
	}

	fn add(&self, draft: PromptDraft) -> Result<()> {
		let prompt = self
			.store()
			.create(draft)
			.context("failed to create prompt")?;
		print_prompt("Created", &prompt, self.output)
	}

	fn edit(
		&self,
		id: PromptId,
		name: Option<String>,
		content: Option<String>,
		tags: Option<String>,
	) -> Result<()> {
		let mut store = self.store();
		let existing = store
			.list()?
			.into_iter()
			.find(|prompt| prompt.id == id)
			.with_context(|| format!("prompt {id} does not exist"))?;

		let mut draft = PromptDraft::from_prompt(&existing);
		if let Some(name) = name {
			draft.name = name;
		}
		if let Some(content) = content {
			draft.content = content;
		}
		if let Some(tags) = tags {
			draft.tags = tags;
		}

		let prompt = store
			.update(id, draft)
			.with_context(|| format!("failed to update prompt {id}"))?;
		print_prompt("Updated", &prompt, self.output)
	}

	fn remove(&self, id: PromptId) -> Result<()> {
		self.store()
			.delete(id)
			.with_context(|| format!("failed to delete prompt {id}"))?;
		if self.output == OutputFormat::Plain {
			println!("Deleted prompt {id}");
		}
		Ok(())
	}

	/// A session whose selection holds the requested ids that resolve to a
	/// stored prompt, in argument order.
	fn composing_session(
		&self,
		store: &JsonPromptStore,
		ids: Vec<PromptId>,
	) -> Result<Session<JsonFileKv>> {
		let mut session = self.session(store);
		self.loaded(&session)?;

		// Toggling in argument order lets a repeated id deselect.
		let requested: Selection = ids.into_iter().collect();
		for id in requested.ids() {
			if session.prompt(id).is_none() {
				warn!(%id, "skipping unknown prompt");
				continue;
			}
			session.toggle_selected(id);
		}
		Ok(session)
	}

	fn compose(&self, ids: Vec<PromptId>, copy: bool) -> Result<()> {
		let store = self.store();
		let session = self.composing_session(&store, ids)?;
		let selected: Vec<PromptId> = session.selection().ids().collect();
		let text = session.master_prompt();

		if copy {
			let pending = match session.export(Arc::new(SystemClipboard::new())) {
				Ok(pending) => pending,
				Err(ClipboardError::EmptyText) => bail!("nothing to copy: no known prompt selected"),
				Err(err) => return Err(err).context("failed to copy master prompt"),
			};
			pending.wait().context("failed to copy master prompt")?;
		}

		print_master(&text, &selected, copy, self.output)
	}

	fn expand(&self, id: PromptId) -> Result<()> {
		let store = self.store();
		let mut session = self.session(&store);
		self.loaded(&session)?;
		if session.prompt(id).is_none() {
			bail!("prompt {id} does not exist");
		}

		let expanded = session.toggle_expanded(id);
		if let Some(err) = session.expand_state().last_persist_error() {
			bail!("failed to save expand state: {err}");
		}
		if self.output == OutputFormat::Plain {
			let word = if expanded { "expanded" } else { "collapsed" };
			println!("Prompt {id} {word}");
		}
		Ok(())
	}

	fn collapse_all(&self) -> Result<()> {
		let store = self.store();
		let mut session = self.session(&store);
		session.collapse_all();
		if let Some(err) = session.expand_state().last_persist_error() {
			bail!("failed to save expand state: {err}");
		}
		if self.output == OutputFormat::Plain {
			println!("All prompts collapsed");
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	fn config(dir: &std::path::Path) -> ResolvedConfig {
		ResolvedConfig {
			data_dir: dir.to_path_buf(),
			prompts_path: dir.join("prompts.json"),
			state_path: dir.join("state.json"),
			initial_query: String::new(),
			policy: Default::default(),
			theme_name: None,
		}
	}

	fn seeded(dir: &std::path::Path) -> Workflow {
		let workflow = Workflow::new(config(dir), OutputFormat::Plain);
		for (name, content, tags) in [
			("Coding Guide", "Write a function", "test-tutorial, test-javascript"),
			("Writing Tutorial", "Write a story", "test-creative, test-guide"),
			("Python Tips", "Document your code", "test-coding, test-python"),
		] {
			workflow.add(PromptDraft::new(name, content, tags)).unwrap();
		}
		workflow
	}

	#[test]
	fn edit_keeps_unspecified_fields() {
		let dir = tempdir().unwrap();
		let workflow = seeded(dir.path());
		workflow
			.edit(PromptId(2), Some("Story Starter".into()), None, None)
			.unwrap();

		let prompts = workflow.store().list().unwrap();
		assert_eq!(prompts[1].name, "Story Starter");
		assert_eq!(prompts[1].content, "Write a story");
		assert_eq!(prompts[1].tags, "test-creative, test-guide");
	}

	#[test]
	fn edit_to_empty_content_is_refused() {
		let dir = tempdir().unwrap();
		let workflow = seeded(dir.path());
		assert!(workflow.edit(PromptId(1), None, Some(" ".into()), None).is_err());
		assert_eq!(workflow.store().list().unwrap()[0].content, "Write a function");
	}

	#[test]
	fn expand_persists_between_commands() {
		let dir = tempdir().unwrap();
		let workflow = seeded(dir.path());
		workflow.expand(PromptId(3)).unwrap();

		let store = workflow.store();
		assert!(workflow.session(&store).is_expanded(PromptId(3)));

		workflow.collapse_all().unwrap();
		assert!(!workflow.session(&store).is_expanded(PromptId(3)));
	}

	#[test]
	fn expand_of_unknown_prompt_fails() {
		let dir = tempdir().unwrap();
		let workflow = seeded(dir.path());
		assert!(workflow.expand(PromptId(42)).is_err());
	}

	#[test]
	fn remove_then_compose_skips_the_deleted_prompt() {
		let dir = tempdir().unwrap();
		let workflow = seeded(dir.path());
		workflow.remove(PromptId(1)).unwrap();
		assert!(workflow.compose(vec![PromptId(1), PromptId(2)], false).is_ok());
		assert_eq!(workflow.store().list().unwrap().len(), 2);
	}

	#[test]
	fn unknown_ids_are_left_out_of_the_selection() {
		let dir = tempdir().unwrap();
		let workflow = seeded(dir.path());
		workflow.remove(PromptId(1)).unwrap();

		let store = workflow.store();
		let session = workflow
			.composing_session(&store, vec![PromptId(1), PromptId(2), PromptId(42)])
			.unwrap();

		let selected: Vec<PromptId> = session.selection().ids().collect();
		assert_eq!(selected, [PromptId(2)]);
		assert_eq!(session.master_prompt(), "Write a story");
	}

	#[test]
	fn repeated_id_deselects_when_composing() {
		let dir = tempdir().unwrap();
		let workflow = seeded(dir.path());
		let store = workflow.store();
		let session = workflow
			.composing_session(&store, vec![PromptId(3), PromptId(1), PromptId(3)])
			.unwrap();

		let selected: Vec<PromptId> = session.selection().ids().collect();
		assert_eq!(selected, [PromptId(1)]);
	}

	#[test]
	fn copying_nothing_is_an_error() {
		let dir = tempdir().unwrap();
		let workflow = seeded(dir.path());
		let err = workflow.compose(vec![PromptId(7)], true).unwrap_err();
		assert!(err.to_string().contains("nothing to copy"));
	}
}
