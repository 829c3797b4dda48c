use std::sync::Arc;

use prompt_partner_core::{
	ClipboardError, EXPANDED_STATES_KEY, KeyValueStore, Listing, MASTER_PROMPT_SEPARATOR,
	MemoryClipboard, MemoryKv, MemoryPromptStore, PromptDraft, PromptId, PromptStore, Session,
	StoreError,
};

fn seeded_store() -> MemoryPromptStore {
	let mut store = MemoryPromptStore::new();
	for (name, content, tags) in [
		("Coding Guide", "Write a function", "test-tutorial, test-javascript"),
		("Writing Tutorial", "Write a story", "test-creative, test-guide"),
		("Python Tips", "Document your code", "test-coding, test-python"),
	] {
		store.create(PromptDraft::new(name, content, tags)).unwrap();
	}
	store
}

fn visible_names<K: KeyValueStore>(session: &Session<K>) -> Vec<String> {
	session
		.visible()
		.iter()
		.map(|prompt| prompt.name.clone())
		.collect()
}

#[test]
fn select_compose_and_copy() {
	let store = seeded_store();
	let mut session = Session::new(Listing::fetch(&store), MemoryKv::new());

	session.toggle_selected(PromptId(1));
	session.toggle_selected(PromptId(3));

	let master = session.master_prompt();
	assert_eq!(
		master,
		format!("Write a function{MASTER_PROMPT_SEPARATOR}Document your code")
	);

	let clipboard = Arc::new(MemoryClipboard::new());
	session.export(Arc::clone(&clipboard)).unwrap().wait().unwrap();
	assert_eq!(clipboard.writes(), [master]);
}

#[test]
fn clipboard_failure_leaves_the_session_usable() {
	let store = seeded_store();
	let mut session = Session::new(Listing::fetch(&store), MemoryKv::new());
	session.toggle_selected(PromptId(2));

	let clipboard = Arc::new(MemoryClipboard::failing(ClipboardError::WriteFailed(
		"permission denied".into(),
	)));
	let outcome = session.export(clipboard).unwrap().wait();
	assert_eq!(
		outcome,
		Err(ClipboardError::WriteFailed("permission denied".into()))
	);

	assert!(session.is_selected(PromptId(2)));
	assert_eq!(session.master_prompt(), "Write a story");
}

#[test]
fn search_scenarios_from_the_browser() {
	let store = seeded_store();
	let mut session = Session::new(Listing::fetch(&store), MemoryKv::new());

	session.set_query("guide");
	assert_eq!(visible_names(&session), ["Coding Guide", "Writing Tutorial"]);

	session.set_query("java");
	assert_eq!(visible_names(&session), ["Coding Guide"]);

	session.set_query("PYTHON");
	assert_eq!(visible_names(&session), ["Python Tips"]);

	session.set_query("Writing Tutorial");
	assert_eq!(visible_names(&session), ["Writing Tutorial"]);

	session.set_query("nonexistent");
	assert!(visible_names(&session).is_empty());

	session.clear_query();
	assert_eq!(visible_names(&session).len(), 3);
}

#[test]
fn new_prompt_respects_the_active_query() {
	let mut store = seeded_store();
	let mut session = Session::new(Listing::fetch(&store), MemoryKv::new()).with_query("python");

	store
		.create(PromptDraft::new("New Python Guide", "New content", "test-python, test-new"))
		.unwrap();
	session.refresh(&store);

	assert_eq!(visible_names(&session), ["Python Tips", "New Python Guide"]);
}

#[test]
fn invalid_creation_never_reaches_the_collection() {
	let mut store = seeded_store();
	let err = store
		.create(PromptDraft::new("[TEST] Invalid", "", "test-invalid"))
		.unwrap_err();
	assert!(matches!(err, StoreError::Invalid(_)));
	assert_eq!(store.list().unwrap().len(), 3);
}

#[test]
fn expand_flags_persist_between_sessions() {
	let store = seeded_store();
	let mut first = Session::new(Listing::fetch(&store), MemoryKv::new());
	first.toggle_expanded(PromptId(2));

	let kv = first.expand_state().store().clone();
	assert!(kv.get(EXPANDED_STATES_KEY).unwrap().is_some());

	let mut second = Session::new(Listing::fetch(&store), kv);
	assert!(second.is_expanded(PromptId(2)));
	assert!(!second.is_expanded(PromptId(1)));

	second.collapse_all();
	assert!(!second.is_expanded(PromptId(2)));
}

#[test]
fn deleted_prompt_is_skipped_when_composing() {
	let mut store = seeded_store();
	let mut session = Session::new(Listing::fetch(&store), MemoryKv::new());
	session.toggle_selected(PromptId(1));
	session.toggle_selected(PromptId(2));

	store.delete(PromptId(1)).unwrap();
	session.refresh(&store);

	assert_eq!(session.master_prompt(), "Write a story");
}
