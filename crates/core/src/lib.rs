//! Query, selection and composition engine for `prompt-partner`.
//!
//! The crate holds the state a prompt browser needs and nothing about how it
//! is drawn:
//!
//! - [`filter`] narrows a collection by a case-insensitive substring of a
//!   prompt's name or tag string,
//! - [`Selection`] remembers which prompts are chosen and in what order,
//! - [`ExpandState`] keeps per-prompt expand flags in a durable
//!   [`KeyValueStore`],
//! - [`compose`] joins the chosen prompts into the master prompt and
//!   [`export_to_clipboard`] hands it to the host clipboard.
//!
//! [`Session`] wires these together for front ends. Storage and the clipboard
//! are reached through the [`PromptStore`], [`KeyValueStore`] and
//! [`ClipboardSink`] ports; in-memory implementations of each ship here.

pub mod clipboard;
pub mod compose;
pub mod expand;
pub mod filter;
pub mod kv;
pub mod presentation;
pub mod prompt;
pub mod selection;
pub mod session;
pub mod store;

pub use crate::clipboard::{
	ClipboardError, ClipboardSink, MemoryClipboard, PendingExport, export_to_clipboard,
};
pub use crate::compose::{MASTER_PROMPT_SEPARATOR, compose};
pub use crate::expand::{EXPANDED_STATES_KEY, ExpandState};
pub use crate::filter::{filter, filter_owned};
pub use crate::kv::{KeyValueStore, KvError, MemoryKv};
pub use crate::presentation::{PresentationPolicy, PromptView, token_count};
pub use crate::prompt::{DraftError, Prompt, PromptDraft, PromptId};
pub use crate::selection::Selection;
pub use crate::session::Session;
pub use crate::store::{Listing, MemoryPromptStore, PromptStore, StoreError};
