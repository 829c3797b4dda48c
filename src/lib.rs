//! Adapters and platform plumbing for the `prompt-partner` binary.
//!
//! The engine lives in [`prompt_partner_core`] and the terminal browser in
//! [`prompt_partner_tui`]. This crate supplies what they need from the host:
//! file-backed stores for prompts and UI state, the system clipboard, platform
//! directories and log setup.

pub mod app_dirs;
pub mod clipboard;
pub mod kv;
pub mod logging;
pub mod store;

pub use crate::clipboard::SystemClipboard;
pub use crate::kv::JsonFileKv;
pub use crate::logging::LogTarget;
pub use crate::store::JsonPromptStore;
