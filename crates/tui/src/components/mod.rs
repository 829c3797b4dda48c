//! UI building blocks shared by the renderer.

/// Master prompt pane.
pub mod master;
/// Query row rendering.
pub mod query;
/// Table row construction for prompts.
pub mod rows;
/// Scrollbar for the prompt list.
pub mod scrollbar;
/// Status line and key hints.
pub mod status;
/// Table rendering and configuration.
pub mod tables;

pub use master::{MasterContext, render_master};
pub use query::{QueryContext, render_query};
pub use rows::{PromptRows, build_prompt_rows};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use status::{Status, StatusKind, render_status};
pub use tables::{TableSpec, render_table};
