//! Interactive terminal browser for `prompt-partner`.
//!
//! The crate draws a [`prompt_partner_core::Session`] with ratatui: a query
//! row, the filtered prompt list, the composed master prompt and a status
//! line. All state changes go through the session; this crate only owns the
//! cursor, the query editor and presentation.

mod actions;
mod app;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
pub mod style;


pub use app::{App, AppOutcome};
pub use config::UiLabels;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{Theme, builtin_themes, by_name as theme_by_name, default_theme};
