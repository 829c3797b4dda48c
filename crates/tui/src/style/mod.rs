//! Visual styling utilities.
//!
//! Themes are plain colour schemes; every widget looks its styles up on the
//! active [`Theme`] instead of hard-coding colours.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};
