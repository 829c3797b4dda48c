mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

/// Look up a built-in theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	builtin_themes()
		.into_iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

/// Names of the built-in themes, in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtin_themes()
		.iter()
		.map(|registration| registration.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn aliases_resolve_case_insensitively() {
		assert_eq!(by_name("LIGHT"), by_name("paper"));
		assert_eq!(by_name(" default "), Some(default_theme()));
		assert!(by_name("neon").is_none());
	}

	#[test]
	fn names_are_unique() {
		let mut names = names();
		let total = names.len();
		names.dedup();
		assert_eq!(names.len(), total);
	}
}
