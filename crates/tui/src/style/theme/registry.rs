use std::collections::HashMap;
use std::sync::OnceLock;

use super::builtins::{BuiltinThemes, builtin_themes};
use super::types::{Theme, ThemeDescriptor};

/// Name and alias index over the built-in themes.
struct ThemeRegistry {
	themes: &'static BuiltinThemes,
	lookup: HashMap<String, usize>,
}

impl ThemeRegistry {
	fn new(themes: &'static BuiltinThemes) -> Self {
		let mut lookup = HashMap::new();
		for (index, registration) in themes.registrations.iter().enumerate() {
			lookup.insert(normalize_name(&registration.name), index);
			for alias in &registration.aliases {
				lookup.entry(normalize_name(alias)).or_insert(index);
			}
		}
		Self { themes, lookup }
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let index = *self.lookup.get(&normalize_name(name))?;
		self.themes
			.registrations
			.get(index)
			.map(|registration| registration.theme)
	}
}

fn registry() -> &'static ThemeRegistry {
	static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
	REGISTRY.get_or_init(|| ThemeRegistry::new(builtin_themes()))
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	descriptors()
		.into_iter()
		.map(|descriptor| descriptor.name)
		.collect()
}

/// Every built-in theme with its aliases, sorted by name.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	let themes = registry().themes;
	let mut descriptors: Vec<ThemeDescriptor> = themes
		.registrations
		.iter()
		.map(|registration| ThemeDescriptor {
			name: registration.name.clone(),
			aliases: registration.aliases.clone(),
			is_default: registration.name == themes.default_name,
		})
		.collect();
	descriptors.sort_unstable_by_key(|descriptor| descriptor.name.to_ascii_lowercase());
	descriptors
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::default_theme;

	#[test]
	fn builtin_themes_are_registered() {
		let names = names();
		assert!(names.iter().any(|name| name == "spring"));
		assert!(by_name("spring").is_some());
	}

	#[test]
	fn lookup_ignores_case_and_separators() {
		assert!(by_name("Solarized Dark").is_some());
		assert!(by_name("solarized_dark").is_some());
		assert!(by_name("SOLARIZED-DARK").is_some());
	}

	#[test]
	fn aliases_resolve_to_their_theme() {
		assert_eq!(by_name("default"), by_name("spring"));
		assert_eq!(by_name("mono"), by_name("monochrome"));
	}

	#[test]
	fn unknown_names_are_none() {
		assert!(by_name("not-a-theme").is_none());
	}

	#[test]
	fn exactly_one_default_is_listed() {
		let defaults: Vec<_> = descriptors()
			.into_iter()
			.filter(|descriptor| descriptor.is_default)
			.collect();
		assert_eq!(defaults.len(), 1);
		assert_eq!(by_name(&defaults[0].name), Some(default_theme()));
	}

	#[test]
	fn names_are_sorted_case_insensitively() {
		let sorted = names();
		let mut manual = sorted.clone();
		manual.sort_unstable_by_key(|a| a.to_ascii_lowercase());
		assert_eq!(sorted, manual);
	}
}
