use ratatui::style::{Modifier, Style};

/// Styles for every themed element of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Borders of unfocused sections.
	pub border: Style,
	/// Border of the focused section.
	pub border_active: Style,
	/// Section titles, prompts and the active page dot.
	pub title: Style,
	/// The row or button under the cursor.
	pub highlight: Style,
	/// Checked markers and chosen radio options.
	pub selected: Style,
	/// Placeholders, inactive dots and help text.
	pub muted: Style,
	pub info: Style,
	pub warning: Style,
	pub error: Style,
}

impl Theme {
	/// Border style for a section, depending on focus.
	#[must_use]
	pub fn border_for(&self, focused: bool) -> Style {
		if focused {
			self.border_active
		} else {
			self.border
		}
	}

	/// Title style for a section, bold when focused.
	#[must_use]
	pub fn title_for(&self, focused: bool) -> Style {
		if focused {
			self.title.add_modifier(Modifier::BOLD)
		} else {
			self.title
		}
	}
}

/// A named theme with its aliases.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}

/// Snapshot of a registered theme, for listings.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	pub name: String,
	pub aliases: Vec<String>,
	pub is_default: bool,
}
