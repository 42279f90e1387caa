//! Free-text project metadata: group, artifact, name, description, package.

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::input::QueryInput;
use crate::keys::{KeyBinding, KeyChord, KeyHelp};
use crate::service::{FieldValue, TextDefaults};
use crate::style::Theme;

const UP: &[KeyChord] = &[KeyChord::plain(KeyCode::Up), KeyChord::plain(KeyCode::Char('k'))];
const DOWN: &[KeyChord] = &[KeyChord::plain(KeyCode::Down), KeyChord::plain(KeyCode::Char('j'))];
const ENTER: &[KeyChord] = &[KeyChord::plain(KeyCode::Enter)];
const CLEAR: &[KeyChord] = &[KeyChord::ctrl(KeyCode::Char('l'))];
const ESC: &[KeyChord] = &[KeyChord::plain(KeyCode::Esc)];

const PREV_FIELD: KeyBinding = KeyBinding::new(UP, "↑/k", "previous");
const NEXT_FIELD: KeyBinding = KeyBinding::new(DOWN, "↓/j", "next");
const EDIT_FIELD: KeyBinding = KeyBinding::new(ENTER, "enter", "edit");
const CLEAR_FIELD: KeyBinding = KeyBinding::new(CLEAR, "ctrl+l", "clear");
const SUBMIT_FIELD: KeyBinding = KeyBinding::new(ENTER, "enter", "submit");
const CANCEL_FIELD: KeyBinding = KeyBinding::new(ESC, "esc", "cancel");

const GROUP: usize = 0;
const ARTIFACT: usize = 1;
const NAME: usize = 2;
const PACKAGE: usize = 4;

/// A field whose value is rebuilt from other fields when they change.
struct Derivation {
	sources: &'static [usize],
	separator: char,
}

struct MetadataField {
	label: &'static str,
	id: &'static str,
	default: String,
	committed: String,
	input: QueryInput<'static>,
	/// Fields to rebuild after this one is edited.
	updates: &'static [usize],
	derived_from: Option<Derivation>,
}

impl MetadataField {
	fn new(label: &'static str, id: &'static str, default: &str) -> Self {
		Self {
			label,
			id,
			default: default.to_string(),
			committed: String::new(),
			input: QueryInput::default(),
			updates: &[],
			derived_from: None,
		}
	}

	fn updates(mut self, updates: &'static [usize]) -> Self {
		self.updates = updates;
		self
	}

	fn derived_from(mut self, separator: char, sources: &'static [usize]) -> Self {
		self.derived_from = Some(Derivation { sources, separator });
		self
	}

	/// Text currently in the editor, or the default when empty.
	fn live_value(&self) -> &str {
		match self.input.text() {
			"" => &self.default,
			text => text,
		}
	}

	/// Last submitted value, or the default when empty.
	fn value(&self) -> &str {
		if self.committed.is_empty() {
			&self.default
		} else {
			&self.committed
		}
	}
}

/// The metadata form section.
pub struct MetadataFields {
	fields: Vec<MetadataField>,
	cursor: usize,
	editing: bool,
	theme: Theme,
}

impl MetadataFields {
	pub fn new(defaults: &TextDefaults) -> Self {
		let fields = vec![
			MetadataField::new("Group", "groupId", &defaults.group_id).updates(&[PACKAGE]),
			MetadataField::new("Artifact", "artifactId", &defaults.artifact_id)
				.updates(&[PACKAGE, NAME]),
			MetadataField::new("Name", "name", &defaults.name).derived_from(' ', &[ARTIFACT]),
			MetadataField::new("Description", "description", &defaults.description),
			MetadataField::new("Package Name", "packageName", &defaults.package_name)
				.derived_from('.', &[GROUP, ARTIFACT]),
		];
		Self {
			fields,
			cursor: 0,
			editing: false,
			theme: Theme::default(),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	#[must_use]
	pub fn is_editing(&self) -> bool {
		self.editing
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Submitted values with defaults filled in, in form order.
	#[must_use]
	pub fn values(&self) -> Vec<FieldValue> {
		self.fields
			.iter()
			.map(|field| FieldValue {
				id: field.id.to_string(),
				value: field.value().to_string(),
			})
			.collect()
	}

	/// Value for one request parameter, e.g. `artifactId`.
	#[must_use]
	pub fn value_of(&self, id: &str) -> Option<&str> {
		self.fields
			.iter()
			.find(|field| field.id == id)
			.map(MetadataField::value)
	}

	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if self.editing {
			self.handle_edit_key(key);
			return true;
		}

		if PREV_FIELD.matches(&key) {
			self.cursor = self.cursor.saturating_sub(1);
		} else if NEXT_FIELD.matches(&key) {
			if self.cursor + 1 < self.fields.len() {
				self.cursor += 1;
			}
		} else if CLEAR_FIELD.matches(&key) {
			let field = &mut self.fields[self.cursor];
			field.input.reset();
			field.committed.clear();
		} else if EDIT_FIELD.matches(&key) {
			self.editing = true;
			self.fields[self.cursor].input.focus();
		} else {
			return false;
		}
		true
	}

	fn handle_edit_key(&mut self, key: KeyEvent) {
		let cursor = self.cursor;
		if SUBMIT_FIELD.matches(&key) {
			let field = &mut self.fields[cursor];
			field.committed = field.input.text().to_string();
			field.input.blur();
			self.editing = false;
			log::debug!("metadata field {} set to {:?}", field.id, field.committed);
			return;
		}

		if CANCEL_FIELD.matches(&key) {
			let field = &mut self.fields[cursor];
			field.input.set_text(field.committed.clone());
			field.input.blur();
			self.editing = false;
			return;
		}

		if self.fields[cursor].input.input(key) {
			let updates = self.fields[cursor].updates;
			for &target in updates {
				self.rebuild(target);
			}
		}
	}

	fn rebuild(&mut self, target: usize) {
		let Some(derivation) = self
			.fields
			.get(target)
			.and_then(|field| field.derived_from.as_ref())
		else {
			return;
		};
		let parts: Vec<&str> = derivation
			.sources
			.iter()
			.filter_map(|&source| self.fields.get(source))
			.map(MetadataField::live_value)
			.collect();
		let value = parts.join(&derivation.separator.to_string());

		let field = &mut self.fields[target];
		field.input.set_text(value.clone());
		field.committed = value;
	}
}

impl Widget for &MetadataFields {
	fn render(self, area: Rect, buf: &mut Buffer) {
		for (row, field) in self.fields.iter().enumerate().take(usize::from(area.height)) {
			let is_cursor = row == self.cursor;
			let prompt_style = if is_cursor {
				self.theme.title_for(true)
			} else {
				self.theme.title
			};
			let prompt = format!("{}: ", field.label);
			let mut line = field
				.input
				.line(&prompt, &field.default, prompt_style, self.theme.muted);
			if is_cursor && !self.editing {
				line = line.patch_style(self.theme.highlight);
			}
			buf.set_line(area.x, area.y + row as u16, &line, area.width);
		}
	}
}

impl KeyHelp for MetadataFields {
	fn short_help(&self) -> Vec<KeyBinding> {
		Vec::new()
	}

	fn full_help(&self) -> Vec<Vec<KeyBinding>> {
		if self.editing {
			vec![vec![SUBMIT_FIELD, CANCEL_FIELD]]
		} else {
			vec![vec![PREV_FIELD, NEXT_FIELD], vec![EDIT_FIELD, CLEAR_FIELD]]
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;

	fn defaults() -> TextDefaults {
		TextDefaults {
			group_id: "com.example".into(),
			artifact_id: "demo".into(),
			name: "demo".into(),
			description: "Demo project for Spring Boot".into(),
			package_name: "com.example.demo".into(),
		}
	}

	fn press(fields: &mut MetadataFields, code: KeyCode) {
		fields.handle_key(KeyEvent::from(code));
	}

	fn type_text(fields: &mut MetadataFields, text: &str) {
		for ch in text.chars() {
			press(fields, KeyCode::Char(ch));
		}
	}

	#[test]
	fn untouched_fields_report_defaults() {
		let fields = MetadataFields::new(&defaults());
		let values = fields.values();
		let ids: Vec<&str> = values.iter().map(|v| v.id.as_str()).collect();
		assert_eq!(
			ids,
			["groupId", "artifactId", "name", "description", "packageName"]
		);
		assert_eq!(fields.value_of("packageName"), Some("com.example.demo"));
	}

	#[test]
	fn editing_artifact_rebuilds_name_and_package() {
		let mut fields = MetadataFields::new(&defaults());
		press(&mut fields, KeyCode::Down);
		press(&mut fields, KeyCode::Enter);
		assert!(fields.is_editing());
		type_text(&mut fields, "shop");
		press(&mut fields, KeyCode::Enter);

		assert!(!fields.is_editing());
		assert_eq!(fields.value_of("artifactId"), Some("shop"));
		assert_eq!(fields.value_of("name"), Some("shop"));
		assert_eq!(fields.value_of("packageName"), Some("com.example.shop"));
	}

	#[test]
	fn editing_group_rebuilds_package_only() {
		let mut fields = MetadataFields::new(&defaults());
		press(&mut fields, KeyCode::Enter);
		type_text(&mut fields, "org.acme");
		press(&mut fields, KeyCode::Enter);

		assert_eq!(fields.value_of("groupId"), Some("org.acme"));
		assert_eq!(fields.value_of("packageName"), Some("org.acme.demo"));
		assert_eq!(fields.value_of("name"), Some("demo"));
	}

	#[test]
	fn cancel_restores_the_submitted_value() {
		let mut fields = MetadataFields::new(&defaults());
		press(&mut fields, KeyCode::Down);
		press(&mut fields, KeyCode::Down);
		press(&mut fields, KeyCode::Down);
		press(&mut fields, KeyCode::Enter);
		type_text(&mut fields, "draft");
		press(&mut fields, KeyCode::Esc);

		assert!(!fields.is_editing());
		assert_eq!(
			fields.value_of("description"),
			Some("Demo project for Spring Boot")
		);
	}

	#[test]
	fn clear_falls_back_to_the_default() {
		let mut fields = MetadataFields::new(&defaults());
		press(&mut fields, KeyCode::Enter);
		type_text(&mut fields, "io.x");
		press(&mut fields, KeyCode::Enter);
		fields.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
		assert_eq!(fields.value_of("groupId"), Some("com.example"));
	}

	#[test]
	fn navigation_keys_type_while_editing() {
		let mut fields = MetadataFields::new(&defaults());
		press(&mut fields, KeyCode::Enter);
		type_text(&mut fields, "jk");
		press(&mut fields, KeyCode::Enter);
		assert_eq!(fields.cursor(), 0);
		assert_eq!(fields.value_of("groupId"), Some("jk"));
	}

	#[test]
	fn help_switches_while_editing() {
		let mut fields = MetadataFields::new(&defaults());
		assert_eq!(fields.full_help().len(), 2);
		press(&mut fields, KeyCode::Enter);
		assert_eq!(fields.full_help(), vec![vec![SUBMIT_FIELD, CANCEL_FIELD]]);
	}
}
