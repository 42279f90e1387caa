//! The loaded form: one widget per section.

use ratatui::crossterm::event::KeyEvent;

use super::Section;
use crate::components::{
	ButtonBar, ButtonEvent, DependencySelector, MetadataFields, Orientation, RadioList,
};
use crate::keys::KeyHelp;
use crate::service::{ProjectRequest, ServiceMetadata};
use crate::style::Theme;

/// Used when the selected project type does not name a generation path.
const DEFAULT_ACTION: &str = "/starter.zip";

pub(crate) struct Form {
	pub(crate) project: RadioList,
	pub(crate) language: RadioList,
	pub(crate) packaging: RadioList,
	pub(crate) java: RadioList,
	pub(crate) boot: RadioList,
	pub(crate) fields: MetadataFields,
	pub(crate) dependencies: DependencySelector,
	pub(crate) buttons: ButtonBar,
}

impl Form {
	pub(crate) fn new(metadata: &ServiceMetadata, theme: Theme) -> Self {
		let mut form = Self {
			project: RadioList::new(&metadata.project_types, Orientation::Vertical),
			language: RadioList::new(&metadata.languages, Orientation::Vertical),
			packaging: RadioList::new(&metadata.packaging, Orientation::Horizontal),
			java: RadioList::new(&metadata.java_versions, Orientation::Vertical),
			boot: RadioList::new(&metadata.boot_versions, Orientation::Vertical),
			fields: MetadataFields::new(&metadata.text),
			dependencies: DependencySelector::new(metadata.dependencies.clone()),
			buttons: ButtonBar::new(),
		};
		form.set_theme(theme);
		form
	}

	pub(crate) fn set_theme(&mut self, theme: Theme) {
		for list in [
			&mut self.project,
			&mut self.language,
			&mut self.packaging,
			&mut self.java,
			&mut self.boot,
		] {
			list.set_theme(theme);
		}
		self.fields.set_theme(theme);
		self.dependencies.set_theme(theme);
		self.buttons.set_theme(theme);
	}

	/// Whether the section's widget is taking text input.
	pub(crate) fn captures_input(&self, section: Section) -> bool {
		match section {
			Section::Metadata => self.fields.is_editing(),
			Section::Dependencies => self.dependencies.captures_input(),
			_ => false,
		}
	}

	/// Forward a key to the section's widget. A pressed button is returned so
	/// the caller can start the generation.
	pub(crate) fn handle_key(&mut self, section: Section, key: KeyEvent) -> Option<ButtonEvent> {
		match section {
			Section::Project => self.project.handle_key(key),
			Section::Language => self.language.handle_key(key),
			Section::Packaging => self.packaging.handle_key(key),
			Section::Java => self.java.handle_key(key),
			Section::SpringBoot => self.boot.handle_key(key),
			Section::Metadata => self.fields.handle_key(key),
			Section::Dependencies => self.dependencies.handle_key(key),
			Section::Generate => return Some(self.buttons.handle_key(key)),
		};
		None
	}

	pub(crate) fn help_for(&self, section: Section) -> &dyn KeyHelp {
		match section {
			Section::Project => &self.project,
			Section::Language => &self.language,
			Section::Packaging => &self.packaging,
			Section::Java => &self.java,
			Section::SpringBoot => &self.boot,
			Section::Metadata => &self.fields,
			Section::Dependencies => &self.dependencies,
			Section::Generate => &self.buttons,
		}
	}

	/// Snapshot the current choices as a generation request.
	pub(crate) fn request(&self) -> ProjectRequest {
		let chosen = |list: &RadioList| {
			list.selected()
				.map(|choice| choice.id.clone())
				.unwrap_or_default()
		};
		let action = self
			.project
			.selected()
			.and_then(|choice| choice.action.clone())
			.unwrap_or_else(|| DEFAULT_ACTION.to_string());

		ProjectRequest {
			action,
			project_type: chosen(&self.project),
			language: chosen(&self.language),
			boot_version: chosen(&self.boot),
			packaging: chosen(&self.packaging),
			java_version: chosen(&self.java),
			fields: self.fields.values(),
			dependencies: self.dependencies.selected_ids(),
		}
	}
}
