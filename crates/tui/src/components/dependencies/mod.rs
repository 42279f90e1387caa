//! Filterable, paginated multi-select list of service dependencies.
//!
//! The selector owns the catalog, the filter text and the derived filtered
//! view, the cursor and page, and the set of selected ids. Input arrives one
//! key at a time through [`DependencySelector::handle_key`]; rendering is a
//! pure function of that state.

mod catalog;
mod keymap;
mod pagination;
mod render;


use std::collections::HashSet;

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

pub use catalog::{DependencyEntry, filter_entries, reorder_by_selection, sort_by_name};
pub use pagination::Paginator;

use keymap::{BROWSE_KEYS, FILTER_KEYS};

use crate::input::QueryInput;
use crate::keys::{KeyBinding, KeyHelp};
use crate::style::Theme;

/// Rows used below the list by the page indicator and the filter line.
const RESERVED_ROWS: u16 = 2;
const DEFAULT_WIDTH: u16 = 60;
const DEFAULT_HEIGHT: u16 = 12;

pub(crate) const FILTER_PROMPT: &str = "> ";
pub(crate) const FILTER_PLACEHOLDER: &str = "Type here to filter dependencies...";

/// Which key set is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorMode {
	/// Navigation and selection keys are live.
	#[default]
	Browse,
	/// Keys edit the filter text.
	FilterEdit,
}

/// The dependency picker widget.
pub struct DependencySelector {
	catalog: Vec<DependencyEntry>,
	filtered: Vec<DependencyEntry>,
	selected: HashSet<String>,
	filter_input: QueryInput<'static>,
	filter: String,
	paginator: Paginator,
	cursor: usize,
	mode: SelectorMode,
	width: u16,
	height: u16,
	theme: Theme,
}

impl DependencySelector {
	/// Build a selector over `entries`, sorted by name.
	pub fn new(entries: Vec<DependencyEntry>) -> Self {
		let catalog = sort_by_name(entries);
		let per_page = per_page_for(DEFAULT_HEIGHT);
		let paginator = Paginator::new(per_page, catalog.len());

		Self {
			filtered: catalog.clone(),
			catalog,
			selected: HashSet::new(),
			filter_input: QueryInput::default(),
			filter: String::new(),
			paginator,
			cursor: 0,
			mode: SelectorMode::Browse,
			width: DEFAULT_WIDTH,
			height: DEFAULT_HEIGHT,
			theme: Theme::default(),
		}
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	/// Set the render size. The list gets every row except the indicator and
	/// filter lines, and the page is re-derived from the cursor.
	pub fn resize(&mut self, width: u16, height: u16) {
		self.width = width;
		self.height = height;
		self.paginator
			.set_per_page(per_page_for(height), self.filtered.len());
		self.sync_page_to_cursor();
	}

	#[must_use]
	pub fn size(&self) -> (u16, u16) {
		(self.width, self.height)
	}

	/// Route a key press to the active mode. Returns `true` if it was used.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if key.kind != KeyEventKind::Press {
			return false;
		}
		match self.mode {
			SelectorMode::Browse => self.handle_browse_key(key),
			SelectorMode::FilterEdit => self.handle_filter_key(key),
		}
	}

	fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
		let keys = &BROWSE_KEYS;
		if keys.up.matches(&key) {
			self.move_up();
		} else if keys.down.matches(&key) {
			self.move_down();
		} else if keys.prev_page.matches(&key) {
			if self.paginator.prev_page() {
				self.cursor = self.paginator.page * self.paginator.per_page;
			}
		} else if keys.next_page.matches(&key) {
			if self.paginator.next_page() {
				self.cursor = self.paginator.page * self.paginator.per_page;
			}
		} else if keys.toggle.matches(&key) {
			self.toggle_current();
		} else if keys.filter.matches(&key) {
			self.mode = SelectorMode::FilterEdit;
			self.filter_input.focus();
			log::debug!("dependency filter opened");
		} else {
			return false;
		}
		true
	}

	fn handle_filter_key(&mut self, key: KeyEvent) -> bool {
		if FILTER_KEYS.submit.matches(&key) {
			self.mode = SelectorMode::Browse;
			self.filter_input.blur();
			log::debug!("dependency filter submitted: {:?}", self.filter);
			return true;
		}

		if FILTER_KEYS.cancel.matches(&key) {
			self.mode = SelectorMode::Browse;
			self.filter_input.reset();
			self.filter_input.blur();
			self.filter.clear();
			self.filtered = self.catalog.clone();
			self.cursor = 0;
			self.paginator.page = 0;
			self.paginator.set_total_pages(self.filtered.len());
			log::debug!("dependency filter cancelled");
			return true;
		}

		self.filter_input.input(key);
		if self.filter_input.text() != self.filter {
			self.filter = self.filter_input.text().to_string();
			self.apply_filter();
		}
		true
	}

	fn move_up(&mut self) {
		if self.cursor > 0 {
			self.cursor -= 1;
			self.paginator.page = self.paginator.page_of(self.cursor);
		}
	}

	fn move_down(&mut self) {
		if self.cursor + 1 < self.filtered.len() {
			self.cursor += 1;
			self.paginator.page = self.paginator.page_of(self.cursor);
		}
	}

	fn toggle_current(&mut self) {
		let Some(entry) = self.filtered.get(self.cursor) else {
			return;
		};
		let id = entry.id.clone();
		if !self.selected.remove(&id) {
			log::debug!("selected dependency {id}");
			self.selected.insert(id);
		} else {
			log::debug!("deselected dependency {id}");
		}

		self.catalog = reorder_by_selection(&self.catalog, &self.selected);
		if self.filter.is_empty() {
			self.filtered = self.catalog.clone();
		}
	}

	fn apply_filter(&mut self) {
		self.filtered = filter_entries(&self.catalog, &self.filter);
		self.paginator.page = 0;
		self.paginator.set_total_pages(self.filtered.len());
		self.cursor = 0;
	}

	fn sync_page_to_cursor(&mut self) {
		if self.filtered.is_empty() {
			self.cursor = 0;
			self.paginator.page = 0;
			return;
		}
		self.cursor = self.cursor.min(self.filtered.len() - 1);
		self.paginator.page = self.paginator.page_of(self.cursor);
	}

	/// Selected ids, in catalog order.
	#[must_use]
	pub fn selected_ids(&self) -> Vec<String> {
		self.catalog
			.iter()
			.filter(|entry| self.selected.contains(&entry.id))
			.map(|entry| entry.id.clone())
			.collect()
	}

	#[must_use]
	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.contains(id)
	}

	#[must_use]
	pub fn mode(&self) -> SelectorMode {
		self.mode
	}

	/// Whether the selector wants every key, including ones the caller binds.
	#[must_use]
	pub fn captures_input(&self) -> bool {
		self.mode == SelectorMode::FilterEdit
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	#[must_use]
	pub fn paginator(&self) -> Paginator {
		self.paginator
	}

	#[must_use]
	pub fn catalog(&self) -> &[DependencyEntry] {
		&self.catalog
	}

	#[must_use]
	pub fn filtered(&self) -> &[DependencyEntry] {
		&self.filtered
	}

	#[must_use]
	pub fn filter_text(&self) -> &str {
		&self.filter
	}

	/// Entry under the cursor, if any.
	#[must_use]
	pub fn current(&self) -> Option<&DependencyEntry> {
		self.filtered.get(self.cursor)
	}

	/// Render into a fresh buffer of the configured size.
	#[must_use]
	pub fn view(&self) -> Buffer {
		let area = Rect::new(0, 0, self.width, self.height);
		let mut buf = Buffer::empty(area);
		self.render(area, &mut buf);
		buf
	}
}

impl KeyHelp for DependencySelector {
	fn short_help(&self) -> Vec<KeyBinding> {
		match self.mode {
			SelectorMode::Browse => BROWSE_KEYS.short_help(),
			SelectorMode::FilterEdit => FILTER_KEYS.short_help(),
		}
	}

	fn full_help(&self) -> Vec<Vec<KeyBinding>> {
		match self.mode {
			SelectorMode::Browse => BROWSE_KEYS.full_help(),
			SelectorMode::FilterEdit => FILTER_KEYS.full_help(),
		}
	}
}

fn per_page_for(height: u16) -> usize {
	usize::from(height.saturating_sub(RESERVED_ROWS)).max(1)
}
