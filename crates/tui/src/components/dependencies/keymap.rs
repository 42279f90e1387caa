use ratatui::crossterm::event::KeyCode;

use crate::keys::{KeyBinding, KeyChord};

const UP: &[KeyChord] = &[KeyChord::plain(KeyCode::Up), KeyChord::plain(KeyCode::Char('k'))];
const DOWN: &[KeyChord] = &[KeyChord::plain(KeyCode::Down), KeyChord::plain(KeyCode::Char('j'))];
const PREV_PAGE: &[KeyChord] = &[KeyChord::plain(KeyCode::Left), KeyChord::plain(KeyCode::Char('h'))];
const NEXT_PAGE: &[KeyChord] = &[KeyChord::plain(KeyCode::Right), KeyChord::plain(KeyCode::Char('l'))];
const TOGGLE: &[KeyChord] = &[KeyChord::plain(KeyCode::Enter), KeyChord::plain(KeyCode::Char(' '))];
const FILTER: &[KeyChord] = &[KeyChord::plain(KeyCode::Char('/'))];
const SUBMIT: &[KeyChord] = &[KeyChord::plain(KeyCode::Enter)];
const CANCEL: &[KeyChord] = &[KeyChord::plain(KeyCode::Esc), KeyChord::ctrl(KeyCode::Char('c'))];

/// Bindings active while browsing the list.
pub struct BrowseKeys {
	pub up: KeyBinding,
	pub down: KeyBinding,
	pub prev_page: KeyBinding,
	pub next_page: KeyBinding,
	pub toggle: KeyBinding,
	pub filter: KeyBinding,
}

pub const BROWSE_KEYS: BrowseKeys = BrowseKeys {
	up: KeyBinding::new(UP, "↑/k", "move up"),
	down: KeyBinding::new(DOWN, "↓/j", "move down"),
	prev_page: KeyBinding::new(PREV_PAGE, "←/h", "previous page"),
	next_page: KeyBinding::new(NEXT_PAGE, "→/l", "next page"),
	toggle: KeyBinding::new(TOGGLE, "enter/space", "toggle selection"),
	filter: KeyBinding::new(FILTER, "/", "filter"),
};

impl BrowseKeys {
	pub fn short_help(&self) -> Vec<KeyBinding> {
		vec![self.toggle, self.filter]
	}

	pub fn full_help(&self) -> Vec<Vec<KeyBinding>> {
		vec![
			vec![self.up, self.down],
			vec![self.prev_page, self.next_page],
			vec![self.toggle, self.filter],
		]
	}
}

/// Bindings active while editing the filter text.
pub struct FilterKeys {
	pub submit: KeyBinding,
	pub cancel: KeyBinding,
}

pub const FILTER_KEYS: FilterKeys = FilterKeys {
	submit: KeyBinding::new(SUBMIT, "enter", "submit"),
	cancel: KeyBinding::new(CANCEL, "esc", "cancel"),
};

impl FilterKeys {
	pub fn short_help(&self) -> Vec<KeyBinding> {
		vec![self.submit, self.cancel]
	}

	pub fn full_help(&self) -> Vec<Vec<KeyBinding>> {
		vec![self.short_help()]
	}
}
