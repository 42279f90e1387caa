use ratatui::crossterm::event::KeyCode;

use crate::keys::{KeyBinding, KeyChord};

const TAB: &[KeyChord] = &[KeyChord::plain(KeyCode::Tab)];
const BACK_TAB: &[KeyChord] = &[
	KeyChord::plain(KeyCode::BackTab),
	KeyChord::shift(KeyCode::BackTab),
];
const QUESTION: &[KeyChord] = &[KeyChord::plain(KeyCode::Char('?'))];
const CTRL_Q: &[KeyChord] = &[KeyChord::ctrl(KeyCode::Char('q'))];

pub(crate) const NEXT_SECTION: KeyBinding = KeyBinding::new(TAB, "tab", "next section");
pub(crate) const PREV_SECTION: KeyBinding = KeyBinding::new(BACK_TAB, "shift+tab", "previous section");
pub(crate) const TOGGLE_HELP: KeyBinding = KeyBinding::new(QUESTION, "?", "toggle help");
pub(crate) const QUIT: KeyBinding = KeyBinding::new(CTRL_Q, "ctrl+q", "quit");

pub(crate) fn global_short_help() -> Vec<KeyBinding> {
	vec![NEXT_SECTION, TOGGLE_HELP, QUIT]
}

pub(crate) fn global_full_help() -> Vec<KeyBinding> {
	vec![NEXT_SECTION, PREV_SECTION, TOGGLE_HELP, QUIT]
}
