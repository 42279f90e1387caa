//! Key binding descriptors shared by every widget.
//!
//! Widgets declare their bindings as `const` tables so that input matching and
//! the help bar are driven by the same data.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A single physical key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
	pub code: KeyCode,
	pub modifiers: KeyModifiers,
}

impl KeyChord {
	#[must_use]
	pub const fn plain(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: KeyModifiers::NONE,
		}
	}

	#[must_use]
	pub const fn ctrl(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: KeyModifiers::CONTROL,
		}
	}

	#[must_use]
	pub const fn shift(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: KeyModifiers::SHIFT,
		}
	}

	fn matches(&self, key: &KeyEvent) -> bool {
		if self.code != key.code {
			return false;
		}
		match key.code {
			// Terminals disagree on whether shifted characters carry SHIFT.
			KeyCode::Char(_) => {
				self.modifiers.difference(KeyModifiers::SHIFT)
					== key.modifiers.difference(KeyModifiers::SHIFT)
			}
			_ => self.modifiers == key.modifiers,
		}
	}
}

/// A named action bound to one or more chords, with the text shown in help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
	pub chords: &'static [KeyChord],
	pub help_key: &'static str,
	pub help_desc: &'static str,
}

impl KeyBinding {
	#[must_use]
	pub const fn new(
		chords: &'static [KeyChord],
		help_key: &'static str,
		help_desc: &'static str,
	) -> Self {
		Self {
			chords,
			help_key,
			help_desc,
		}
	}

	/// Whether the key press triggers this binding. Release and repeat events
	/// never match.
	#[must_use]
	pub fn matches(&self, key: &KeyEvent) -> bool {
		key.kind == KeyEventKind::Press && self.chords.iter().any(|chord| chord.matches(key))
	}
}

/// Help content exposed by a widget: a short row and grouped full columns.
pub trait KeyHelp {
	fn short_help(&self) -> Vec<KeyBinding>;
	fn full_help(&self) -> Vec<Vec<KeyBinding>>;
}

#[cfg(test)]
mod tests {
	use super::*;

	const UP_CHORDS: &[KeyChord] = &[KeyChord::plain(KeyCode::Up), KeyChord::plain(KeyCode::Char('k'))];
	const UP: KeyBinding = KeyBinding::new(UP_CHORDS, "↑/k", "move up");
	const QUIT_CHORDS: &[KeyChord] = &[KeyChord::ctrl(KeyCode::Char('q'))];
	const HELP_CHORDS: &[KeyChord] = &[KeyChord::plain(KeyCode::Char('?'))];

	#[test]
	fn matches_any_listed_chord() {
		assert!(UP.matches(&KeyEvent::from(KeyCode::Up)));
		assert!(UP.matches(&KeyEvent::from(KeyCode::Char('k'))));
		assert!(!UP.matches(&KeyEvent::from(KeyCode::Char('j'))));
	}

	#[test]
	fn control_chords_require_the_modifier() {
		let quit = KeyBinding::new(QUIT_CHORDS, "ctrl+q", "quit");
		assert!(!quit.matches(&KeyEvent::from(KeyCode::Char('q'))));
		assert!(quit.matches(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)));
	}

	#[test]
	fn shifted_characters_match_plain_chords() {
		let help = KeyBinding::new(HELP_CHORDS, "?", "help");
		assert!(help.matches(&KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT)));
	}

	#[test]
	fn release_events_are_ignored() {
		let mut key = KeyEvent::from(KeyCode::Up);
		key.kind = KeyEventKind::Release;
		assert!(!UP.matches(&key));
	}
}
