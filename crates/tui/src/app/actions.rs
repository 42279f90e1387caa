use ratatui::crossterm::event::KeyEvent;

use super::App;
use super::keymap::{NEXT_SECTION, PREV_SECTION, QUIT, TOGGLE_HELP};
use super::state::Phase;
use crate::components::ButtonEvent;

impl App {
	/// Route one key press. Sets [`App::should_quit`] when the user leaves.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) {
		if QUIT.matches(&key) {
			self.should_quit = true;
			return;
		}

		if matches!(self.phase, Phase::Failed) {
			self.should_quit = true;
			return;
		}

		if let Some(notification) = &self.notification {
			if notification.dismisses(&key) {
				self.notification = None;
			}
			return;
		}

		let focus = self.focus;
		let Some(form) = self.form_mut() else {
			return;
		};

		if form.captures_input(focus) {
			form.handle_key(focus, key);
			return;
		}

		if NEXT_SECTION.matches(&key) {
			self.focus = focus.next();
			log::debug!("focus moved to {:?}", self.focus);
		} else if PREV_SECTION.matches(&key) {
			self.focus = focus.prev();
			log::debug!("focus moved to {:?}", self.focus);
		} else if TOGGLE_HELP.matches(&key) {
			self.help.toggle();
		} else if let Some(ButtonEvent::Pressed(mode)) = form.handle_key(focus, key) {
			self.start_generate(mode);
		}
	}
}
