//! The generate actions: plain download, or download and extract.

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::keys::{KeyBinding, KeyChord, KeyHelp};
use crate::service::GenerateMode;
use crate::style::Theme;

const LEFT: &[KeyChord] = &[KeyChord::plain(KeyCode::Left), KeyChord::plain(KeyCode::Char('h'))];
const RIGHT: &[KeyChord] = &[KeyChord::plain(KeyCode::Right), KeyChord::plain(KeyCode::Char('l'))];
const ENTER: &[KeyChord] = &[KeyChord::plain(KeyCode::Enter)];

const NEXT: KeyBinding = KeyBinding::new(RIGHT, "→/l", "next");
const PREV: KeyBinding = KeyBinding::new(LEFT, "←/h", "previous");
const SUBMIT: KeyBinding = KeyBinding::new(ENTER, "enter", "submit");

const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 1;
const RUNNING_LABEL: &str = "Downloading...";

/// What a key press did to the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
	Ignored,
	Moved,
	/// The focused button fired; the bar is now busy until [`ButtonBar::finish`].
	Pressed(GenerateMode),
}

pub struct ButtonBar {
	buttons: Vec<GenerateMode>,
	cursor: usize,
	running: bool,
	theme: Theme,
}

impl Default for ButtonBar {
	fn default() -> Self {
		Self::new()
	}
}

impl ButtonBar {
	pub fn new() -> Self {
		Self {
			buttons: vec![GenerateMode::Download, GenerateMode::DownloadAndExtract],
			cursor: 0,
			running: false,
			theme: Theme::default(),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	#[must_use]
	pub fn is_running(&self) -> bool {
		self.running
	}

	#[must_use]
	pub fn focused(&self) -> GenerateMode {
		self.buttons[self.cursor]
	}

	/// Mark the running action as done so the bar accepts input again.
	pub fn finish(&mut self) {
		self.running = false;
	}

	pub fn handle_key(&mut self, key: KeyEvent) -> ButtonEvent {
		if self.running {
			return ButtonEvent::Ignored;
		}

		if NEXT.matches(&key) {
			if self.cursor + 1 < self.buttons.len() {
				self.cursor += 1;
			}
			ButtonEvent::Moved
		} else if PREV.matches(&key) {
			self.cursor = self.cursor.saturating_sub(1);
			ButtonEvent::Moved
		} else if SUBMIT.matches(&key) {
			self.running = true;
			ButtonEvent::Pressed(self.focused())
		} else {
			ButtonEvent::Ignored
		}
	}

	/// Draw the buttons, or the progress line while an action runs.
	pub fn render(&self, area: Rect, buf: &mut Buffer, throbber_state: &ThrobberState) {
		if area.is_empty() {
			return;
		}

		if self.running {
			let spinner = Throbber::default()
				.style(self.theme.muted)
				.throbber_style(self.theme.title);
			let line = Line::from(vec![
				spinner.to_symbol_span(throbber_state),
				Span::styled(RUNNING_LABEL, self.theme.muted),
			])
			.alignment(Alignment::Center);
			let y = area.y + area.height.saturating_sub(1) / 2;
			line.render(Rect::new(area.x, y, area.width, 1), buf);
			return;
		}

		let height = BUTTON_HEIGHT.min(area.height);
		let y = area.y + area.height.saturating_sub(height) / 2;
		let mut x = area.x + BUTTON_GAP;
		for (index, mode) in self.buttons.iter().enumerate() {
			let label = mode.to_string();
			let width = label.width() as u16 + 4;
			if x + width > area.right() {
				break;
			}

			let style = if index == self.cursor {
				self.theme.highlight
			} else {
				self.theme.border
			};
			let block = Block::bordered().border_style(style);
			Paragraph::new(label)
				.style(if index == self.cursor {
					self.theme.highlight
				} else {
					ratatui::style::Style::new()
				})
				.alignment(Alignment::Center)
				.block(block)
				.render(Rect::new(x, y, width, height), buf);
			x += width + BUTTON_GAP * 2;
		}
	}
}

impl KeyHelp for ButtonBar {
	fn short_help(&self) -> Vec<KeyBinding> {
		Vec::new()
	}

	fn full_help(&self) -> Vec<Vec<KeyBinding>> {
		vec![vec![NEXT, PREV], vec![SUBMIT]]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rendered(bar: &ButtonBar, width: u16, height: u16) -> String {
		let area = Rect::new(0, 0, width, height);
		let mut buf = Buffer::empty(area);
		bar.render(area, &mut buf, &ThrobberState::default());
		(0..height)
			.map(|y| {
				(0..width)
					.map(|x| buf[(x, y)].symbol())
					.collect::<String>()
					.trim_end()
					.to_string()
			})
			.collect::<Vec<_>>()
			.join("\n")
	}

	#[test]
	fn enter_fires_the_focused_button_once() {
		let mut bar = ButtonBar::new();
		bar.handle_key(KeyEvent::from(KeyCode::Right));
		assert_eq!(
			bar.handle_key(KeyEvent::from(KeyCode::Enter)),
			ButtonEvent::Pressed(GenerateMode::DownloadAndExtract)
		);
		assert!(bar.is_running());
		assert_eq!(
			bar.handle_key(KeyEvent::from(KeyCode::Enter)),
			ButtonEvent::Ignored
		);

		bar.finish();
		assert_eq!(
			bar.handle_key(KeyEvent::from(KeyCode::Char('h'))),
			ButtonEvent::Moved
		);
		assert_eq!(bar.focused(), GenerateMode::Download);
	}

	#[test]
	fn cursor_is_clamped() {
		let mut bar = ButtonBar::new();
		bar.handle_key(KeyEvent::from(KeyCode::Left));
		assert_eq!(bar.focused(), GenerateMode::Download);
		bar.handle_key(KeyEvent::from(KeyCode::Right));
		bar.handle_key(KeyEvent::from(KeyCode::Right));
		assert_eq!(bar.focused(), GenerateMode::DownloadAndExtract);
	}

	#[test]
	fn idle_bar_shows_both_labels() {
		let text = rendered(&ButtonBar::new(), 60, 5);
		assert!(text.contains("Download"));
		assert!(text.contains("Download and Extract"));
	}

	#[test]
	fn running_bar_shows_progress() {
		let mut bar = ButtonBar::new();
		bar.handle_key(KeyEvent::from(KeyCode::Enter));
		let text = rendered(&bar, 60, 5);
		assert!(text.contains(RUNNING_LABEL));
		assert!(!text.contains("Extract"));
	}
}
