//! Modal message box drawn over the form.

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::components::text::wrap_words;
use crate::keys::{KeyBinding, KeyChord, KeyHelp};
use crate::style::Theme;

const ESC: &[KeyChord] = &[KeyChord::plain(KeyCode::Esc)];
const DISMISS: KeyBinding = KeyBinding::new(ESC, "esc", "dismiss");

/// Horizontal room kept between the box and the edges of the area.
const SIDE_MARGIN: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Info,
	Warning,
	Error,
}

impl Level {
	fn title(self) -> &'static str {
		match self {
			Self::Info => " Info ",
			Self::Warning => " Warning ",
			Self::Error => " Error ",
		}
	}

	fn style(self, theme: &Theme) -> Style {
		match self {
			Self::Info => theme.info,
			Self::Warning => theme.warning,
			Self::Error => theme.error,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub level: Level,
	pub message: String,
}

impl Notification {
	pub fn new(level: Level, message: impl Into<String>) -> Self {
		Self {
			level,
			message: message.into(),
		}
	}

	pub fn info(message: impl Into<String>) -> Self {
		Self::new(Level::Info, message)
	}

	pub fn warning(message: impl Into<String>) -> Self {
		Self::new(Level::Warning, message)
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self::new(Level::Error, message)
	}

	/// Whether `key` closes the notification.
	#[must_use]
	pub fn dismisses(&self, key: &KeyEvent) -> bool {
		DISMISS.matches(key)
	}

	/// Box covering the wrapped message, centred in `area`.
	fn popup_area(&self, area: Rect) -> (Rect, Vec<String>) {
		let max_inner = area.width.saturating_sub(SIDE_MARGIN * 2 + 2).max(1);
		let natural = self
			.message
			.lines()
			.map(UnicodeWidthStr::width)
			.max()
			.unwrap_or(0)
			.max(self.level.title().width());
		let inner_width = (natural as u16).clamp(1, max_inner);
		let lines = wrap_words(&self.message, usize::from(inner_width));

		let width = (inner_width + 2).min(area.width);
		let height = (lines.len() as u16 + 2).min(area.height);
		let popup = Rect::new(
			area.x + area.width.saturating_sub(width) / 2,
			area.y + area.height.saturating_sub(height) / 2,
			width,
			height,
		);
		(popup, lines)
	}

	pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
		if area.is_empty() {
			return;
		}

		let (popup, lines) = self.popup_area(area);
		let style = self.level.style(theme);
		let block = Block::bordered()
			.border_style(style)
			.title(Line::styled(self.level.title(), style));

		Clear.render(popup, buf);
		Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
			.block(block)
			.render(popup, buf);
	}
}

impl KeyHelp for Notification {
	fn short_help(&self) -> Vec<KeyBinding> {
		vec![DISMISS]
	}

	fn full_help(&self) -> Vec<Vec<KeyBinding>> {
		vec![vec![DISMISS]]
	}
}
