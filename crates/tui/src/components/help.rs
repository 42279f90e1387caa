//! One-line or multi-column key help shown under the form.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::keys::KeyBinding;
use crate::style::Theme;

const SHORT_SEPARATOR: &str = " • ";
const COLUMN_SEPARATOR: &str = "    ";
const ELLIPSIS: &str = "…";

#[derive(Debug, Default)]
pub struct HelpBar {
	show_all: bool,
	theme: Theme,
}

impl HelpBar {
	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn toggle(&mut self) {
		self.show_all = !self.show_all;
	}

	#[must_use]
	pub fn is_full(&self) -> bool {
		self.show_all
	}

	/// Rows needed to draw `full` in the current mode.
	#[must_use]
	pub fn height(&self, full: &[Vec<KeyBinding>]) -> u16 {
		if self.show_all {
			full.iter().map(Vec::len).max().unwrap_or(0).max(1) as u16
		} else {
			1
		}
	}

	pub fn render(
		&self,
		area: Rect,
		buf: &mut Buffer,
		short: &[KeyBinding],
		full: &[Vec<KeyBinding>],
	) {
		if area.is_empty() {
			return;
		}
		if self.show_all {
			self.render_full(area, buf, full);
		} else {
			let line = self.short_line(short, usize::from(area.width));
			buf.set_line(area.x, area.y, &line, area.width);
		}
	}

	fn binding_spans(&self, binding: &KeyBinding) -> [Span<'static>; 2] {
		[
			Span::styled(binding.help_key, self.theme.title),
			Span::styled(format!(" {}", binding.help_desc), self.theme.muted),
		]
	}

	/// Bindings joined on one line, cut with an ellipsis where the next one
	/// would overflow.
	fn short_line(&self, bindings: &[KeyBinding], width: usize) -> Line<'static> {
		let mut spans = Vec::new();
		let mut used = 0;
		for (index, binding) in bindings.iter().enumerate() {
			let separator = if index == 0 { "" } else { SHORT_SEPARATOR };
			let item_width = separator.width() + binding.help_key.width() + 1 + binding.help_desc.width();
			if used + item_width > width {
				if used + ELLIPSIS.width() + 1 <= width {
					spans.push(Span::styled(format!(" {ELLIPSIS}"), self.theme.muted));
				}
				break;
			}
			if !separator.is_empty() {
				spans.push(Span::styled(separator, self.theme.muted));
			}
			spans.extend(self.binding_spans(binding));
			used += item_width;
		}
		Line::from(spans)
	}

	fn render_full(&self, area: Rect, buf: &mut Buffer, groups: &[Vec<KeyBinding>]) {
		let mut x = area.x;
		for group in groups.iter().filter(|group| !group.is_empty()) {
			let key_width = group.iter().map(|b| b.help_key.width()).max().unwrap_or(0);
			let desc_width = group.iter().map(|b| b.help_desc.width()).max().unwrap_or(0);
			let column_width = (key_width + 1 + desc_width) as u16;
			if x + column_width > area.right() {
				break;
			}

			for (row, binding) in group.iter().enumerate().take(usize::from(area.height)) {
				let padded_key = format!("{:<key_width$}", binding.help_key);
				let line = Line::from(vec![
					Span::styled(padded_key, self.theme.title),
					Span::styled(format!(" {}", binding.help_desc), self.theme.muted),
				]);
				buf.set_line(x, area.y + row as u16, &line, column_width);
			}
			x += column_width + COLUMN_SEPARATOR.width() as u16;
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyCode;

	use super::*;
	use crate::keys::KeyChord;

	const TAB: &[KeyChord] = &[KeyChord::plain(KeyCode::Tab)];
	const HELP: &[KeyChord] = &[KeyChord::plain(KeyCode::Char('?'))];
	const QUIT: &[KeyChord] = &[KeyChord::ctrl(KeyCode::Char('q'))];

	fn bindings() -> Vec<KeyBinding> {
		vec![
			KeyBinding::new(TAB, "tab", "next"),
			KeyBinding::new(HELP, "?", "help"),
			KeyBinding::new(QUIT, "ctrl+q", "quit"),
		]
	}

	fn rendered(help: &HelpBar, width: u16, height: u16) -> Vec<String> {
		let short = bindings();
		let full = vec![short[..2].to_vec(), short[2..].to_vec()];
		let area = Rect::new(0, 0, width, height);
		let mut buf = Buffer::empty(area);
		help.render(area, &mut buf, &short, &full);
		(0..height)
			.map(|y| {
				(0..width)
					.map(|x| buf[(x, y)].symbol())
					.collect::<String>()
					.trim_end()
					.to_string()
			})
			.collect()
	}

	#[test]
	fn short_help_joins_bindings() {
		let help = HelpBar::default();
		assert_eq!(rendered(&help, 40, 1), ["tab next • ? help • ctrl+q quit"]);
	}

	#[test]
	fn short_help_ellipsizes_when_narrow() {
		let help = HelpBar::default();
		assert_eq!(rendered(&help, 20, 1), ["tab next • ? help …"]);
	}

	#[test]
	fn full_help_draws_columns() {
		let mut help = HelpBar::default();
		help.toggle();
		let full = vec![bindings()[..2].to_vec(), bindings()[2..].to_vec()];
		assert_eq!(help.height(&full), 2);
		assert_eq!(
			rendered(&help, 40, 2),
			["tab next    ctrl+q quit", "?   help"]
		);
	}
}
