//! Single-line text input built on `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use tui_textarea::TextArea;

/// A one-line editing buffer with focus tracking.
///
/// The textarea provides editing behaviour (word motions, deletion, undo); the
/// line is drawn by [`QueryInput::line`] so that prompt, placeholder and cursor
/// share the widget's styling.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	focused: bool,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let initial = initial.into();
		let mut textarea = TextArea::new(vec![initial]);
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self {
			textarea,
			focused: false,
		}
	}

	/// Current buffer contents.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	pub fn focus(&mut self) {
		self.focused = true;
	}

	pub fn blur(&mut self) {
		self.focused = false;
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let focused = self.focused;
		*self = Self::new(text);
		self.focused = focused;
	}

	/// Clear the buffer.
	pub fn reset(&mut self) {
		self.set_text(String::new());
	}

	/// Feed a key press to the buffer. Returns `true` when the text changed.
	///
	/// Keys that would break the single-line invariant are dropped.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Render the input as a styled line.
	///
	/// An unfocused empty buffer shows `placeholder`; a focused buffer shows a
	/// reversed cursor cell.
	#[must_use]
	pub fn line(
		&self,
		prompt: &str,
		placeholder: &str,
		prompt_style: Style,
		placeholder_style: Style,
	) -> Line<'static> {
		let mut spans = vec![Span::styled(prompt.to_string(), prompt_style)];
		let text = self.text();

		if !self.focused {
			if text.is_empty() {
				spans.push(Span::styled(placeholder.to_string(), placeholder_style));
			} else {
				spans.push(Span::raw(text.to_string()));
			}
			return Line::from(spans);
		}

		let cursor = self.textarea.cursor().1;
		let before: String = text.chars().take(cursor).collect();
		let mut rest = text.chars().skip(cursor);
		let at = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
		let after: String = rest.collect();

		let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
		spans.push(Span::raw(before));
		spans.push(Span::styled(at, cursor_style));
		if !after.is_empty() {
			spans.push(Span::raw(after));
		}
		Line::from(spans)
	}
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new(String::new())
	}
}

fn is_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => true,
		KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn type_str(input: &mut QueryInput<'_>, text: &str) {
		for ch in text.chars() {
			input.input(KeyEvent::from(KeyCode::Char(ch)));
		}
	}

	#[test]
	fn typing_updates_text_and_reports_change() {
		let mut input = QueryInput::default();
		assert!(input.input(KeyEvent::from(KeyCode::Char('a'))));
		type_str(&mut input, "bc");
		assert_eq!(input.text(), "abc");
		assert!(input.input(KeyEvent::from(KeyCode::Backspace)));
		assert_eq!(input.text(), "ab");
	}

	#[test]
	fn cursor_motion_is_not_a_change() {
		let mut input = QueryInput::new("abc");
		assert!(!input.input(KeyEvent::from(KeyCode::Left)));
		assert_eq!(input.text(), "abc");
	}

	#[test]
	fn enter_never_inserts_a_newline() {
		let mut input = QueryInput::new("abc");
		assert!(!input.input(KeyEvent::from(KeyCode::Enter)));
		assert_eq!(input.text(), "abc");
	}

	#[test]
	fn reset_keeps_focus() {
		let mut input = QueryInput::new("abc");
		input.focus();
		input.reset();
		assert_eq!(input.text(), "");
		assert!(input.is_focused());
	}

	#[test]
	fn unfocused_empty_input_shows_placeholder() {
		let input = QueryInput::default();
		let line = input.line("> ", "Type here", Style::default(), Style::default());
		assert_eq!(line.to_string(), "> Type here");
	}

	#[test]
	fn focused_input_appends_cursor_cell() {
		let mut input = QueryInput::new("sp");
		input.focus();
		let line = input.line("> ", "Type here", Style::default(), Style::default());
		assert_eq!(line.to_string(), "> sp ");
	}
}
