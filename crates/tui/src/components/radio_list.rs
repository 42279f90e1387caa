//! Single-choice list used for project type, language, packaging and versions.

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::components::text::truncate_with_ellipsis;
use crate::keys::{KeyBinding, KeyChord, KeyHelp};
use crate::service::{Choice, SingleSelect};
use crate::style::Theme;

const CHOSEN: &str = "(*) ";
const UNCHOSEN: &str = "( ) ";

const UP: &[KeyChord] = &[KeyChord::plain(KeyCode::Up), KeyChord::plain(KeyCode::Char('k'))];
const DOWN: &[KeyChord] = &[KeyChord::plain(KeyCode::Down), KeyChord::plain(KeyCode::Char('j'))];
const LEFT: &[KeyChord] = &[KeyChord::plain(KeyCode::Left), KeyChord::plain(KeyCode::Char('h'))];
const RIGHT: &[KeyChord] = &[KeyChord::plain(KeyCode::Right), KeyChord::plain(KeyCode::Char('l'))];
const SELECT: &[KeyChord] = &[KeyChord::plain(KeyCode::Enter), KeyChord::plain(KeyCode::Char(' '))];

const VERTICAL_PREV: KeyBinding = KeyBinding::new(UP, "↑/k", "previous");
const VERTICAL_NEXT: KeyBinding = KeyBinding::new(DOWN, "↓/j", "next");
const HORIZONTAL_PREV: KeyBinding = KeyBinding::new(LEFT, "←/h", "previous");
const HORIZONTAL_NEXT: KeyBinding = KeyBinding::new(RIGHT, "→/l", "next");
const SELECT_BINDING: KeyBinding = KeyBinding::new(SELECT, "enter/space", "select");

/// Layout of the choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
	/// One choice per row, paginated to the render height.
	Vertical,
	/// All choices on one row.
	Horizontal,
}

pub struct RadioList {
	choices: Vec<Choice>,
	cursor: usize,
	selected: usize,
	orientation: Orientation,
	theme: Theme,
}

impl RadioList {
	/// Build a list with the catalog default chosen and under the cursor.
	pub fn new(select: &SingleSelect, orientation: Orientation) -> Self {
		let selected = select.default_index();
		Self {
			choices: select.values.clone(),
			cursor: selected,
			selected,
			orientation,
			theme: Theme::default(),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	/// The chosen entry; `None` only when the catalog offered nothing.
	#[must_use]
	pub fn selected(&self) -> Option<&Choice> {
		self.choices.get(self.selected)
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	fn bindings(&self) -> (KeyBinding, KeyBinding) {
		match self.orientation {
			Orientation::Vertical => (VERTICAL_PREV, VERTICAL_NEXT),
			Orientation::Horizontal => (HORIZONTAL_PREV, HORIZONTAL_NEXT),
		}
	}

	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		let (prev, next) = self.bindings();
		if prev.matches(&key) {
			self.cursor = self.cursor.saturating_sub(1);
		} else if next.matches(&key) {
			if self.cursor + 1 < self.choices.len() {
				self.cursor += 1;
			}
		} else if SELECT_BINDING.matches(&key) {
			if self.cursor < self.choices.len() {
				self.selected = self.cursor;
			}
		} else {
			return false;
		}
		true
	}

	fn choice_spans(&self, index: usize, choice: &Choice, name_width: usize) -> [Span<'static>; 2] {
		let marker = if index == self.selected {
			Span::styled(CHOSEN, self.theme.selected)
		} else {
			Span::raw(UNCHOSEN)
		};
		let name_style = if index == self.cursor {
			self.theme.highlight
		} else {
			Style::new()
		};
		let name = truncate_with_ellipsis(&choice.name, name_width);
		[marker, Span::styled(name, name_style)]
	}
}

impl Widget for &RadioList {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.is_empty() {
			return;
		}
		let width = usize::from(area.width);

		match self.orientation {
			Orientation::Horizontal => {
				let mut spans = Vec::new();
				for (index, choice) in self.choices.iter().enumerate() {
					if index > 0 {
						spans.push(Span::raw(" "));
					}
					spans.extend(self.choice_spans(index, choice, choice.name.width()));
				}
				buf.set_line(area.x, area.y, &Line::from(spans), area.width);
			}
			Orientation::Vertical => {
				let per_page = usize::from(area.height).max(1);
				let start = (self.cursor / per_page) * per_page;
				let name_width = width.saturating_sub(UNCHOSEN.width());
				let visible = self
					.choices
					.iter()
					.enumerate()
					.skip(start)
					.take(per_page);
				for (row, (index, choice)) in visible.enumerate() {
					let line = Line::from(self.choice_spans(index, choice, name_width).to_vec());
					buf.set_line(area.x, area.y + row as u16, &line, area.width);
				}
			}
		}
	}
}

impl KeyHelp for RadioList {
	fn short_help(&self) -> Vec<KeyBinding> {
		Vec::new()
	}

	fn full_help(&self) -> Vec<Vec<KeyBinding>> {
		let (prev, next) = self.bindings();
		vec![vec![prev, next], vec![SELECT_BINDING]]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn versions() -> SingleSelect {
		SingleSelect::new(
			Some("21"),
			vec![
				Choice::new("23", "23"),
				Choice::new("21", "21"),
				Choice::new("17", "17"),
			],
		)
	}

	fn rendered(list: &RadioList, width: u16, height: u16) -> Vec<String> {
		let area = Rect::new(0, 0, width, height);
		let mut buf = Buffer::empty(area);
		list.render(area, &mut buf);
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
	fn starts_on_the_catalog_default() {
		let list = RadioList::new(&versions(), Orientation::Vertical);
		assert_eq!(list.selected().map(|c| c.id.as_str()), Some("21"));
		assert_eq!(list.cursor(), 1);
	}

	#[test]
	fn moving_does_not_select_until_confirmed() {
		let mut list = RadioList::new(&versions(), Orientation::Vertical);
		list.handle_key(KeyEvent::from(KeyCode::Down));
		assert_eq!(list.selected().map(|c| c.id.as_str()), Some("21"));
		list.handle_key(KeyEvent::from(KeyCode::Char(' ')));
		assert_eq!(list.selected().map(|c| c.id.as_str()), Some("17"));
	}

	#[test]
	fn cursor_stops_at_both_ends() {
		let mut list = RadioList::new(&versions(), Orientation::Vertical);
		for _ in 0..5 {
			list.handle_key(KeyEvent::from(KeyCode::Char('j')));
		}
		assert_eq!(list.cursor(), 2);
		for _ in 0..5 {
			list.handle_key(KeyEvent::from(KeyCode::Char('k')));
		}
		assert_eq!(list.cursor(), 0);
	}

	#[test]
	fn horizontal_lists_use_left_and_right() {
		let mut list = RadioList::new(&versions(), Orientation::Horizontal);
		assert!(!list.handle_key(KeyEvent::from(KeyCode::Down)));
		assert!(list.handle_key(KeyEvent::from(KeyCode::Right)));
		assert_eq!(list.cursor(), 2);
	}

	#[test]
	fn vertical_render_pages_to_the_cursor() {
		let mut list = RadioList::new(&versions(), Orientation::Vertical);
		list.handle_key(KeyEvent::from(KeyCode::Down));
		assert_eq!(rendered(&list, 12, 2), ["( ) 17", ""]);
	}

	#[test]
	fn horizontal_render_is_one_line() {
		let list = RadioList::new(&versions(), Orientation::Horizontal);
		assert_eq!(rendered(&list, 30, 1), ["( ) 23 (*) 21 ( ) 17"]);
	}

	#[test]
	fn empty_catalog_has_no_selection() {
		let mut list = RadioList::new(&SingleSelect::default(), Orientation::Vertical);
		assert!(list.selected().is_none());
		list.handle_key(KeyEvent::from(KeyCode::Enter));
		assert!(list.selected().is_none());
	}
}
