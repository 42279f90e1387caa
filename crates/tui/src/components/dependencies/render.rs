use std::collections::HashSet;

use frizbee::match_indices;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use super::catalog::filter_config;
use super::{
	DependencyEntry, DependencySelector, FILTER_PLACEHOLDER, FILTER_PROMPT, RESERVED_ROWS,
};
use crate::components::text::truncate_with_ellipsis;

const CHECKED: &str = "[✓] ";
const UNCHECKED: &str = "[ ] ";
const DOT: &str = "•";

impl Widget for &DependencySelector {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.is_empty() {
			return;
		}

		let list_height = area.height.saturating_sub(RESERVED_ROWS);
		let [list_area, indicator_area, filter_area] = Layout::vertical([
			Constraint::Length(list_height),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.areas(area);

		self.render_rows(list_area, buf);
		self.indicator_line(indicator_area.width)
			.render(indicator_area, buf);
		self.filter_input
			.line(
				FILTER_PROMPT,
				FILTER_PLACEHOLDER,
				self.theme.title,
				self.theme.muted,
			)
			.render(filter_area, buf);
	}
}

impl DependencySelector {
	fn render_rows(&self, area: Rect, buf: &mut Buffer) {
		let (start, end) = self.paginator.slice_bounds(self.filtered.len());
		let visible = self.filtered[start..end]
			.iter()
			.enumerate()
			.take(usize::from(area.height));

		for (offset, entry) in visible {
			let index = start + offset;
			let y = area.y + offset as u16;
			let line = self.row_line(entry, index == self.cursor, usize::from(area.width));
			buf.set_line(area.x, y, &line, area.width);
		}
	}

	fn row_line(&self, entry: &DependencyEntry, is_cursor: bool, width: usize) -> Line<'static> {
		let (marker, marker_style) = if self.selected.contains(&entry.id) {
			(CHECKED, self.theme.selected)
		} else {
			(UNCHECKED, Style::new())
		};
		let name_style = if is_cursor {
			self.theme.highlight
		} else {
			Style::new()
		};

		let available = width.saturating_sub(marker.width());
		let name = truncate_with_ellipsis(&entry.name, available);
		let matched = self.matched_chars(&entry.name);

		let mut spans = vec![Span::styled(marker, marker_style)];
		spans.extend(name_spans(&name, &matched, name_style));
		Line::from(spans)
	}

	fn matched_chars(&self, name: &str) -> HashSet<usize> {
		if self.filter.is_empty() || name.is_empty() {
			return HashSet::new();
		}
		match_indices(&self.filter, name, &filter_config())
			.map(|m| char_positions(name, &m.indices))
			.unwrap_or_default()
	}

	fn indicator_line(&self, width: u16) -> Line<'static> {
		let total = self.paginator.total_pages;
		let page = self.paginator.page;

		if total > usize::from(width) {
			return Line::styled(format!("{}/{}", page + 1, total), self.theme.muted)
				.alignment(Alignment::Center);
		}

		let dots: Vec<Span<'static>> = (0..total)
			.map(|index| {
				let style = if index == page {
					self.theme.title
				} else {
					self.theme.muted
				};
				Span::styled(DOT, style)
			})
			.collect();
		Line::from(dots).alignment(Alignment::Center)
	}
}

/// Map the matcher's byte offsets onto character positions in `text`.
fn char_positions(text: &str, byte_offsets: &[usize]) -> HashSet<usize> {
	text.char_indices()
		.enumerate()
		.filter(|(_, (offset, _))| byte_offsets.contains(offset))
		.map(|(position, _)| position)
		.collect()
}

/// Split `text` into runs, emboldening characters whose index is in `matched`.
fn name_spans(text: &str, matched: &HashSet<usize>, base: Style) -> Vec<Span<'static>> {
	if matched.is_empty() {
		return vec![Span::styled(text.to_string(), base)];
	}

	let match_style = base.add_modifier(Modifier::BOLD);
	let mut spans = Vec::new();
	let mut run = String::new();
	let mut run_matched = false;

	for (index, ch) in text.chars().enumerate() {
		let is_match = matched.contains(&index);
		if is_match != run_matched && !run.is_empty() {
			let style = if run_matched { match_style } else { base };
			spans.push(Span::styled(std::mem::take(&mut run), style));
		}
		run_matched = is_match;
		run.push(ch);
	}

	if !run.is_empty() {
		let style = if run_matched { match_style } else { base };
		spans.push(Span::styled(run, style));
	}
	spans
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn matched_characters_are_split_into_runs() {
		let matched: HashSet<usize> = [0, 1].into_iter().collect();
		let spans = name_spans("Spring", &matched, Style::new());
		let texts: Vec<&str> = spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(texts, ["Sp", "ring"]);
		assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
	}

	#[test]
	fn byte_offsets_after_wide_characters_map_to_char_positions() {
		// "Ü" takes two bytes, so "W" starts at byte 6 but is the sixth char.
		let positions = char_positions("Über Web", &[6, 7]);
		assert_eq!(positions, [5, 6].into_iter().collect());

		let spans = name_spans("Über Web", &positions, Style::new());
		let texts: Vec<&str> = spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(texts, ["Über ", "We", "b"]);
	}

	#[test]
	fn ascii_offsets_are_unchanged() {
		let positions = char_positions("Lombok", &[0, 2]);
		assert_eq!(positions, [0, 2].into_iter().collect());
	}
}
