use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Fit `text` into `max_width` columns, ending in an ellipsis when cut.
pub(crate) fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
	if max_width == 0 {
		return String::new();
	}
	if text.width() <= max_width {
		return text.to_string();
	}

	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return ELLIPSIS.to_string();
	}

	let (slice, _) = text.unicode_truncate(max_width - ellipsis_width);
	let mut truncated = slice.to_string();
	truncated.push_str(ELLIPSIS);
	truncated
}

/// Greedy word wrap to `width` columns. Words longer than a line are cut.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
	if width == 0 {
		return Vec::new();
	}

	let mut lines = Vec::new();
	for paragraph in text.lines() {
		let mut line = String::new();
		for word in paragraph.split_whitespace() {
			let word = truncate_with_ellipsis(word, width);
			let needed = if line.is_empty() {
				word.width()
			} else {
				line.width() + 1 + word.width()
			};
			if needed > width && !line.is_empty() {
				lines.push(std::mem::take(&mut line));
			}
			if !line.is_empty() {
				line.push(' ');
			}
			line.push_str(&word);
		}
		lines.push(line);
	}
	lines
}
