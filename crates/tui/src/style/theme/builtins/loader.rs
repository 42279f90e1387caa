use std::borrow::Cow;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(in crate::style::theme) struct BuiltinThemes {
	pub(in crate::style::theme) registrations: Vec<ThemeRegistration>,
	pub(in crate::style::theme) default_name: String,
	pub(in crate::style::theme) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	border: StyleSpec,
	border_active: StyleSpec,
	title: StyleSpec,
	highlight: StyleSpec,
	selected: StyleSpec,
	muted: StyleSpec,
	info: StyleSpec,
	warning: StyleSpec,
	error: StyleSpec,
}

impl ThemeStyles {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style = |spec: &StyleSpec, field: &str| spec.to_style(&format!("{context}.{field}"));
		Ok(Theme {
			border: style(&self.border, "border")?,
			border_active: style(&self.border_active, "border_active")?,
			title: style(&self.title, "title")?,
			highlight: style(&self.highlight, "highlight")?,
			selected: style(&self.selected, "selected")?,
			muted: style(&self.muted, "muted")?,
			info: style(&self.info, "info")?,
			warning: style(&self.warning, "warning")?,
			error: style(&self.error, "error")?,
		})
	}
}

#[derive(Debug, Deserialize)]
struct StyleSpec {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(value);
		}

		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations: Vec<ThemeRegistration> = Vec::new();
	let mut default: Option<(String, Theme)> = None;

	for file in files {
		let (registration, is_default) = parse_theme_file(file)?;

		if registrations
			.iter()
			.any(|existing| names_clash(existing, &registration))
		{
			bail!(
				"built-in theme `{}` reuses a name or alias of another theme",
				registration.name
			);
		}

		if is_default {
			if let Some((existing, _)) = &default {
				bail!(
					"multiple built-in themes are marked as default (`{existing}` and `{}`)",
					registration.name
				);
			}
			default = Some((registration.name.clone(), registration.theme));
		}

		registrations.push(registration);
	}

	let Some(first) = registrations.first() else {
		bail!("no built-in theme definitions were found");
	};
	let (default_name, default_theme) =
		default.unwrap_or_else(|| (first.name.clone(), first.theme));

	Ok(BuiltinThemes {
		registrations,
		default_name,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;

	let parsed: ThemeFile = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {path:?}"))?;

	let theme = parsed.styles.into_theme(&format!("{path:?}.styles"))?;
	let registration = parsed
		.aliases
		.into_iter()
		.map(|alias| alias.trim().to_string())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(parsed.name, theme), |registration, alias| {
			registration.alias(alias)
		});

	Ok((registration, parsed.default))
}

fn names_clash(a: &ThemeRegistration, b: &ThemeRegistration) -> bool {
	let keys = |registration: &ThemeRegistration| {
		std::iter::once(registration.name.clone())
			.chain(registration.aliases.iter().cloned())
			.map(|name| normalise_key(&name))
			.collect::<Vec<_>>()
	};
	let a_keys = keys(a);
	keys(b).iter().any(|key| a_keys.contains(key))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(hex);
	}

	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		return parse_rgb_triplet(body);
	}

	if let Some(body) = value
		.strip_prefix("ansi(")
		.and_then(|s| s.strip_suffix(')'))
	{
		let index: u8 = body
			.trim()
			.parse()
			.with_context(|| format!("invalid ANSI colour index `{body}`"))?;
		return Ok(Color::Indexed(index));
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_ref() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_yellow" => Ok(Color::LightYellow),
		"light_blue" => Ok(Color::LightBlue),
		"light_magenta" => Ok(Color::LightMagenta),
		"light_cyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex_colour(hex: &str) -> Result<Color> {
	let expanded = match hex.len() {
		3 => Cow::Owned(hex.chars().flat_map(|ch| [ch, ch]).collect::<String>()),
		6 => Cow::Borrowed(hex),
		_ => bail!("hex colours must be 3 or 6 characters long"),
	};

	let component = |range: std::ops::Range<usize>, name: &str| {
		u8::from_str_radix(&expanded[range], 16)
			.with_context(|| format!("invalid {name} component `{hex}`"))
	};

	Ok(Color::Rgb(
		component(0..2, "red")?,
		component(2..4, "green")?,
		component(4..6, "blue")?,
	))
}

fn parse_rgb_triplet(body: &str) -> Result<Color> {
	let components: Vec<&str> = body.split(',').map(str::trim).collect();
	let [r, g, b] = components.as_slice() else {
		bail!(
			"expected three components for rgb() colour, found {}",
			components.len()
		);
	};

	let parse = |value: &str, component: char| {
		value.parse::<u8>().with_context(|| {
			format!("invalid {component}-component `{value}` in rgb() colour specification")
		})
	};

	Ok(Color::Rgb(parse(*r, 'r')?, parse(*g, 'g')?, parse(*b, 'b')?))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_ref() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" | "invert" | "inverted" => Ok(Modifier::REVERSED),
		"crossed_out" | "strikethrough" => Ok(Modifier::CROSSED_OUT),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colours_parse_in_every_notation() {
		assert_eq!(parse_color("#6db33f").ok(), Some(Color::Rgb(0x6d, 0xb3, 0x3f)));
		assert_eq!(parse_color("#fff").ok(), Some(Color::Rgb(255, 255, 255)));
		assert_eq!(parse_color("rgb(1, 2, 3)").ok(), Some(Color::Rgb(1, 2, 3)));
		assert_eq!(parse_color("ansi(205)").ok(), Some(Color::Indexed(205)));
		assert_eq!(parse_color("238").ok(), Some(Color::Indexed(238)));
		assert_eq!(parse_color("Dark Gray").ok(), Some(Color::DarkGray));
	}

	#[test]
	fn bad_colours_are_rejected() {
		assert!(parse_color("#12").is_err());
		assert!(parse_color("rgb(1,2)").is_err());
		assert!(parse_color("chartreuse").is_err());
	}

	#[test]
	fn modifiers_accept_synonyms() {
		assert_eq!(parse_modifier("Reverse").ok(), Some(Modifier::REVERSED));
		assert!(parse_modifier("sparkle").is_err());
	}
}
