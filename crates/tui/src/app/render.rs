use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use throbber_widgets_tui::Throbber;

use super::form::Form;
use super::keymap::{QUIT, global_full_help, global_short_help};
use super::{App, Section};
use crate::keys::{KeyBinding, KeyHelp};

pub(crate) const MIN_WIDTH: u16 = 92;
pub(crate) const MIN_HEIGHT: u16 = 26;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
			self.render_too_small(frame, area);
			return;
		}

		let (short, full) = self.help_bindings();
		let [body, help_area] = Layout::vertical([
			Constraint::Min(0),
			Constraint::Length(self.help.height(&full)),
		])
		.areas(area);

		if self.is_loading() {
			self.render_loading(frame, body);
		} else if self.form().is_some() {
			self.render_form(frame, body);
		}

		self.help.render(help_area, frame.buffer_mut(), &short, &full);

		if let Some(notification) = &self.notification {
			notification.render(body, frame.buffer_mut(), &self.theme);
		}
	}

	fn render_too_small(&self, frame: &mut Frame, area: Rect) {
		let message = format!(
			"This screen is too small. (Min: {MIN_WIDTH}x{MIN_HEIGHT}) (Current: {}x{})",
			area.width, area.height
		);
		let y = area.y + area.height.saturating_sub(2) / 2;
		let message_area = Rect::new(area.x, y, area.width, area.height.min(2));
		frame.render_widget(
			Paragraph::new(message)
				.style(self.theme.warning)
				.alignment(Alignment::Center)
				.wrap(Wrap { trim: true }),
			message_area,
		);
	}

	fn render_loading(&self, frame: &mut Frame, area: Rect) {
		let spinner = Throbber::default()
			.style(self.theme.muted)
			.throbber_style(self.theme.title);
		let line = Line::from(vec![
			spinner.to_symbol_span(&self.throbber_state),
			Span::styled(
				format!("Loading metadata from {}...", self.service.endpoint()),
				self.theme.muted,
			),
		])
		.alignment(Alignment::Center);
		let y = area.y + area.height.saturating_sub(1) / 2;
		frame.render_widget(line, Rect::new(area.x, y, area.width, 1));
	}

	fn render_form(&mut self, frame: &mut Frame, area: Rect) {
		let areas = section_areas(area);
		let focus = self.focus;
		let theme = self.theme;

		if let Some(form) = self.form_mut()
			&& let Some((_, outer)) = areas
				.iter()
				.find(|(section, _)| *section == Section::Dependencies)
		{
			let inner = Block::bordered().inner(*outer);
			form.dependencies.resize(inner.width, inner.height);
		}

		let Some(form) = self.form() else {
			return;
		};
		for (section, outer) in areas {
			let focused = section == focus;
			let block = Block::bordered()
				.border_style(theme.border_for(focused))
				.title(Line::styled(
					format!(" {} ", section.title()),
					theme.title_for(focused),
				));
			let inner = block.inner(outer);
			frame.render_widget(block, outer);
			self.render_section(frame, form, section, inner);
		}
	}

	fn render_section(&self, frame: &mut Frame, form: &Form, section: Section, area: Rect) {
		match section {
			Section::Project => frame.render_widget(&form.project, area),
			Section::Language => frame.render_widget(&form.language, area),
			Section::Packaging => frame.render_widget(&form.packaging, area),
			Section::Java => frame.render_widget(&form.java, area),
			Section::SpringBoot => frame.render_widget(&form.boot, area),
			Section::Metadata => frame.render_widget(&form.fields, area),
			Section::Dependencies => frame.render_widget(&form.dependencies, area),
			Section::Generate => {
				form.buttons
					.render(area, frame.buffer_mut(), &self.throbber_state);
			}
		}
	}

	/// Short and full help for whatever currently receives keys.
	pub(crate) fn help_bindings(&self) -> (Vec<KeyBinding>, Vec<Vec<KeyBinding>>) {
		if let Some(notification) = &self.notification {
			let mut short = notification.short_help();
			short.push(QUIT);
			let mut full = notification.full_help();
			full.push(vec![QUIT]);
			return (short, full);
		}

		let Some(form) = self.form() else {
			return (vec![QUIT], vec![vec![QUIT]]);
		};

		let widget = form.help_for(self.focus);
		if form.captures_input(self.focus) {
			return (widget.short_help(), widget.full_help());
		}

		let mut short = widget.short_help();
		short.extend(global_short_help());
		let mut full = widget.full_help();
		full.push(global_full_help());
		(short, full)
	}
}

/// Two columns: choice lists on the left; metadata, dependencies and the
/// buttons on the right.
fn section_areas(area: Rect) -> [(Section, Rect); 8] {
	let [left, right] =
		Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

	let [project, language, packaging, java, boot] = Layout::vertical([
		Constraint::Length(5),
		Constraint::Length(5),
		Constraint::Length(3),
		Constraint::Length(5),
		Constraint::Min(3),
	])
	.areas(left);

	let [metadata, dependencies, generate] = Layout::vertical([
		Constraint::Length(7),
		Constraint::Min(5),
		Constraint::Length(5),
	])
	.areas(right);

	[
		(Section::Project, project),
		(Section::Language, language),
		(Section::Packaging, packaging),
		(Section::Java, java),
		(Section::SpringBoot, boot),
		(Section::Metadata, metadata),
		(Section::Dependencies, dependencies),
		(Section::Generate, generate),
	]
}
