//! Top-level state of the form application.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use throbber_widgets_tui::ThrobberState;

use super::Section;
use super::form::Form;
use super::worker::{self, WorkerMessage};
use crate::components::{HelpBar, Notification};
use crate::service::{GenerateMode, GeneratedProject, ProjectService};
use crate::style::Theme;

/// Lifecycle of the form.
pub(crate) enum Phase {
	/// Waiting for the service catalog.
	Loading,
	Ready(Box<Form>),
	/// The catalog could not be fetched; the next key quits.
	Failed,
}

/// Form application: service catalog, focused section, widgets and the
/// channel that carries worker results back to the event loop.
pub struct App {
	pub(crate) service: Arc<dyn ProjectService>,
	pub(crate) phase: Phase,
	pub(crate) focus: Section,
	pub(crate) notification: Option<Notification>,
	pub(crate) help: HelpBar,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) generated: Vec<GeneratedProject>,
	pub(crate) should_quit: bool,
	worker_tx: Sender<WorkerMessage>,
	worker_rx: Receiver<WorkerMessage>,
}

impl App {
	/// Create the app and start fetching the catalog in the background.
	pub fn new(service: Arc<dyn ProjectService>) -> Self {
		let (worker_tx, worker_rx) = mpsc::channel();
		worker::spawn_metadata(Arc::clone(&service), worker_tx.clone());

		Self {
			service,
			phase: Phase::Loading,
			focus: Section::default(),
			notification: None,
			help: HelpBar::default(),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			generated: Vec::new(),
			should_quit: false,
			worker_tx,
			worker_rx,
		}
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.set_theme(theme);
		self
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.help.set_theme(theme);
		if let Phase::Ready(form) = &mut self.phase {
			form.set_theme(theme);
		}
	}

	#[must_use]
	pub fn focus(&self) -> Section {
		self.focus
	}

	#[must_use]
	pub fn notification(&self) -> Option<&Notification> {
		self.notification.as_ref()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self.phase, Phase::Loading)
	}

	#[must_use]
	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	/// Projects written during this session, oldest first.
	#[must_use]
	pub fn generated(&self) -> &[GeneratedProject] {
		&self.generated
	}

	pub(crate) fn form(&self) -> Option<&Form> {
		match &self.phase {
			Phase::Ready(form) => Some(form.as_ref()),
			_ => None,
		}
	}

	pub(crate) fn form_mut(&mut self) -> Option<&mut Form> {
		match &mut self.phase {
			Phase::Ready(form) => Some(form.as_mut()),
			_ => None,
		}
	}

	/// Start a generation for the current choices.
	pub(crate) fn start_generate(&mut self, mode: GenerateMode) {
		let Some(form) = self.form() else {
			return;
		};
		let request = form.request();
		log::info!(
			"generating {} with {} dependencies",
			request.project_type,
			request.dependencies.len()
		);
		worker::spawn_generate(
			Arc::clone(&self.service),
			request,
			mode,
			self.worker_tx.clone(),
		);
	}

	/// Apply every worker result that has arrived since the last tick.
	pub(crate) fn pump_worker_results(&mut self) {
		while let Ok(message) = self.worker_rx.try_recv() {
			self.apply_worker_message(message);
		}
	}

	/// Block until one worker result arrives, then apply it.
	#[cfg(test)]
	pub(crate) fn wait_for_worker(&mut self) {
		let message = self
			.worker_rx
			.recv_timeout(std::time::Duration::from_secs(5))
			.expect("worker result");
		self.apply_worker_message(message);
	}

	fn apply_worker_message(&mut self, message: WorkerMessage) {
		match message {
			WorkerMessage::Metadata(Ok(metadata)) => {
				log::info!(
					"loaded metadata with {} dependencies",
					metadata.dependencies.len()
				);
				self.phase = Phase::Ready(Box::new(Form::new(&metadata, self.theme)));
			}
			WorkerMessage::Metadata(Err(err)) => {
				log::error!("failed to load metadata: {err:#}");
				self.phase = Phase::Failed;
				self.notification = Some(Notification::error(format!(
					"Failed to load metadata from {}: {err:#}",
					self.service.endpoint()
				)));
			}
			WorkerMessage::Generated(result) => {
				if let Phase::Ready(form) = &mut self.phase {
					form.buttons.finish();
				}
				match result {
					Ok(project) => {
						log::info!("project written to {}", project.path.display());
						let verb = if project.extracted { "extracted to" } else { "saved as" };
						self.notification = Some(Notification::info(format!(
							"Project {verb} {}",
							project.path.display()
						)));
						self.generated.push(project);
					}
					Err(err) => {
						log::error!("failed to generate project: {err:#}");
						self.notification = Some(Notification::error(format!(
							"Failed to generate project: {err:#}"
						)));
					}
				}
			}
		}
	}
}
