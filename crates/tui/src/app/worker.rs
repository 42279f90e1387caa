//! Blocking service calls moved off the UI thread.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::Result;

use crate::service::{GenerateMode, GeneratedProject, ProjectRequest, ProjectService, ServiceMetadata};

/// Results posted back to the event loop.
pub(crate) enum WorkerMessage {
	Metadata(Result<ServiceMetadata>),
	Generated(Result<GeneratedProject>),
}

pub(crate) fn spawn_metadata(service: Arc<dyn ProjectService>, tx: Sender<WorkerMessage>) {
	thread::spawn(move || {
		log::debug!("fetching metadata from {}", service.endpoint());
		let result = service.fetch_metadata();
		// The receiver only goes away when the app is shutting down.
		let _ = tx.send(WorkerMessage::Metadata(result));
	});
}

pub(crate) fn spawn_generate(
	service: Arc<dyn ProjectService>,
	request: ProjectRequest,
	mode: GenerateMode,
	tx: Sender<WorkerMessage>,
) {
	thread::spawn(move || {
		log::debug!("generating {} ({mode})", request.action);
		let result = service.generate(&request, mode);
		let _ = tx.send(WorkerMessage::Generated(result));
	});
}
