//! Terminal UI for generating Spring projects.
//!
//! The centrepiece is [`DependencySelector`], a filterable, paginated
//! multi-select list. Around it sit the other form widgets, the [`App`] that
//! routes keys between sections, and the event loop started by [`run`]. The
//! remote service is abstracted behind [`ProjectService`].

mod app;
pub mod components;
pub mod input;
pub mod keys;
mod runtime;
pub mod service;
pub mod style;

pub use app::{App, Section};
pub use runtime::run;

pub use crate::components::{
	DependencyEntry, DependencySelector, Paginator, SelectorMode, filter_entries,
	reorder_by_selection,
};
pub use crate::input::QueryInput;
pub use crate::keys::{KeyBinding, KeyHelp};
pub use crate::service::{
	Choice, FieldValue, GenerateMode, GeneratedProject, ProjectRequest, ProjectService,
	ServiceMetadata, SingleSelect, TextDefaults,
};
pub use crate::style::{Theme, ThemeDescriptor, default_theme};
