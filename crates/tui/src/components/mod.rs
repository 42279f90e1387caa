//! Widgets that make up the project form.

/// Download / extract actions.
pub mod buttons;
/// The filterable dependency picker.
pub mod dependencies;
/// Free-text project metadata.
pub mod fields;
/// Key help bar.
pub mod help;
/// Modal messages.
pub mod notification;
/// Single-choice lists.
pub mod radio_list;
pub(crate) mod text;

pub use buttons::{ButtonBar, ButtonEvent};
pub use dependencies::{
	DependencyEntry, DependencySelector, Paginator, SelectorMode, filter_entries,
	reorder_by_selection, sort_by_name,
};
pub use fields::MetadataFields;
pub use help::HelpBar;
pub use notification::{Level, Notification};
pub use radio_list::{Orientation, RadioList};
