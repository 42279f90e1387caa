//! Visual styling for the form.
//!
//! Themes are the only styling knob today; they are loaded from TOML documents
//! compiled into the binary.

pub mod theme;

pub use theme::{Theme, ThemeDescriptor, by_name, default_theme, descriptors, names};
