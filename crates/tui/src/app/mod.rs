//! The project form: sections, focus, help and background service calls.
//!
//! [`App`] owns the widgets once the catalog has loaded. Input handling lives
//! in `actions`, drawing in `render`, and blocking service calls run on the
//! threads started by `worker`, whose results are drained each tick.

mod actions;
mod form;
mod keymap;
mod render;
mod section;
mod state;
mod worker;


pub use section::Section;
pub use state::App;
