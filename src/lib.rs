//! Library side of the `spring-init` binary.
//!
//! The terminal form itself lives in `spring-init-tui`; this crate provides
//! what the form needs from the outside world: the Spring Initializr HTTP
//! client, archive handling, application directories and logging setup.

pub mod app_dirs;
pub mod logging;
pub mod service;

pub use service::{ClientOptions, InitializrClient, ServiceError};
pub use spring_init_tui as tui;
