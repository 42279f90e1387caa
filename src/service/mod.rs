//! Spring Initializr client: catalog download, project generation and the
//! archive handling around it.

mod archive;
mod client;
mod error;
mod metadata;

pub use archive::{archive_name, ensure_directory, expand_path, unpack_tarball};
pub use client::{ClientOptions, DEFAULT_TIMEOUT, DEFAULT_URL, InitializrClient};
pub use error::ServiceError;
pub use metadata::{InitializrMetadata, MetaField, decode_metadata};
