use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the service or writing what it returns.
#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("request to {url} failed")]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("{url} answered {status}: {body}")]
	Status {
		url: String,
		status: StatusCode,
		body: String,
	},
	#[error("could not decode metadata from {url}")]
	Decode {
		url: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("invalid url {url}: {reason}")]
	Url { url: String, reason: String },
	#[error("I/O error on {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl ServiceError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}
