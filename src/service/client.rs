//! Blocking HTTP client for a Spring Initializr service.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use spring_init_tui::{
	GenerateMode, GeneratedProject, ProjectRequest, ProjectService, ServiceMetadata,
};
use url::Url;

use super::ServiceError;
use super::archive::{archive_name, ensure_directory, unpack_tarball};
use super::metadata::decode_metadata;

pub const DEFAULT_URL: &str = "https://start.spring.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ZIP_SUFFIX: &str = ".zip";
const TARBALL_SUFFIX: &str = ".tgz";

/// Settings for [`InitializrClient::new`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
	pub base_url: Url,
	pub timeout: Duration,
	/// Where downloads are written or extracted. `~` and relative paths are
	/// resolved when a project is generated.
	pub output_dir: PathBuf,
}

pub struct InitializrClient {
	http: Client,
	base_url: Url,
	output_dir: PathBuf,
}

impl InitializrClient {
	pub fn new(options: ClientOptions) -> Result<Self, ServiceError> {
		let http = Client::builder()
			.user_agent(concat!("spring-init/", env!("CARGO_PKG_VERSION")))
			.timeout(options.timeout)
			.build()
			.map_err(|source| ServiceError::Transport {
				url: options.base_url.to_string(),
				source,
			})?;

		Ok(Self {
			http,
			base_url: options.base_url,
			output_dir: options.output_dir,
		})
	}

	/// Fetch and decode the catalog.
	pub fn metadata(&self) -> Result<ServiceMetadata, ServiceError> {
		let url = self.base_url.as_str();
		let response = self
			.http
			.get(url)
			.header(ACCEPT, "application/json")
			.send()
			.map_err(|source| ServiceError::Transport {
				url: url.to_string(),
				source,
			})?;
		let body = checked(url, response)?
			.text()
			.map_err(|source| ServiceError::Transport {
				url: url.to_string(),
				source,
			})?;
		decode_metadata(url, &body)
	}

	/// URL that generates `request`: the base URL with the action path appended
	/// and the request's query parameters.
	pub fn project_url(&self, request: &ProjectRequest, mode: GenerateMode) -> Result<Url, ServiceError> {
		let action = effective_action(&request.action, mode);
		let mut url = self.base_url.clone();
		{
			let mut segments = url.path_segments_mut().map_err(|()| ServiceError::Url {
				url: self.base_url.to_string(),
				reason: "cannot be used as a base".to_string(),
			})?;
			segments
				.pop_if_empty()
				.extend(action.split('/').filter(|segment| !segment.is_empty()));
		}
		url.query_pairs_mut()
			.clear()
			.extend_pairs(request.query_pairs());
		Ok(url)
	}

	/// Download the project and either save the archive or unpack it.
	pub fn download(&self, request: &ProjectRequest, mode: GenerateMode) -> Result<GeneratedProject, ServiceError> {
		let target = ensure_directory(&self.output_dir)?;
		let url = self.project_url(request, mode)?;
		log::info!("downloading {url}");

		let response = self
			.http
			.get(url.clone())
			.send()
			.map_err(|source| ServiceError::Transport {
				url: url.to_string(),
				source,
			})?;
		let bytes = checked(url.as_str(), response)?
			.bytes()
			.map_err(|source| ServiceError::Transport {
				url: url.to_string(),
				source,
			})?;

		let name = archive_name(&url);
		if mode == GenerateMode::DownloadAndExtract && name.ends_with(TARBALL_SUFFIX) {
			unpack_tarball(&bytes, &target)?;
			log::info!("extracted {} bytes into {}", bytes.len(), target.display());
			return Ok(GeneratedProject {
				path: target,
				extracted: true,
			});
		}

		let path = target.join(name);
		fs::write(&path, &bytes).map_err(|source| ServiceError::io(&path, source))?;
		log::info!("saved {} bytes to {}", bytes.len(), path.display());
		Ok(GeneratedProject {
			path,
			extracted: false,
		})
	}
}

impl ProjectService for InitializrClient {
	fn endpoint(&self) -> String {
		self.base_url.to_string()
	}

	fn fetch_metadata(&self) -> anyhow::Result<ServiceMetadata> {
		Ok(self.metadata()?)
	}

	fn generate(&self, request: &ProjectRequest, mode: GenerateMode) -> anyhow::Result<GeneratedProject> {
		Ok(self.download(request, mode)?)
	}
}

/// Extraction asks for a tarball instead of a zip; other actions are
/// unchanged.
fn effective_action(action: &str, mode: GenerateMode) -> String {
	match (mode, action.strip_suffix(ZIP_SUFFIX)) {
		(GenerateMode::DownloadAndExtract, Some(stem)) => format!("{stem}{TARBALL_SUFFIX}"),
		_ => action.to_string(),
	}
}

/// Turn non-success statuses into [`ServiceError::Status`] with the body.
fn checked(url: &str, response: Response) -> Result<Response, ServiceError> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}
	let body = response.text().unwrap_or_default();
	Err(ServiceError::Status {
		url: url.to_string(),
		status,
		body: body.trim().to_string(),
	})
}
