//! Data exchanged between the form and the project generation service.
//!
//! The TUI never talks HTTP itself; the binary plugs a [`ProjectService`]
//! implementation in and the form calls it from worker threads.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;

use crate::components::DependencyEntry;

/// One option of a single-select catalog field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Choice {
	pub id: String,
	pub name: String,
	/// Service path that generates this kind of project. Only project types
	/// carry one.
	pub action: Option<String>,
}

impl Choice {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			action: None,
		}
	}

	#[must_use]
	pub fn with_action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());
		self
	}
}

/// A catalog field offering one choice among several.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SingleSelect {
	pub default: Option<String>,
	pub values: Vec<Choice>,
}

impl SingleSelect {
	pub fn new(default: Option<&str>, values: Vec<Choice>) -> Self {
		Self {
			default: default.map(str::to_string),
			values,
		}
	}

	/// Index of the default choice, or zero when it is missing or unknown.
	#[must_use]
	pub fn default_index(&self) -> usize {
		self.default
			.as_deref()
			.and_then(|id| self.values.iter().position(|choice| choice.id == id))
			.unwrap_or(0)
	}
}

/// Default values for the free-text project fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextDefaults {
	pub group_id: String,
	pub artifact_id: String,
	pub name: String,
	pub description: String,
	pub package_name: String,
}

/// Everything the form needs to offer choices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceMetadata {
	pub project_types: SingleSelect,
	pub languages: SingleSelect,
	pub packaging: SingleSelect,
	pub java_versions: SingleSelect,
	pub boot_versions: SingleSelect,
	pub text: TextDefaults,
	pub dependencies: Vec<DependencyEntry>,
}

/// A free-text value keyed by its request parameter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
	pub id: String,
	pub value: String,
}

/// A fully specified generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectRequest {
	/// Service path to call, e.g. `/starter.zip`.
	pub action: String,
	pub project_type: String,
	pub language: String,
	pub boot_version: String,
	pub packaging: String,
	pub java_version: String,
	pub fields: Vec<FieldValue>,
	pub dependencies: Vec<String>,
}

impl ProjectRequest {
	/// Query parameters in the order the service documents them.
	#[must_use]
	pub fn query_pairs(&self) -> Vec<(String, String)> {
		let mut pairs: Vec<(String, String)> = self
			.fields
			.iter()
			.map(|field| (field.id.clone(), field.value.clone()))
			.collect();

		pairs.extend(
			[
				("type", &self.project_type),
				("language", &self.language),
				("bootVersion", &self.boot_version),
				("packaging", &self.packaging),
				("javaVersion", &self.java_version),
			]
			.into_iter()
			.map(|(key, value)| (key.to_string(), value.clone())),
		);

		if !self.dependencies.is_empty() {
			pairs.push(("dependencies".to_string(), self.dependencies.join(",")));
		}
		pairs
	}
}

/// What to do with the generated archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
	Download,
	DownloadAndExtract,
}

impl fmt::Display for GenerateMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Download => f.write_str("Download"),
			Self::DownloadAndExtract => f.write_str("Download and Extract"),
		}
	}
}

/// Where a generated project ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
	pub path: PathBuf,
	pub extracted: bool,
}

/// The remote side of the form.
///
/// Calls block; the form runs them on worker threads.
pub trait ProjectService: Send + Sync + 'static {
	/// Human readable location of the service, for status messages.
	fn endpoint(&self) -> String;

	fn fetch_metadata(&self) -> Result<ServiceMetadata>;

	fn generate(&self, request: &ProjectRequest, mode: GenerateMode) -> Result<GeneratedProject>;
}

#[cfg(test)]
mod tests {
	use super::*;

	fn request() -> ProjectRequest {
		ProjectRequest {
			action: "/starter.zip".into(),
			project_type: "maven-project".into(),
			language: "java".into(),
			boot_version: "3.3.0".into(),
			packaging: "jar".into(),
			java_version: "21".into(),
			fields: vec![
				FieldValue {
					id: "groupId".into(),
					value: "com.example".into(),
				},
				FieldValue {
					id: "artifactId".into(),
					value: "demo".into(),
				},
			],
			dependencies: vec!["web".into(), "lombok".into()],
		}
	}

	#[test]
	fn query_lists_fields_then_choices_then_dependencies() {
		let keys: Vec<String> = request()
			.query_pairs()
			.into_iter()
			.map(|(key, _)| key)
			.collect();
		assert_eq!(
			keys,
			[
				"groupId",
				"artifactId",
				"type",
				"language",
				"bootVersion",
				"packaging",
				"javaVersion",
				"dependencies"
			]
		);
	}

	#[test]
	fn dependencies_are_comma_joined() {
		let pairs = request().query_pairs();
		assert_eq!(
			pairs.last(),
			Some(&("dependencies".to_string(), "web,lombok".to_string()))
		);
	}

	#[test]
	fn no_dependencies_means_no_parameter() {
		let mut request = request();
		request.dependencies.clear();
		assert!(
			request
				.query_pairs()
				.iter()
				.all(|(key, _)| key != "dependencies")
		);
	}

	#[test]
	fn default_index_falls_back_to_first() {
		let values = vec![Choice::new("a", "A"), Choice::new("b", "B")];
		assert_eq!(SingleSelect::new(Some("b"), values.clone()).default_index(), 1);
		assert_eq!(SingleSelect::new(Some("zz"), values.clone()).default_index(), 0);
		assert_eq!(SingleSelect::new(None, values).default_index(), 0);
	}
}
