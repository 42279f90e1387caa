//! Wire format of the service catalog and its mapping onto the form's model.

use serde::Deserialize;
use spring_init_tui::{Choice, DependencyEntry, ServiceMetadata, SingleSelect, TextDefaults};

use super::ServiceError;

/// One node of the catalog. Selects carry `values`; the dependency field nests
/// a level deeper with groups holding entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetaField {
	pub id: String,
	pub name: String,
	pub description: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub default: Option<String>,
	pub action: Option<String>,
	pub values: Vec<MetaField>,
}

impl MetaField {
	fn single_select(&self) -> SingleSelect {
		let values = self
			.values
			.iter()
			.map(|value| {
				let choice = Choice::new(&value.id, &value.name);
				match value.action.as_deref() {
					Some(action) if !action.is_empty() => choice.with_action(action),
					_ => choice,
				}
			})
			.collect();
		SingleSelect::new(self.default.as_deref(), values)
	}

	fn text_default(&self) -> String {
		self.default.clone().unwrap_or_default()
	}

	/// Flatten dependency groups into entries tagged with their group name.
	fn dependency_entries(&self) -> Vec<DependencyEntry> {
		self.values
			.iter()
			.flat_map(|group| {
				group.values.iter().map(|entry| {
					DependencyEntry::new(&entry.id, &entry.name)
						.with_group(&group.name)
						.with_description(&entry.description)
				})
			})
			.collect()
	}
}

/// The catalog document served at the service root for
/// `Accept: application/json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitializrMetadata {
	pub artifact_id: MetaField,
	pub boot_version: MetaField,
	pub dependencies: MetaField,
	pub description: MetaField,
	pub group_id: MetaField,
	pub java_version: MetaField,
	pub language: MetaField,
	pub name: MetaField,
	pub package_name: MetaField,
	pub packaging: MetaField,
	#[serde(rename = "type")]
	pub project_type: MetaField,
	pub version: MetaField,
}

impl From<InitializrMetadata> for ServiceMetadata {
	fn from(wire: InitializrMetadata) -> Self {
		ServiceMetadata {
			project_types: wire.project_type.single_select(),
			languages: wire.language.single_select(),
			packaging: wire.packaging.single_select(),
			java_versions: wire.java_version.single_select(),
			boot_versions: wire.boot_version.single_select(),
			text: TextDefaults {
				group_id: wire.group_id.text_default(),
				artifact_id: wire.artifact_id.text_default(),
				name: wire.name.text_default(),
				description: wire.description.text_default(),
				package_name: wire.package_name.text_default(),
			},
			dependencies: wire.dependencies.dependency_entries(),
		}
	}
}

/// Parse a catalog body received from `url`.
pub fn decode_metadata(url: &str, body: &str) -> Result<ServiceMetadata, ServiceError> {
	let wire: InitializrMetadata =
		serde_json::from_str(body).map_err(|source| ServiceError::Decode {
			url: url.to_string(),
			source,
		})?;
	Ok(wire.into())
}

#[cfg(test)]
mod tests {
	use super::*;

	const FIXTURE: &str = include_str!("testdata/metadata.json");

	fn metadata() -> ServiceMetadata {
		decode_metadata("https://start.spring.io", FIXTURE).expect("fixture decodes")
	}

	#[test]
	fn selects_keep_order_and_default() {
		let metadata = metadata();
		let ids: Vec<&str> = metadata
			.project_types
			.values
			.iter()
			.map(|choice| choice.id.as_str())
			.collect();
		assert_eq!(ids, ["gradle-project", "gradle-project-kotlin", "maven-project"]);
		assert_eq!(metadata.project_types.default.as_deref(), Some("gradle-project"));
		assert_eq!(metadata.java_versions.default_index(), 1);
	}

	#[test]
	fn project_types_carry_their_action() {
		let metadata = metadata();
		let maven = &metadata.project_types.values[2];
		assert_eq!(maven.action.as_deref(), Some("/starter.zip"));
		assert!(metadata.languages.values.iter().all(|c| c.action.is_none()));
	}

	#[test]
	fn dependency_groups_are_flattened() {
		let metadata = metadata();
		let entries: Vec<(&str, &str)> = metadata
			.dependencies
			.iter()
			.map(|entry| (entry.id.as_str(), entry.group_name.as_str()))
			.collect();
		assert_eq!(
			entries,
			[
				("devtools", "Developer Tools"),
				("lombok", "Developer Tools"),
				("web", "Web"),
				("data-jpa", "SQL"),
			]
		);
		assert_eq!(
			metadata.dependencies[2].description,
			"Build web, including RESTful, applications using Spring MVC."
		);
	}

	#[test]
	fn text_defaults_are_read() {
		let text = metadata().text;
		assert_eq!(text.group_id, "com.example");
		assert_eq!(text.package_name, "com.example.demo");
	}

	#[test]
	fn malformed_body_is_a_decode_error() {
		let err = decode_metadata("https://start.spring.io", "{").expect_err("invalid json");
		assert!(matches!(err, ServiceError::Decode { .. }));
		assert!(err.to_string().contains("https://start.spring.io"));
	}
}
