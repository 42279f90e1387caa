use std::collections::HashSet;

use frizbee::{Config, match_list};

/// One selectable dependency from the service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyEntry {
	/// Stable identifier sent to the service.
	pub id: String,
	/// Label shown in the list and matched by the filter.
	pub name: String,
	/// Catalog group the entry is listed under.
	pub group_name: String,
	/// One-line summary from the catalog; not matched by the filter.
	pub description: String,
}

impl DependencyEntry {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_group(mut self, group_name: impl Into<String>) -> Self {
		self.group_name = group_name.into();
		self
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}
}

/// Matcher options for the dependency filter.
///
/// Every query character must appear in the name, in order; results keep the
/// catalog order instead of being ranked.
pub(super) fn filter_config() -> Config {
	Config {
		prefilter: true,
		max_typos: Some(0),
		sort: false,
		..Config::default()
	}
}

/// Entries of `catalog` whose name fuzzily matches `query`, in catalog order.
///
/// The query is matched as typed, spaces included; only an empty query
/// matches everything.
#[must_use]
pub fn filter_entries(catalog: &[DependencyEntry], query: &str) -> Vec<DependencyEntry> {
	if query.is_empty() {
		return catalog.to_vec();
	}

	let haystacks: Vec<&str> = catalog.iter().map(|entry| entry.name.as_str()).collect();
	let mut indices: Vec<usize> = match_list(query, &haystacks, &filter_config())
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| entry.index as usize)
		.collect();
	indices.sort_unstable();
	indices.dedup();

	indices
		.into_iter()
		.filter_map(|index| catalog.get(index).cloned())
		.collect()
}

/// Sort entries by name, keeping the relative order of equal names.
#[must_use]
pub fn sort_by_name(mut entries: Vec<DependencyEntry>) -> Vec<DependencyEntry> {
	entries.sort_by(|a, b| a.name.cmp(&b.name));
	entries
}

/// Selected entries first, then the rest; each partition ordered by name.
#[must_use]
pub fn reorder_by_selection(
	catalog: &[DependencyEntry],
	selection: &HashSet<String>,
) -> Vec<DependencyEntry> {
	let mut reordered = catalog.to_vec();
	reordered.sort_by(|a, b| {
		let a_selected = selection.contains(&a.id);
		let b_selected = selection.contains(&b.id);
		b_selected
			.cmp(&a_selected)
			.then_with(|| a.name.cmp(&b.name))
	});
	reordered
}
