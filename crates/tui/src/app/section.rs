/// Focusable parts of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
	#[default]
	Project,
	Language,
	Packaging,
	Java,
	SpringBoot,
	Metadata,
	Dependencies,
	Generate,
}

impl Section {
	pub const ALL: [Section; 8] = [
		Section::Project,
		Section::Language,
		Section::Packaging,
		Section::Java,
		Section::SpringBoot,
		Section::Metadata,
		Section::Dependencies,
		Section::Generate,
	];

	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			Self::Project => "Project",
			Self::Language => "Language",
			Self::Packaging => "Packaging",
			Self::Java => "Java",
			Self::SpringBoot => "Spring Boot",
			Self::Metadata => "Project Metadata",
			Self::Dependencies => "Dependencies",
			Self::Generate => "Generate",
		}
	}

	fn position(self) -> usize {
		Self::ALL
			.iter()
			.position(|section| *section == self)
			.unwrap_or(0)
	}

	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.position() + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn prev(self) -> Self {
		Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tab_order_wraps_both_ways() {
		assert_eq!(Section::Generate.next(), Section::Project);
		assert_eq!(Section::Project.prev(), Section::Generate);
		assert_eq!(Section::Metadata.next(), Section::Dependencies);
	}
}
