// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use icu_locid::subtags::Language;
use icu_locid::LanguageIdentifier;

/// The (language, script, region) decomposition of a locale identifier.
///
/// An empty string means "unspecified" and acts as a wildcard during rule
/// matching. Triples are plain immutable values; equality and hashing are
/// structural.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LsrTriple {
	pub language: String,
	pub script: String,
	pub region: String,
}

impl LsrTriple {
	/// Builds a triple directly from the identifier's subtags, with no
	/// likely-subtags enrichment. `und` maps to an unspecified language.
	pub fn from_subtags(id: &LanguageIdentifier) -> Self {
		Self {
			language: if id.language == Language::UND {
				String::new()
			} else {
				id.language.as_str().to_owned()
			},
			script: id.script.map(|s| s.as_str().to_owned()).unwrap_or_default(),
			region: id.region.map(|r| r.as_str().to_owned()).unwrap_or_default(),
		}
	}

	/// The language-only sub-triple consulted by the first distance stage.
	pub fn language_only(&self) -> Self {
		Self {
			language: self.language.clone(),
			..Self::default()
		}
	}

	/// The language-script sub-triple consulted by the second distance stage.
	pub fn without_region(&self) -> Self {
		Self {
			language: self.language.clone(),
			script: self.script.clone(),
			region: String::new(),
		}
	}

	/// Canonical `language-script-region` form with unspecified fields
	/// omitted. Used as the paradigm-locale membership key.
	pub fn serialize(&self) -> String {
		let mut out = String::new();
		for part in [&self.language, &self.script, &self.region] {
			if part.is_empty() {
				continue;
			}
			if !out.is_empty() {
				out.push('-');
			}
			out.push_str(part);
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use icu_locid::langid;
	use proptest::prelude::*;

	#[test]
	fn test_from_subtags_full_tag() {
		let lsr = LsrTriple::from_subtags(&langid!("zh-Hant-TW"));
		assert_eq!(lsr.language, "zh");
		assert_eq!(lsr.script, "Hant");
		assert_eq!(lsr.region, "TW");
	}

	#[test]
	fn test_from_subtags_partial_tags() {
		let lsr = LsrTriple::from_subtags(&langid!("fr"));
		assert_eq!(lsr.language, "fr");
		assert_eq!(lsr.script, "");
		assert_eq!(lsr.region, "");

		let lsr = LsrTriple::from_subtags(&langid!("es-419"));
		assert_eq!(lsr.language, "es");
		assert_eq!(lsr.script, "");
		assert_eq!(lsr.region, "419");
	}

	#[test]
	fn test_und_is_fully_unspecified() {
		assert_eq!(LsrTriple::from_subtags(&langid!("und")), LsrTriple::default());
	}

	#[test]
	fn test_serialize_omits_empty_fields() {
		assert_eq!(LsrTriple::from_subtags(&langid!("en-GB")).serialize(), "en-GB");
		assert_eq!(LsrTriple::from_subtags(&langid!("sr-Latn")).serialize(), "sr-Latn");
		assert_eq!(LsrTriple::default().serialize(), "");
	}

	#[test]
	fn test_sub_triples() {
		let lsr = LsrTriple::from_subtags(&langid!("zh-Hant-TW"));
		assert_eq!(lsr.language_only().serialize(), "zh");
		assert_eq!(lsr.without_region().serialize(), "zh-Hant");
	}

	proptest! {
		/// Serialization never produces a leading, trailing or doubled
		/// separator, whatever combination of fields is populated.
		#[test]
		fn serialize_is_well_formed(
			language in "[a-z]{2,3}",
			script in prop::option::of("[A-Z][a-z]{3}"),
			region in prop::option::of("[A-Z]{2}"),
		) {
			let lsr = LsrTriple {
				language,
				script: script.unwrap_or_default(),
				region: region.unwrap_or_default(),
			};
			let serialized = lsr.serialize();
			prop_assert!(!serialized.starts_with('-'));
			prop_assert!(!serialized.ends_with('-'));
			prop_assert!(!serialized.contains("--"));
		}
	}
}
