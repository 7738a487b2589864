// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::trace;

use crate::error::MatchError;
use crate::lsr::LsrTriple;
use crate::rules::LanguageData;

/// Distances at or above this value are treated as "no acceptable match".
/// Calibrated as roughly two languages in unrelated regions of the same
/// cluster.
pub const DEFAULT_MATCHING_THRESHOLD: u32 = 838;

/// Penalty added per position in the requested-locale list, so that list
/// order encodes priority without explicit quality weights.
pub const REQUEST_ORDER_PENALTY: u32 = 40;

impl LanguageData {
	/// Total match distance between two LSR triples.
	///
	/// Accumulates over three stages (language, script, region); a stage
	/// only contributes when the triples differ on that field, and each
	/// stage consults the rule table with the progressively fuller
	/// sub-triple.
	pub fn find_matching_distance(
		&self,
		desired: &LsrTriple,
		supported: &LsrTriple,
	) -> Result<u32, MatchError> {
		let mut distance = 0;
		if desired.language != supported.language {
			distance += self.rule_distance(&desired.language_only(), &supported.language_only())?;
		}
		if desired.script != supported.script {
			distance += self.rule_distance(&desired.without_region(), &supported.without_region())?;
		}
		if desired.region != supported.region {
			distance += self.rule_distance(desired, supported)?;
		}
		Ok(distance)
	}

	/// Distance assigned by the first rule in table order that covers the
	/// pair. Non-oneway rules are retried with the sides swapped before
	/// moving on. Exhausting the table is a data-integrity fault: the
	/// shipped table ends in catch-all rules for every stage.
	fn rule_distance(&self, desired: &LsrTriple, supported: &LsrTriple) -> Result<u32, MatchError> {
		for (index, rule) in self.rules.iter().enumerate() {
			let mut matched = rule.desired.matches(desired, &self.variable_sets)
				&& rule.supported.matches(supported, &self.variable_sets);
			if !matched && !rule.oneway {
				matched = rule.supported.matches(desired, &self.variable_sets)
					&& rule.desired.matches(supported, &self.variable_sets);
			}
			if !matched {
				continue;
			}
			let mut distance = u32::from(rule.distance) * 10;
			// Favor the side sitting on a paradigm locale, but only when
			// the other side is not.
			if self.is_paradigm(desired) != self.is_paradigm(supported) {
				distance -= 1;
			}
			trace!(
				desired = %desired.serialize(),
				supported = %supported.serialize(),
				rule = index,
				distance,
				"match rule hit"
			);
			return Ok(distance);
		}
		Err(MatchError::NoMatchingRule {
			desired: desired.serialize(),
			supported: supported.serialize(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use icu_locid::langid;
	use icu_locid::LanguageIdentifier;

	fn distance(desired: &LanguageIdentifier, supported: &LanguageIdentifier) -> u32 {
		let data = LanguageData::shared().unwrap();
		data.find_matching_distance(&data.lsr_for(desired), &data.lsr_for(supported))
			.unwrap()
	}

	#[test]
	fn test_identical_locales_have_zero_distance() {
		assert_eq!(distance(&langid!("en-US"), &langid!("en-US")), 0);
		assert_eq!(distance(&langid!("de"), &langid!("de")), 0);
	}

	#[test]
	fn test_likely_subtags_close_the_gap() {
		// Both sides maximize to the same triple.
		assert_eq!(distance(&langid!("zh-CN"), &langid!("zh-Hans")), 0);
		assert_eq!(distance(&langid!("zh-TW"), &langid!("zh-Hant")), 0);
		assert_eq!(distance(&langid!("en-US"), &langid!("en")), 0);
	}

	#[test]
	fn test_regional_cluster_distances() {
		// Same cluster ($cnsar on both sides).
		assert_eq!(distance(&langid!("zh-HK"), &langid!("zh-MO")), 40);
		// Cluster vs the rest of the Hant world.
		assert_eq!(distance(&langid!("zh-HK"), &langid!("zh-Hant")), 50);
	}

	#[test]
	fn test_script_difference_dominates_region() {
		// zh-HK is Hant, zh-CN is Hans: 19*10 for the script stage plus
		// the generic region stage.
		assert_eq!(distance(&langid!("zh-HK"), &langid!("zh-CN")), 230);
	}

	#[test]
	fn test_close_language_pairs() {
		// da -> nb rule (8), plus the generic region stage.
		assert_eq!(distance(&langid!("da-DK"), &langid!("nb-NO")), 120);
		// no -> nb (1): near-identical; both sides maximize to region NO,
		// so only the language stage contributes.
		assert_eq!(distance(&langid!("no"), &langid!("nb")), 10);
	}

	#[test]
	fn test_oneway_rules_do_not_apply_reversed() {
		// ms -> id is oneway: requesting ms against supported id is close,
		// the reverse falls through to the unrelated-language rule.
		let forward = distance(&langid!("ms-MY"), &langid!("id-ID"));
		let reverse = distance(&langid!("id-ID"), &langid!("ms-MY"));
		assert_eq!(forward, 340);
		assert!(reverse >= 800);
	}

	#[test]
	fn test_paradigm_locale_shaves_one_point() {
		let data = LanguageData::shared().unwrap();
		// Language stage: fr vs en hits the wildcard rule (80 * 10) and
		// exactly one side (en) is a paradigm locale.
		let fr = data.lsr_for(&langid!("fr")).language_only();
		let en = data.lsr_for(&langid!("en")).language_only();
		assert_eq!(data.find_matching_distance(&fr, &en).unwrap(), 799);
	}

	#[test]
	fn test_threshold_boundary_pair() {
		// The calibration case behind DEFAULT_MATCHING_THRESHOLD: the
		// closest "unrelated languages" pairing lands exactly on it.
		assert_eq!(
			distance(&langid!("fr-FR"), &langid!("en-US")),
			DEFAULT_MATCHING_THRESHOLD
		);
	}

	#[test]
	fn test_english_regional_preferences() {
		// Non-US English prefers en-GB (3) over other non-US English (4)
		// over US English (5).
		let au_gb = distance(&langid!("en-AU"), &langid!("en-GB"));
		let au_nz = distance(&langid!("en-AU"), &langid!("en-NZ"));
		let au_us = distance(&langid!("en-AU"), &langid!("en-US"));
		assert!(au_gb < au_nz);
		assert!(au_nz < au_us);
	}

	#[test]
	fn test_determinism() {
		let first = distance(&langid!("pt-MZ"), &langid!("pt-BR"));
		for _ in 0..8 {
			assert_eq!(distance(&langid!("pt-MZ"), &langid!("pt-BR")), first);
		}
	}
}
