// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Best-fit matching: CLDR language-distance scoring over every
//! (requested, available) pair.

use icu_locid::Locale;
use loom_locale_core::{
	LanguageData, MatchError, DEFAULT_MATCHING_THRESHOLD, REQUEST_ORDER_PENALTY,
};
use tracing::{debug, trace};

use crate::extension::strip_unicode_extension;
use crate::MatcherResult;

/// Outcome of one best-match evaluation: the winning pair (as indices into
/// the requested and available lists) and the full distance matrix the
/// decision was made over. The matrix is rebuilt on every call; nothing is
/// cached across invocations.
pub(crate) struct BestMatchOutcome {
	pub matched: Option<(usize, usize)>,
	pub distances: Vec<Vec<u32>>,
}

/// Scores every pair and keeps the globally minimal distance, subject to
/// the threshold cutoff.
///
/// Later requested locales are penalized by their list position, which
/// preserves caller priority without quality weights. Ties keep the first
/// minimum in iteration order, so earlier requested and earlier available
/// locales win them.
pub(crate) fn find_best_match(
	data: &LanguageData,
	requested: &[Locale],
	available: &[Locale],
	threshold: u32,
) -> Result<BestMatchOutcome, MatchError> {
	let available_lsrs: Vec<_> = available.iter().map(|l| data.lsr_for(&l.id)).collect();

	let mut lowest = u32::MAX;
	let mut matched = None;
	let mut distances = Vec::with_capacity(requested.len());
	for (i, desired) in requested.iter().enumerate() {
		let desired_lsr = data.lsr_for(&desired.id);
		let mut row = Vec::with_capacity(available.len());
		for (j, supported_lsr) in available_lsrs.iter().enumerate() {
			let distance = data.find_matching_distance(&desired_lsr, supported_lsr)?
				+ i as u32 * REQUEST_ORDER_PENALTY;
			trace!(desired = %desired, supported = %available[j], distance, "scored pair");
			if distance < lowest {
				lowest = distance;
				matched = Some((i, j));
			}
			row.push(distance);
		}
		distances.push(row);
	}

	if lowest >= threshold {
		matched = None;
	}
	Ok(BestMatchOutcome { matched, distances })
}

/// Best-fit counterpart of the lookup matcher: same extension handling and
/// default fallback, with distance scoring instead of truncation.
pub(crate) fn best_fit_matcher(
	data: &LanguageData,
	available: &[Locale],
	requested: &[Locale],
	default_locale: &Locale,
) -> Result<MatcherResult, MatchError> {
	let outcome = find_best_match(data, requested, available, DEFAULT_MATCHING_THRESHOLD)?;
	match outcome.matched {
		Some((i, j)) => {
			let (_, extension) = strip_unicode_extension(&requested[i].to_string());
			Ok(MatcherResult {
				locale: available[j].clone(),
				extension,
			})
		}
		None => {
			debug!(default = %default_locale, "no pair under the matching threshold");
			Ok(MatcherResult {
				locale: default_locale.clone(),
				extension: None,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use icu_locid::locale;

	fn data() -> &'static LanguageData {
		LanguageData::shared().unwrap()
	}

	#[test]
	fn test_selects_minimal_distance_pair() {
		let available = [locale!("zh-CN"), locale!("zh-TW")];
		let requested = [locale!("zh-HK")];
		let outcome = find_best_match(data(), &requested, &available, DEFAULT_MATCHING_THRESHOLD)
			.unwrap();
		assert_eq!(outcome.matched, Some((0, 1)));
	}

	#[test]
	fn test_threshold_discards_distant_pairs() {
		let available = [locale!("en-US")];
		let requested = [locale!("fr-FR")];
		let outcome = find_best_match(data(), &requested, &available, DEFAULT_MATCHING_THRESHOLD)
			.unwrap();
		assert_eq!(outcome.matched, None);
		assert_eq!(outcome.distances, vec![vec![DEFAULT_MATCHING_THRESHOLD]]);
	}

	#[test]
	fn test_order_penalty_weights_later_entries() {
		let available = [locale!("vi-VN"), locale!("ko-KR")];
		let requested = [locale!("ko-KR"), locale!("vi-VN")];
		let outcome = find_best_match(data(), &requested, &available, DEFAULT_MATCHING_THRESHOLD)
			.unwrap();
		// Exact matches on both rows, but the first requested entry wins.
		assert_eq!(outcome.matched, Some((0, 1)));
		assert_eq!(outcome.distances[0][1], 0);
		assert_eq!(outcome.distances[1][0], REQUEST_ORDER_PENALTY);
	}

	#[test]
	fn test_tie_keeps_first_pair_in_iteration_order() {
		// Both requested entries land on the same available locale at the
		// same weighted distance; the earlier pair is kept.
		let available = [locale!("de-DE")];
		let requested = [locale!("de-AT"), locale!("de-DE")];
		let outcome = find_best_match(data(), &requested, &available, DEFAULT_MATCHING_THRESHOLD)
			.unwrap();
		assert_eq!(outcome.distances, vec![vec![40], vec![40]]);
		assert_eq!(outcome.matched, Some((0, 0)));
	}

	#[test]
	fn test_matcher_reattaches_extension_of_winner() {
		let available = [locale!("fr-FR")];
		let requested = ["fr-FR-u-ca-gregory".parse().unwrap()];
		let result = best_fit_matcher(data(), &available, &requested, &locale!("en-US")).unwrap();
		assert_eq!(result.locale, locale!("fr-FR"));
		assert_eq!(result.extension, Some("-u-ca-gregory".to_owned()));
	}

	#[test]
	fn test_matcher_falls_back_to_default() {
		let available = [locale!("en-US"), locale!("fr-FR")];
		let requested = [locale!("ja-JP")];
		let result = best_fit_matcher(data(), &available, &requested, &locale!("en-US")).unwrap();
		assert_eq!(result.locale, locale!("en-US"));
		assert_eq!(result.extension, None);
	}
}
