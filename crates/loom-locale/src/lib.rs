// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale negotiation for Loom.
//!
//! Given the locales a caller asked for and the locales an application
//! actually ships, this crate resolves the single best supported locale,
//! falling back to a caller-supplied default when nothing acceptable
//! matches. Two interchangeable strategies are provided:
//!
//! - [`MatcherAlgorithm::Lookup`] — strict RFC 4647 prefix truncation in
//!   requested-priority order.
//! - [`MatcherAlgorithm::BestFit`] (the default) — CLDR language-distance
//!   scoring across every (requested, available) pair.
//!
//! Unicode extension sequences (`-u-ca-gregory`, …) never influence
//! matching; they are stripped before resolution and tracked so internal
//! callers can reattach them.
//!
//! Locale identifiers are [`icu_locid::Locale`] values; priority is purely
//! the order of the requested list (no `q=` weighting).
//!
//! # Example
//!
//! ```
//! use icu_locid::locale;
//! use loom_locale::{match_locales, MatcherAlgorithm};
//!
//! let available = [locale!("en-US"), locale!("zh-TW"), locale!("nb-NO")];
//! let default = locale!("en-US");
//!
//! // Cantonese as written in Hong Kong scores closest to zh-TW.
//! let resolved = match_locales(
//! 	&[locale!("zh-HK")],
//! 	&available,
//! 	&default,
//! 	MatcherAlgorithm::BestFit,
//! )
//! .unwrap();
//! assert_eq!(resolved, locale!("zh-TW"));
//!
//! // Lookup is stricter: zh-HK truncates to zh, which is not available.
//! let resolved = match_locales(
//! 	&[locale!("zh-HK")],
//! 	&available,
//! 	&default,
//! 	MatcherAlgorithm::Lookup,
//! )
//! .unwrap();
//! assert_eq!(resolved, locale!("en-US"));
//! ```

use std::collections::HashSet;

use icu_locid::Locale;

mod bestfit;
mod extension;
mod lookup;

pub use lookup::lookup_supported_locales;
pub use loom_locale_core::{
	LanguageData, LsrTriple, MatchError, DEFAULT_MATCHING_THRESHOLD, REQUEST_ORDER_PENALTY,
};

/// Resolution strategy. Exactly two exist, so dispatch is a plain enum
/// match rather than anything open-ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatcherAlgorithm {
	/// RFC 4647 / BCP-47 lookup: subtag truncation, first requested entry
	/// that resolves wins.
	Lookup,
	/// CLDR language-distance scoring with an ordering penalty.
	#[default]
	BestFit,
}

/// What a matcher resolved: the chosen available locale plus the verbatim
/// Unicode extension sequence stripped from the requested tag it came
/// from, for reattachment by internal callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatcherResult {
	pub locale: Locale,
	pub extension: Option<String>,
}

/// Resolves the best available locale for an ordered list of requested
/// locales, falling back to `default_locale` when no acceptable match
/// exists.
///
/// Errors only surface data-integrity faults in the matching dataset; an
/// unmatchable request is not an error.
pub fn match_locales(
	requested: &[Locale],
	available: &[Locale],
	default_locale: &Locale,
	algorithm: MatcherAlgorithm,
) -> Result<Locale, MatchError> {
	let result = match algorithm {
		MatcherAlgorithm::Lookup => lookup::lookup_matcher(available, requested, default_locale),
		MatcherAlgorithm::BestFit => {
			let data = LanguageData::shared()?;
			bestfit::best_fit_matcher(data, available, requested, default_locale)?
		}
	};
	Ok(result.locale)
}

/// Single-requested-locale convenience form of [`match_locales`].
pub fn match_locale(
	requested: &Locale,
	available: &[Locale],
	default_locale: &Locale,
	algorithm: MatcherAlgorithm,
) -> Result<Locale, MatchError> {
	match_locales(
		std::slice::from_ref(requested),
		available,
		default_locale,
		algorithm,
	)
}

/// Deduplicates locales with set semantics and returns their canonical
/// string forms, in arbitrary order.
pub fn canonicalize_locale_list(locales: &[Locale]) -> Vec<String> {
	let set: HashSet<String> = locales.iter().map(ToString::to_string).collect();
	set.into_iter().collect()
}
