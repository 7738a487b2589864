// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! RFC 4647 lookup matching: subtag truncation in requested-priority order.

use icu_locid::Locale;
use tracing::debug;

use crate::extension::strip_unicode_extension;
use crate::MatcherResult;

/// Index of the longest available tag that is a prefix-reduction of
/// `candidate`, found by repeatedly dropping the last subtag.
///
/// A single-character subtag (an extension or private-use marker) is never
/// left as the tail: the cut point moves past it so that
/// `language-script-x-private` does not strand on the marker.
pub(crate) fn best_available_locale(available_tags: &[String], candidate: &str) -> Option<usize> {
	let mut candidate = candidate.to_owned();
	loop {
		if let Some(index) = available_tags.iter().position(|tag| *tag == candidate) {
			return Some(index);
		}
		let cut = candidate.rfind('-')?;
		let cut = if cut >= 2 && candidate.as_bytes()[cut - 2] == b'-' {
			cut - 2
		} else {
			cut
		};
		candidate.truncate(cut);
	}
}

/// Resolves the first requested locale that truncates onto the available
/// set; earlier entries strictly win, whatever a later entry might have
/// matched. Falls back to the default locale when nothing resolves.
pub(crate) fn lookup_matcher(
	available: &[Locale],
	requested: &[Locale],
	default_locale: &Locale,
) -> MatcherResult {
	let available_tags: Vec<String> = available.iter().map(ToString::to_string).collect();
	for locale in requested {
		let (candidate, extension) = strip_unicode_extension(&locale.to_string());
		if let Some(index) = best_available_locale(&available_tags, &candidate) {
			return MatcherResult {
				locale: available[index].clone(),
				extension,
			};
		}
	}
	debug!(default = %default_locale, "lookup exhausted every requested locale");
	MatcherResult {
		locale: default_locale.clone(),
		extension: None,
	}
}

/// The ordered subset of available locales the requested list resolves to,
/// one entry per requested locale that truncates onto the available set.
pub fn lookup_supported_locales(available: &[Locale], requested: &[Locale]) -> Vec<Locale> {
	let available_tags: Vec<String> = available.iter().map(ToString::to_string).collect();
	requested
		.iter()
		.filter_map(|locale| {
			let (candidate, _) = strip_unicode_extension(&locale.to_string());
			best_available_locale(&available_tags, &candidate)
		})
		.map(|index| available[index].clone())
		.collect()
}
