// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors raised while building or consulting the language-matching dataset.
///
/// Every variant is a data-integrity or invariant fault: an acceptable
/// "no match found" outcome is not an error and is handled by the matchers
/// via the default-locale fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
	/// The ordered rule table was exhausted without a rule covering the
	/// given pair. The shipped table ends in catch-all wildcard rules, so
	/// this can only mean the table data is corrupt.
	#[error("no language match rule covers {desired:?} vs {supported:?}")]
	NoMatchingRule { desired: String, supported: String },

	/// The rule table lacks a catch-all wildcard rule for patterns of the
	/// given subtag count (1 = language, 2 = language-script, 3 = full).
	#[error("language match table has no catch-all rule for {0}-subtag patterns")]
	MissingCatchAll(usize),

	/// A rule references a match variable the dataset does not define.
	#[error("match variable ${0} is not defined")]
	UnknownVariable(String),

	/// A baked table entry could not be parsed.
	#[error("malformed language match data: {0}")]
	MalformedData(String),
}
