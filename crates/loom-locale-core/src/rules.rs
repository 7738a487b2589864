// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use icu_locid::LanguageIdentifier;
use icu_locid_transform::LocaleExpander;

use crate::data;
use crate::error::MatchError;
use crate::lsr::LsrTriple;

/// One subtag slot of a match-rule pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubtagPattern {
	/// The pattern has no slot at this position.
	Absent,
	/// `*`
	Any,
	/// A literal subtag.
	Literal(&'static str),
	/// `$var` / `$!var`, resolved to an index into the expanded variable
	/// sets when the dataset is built.
	Variable { set: usize, negated: bool },
}

impl SubtagPattern {
	/// A slot matches an unspecified (empty) field unconditionally, except
	/// for variable slots, which always test set membership.
	fn matches(self, field: &str, sets: &[HashSet<&'static str>]) -> bool {
		match self {
			Self::Variable { set, negated } => sets[set].contains(field) != negated,
			_ if field.is_empty() => true,
			Self::Any => true,
			Self::Literal(subtag) => subtag == field,
			Self::Absent => false,
		}
	}
}

/// A parsed `language[-script[-region]]` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RulePattern {
	pub language: SubtagPattern,
	pub script: SubtagPattern,
	pub region: SubtagPattern,
}

impl RulePattern {
	pub(crate) fn matches(&self, lsr: &LsrTriple, sets: &[HashSet<&'static str>]) -> bool {
		self.language.matches(&lsr.language, sets)
			&& self.script.matches(&lsr.script, sets)
			&& self.region.matches(&lsr.region, sets)
	}

	/// Number of subtag slots the pattern carries (1..=3).
	fn len(&self) -> usize {
		[self.language, self.script, self.region]
			.iter()
			.filter(|slot| **slot != SubtagPattern::Absent)
			.count()
	}

	fn is_catch_all(&self) -> bool {
		[self.language, self.script, self.region]
			.iter()
			.all(|slot| matches!(slot, SubtagPattern::Any | SubtagPattern::Absent))
	}
}

/// One entry of the ordered match-rule table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MatchRule {
	pub desired: RulePattern,
	pub supported: RulePattern,
	pub distance: u16,
	pub oneway: bool,
}

/// The parsed, immutable language-matching dataset: the ordered rule table,
/// the expanded match-variable sets, the paradigm-locale set, and the
/// likely-subtags expander used to derive LSR triples.
///
/// Built once on first use and shared read-only for the process lifetime;
/// every resolution call receives the same `&'static` handle.
pub struct LanguageData {
	pub(crate) rules: Vec<MatchRule>,
	pub(crate) variable_sets: Vec<HashSet<&'static str>>,
	pub(crate) paradigms: HashSet<String>,
	expander: LocaleExpander,
}

static SHARED: OnceLock<Result<LanguageData, MatchError>> = OnceLock::new();

impl LanguageData {
	/// The process-wide dataset handle.
	pub fn shared() -> Result<&'static LanguageData, MatchError> {
		SHARED.get_or_init(Self::build).as_ref().map_err(Clone::clone)
	}

	/// CLDR release the underlying tables were extracted from.
	pub fn cldr_version() -> &'static str {
		data::CLDR_VERSION
	}

	fn build() -> Result<LanguageData, MatchError> {
		let groups: HashMap<&str, &str> = data::REGION_GROUPS.iter().copied().collect();

		let mut variable_names = HashMap::new();
		let mut variable_sets = Vec::with_capacity(data::MATCH_VARIABLES.len());
		for (id, value) in data::MATCH_VARIABLES {
			let name = id.strip_prefix('$').ok_or_else(|| {
				MatchError::MalformedData(format!("match variable id {id:?} lacks '$'"))
			})?;
			let mut set = HashSet::new();
			for entry in value.split('+') {
				match groups.get(entry) {
					Some(group) => set.extend(group.split('+')),
					None => {
						set.insert(entry);
					}
				}
			}
			variable_names.insert(name, variable_sets.len());
			variable_sets.push(set);
		}

		let mut rules = Vec::with_capacity(data::LANGUAGE_MATCHES.len());
		for (desired, supported, distance, oneway) in data::LANGUAGE_MATCHES {
			rules.push(MatchRule {
				desired: parse_pattern(desired, &variable_names)?,
				supported: parse_pattern(supported, &variable_names)?,
				distance: *distance,
				oneway: *oneway,
			});
		}
		validate_catch_alls(&rules)?;

		let expander = LocaleExpander::new_extended();

		// Paradigm membership is tested against serialized stage triples:
		// the language stage sees bare tags, the region stage sees
		// likely-subtags-maximized ones, so both forms go into the set.
		let mut paradigms = HashSet::new();
		for tag in data::PARADIGM_LOCALES.split_whitespace() {
			let id: LanguageIdentifier = tag.parse().map_err(|_| {
				MatchError::MalformedData(format!("paradigm locale {tag:?} is not a language identifier"))
			})?;
			paradigms.insert(LsrTriple::from_subtags(&id).serialize());
			paradigms.insert(maximized(&expander, &id).serialize());
		}

		Ok(LanguageData {
			rules,
			variable_sets,
			paradigms,
			expander,
		})
	}

	/// Derives the LSR triple the distance engine matches on: the
	/// identifier's subtags with unspecified script and region recovered
	/// from the likely-subtags relation. A fully unspecified identifier
	/// stays unspecified.
	pub fn lsr_for(&self, id: &LanguageIdentifier) -> LsrTriple {
		if id.language.is_empty() && id.script.is_none() && id.region.is_none() {
			return LsrTriple::default();
		}
		maximized(&self.expander, id)
	}

	pub(crate) fn is_paradigm(&self, lsr: &LsrTriple) -> bool {
		self.paradigms.contains(&lsr.serialize())
	}
}

fn maximized(expander: &LocaleExpander, id: &LanguageIdentifier) -> LsrTriple {
	let mut maxed = id.clone();
	let _ = expander.maximize(&mut maxed);
	LsrTriple::from_subtags(&maxed)
}

fn parse_pattern(
	raw: &'static str,
	variables: &HashMap<&str, usize>,
) -> Result<RulePattern, MatchError> {
	let mut slots = raw.split('-');
	let language = parse_slot(slots.next(), variables)?;
	let script = parse_slot(slots.next(), variables)?;
	let region = parse_slot(slots.next(), variables)?;
	if language == SubtagPattern::Absent || slots.next().is_some() {
		return Err(MatchError::MalformedData(format!(
			"match rule pattern {raw:?} has an invalid subtag count"
		)));
	}
	Ok(RulePattern {
		language,
		script,
		region,
	})
}

fn parse_slot(
	raw: Option<&'static str>,
	variables: &HashMap<&str, usize>,
) -> Result<SubtagPattern, MatchError> {
	let Some(raw) = raw else {
		return Ok(SubtagPattern::Absent);
	};
	if raw == "*" {
		return Ok(SubtagPattern::Any);
	}
	if let Some(var) = raw.strip_prefix('$') {
		let (name, negated) = match var.strip_prefix('!') {
			Some(name) => (name, true),
			None => (var, false),
		};
		let set = *variables
			.get(name)
			.ok_or_else(|| MatchError::UnknownVariable(name.to_owned()))?;
		return Ok(SubtagPattern::Variable { set, negated });
	}
	if raw.is_empty() {
		return Err(MatchError::MalformedData("empty subtag slot".to_owned()));
	}
	Ok(SubtagPattern::Literal(raw))
}

/// Every stage of the distance computation must be able to resolve a
/// distance for any pair, so the table needs a catch-all wildcard rule for
/// each pattern width.
fn validate_catch_alls(rules: &[MatchRule]) -> Result<(), MatchError> {
	for width in 1..=3 {
		let present = rules.iter().any(|rule| {
			rule.desired.len() == width
				&& rule.desired.is_catch_all()
				&& rule.supported.is_catch_all()
				&& !rule.oneway
		});
		if !present {
			return Err(MatchError::MissingCatchAll(width));
		}
	}
	Ok(())
}
