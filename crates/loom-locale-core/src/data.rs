// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Baked CLDR language-matching data.
//!
//! Raw tables extracted from the `written_new` section of the Unicode CLDR
//! `languageInfo.xml` supplemental data, with subtag separators normalized
//! to `-`. The tables are static configuration consumed read-only by the
//! rule parser; they carry no logic of their own.
//!
//! Data sourced from: https://github.com/unicode-org/cldr

/// CLDR release the tables were extracted from.
pub const CLDR_VERSION: &str = "47";

/// Ordered language match rules: (desired, supported, distance, oneway).
///
/// Order is semantically significant: evaluation stops at the first rule
/// whose patterns satisfy both sides. Patterns are
/// `language[-script[-region]]`, where a subtag slot may be `*`, and a
/// region slot may name a match variable (`$var`, negated as `$!var`).
/// Each block ends in a catch-all wildcard rule; the parser rejects the
/// table if any of the three is missing.
pub(crate) const LANGUAGE_MATCHES: &[(&str, &str, u16, bool)] = &[
	// Mutually intelligible or near-identical pairs.
	("no", "nb", 1, false),
	("bs", "hr", 4, false),
	("bs", "sh", 4, false),
	("hr", "sh", 4, false),
	("sr", "sh", 4, false),
	("aa", "ssy", 4, false),
	("gsw", "de", 4, true),
	("lb", "de", 4, true),
	("da", "no", 8, false),
	("da", "nb", 8, false),
	// Fallback preferences for languages whose speakers commonly read a
	// second language; one-way, per CLDR.
	("ab", "ru", 30, true),
	("ach", "en", 30, true),
	("af", "nl", 20, true),
	("ak", "en", 30, true),
	("am", "en", 30, true),
	("ay", "es", 20, true),
	("az", "ru", 30, true),
	("be", "ru", 20, true),
	("bem", "en", 30, true),
	("bh", "hi", 30, true),
	("bn", "en", 30, true),
	("br", "fr", 20, true),
	("ca", "es", 20, true),
	("ceb", "fil", 30, true),
	("chr", "en", 20, true),
	("ckb", "ar", 30, true),
	("co", "fr", 20, true),
	("crs", "fr", 20, true),
	("cs", "sk", 20, false),
	("cy", "en", 20, true),
	("ee", "en", 30, true),
	("eo", "en", 30, true),
	("eu", "es", 20, true),
	("fo", "da", 20, true),
	("fy", "nl", 20, true),
	("ga", "en", 20, true),
	("gaa", "en", 30, true),
	("gd", "en", 20, true),
	("gl", "es", 20, true),
	("gn", "es", 20, true),
	("gu", "hi", 30, true),
	("ha", "en", 30, true),
	("haw", "en", 20, true),
	("ht", "fr", 20, true),
	("ig", "en", 30, true),
	("is", "en", 20, true),
	("jv", "id", 20, true),
	("ka", "en", 30, true),
	("kg", "fr", 30, true),
	("ki", "sw", 30, true),
	("kk", "ru", 30, true),
	("km", "en", 30, true),
	("kn", "en", 30, true),
	("kri", "en", 30, true),
	("ku", "tr", 30, true),
	("ky", "ru", 30, true),
	("la", "it", 20, true),
	("lg", "en", 30, true),
	("ln", "fr", 30, true),
	("lo", "en", 30, true),
	("loz", "en", 30, true),
	("lua", "fr", 30, true),
	("mai", "hi", 20, true),
	("mfe", "en", 30, true),
	("mg", "fr", 30, true),
	("mi", "en", 20, true),
	("ml", "en", 30, true),
	("mn", "ru", 30, true),
	("mr", "hi", 30, true),
	("ms", "id", 30, true),
	("mt", "en", 30, true),
	("my", "en", 30, true),
	("ne", "en", 30, true),
	("nn", "nb", 20, false),
	("nn", "no", 20, false),
	("nso", "en", 30, true),
	("ny", "en", 30, true),
	("nyn", "en", 30, true),
	("oc", "fr", 20, true),
	("om", "en", 30, true),
	("or", "en", 30, true),
	("pa", "en", 30, true),
	("pcm", "en", 20, true),
	("ps", "en", 30, true),
	("qu", "es", 30, true),
	("rm", "de", 20, true),
	("rn", "en", 30, true),
	("rw", "fr", 30, true),
	("sa", "hi", 30, true),
	("sd", "en", 30, true),
	("si", "en", 30, true),
	("sn", "en", 30, true),
	("so", "en", 30, true),
	("sq", "en", 30, true),
	("st", "en", 30, true),
	("su", "id", 20, true),
	("sw", "en", 30, true),
	("ta", "en", 30, true),
	("te", "en", 30, true),
	("tg", "ru", 30, true),
	("ti", "en", 30, true),
	("tk", "ru", 30, true),
	("tlh", "en", 30, true),
	("tn", "en", 30, true),
	("to", "en", 30, true),
	("tt", "ru", 30, true),
	("tum", "en", 30, true),
	("ug", "ru", 30, true),
	("uk", "ru", 20, true),
	("ur", "en", 30, true),
	("uz", "ru", 30, true),
	("wo", "fr", 30, true),
	("xh", "en", 30, true),
	("yi", "en", 30, true),
	("yo", "en", 30, true),
	("za", "zh", 20, true),
	("zu", "en", 30, true),
	// Unrelated languages.
	("*", "*", 80, false),
	// Script differences within a language.
	("zh-Hans", "zh-Hant", 15, true),
	("zh-Hant", "zh-Hans", 19, true),
	("ja-Latn", "ja-Jpan", 5, true),
	("ja-Hani", "ja-Jpan", 5, true),
	("ja-Hira", "ja-Jpan", 5, true),
	("ja-Kana", "ja-Jpan", 5, true),
	("ja-Hrkt", "ja-Jpan", 5, true),
	("ko-Hani", "ko-Kore", 5, true),
	("ko-Hang", "ko-Kore", 5, true),
	("*-*", "*-*", 50, false),
	// Regional clusters.
	("ar-*-$maghreb", "ar-*-$maghreb", 4, false),
	("ar-*-$!maghreb", "ar-*-$!maghreb", 4, false),
	("ar-*-*", "ar-*-*", 5, false),
	("en-*-$enUS", "en-*-$enUS", 4, false),
	("en-*-$!enUS", "en-*-GB", 3, false),
	("en-*-$!enUS", "en-*-$!enUS", 4, false),
	("en-*-*", "en-*-*", 5, false),
	("es-*-$americas", "es-*-$americas", 4, false),
	("es-*-$!americas", "es-*-$!americas", 4, false),
	("es-*-*", "es-*-*", 5, false),
	("pt-*-$americas", "pt-*-$americas", 4, false),
	("pt-*-$!americas", "pt-*-$!americas", 4, false),
	("pt-*-*", "pt-*-*", 5, false),
	("zh-Hant-$cnsar", "zh-Hant-$cnsar", 4, false),
	("zh-Hant-$!cnsar", "zh-Hant-$!cnsar", 4, false),
	("zh-Hant-*", "zh-Hant-*", 5, false),
	("*-*-*", "*-*-*", 4, false),
];

/// Match variables referenced by region slots, `+`-separated as in the
/// CLDR source. An entry may name a region group from [`REGION_GROUPS`],
/// expanded one level when the dataset is built.
pub(crate) const MATCH_VARIABLES: &[(&str, &str)] = &[
	("$enUS", "AS+CA+GU+MH+MP+PH+PR+UM+US+VI"),
	("$cnsar", "HK+MO"),
	("$americas", "019"),
	("$maghreb", "MA+DZ+TN+LY+MR+EH"),
];

/// One level of UN M.49 region containment, flattened to the country codes
/// (and contained macroregion codes) of each group a match variable uses.
pub(crate) const REGION_GROUPS: &[(&str, &str)] = &[(
	"019",
	"003+005+013+021+029+419+\
	 AG+AI+AR+AW+BB+BL+BM+BO+BQ+BR+BS+BZ+CA+CL+CO+CR+CU+CW+DM+DO+EC+FK+\
	 GD+GF+GL+GP+GT+GY+HN+HT+JM+KN+KY+LC+MF+MQ+MS+MX+NI+PA+PE+PM+PR+PY+\
	 SR+SV+SX+TC+TT+US+UY+VC+VE+VG+VI",
)];

/// Paradigm locales: the "default" regional variants of a language,
/// favored by one distance point when exactly one side of a comparison is
/// paradigm.
pub(crate) const PARADIGM_LOCALES: &str = "en en-GB es es-419 pt-BR pt-PT";
