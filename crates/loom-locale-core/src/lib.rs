// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core of the Loom locale matcher: LSR triples and the CLDR
//! language-distance engine.
//!
//! This crate owns the baked CLDR language-matching dataset (ordered match
//! rules, match variables, paradigm locales) and computes integer distances
//! between `(language, script, region)` triples with it. It performs no
//! I/O: the dataset is compile-time data, parsed and validated once on
//! first use and shared read-only across threads for the process lifetime.
//!
//! Consumers normally go through `loom-locale`, which layers the lookup and
//! best-fit matchers and the public resolver on top.
//!
//! # Example
//!
//! ```
//! use icu_locid::langid;
//! use loom_locale_core::LanguageData;
//!
//! let data = LanguageData::shared().unwrap();
//! let hk = data.lsr_for(&langid!("zh-HK"));
//! let tw = data.lsr_for(&langid!("zh-TW"));
//! let mo = data.lsr_for(&langid!("zh-MO"));
//!
//! // Hong Kong Chinese is closer to Macau Chinese than to Taiwan Chinese.
//! let to_mo = data.find_matching_distance(&hk, &mo).unwrap();
//! let to_tw = data.find_matching_distance(&hk, &tw).unwrap();
//! assert!(to_mo < to_tw);
//! ```

mod data;
mod distance;
mod error;
mod lsr;
mod rules;

pub use distance::{DEFAULT_MATCHING_THRESHOLD, REQUEST_ORDER_PENALTY};
pub use error::MatchError;
pub use lsr::LsrTriple;
pub use rules::LanguageData;
