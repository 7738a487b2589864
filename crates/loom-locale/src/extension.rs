// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Unicode-extension isolation.
//!
//! Matching must ignore `-u-…` preference sequences (calendar, numbering
//! system, …) but preserve them verbatim for the caller to reattach. The
//! scanner below recognizes exactly `-u(-[0-9a-z]{2,8})+`, case
//! insensitively, as a hand-rolled tokenizer.

/// Splits a tag into its no-extension form and the verbatim Unicode
/// extension sequence, if one is present.
pub(crate) fn strip_unicode_extension(tag: &str) -> (String, Option<String>) {
	match find_extension(tag) {
		Some((start, end)) => {
			let mut stripped = String::with_capacity(tag.len() - (end - start));
			stripped.push_str(&tag[..start]);
			stripped.push_str(&tag[end..]);
			(stripped, Some(tag[start..end].to_owned()))
		}
		None => (tag.to_owned(), None),
	}
}

/// Byte range of the first `-u(-[0-9a-z]{2,8})+` sequence in `tag`.
fn find_extension(tag: &str) -> Option<(usize, usize)> {
	let bytes = tag.as_bytes();
	for start in 0..bytes.len() {
		if bytes[start] != b'-' || start + 2 >= bytes.len() {
			continue;
		}
		if !bytes[start + 1].eq_ignore_ascii_case(&b'u') || bytes[start + 2] != b'-' {
			continue;
		}
		// `start + 2` sits on the separator introducing the first group;
		// consume groups of 2-8 alphanumerics for as long as they come.
		let mut end = start + 2;
		while end < bytes.len() && bytes[end] == b'-' {
			let group_len = bytes[end + 1..]
				.iter()
				.take(8)
				.take_while(|b| b.is_ascii_alphanumeric())
				.count();
			if group_len < 2 {
				break;
			}
			end += 1 + group_len;
		}
		if end > start + 2 {
			return Some((start, end));
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_no_extension() {
		assert_eq!(strip_unicode_extension("en-US"), ("en-US".to_owned(), None));
		assert_eq!(strip_unicode_extension("fr"), ("fr".to_owned(), None));
	}

	#[test]
	fn test_single_keyword() {
		assert_eq!(
			strip_unicode_extension("fr-FR-u-ca-gregory"),
			("fr-FR".to_owned(), Some("-u-ca-gregory".to_owned()))
		);
	}

	#[test]
	fn test_multiple_keywords() {
		assert_eq!(
			strip_unicode_extension("de-DE-u-co-phonebk-nu-latn"),
			("de-DE".to_owned(), Some("-u-co-phonebk-nu-latn".to_owned()))
		);
	}

	#[test]
	fn test_stops_at_private_use() {
		// `x` is a single-character subtag and cannot belong to the
		// extension sequence.
		assert_eq!(
			strip_unicode_extension("fr-FR-u-nu-latn-x-priv"),
			("fr-FR-x-priv".to_owned(), Some("-u-nu-latn".to_owned()))
		);
	}

	#[test]
	fn test_bare_u_singleton_is_not_an_extension() {
		assert_eq!(
			strip_unicode_extension("fr-u-x-foo"),
			("fr-u-x-foo".to_owned(), None)
		);
	}

	#[test]
	fn test_u_inside_longer_subtag_is_not_an_extension() {
		assert_eq!(strip_unicode_extension("fr-us-ca"), ("fr-us-ca".to_owned(), None));
		assert_eq!(strip_unicode_extension("hu-HU"), ("hu-HU".to_owned(), None));
	}

	#[test]
	fn test_case_insensitive_singleton() {
		assert_eq!(
			strip_unicode_extension("fr-FR-U-CA-GREGORY"),
			("fr-FR".to_owned(), Some("-U-CA-GREGORY".to_owned()))
		);
	}
}
