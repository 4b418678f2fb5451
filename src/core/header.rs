// src/core/header.rs
use crate::core::references::{LineMap, ReferenceStore};
use crate::error::Error;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::collections::HashMap;

/// Copyright years accepted when comparing with [`MatchOptions::any_year`].
/// Beware the Y2100 problem.
pub const YEAR_PATTERN: &str = r"20\d\d";
const YEAR_PLACEHOLDER: &str = "YEAR";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Treat every `20xx` year as equal to any other when comparing lines.
    pub any_year: bool,
}

/// Compiles the pattern that removes `preamble` from the start of a file.
///
/// The preamble lines are matched literally and case-insensitively at the
/// very start of the content, separated by `\n` or `\r\n`. The rest of the
/// last preamble line, its newline and any blank lines after it are removed
/// too.
///
/// # Errors
///
/// Returns an error if the escaped preamble exceeds the regex size limits.
#[inline]
pub fn preamble_regex(preamble: &[String]) -> Result<Regex, Error> {
    let escaped = preamble
        .iter()
        .map(|line| regex::escape(line))
        .collect::<Vec<_>>()
        .join(r"\r?\n");
    let regex = RegexBuilder::new(&format!(r"\A{escaped}.*\r?\n(?:\r?\n)*"))
        .case_insensitive(true)
        .build()?;
    Ok(regex)
}

/// Removes at most one leading occurrence of the preamble from `contents`.
///
/// # Errors
///
/// See [`preamble_regex`].
#[inline]
pub fn strip_preamble<'a>(contents: &'a str, preamble: &[String]) -> Result<Cow<'a, str>, Error> {
    Ok(preamble_regex(preamble)?.replace(contents, ""))
}

/// Checks that the leading lines of `contents` equal `reference`, line for line.
///
/// `contents` must already have its preamble removed. A file with fewer lines
/// than the reference fails. Lines past the reference are not inspected.
/// With `year`, every match of it is replaced by a placeholder on both sides
/// before comparing.
#[inline]
#[must_use]
pub fn leading_lines_match(contents: &str, reference: &[String], year: Option<&Regex>) -> bool {
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() < reference.len() {
        return false;
    }

    lines
        .iter()
        .zip(reference)
        .all(|(line, expected)| match year {
            Some(year) => {
                year.replace_all(line, YEAR_PLACEHOLDER)
                    == year.replace_all(expected, YEAR_PLACEHOLDER)
            }
            None => *line == expected.as_str(),
        })
}

/// Tests whether `contents` starts with the boilerplate registered for `key`.
///
/// # Arguments
///
/// * `contents` - The full text of the file
/// * `key` - The key the file was classified under
/// * `references` - Reference lines keyed by extension or basename
/// * `preambles` - Optional preamble lines keyed the same way
///
/// # Returns
///
/// * `Ok(true)` if the header matches the reference exactly
/// * `Ok(false)` otherwise
///
/// # Errors
///
/// This function may return an error if:
/// * `key` has no reference; callers are expected to filter such files out
/// * The preamble cannot be compiled into a pattern
#[inline]
pub fn has_valid_header(
    contents: &str,
    key: &str,
    references: &LineMap,
    preambles: &LineMap,
) -> Result<bool, Error> {
    let reference = references.get(key).ok_or_else(|| Error::UnknownKey {
        key: key.to_owned(),
    })?;

    let body = match preambles.get(key) {
        Some(preamble) => strip_preamble(contents, preamble)?,
        None => Cow::Borrowed(contents),
    };

    Ok(leading_lines_match(&body, reference, None))
}

/// Header matcher with every preamble pattern compiled once up front.
#[derive(Debug)]
pub struct HeaderMatcher<'a> {
    store: &'a ReferenceStore,
    preambles: HashMap<String, Regex>,
    year: Option<Regex>,
}

impl<'a> HeaderMatcher<'a> {
    /// # Errors
    ///
    /// Returns an error if a preamble cannot be compiled into a pattern.
    #[inline]
    pub fn new(store: &'a ReferenceStore, options: MatchOptions) -> Result<Self, Error> {
        let preambles = store
            .preambles()
            .iter()
            .map(|(key, lines)| Ok((key.clone(), preamble_regex(lines)?)))
            .collect::<Result<HashMap<_, _>, Error>>()?;

        let year = if options.any_year {
            Some(Regex::new(YEAR_PATTERN)?)
        } else {
            None
        };

        Ok(Self {
            store,
            preambles,
            year,
        })
    }

    /// Same check as [`has_valid_header`], using the precompiled patterns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] if `key` has no reference.
    #[inline]
    pub fn matches(&self, contents: &str, key: &str) -> Result<bool, Error> {
        let reference = self
            .store
            .reference(key)
            .ok_or_else(|| Error::UnknownKey {
                key: key.to_owned(),
            })?;

        let body = self
            .preambles
            .get(key)
            .map_or(Cow::Borrowed(contents), |regex| regex.replace(contents, ""));

        Ok(leading_lines_match(&body, reference, self.year.as_ref()))
    }
}
