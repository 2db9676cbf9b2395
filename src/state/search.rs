//! Literal search with smart case and wraparound scanning.
//!
//! User text is always escaped before compilation, so every term is a plain
//! substring. A term containing an ASCII uppercase letter matches
//! case-sensitively; an all-lowercase term matches case-insensitively.

use crate::store::LogStore;
use regex::{Regex, RegexBuilder};
use std::ops::Range;
use thiserror::Error;
use tracing::debug;

// ===== CasePolicy =====

/// How a term compares letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePolicy {
    /// Exact case.
    Sensitive,
    /// Case folded.
    Insensitive,
}

impl CasePolicy {
    /// Smart case: sensitive iff `term` contains an ASCII uppercase letter.
    pub fn smart(term: &str) -> Self {
        if term.chars().any(|c| c.is_ascii_uppercase()) {
            CasePolicy::Sensitive
        } else {
            CasePolicy::Insensitive
        }
    }
}

// ===== LiteralMatcher =====

/// Failure to compile an escaped term.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// The escaped term exceeded the regex engine's size limit.
    #[error("search term too large to compile: {0}")]
    TooLarge(#[from] regex::Error),
}

/// A compiled literal term with its case policy.
///
/// Built once per term change and reused for every scan and highlight pass.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    term: String,
    case: CasePolicy,
    regex: Regex,
}

impl LiteralMatcher {
    /// Compile `term` as an escaped literal using smart case.
    ///
    /// # Errors
    /// Only when the escaped term is larger than the regex size limit.
    pub fn new(term: &str) -> Result<Self, MatcherError> {
        let case = CasePolicy::smart(term);
        let regex = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(case == CasePolicy::Insensitive)
            .build()?;
        Ok(Self {
            term: term.to_string(),
            case,
            regex,
        })
    }

    /// The term as typed.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Case policy chosen for the term.
    pub fn case_policy(&self) -> CasePolicy {
        self.case
    }

    /// Check whether `text` contains the term.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Byte ranges of the non-overlapping matches in `text`, left to right.
    pub fn find_iter<'t>(&'t self, text: &'t str) -> impl Iterator<Item = Range<usize>> + 't {
        self.regex.find_iter(text).map(|m| m.range())
    }
}

// ===== SearchState =====

/// Active search term and highlight flag.
///
/// An empty term leaves the search inactive; scans are then no-ops.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    matcher: Option<LiteralMatcher>,
    highlight: bool,
}

impl SearchState {
    /// Inactive search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the term.
    ///
    /// An empty `term` clears the search. On error the previous term stays.
    pub fn set_term(&mut self, term: &str) -> Result<(), MatcherError> {
        self.matcher = if term.is_empty() {
            None
        } else {
            let matcher = LiteralMatcher::new(term)?;
            debug!(term, case = ?matcher.case_policy(), "search term set");
            Some(matcher)
        };
        Ok(())
    }

    /// The active matcher, if any.
    pub fn matcher(&self) -> Option<&LiteralMatcher> {
        self.matcher.as_ref()
    }

    /// The active term, if any.
    pub fn term(&self) -> Option<&str> {
        self.matcher.as_ref().map(LiteralMatcher::term)
    }

    /// Whether a term is set.
    pub fn is_active(&self) -> bool {
        self.matcher.is_some()
    }

    /// Whether matches should be highlighted.
    pub fn highlight(&self) -> bool {
        self.highlight
    }

    /// Turn highlighting on or off.
    pub fn set_highlight(&mut self, on: bool) {
        self.highlight = on;
    }

    /// Matcher to highlight with: present only when a term is set and
    /// highlighting is on.
    pub fn highlight_matcher(&self) -> Option<&LiteralMatcher> {
        self.matcher.as_ref().filter(|_| self.highlight)
    }
}

// ===== Scanning =====

/// Next matching record after `selected`, wrapping past the end.
///
/// Scans `selected + 1 ..= last`, then `0 ..= selected`. The selected record
/// itself is checked last.
pub fn find_forward(store: &LogStore, matcher: &LiteralMatcher, selected: usize) -> Option<usize> {
    let total = store.total_count();
    let found = (1..=total)
        .map(|offset| (selected + offset) % total)
        .find(|&index| record_matches(store, matcher, index));
    debug!(term = matcher.term(), selected, ?found, "search forward");
    found
}

/// Previous matching record before `selected`, wrapping past the start.
///
/// Scans `selected - 1 ..= 0`, then `last ..= selected`. The selected record
/// itself is checked last.
pub fn find_backward(store: &LogStore, matcher: &LiteralMatcher, selected: usize) -> Option<usize> {
    let total = store.total_count();
    let selected = selected % total.max(1);
    let found = (1..=total)
        .map(|offset| (selected + total - offset) % total)
        .find(|&index| record_matches(store, matcher, index));
    debug!(term = matcher.term(), selected, ?found, "search backward");
    found
}

fn record_matches(store: &LogStore, matcher: &LiteralMatcher, index: usize) -> bool {
    store
        .record(index)
        .is_some_and(|record| matcher.is_match(record.plain_text()))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
