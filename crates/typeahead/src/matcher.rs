//! Query-to-candidate matching.
//!
//! The matcher is a pure function from `(query, candidates)` to the ordered
//! list of matching candidates. It has no side effects and no state beyond
//! its configuration, so the same inputs always produce the same output.
//!
//! An empty query matches nothing. This distinguishes "no filter yet" from
//! "show all": the suggestion list only ever opens once the user has typed
//! something.

use crate::candidate::Candidate;

/// Controls how matching handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "uni" won't match "United Kingdom").
    CaseSensitive,
    /// Case-insensitive matching (e.g., "uni" will match "United Kingdom").
    #[default]
    CaseInsensitive,
}

/// Controls where in the label the query has to occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// The label contains the query anywhere.
    #[default]
    Contains,
    /// The label starts with the query.
    Prefix,
}

/// Filters a candidate list against the current query.
///
/// Matching preserves the candidate set's original relative ordering; there
/// is no ranking or scoring beyond containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    strategy: MatchStrategy,
    case_sensitivity: CaseSensitivity,
}

impl Matcher {
    /// Create a matcher with the given strategy and case handling.
    pub fn new(strategy: MatchStrategy, case_sensitivity: CaseSensitivity) -> Self {
        Self {
            strategy,
            case_sensitivity,
        }
    }

    /// Check whether a single label matches the query.
    ///
    /// An empty query never matches.
    pub fn matches(&self, query: &str, label: &str) -> bool {
        if query.is_empty() {
            return false;
        }

        match self.case_sensitivity {
            CaseSensitivity::CaseSensitive => self.occurs(query, label),
            CaseSensitivity::CaseInsensitive => {
                self.occurs(&query.to_lowercase(), &label.to_lowercase())
            }
        }
    }

    fn occurs(&self, query: &str, label: &str) -> bool {
        match self.strategy {
            MatchStrategy::Contains => label.contains(query),
            MatchStrategy::Prefix => label.starts_with(query),
        }
    }

    /// Return the candidates matching `query`, in their original order.
    pub fn filter<T: Candidate>(&self, query: &str, candidates: &[T]) -> Vec<T> {
        let matched: Vec<T> = candidates
            .iter()
            .filter(|c| self.matches(query, c.label()))
            .cloned()
            .collect();

        tracing::trace!(
            target: "typeahead::matcher",
            query,
            candidate_count = candidates.len(),
            match_count = matched.len(),
            "filtered candidates"
        );

        matched
    }
}
