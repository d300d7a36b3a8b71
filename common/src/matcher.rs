//! Manual vs. generated test case matching
//!
//! Each manual case greedily picks its most similar candidate by title.
//! Candidates whose title was never picked are reported as new suggestions.

use crate::similarity::similarity;
use crate::types::{MatchResult, Report, TestCaseRecord};
use std::collections::HashSet;

/// Default minimum similarity for a match
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Matching options
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    /// Minimum similarity (inclusive) to classify a pair as matched
    pub threshold: f64,
    /// Emit an `Unmatched` entry for manual cases without a match
    /// instead of leaving them out of the report
    pub report_unmatched: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            report_unmatched: false,
        }
    }
}

impl MatchOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }
}

/// Best candidate for a title: `(index, score)`
///
/// Ties keep the first candidate. `None` for an empty candidate list.
pub fn best_candidate(title: &str, candidates: &[TestCaseRecord]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, candidate) in candidates.iter().enumerate() {
        let score = similarity(title, &candidate.title);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }

    best
}

/// Compare manual test cases against generated candidates
///
/// Never fails; empty inputs yield a possibly empty report.
pub fn match_test_cases(
    manual: &[TestCaseRecord],
    candidates: &[TestCaseRecord],
    options: &MatchOptions,
) -> Report {
    let mut results = Vec::with_capacity(manual.len() + candidates.len());
    // Claimed by title value, so a never-selected duplicate title is claimed too
    let mut claimed: HashSet<&str> = HashSet::new();

    for case in manual {
        let best = best_candidate(&case.title, candidates);

        match best {
            Some((idx, score)) if score >= options.threshold => {
                let candidate = &candidates[idx];
                claimed.insert(candidate.title.as_str());
                results.push(MatchResult::Matched {
                    manual_title: case.title.clone(),
                    candidate_title: candidate.title.clone(),
                    candidate_steps: candidate.steps.clone(),
                    score,
                });
            }
            _ if options.report_unmatched => {
                results.push(MatchResult::Unmatched {
                    manual_title: case.title.clone(),
                    best_score: best.map(|(_, score)| score).unwrap_or(0.0),
                });
            }
            _ => {}
        }
    }

    for candidate in candidates {
        if !claimed.contains(candidate.title.as_str()) {
            results.push(MatchResult::NewSuggestion {
                candidate_title: candidate.title.clone(),
                candidate_steps: candidate.steps.clone(),
            });
        }
    }

    Report::new(results, manual.len(), candidates.len())
}

/// [`match_test_cases`] with only a threshold
pub fn compare_test_cases(
    manual: &[TestCaseRecord],
    candidates: &[TestCaseRecord],
    threshold: f64,
) -> Report {
    match_test_cases(manual, candidates, &MatchOptions::with_threshold(threshold))
}
