//! Comparison pipeline tests
//!
//! Generation is replaced with fixed candidate lists

use tempfile::tempdir;
use testcase_ai_common::{GenerationSpec, MatchOptions, MatchResult, MatchStatus, TestCaseRecord};
use testcase_ai_rust::compare::run_comparison;
use testcase_ai_rust::error::{Result, TestCaseAiError};
use testcase_ai_rust::generator::{save_candidates, CandidateGenerator, FileCandidates};

struct FixedCandidates(Vec<TestCaseRecord>);

impl CandidateGenerator for FixedCandidates {
    async fn generate(&self, _spec: &GenerationSpec) -> Result<Vec<TestCaseRecord>> {
        Ok(self.0.clone())
    }
}

struct FailingGenerator;

impl CandidateGenerator for FailingGenerator {
    async fn generate(&self, _spec: &GenerationSpec) -> Result<Vec<TestCaseRecord>> {
        Err(TestCaseAiError::Timeout(120))
    }
}

fn record(title: &str, steps: &str) -> TestCaseRecord {
    TestCaseRecord::new(title, steps)
}

fn spec() -> GenerationSpec {
    GenerationSpec::new("Shop")
}

#[tokio::test]
async fn test_match_and_suggestion() {
    let manual = vec![record("Login with valid password", "m1")];
    let generator = FixedCandidates(vec![
        record("Login with valid credentials", "c1"),
        record("Search returns results", "c2"),
    ]);

    let outcome = run_comparison(&manual, &generator, &spec(), &MatchOptions::default())
        .await
        .expect("comparison failed");

    assert_eq!(outcome.candidates.len(), 2);
    let statuses: Vec<MatchStatus> = outcome.report.iter().map(|r| r.status()).collect();
    assert_eq!(statuses, vec![MatchStatus::Matched, MatchStatus::NewSuggestion]);

    let rows = outcome.report.rows();
    assert_eq!(rows[0].title, "Login with valid password");
    assert_eq!(rows[0].steps, "c1");
    assert_eq!(rows[1].title, "Search returns results");
}

/// No generated candidates: nothing to report by default
#[tokio::test]
async fn test_empty_candidates() {
    let manual = vec![record("Login", "m1"), record("Logout", "m2")];

    let outcome = run_comparison(&manual, &FixedCandidates(vec![]), &spec(), &MatchOptions::default())
        .await
        .unwrap();

    assert!(outcome.report.is_empty());
    assert_eq!(outcome.report.summary().manual_total, 2);
}

#[tokio::test]
async fn test_unmatched_reported_on_request() {
    let manual = vec![record("Checkout flow", "m1")];
    let generator = FixedCandidates(vec![record("Payment gateway timeout", "c1")]);
    let options = MatchOptions {
        report_unmatched: true,
        ..MatchOptions::default()
    };

    let outcome = run_comparison(&manual, &generator, &spec(), &options).await.unwrap();

    assert_eq!(outcome.report.len(), 2);
    assert!(matches!(outcome.report.results[0], MatchResult::Unmatched { .. }));
    assert_eq!(outcome.report.results[1].status(), MatchStatus::NewSuggestion);
}

/// Generation errors abort before any report is built
#[tokio::test]
async fn test_generator_error_propagates() {
    let manual = vec![record("Login", "m1")];

    let result = run_comparison(&manual, &FailingGenerator, &spec(), &MatchOptions::default()).await;

    assert!(matches!(result, Err(TestCaseAiError::Timeout(120))));
}

/// Candidates saved by `generate` are reusable for `compare`
#[tokio::test]
async fn test_saved_candidates_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("llm_testcases.json");
    let candidates = vec![record("Search product", "Type a query")];
    save_candidates(&path, &candidates).unwrap();

    let manual = vec![record("Search for a product", "m1")];
    let outcome = run_comparison(&manual, &FileCandidates::new(&path), &spec(), &MatchOptions::default())
        .await
        .unwrap();

    assert_eq!(outcome.candidates, candidates);
    assert_eq!(outcome.report.len(), 1);
    assert_eq!(outcome.report.results[0].status(), MatchStatus::Matched);
}

/// Raw pipe-delimited AI output is accepted as a candidate file
#[tokio::test]
async fn test_pipe_text_candidates() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("answer.txt");
    std::fs::write(
        &path,
        "ID | Title | Test Type | Steps | Expected Result\n\
         |---|---|---|---|---|\n\
         TC01 | Login with valid credentials | Positive | Open page | Dashboard\n\
         not a row\n",
    )
    .unwrap();

    let candidates = FileCandidates::new(&path).load().unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id.as_deref(), Some("TC01"));
    assert_eq!(candidates[0].expected_result.as_deref(), Some("Dashboard"));
}
