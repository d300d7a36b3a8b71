//! Comparison pipeline
//!
//! manual list + injected generator → candidates → report

use crate::error::Result;
use crate::generator::CandidateGenerator;
use testcase_ai_common::{match_test_cases, GenerationSpec, MatchOptions, MatchResult, Report, TestCaseRecord};

/// Everything produced by one comparison run
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    pub candidates: Vec<TestCaseRecord>,
    pub report: Report,
}

/// Generate candidates with `generator` and match `manual` against them
///
/// The report is built only after generation completed.
pub async fn run_comparison<G: CandidateGenerator>(
    manual: &[TestCaseRecord],
    generator: &G,
    spec: &GenerationSpec,
    options: &MatchOptions,
) -> Result<ComparisonOutcome> {
    let candidates = generator.generate(spec).await?;
    let report = match_test_cases(manual, &candidates, options);

    Ok(ComparisonOutcome { candidates, report })
}

/// Print the report as a plain table
pub fn print_report(report: &Report, verbose: bool) {
    const TITLE_WIDTH: usize = 48;

    println!("{:<width$}  {:<15}  LLM Steps", "Test Case Title", "Durum", width = TITLE_WIDTH);
    println!("{}", "-".repeat(TITLE_WIDTH + 30));

    for result in report {
        let row = result.to_row();
        let score = match result {
            MatchResult::Matched { score, candidate_title, .. } if verbose => {
                format!("  [{:.2} ← {}]", score, candidate_title)
            }
            _ => String::new(),
        };
        println!(
            "{:<width$}  {:<15}  {}{}",
            truncate(&row.title, TITLE_WIDTH),
            row.status.as_str(),
            truncate(&row.steps, 60),
            score,
            width = TITLE_WIDTH
        );
    }
}

/// Print generated candidates
pub fn print_candidates(candidates: &[TestCaseRecord]) {
    for record in candidates {
        println!(
            "  {:<6} {:<12} {}",
            record.id.as_deref().unwrap_or("-"),
            record.test_type.as_deref().unwrap_or("-"),
            record.title
        );
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let single_line = text.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= max_chars {
        single_line
    } else {
        let cut: String = single_line.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
