//! Prompt generation
//!
//! Builds the request sent to the AI CLI for generating candidate test
//! cases. The expected answer format is parsed by `parser.rs`.

use crate::parser::FIELD_COUNT;

/// Row format the model must follow
pub const ROW_FORMAT: &str = "ID | Title | Test Type | Steps | Expected Result";

/// How many test cases to ask for and the required mix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    pub project_name: String,
    pub count: usize,
    pub min_negative: usize,
    pub min_performance: usize,
}

impl GenerationSpec {
    /// Default mix: 15 cases, at least 7 negative and 4 performance
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            count: 15,
            min_negative: 7,
            min_performance: 4,
        }
    }

    /// Change the total, scaling the minimum mix down when it no longer fits
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        if self.min_negative + self.min_performance > count {
            self.min_negative = count / 2;
            self.min_performance = count / 4;
        }
        self
    }
}

/// Build the generation prompt
///
/// # Examples
/// ```
/// use testcase_ai_common::{build_generation_prompt, GenerationSpec};
///
/// let prompt = build_generation_prompt(&GenerationSpec::new("Akakçe"));
/// assert!(prompt.contains("'Akakçe'"));
/// assert!(prompt.contains("EXACTLY 15 LINES"));
/// ```
pub fn build_generation_prompt(spec: &GenerationSpec) -> String {
    let GenerationSpec {
        project_name,
        count,
        min_negative,
        min_performance,
    } = spec;
    let separators = FIELD_COUNT - 1;

    format!(
        r#"Generate a TOTAL of {count} test cases for the '{project_name}' website.

RULES:
- EXACTLY {count} LINES
- ONLY test case lines
- Do not write a header
- Each line must be separated with '|' ({separators} separators per line)
- Do not use '|' inside a field

FORMAT:
{ROW_FORMAT}

CONTENT:
- At least {min_negative} Negative
- At least {min_performance} Performance
- The rest may be Positive"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_rules() {
        let prompt = build_generation_prompt(&GenerationSpec::new("Shop"));
        assert!(prompt.contains("'Shop'"));
        assert!(prompt.contains(ROW_FORMAT));
        assert!(prompt.contains("At least 7 Negative"));
        assert!(prompt.contains("At least 4 Performance"));
        assert!(prompt.contains("4 separators"));
    }

    #[test]
    fn test_with_count_keeps_default_mix() {
        let spec = GenerationSpec::new("Shop").with_count(20);
        assert_eq!(spec.count, 20);
        assert_eq!(spec.min_negative, 7);
        assert_eq!(spec.min_performance, 4);
    }

    #[test]
    fn test_with_small_count_scales_mix() {
        let spec = GenerationSpec::new("Shop").with_count(6);
        assert_eq!(spec.min_negative, 3);
        assert_eq!(spec.min_performance, 1);

        let prompt = build_generation_prompt(&spec);
        assert!(prompt.contains("EXACTLY 6 LINES"));
    }
}
