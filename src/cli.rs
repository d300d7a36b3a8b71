use clap::{Parser, Subcommand};
use crate::ai_provider::AiProvider;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "testcase-ai")]
#[command(about = "Compare manual test cases with AI-generated ones", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print detailed progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AI provider (claude/codex/gemini)
    #[arg(long, default_value = "claude", global = true)]
    pub ai_provider: AiProvider,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a manual test case spreadsheet with generated test cases
    Compare {
        /// Manual test case file (.xlsx/.xls/.ods/.csv/.json)
        #[arg(required = true)]
        manual: PathBuf,

        /// Target system name (default: config project name)
        #[arg(short, long)]
        project: Option<String>,

        /// Use previously generated candidates instead of calling the AI
        #[arg(short, long)]
        candidates: Option<PathBuf>,

        /// Number of test cases to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Minimum title similarity for a match (0.0-1.0)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// List manual cases without a match as UNMATCHED
        #[arg(long)]
        include_unmatched: bool,

        /// Output format (excel/json/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reuse cached AI responses
        #[arg(long)]
        use_cache: bool,
    },

    /// Generate test cases with the AI and save them as JSON
    Generate {
        /// Target system name (default: config project name)
        #[arg(short, long)]
        project: Option<String>,

        /// Number of test cases to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output JSON file
        #[arg(short, long, default_value = "llm_testcases.json")]
        output: PathBuf,

        /// Reuse cached AI responses
        #[arg(long)]
        use_cache: bool,
    },

    /// Show or edit settings
    Config {
        /// Default target system name
        #[arg(long)]
        set_project: Option<String>,

        /// Model passed to the AI CLI
        #[arg(long)]
        set_model: Option<String>,

        /// Default similarity threshold
        #[arg(long)]
        set_threshold: Option<f64>,

        /// Default number of generated test cases
        #[arg(long)]
        set_count: Option<usize>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },

    /// Manage the AI response cache
    Cache {
        /// Delete the cache
        #[arg(long)]
        clear: bool,

        /// Cache folder (default: current directory)
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// Show cache information
        #[arg(long)]
        info: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Excel,
    Json,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use excel, json, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_parse() {
        assert_eq!("xlsx".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert_eq!("JSON".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("both".parse::<ExportFormat>(), Ok(ExportFormat::Both));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_compare_args() {
        let cli = Cli::try_parse_from([
            "testcase-ai",
            "compare",
            "manual.xlsx",
            "--threshold",
            "0.6",
            "--include-unmatched",
            "--ai-provider",
            "gemini",
        ])
        .unwrap();

        assert_eq!(cli.ai_provider, AiProvider::Gemini);
        match cli.command {
            Commands::Compare { manual, threshold, include_unmatched, format, .. } => {
                assert_eq!(manual, PathBuf::from("manual.xlsx"));
                assert_eq!(threshold, Some(0.6));
                assert!(include_unmatched);
                assert_eq!(format, ExportFormat::Excel);
            }
            _ => panic!("expected compare"),
        }
    }
}
