use clap::Parser;
use dialoguer::Input;
use std::path::{Path, PathBuf};
use std::time::Duration;
use testcase_ai_common::export::ReportMeta;
use testcase_ai_common::{GenerationSpec, MatchOptions};
use testcase_ai_rust::{ai_provider, cli, compare, config, error, export, generator, reader};
use ai_provider::AiProvider;
use cli::{Cli, Commands};
use config::Config;
use error::{validate_threshold, Result, TestCaseAiError};
use generator::{CacheFile, CandidateGenerator, CliGenerator, FileCandidates};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Compare {
            manual,
            project,
            candidates,
            count,
            threshold,
            include_unmatched,
            format,
            output,
            use_cache,
        } => {
            println!("🧪 testcase-ai - compare\n");

            let threshold = validate_threshold(threshold.unwrap_or(config.threshold))?;
            let options = MatchOptions {
                threshold,
                report_unmatched: include_unmatched,
            };

            // 1. Manual test cases
            println!("[1/3] Reading manual test cases...");
            let manual_cases = reader::read_manual_test_cases(&manual)?;
            println!("✔ {} manual test cases: {}\n", manual_cases.len(), manual.display());

            // 2. Generated test cases
            let project_name = resolve_project(project, &config)?;
            let spec = GenerationSpec::new(project_name.clone())
                .with_count(count.unwrap_or(config.candidate_count));

            let outcome = if let Some(path) = candidates {
                println!("[2/3] Loading generated test cases: {}", path.display());
                compare::run_comparison(&manual_cases, &FileCandidates::new(path), &spec, &options).await?
            } else {
                println!(
                    "[2/3] Generating {} test cases for '{}' with {}...{}",
                    spec.count,
                    project_name,
                    cli.ai_provider,
                    if use_cache { " (cache on)" } else { "" }
                );
                let cache_dir = use_cache.then(|| parent_dir(&manual));
                let ai_generator = cli_generator(cli.ai_provider, cli.verbose, &config, cache_dir);
                compare::run_comparison(&manual_cases, &ai_generator, &spec, &options).await?
            };

            if outcome.candidates.is_empty() {
                eprintln!("⚠ No usable generated test cases; every manual case is left unmatched");
            }
            println!("✔ {} generated test cases\n", outcome.candidates.len());
            if cli.verbose {
                compare::print_candidates(&outcome.candidates);
                println!();
            }

            // 3. Report
            println!("[3/3] Building report (threshold {:.2})...\n", threshold);
            compare::print_report(&outcome.report, cli.verbose);

            let summary = outcome.report.summary();
            println!();
            println!("  Matched:         {}", summary.matched);
            println!("  New suggestions: {}", summary.new_suggestions);
            if include_unmatched {
                println!("  Unmatched:       {}", summary.unmatched);
            }
            println!("  Coverage:        {:.1}%\n", summary.coverage() * 100.0);

            let meta = ReportMeta {
                project_name,
                threshold,
                generated_at: chrono::Local::now().to_rfc3339(),
            };
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_report(&outcome.report, &outcome.candidates, &meta, format, &output_dir)?;

            println!("\n✅ Comparison complete");
        }

        Commands::Generate { project, count, output, use_cache } => {
            println!("🧪 testcase-ai - generate\n");

            let project_name = resolve_project(project, &config)?;
            let spec = GenerationSpec::new(project_name.clone())
                .with_count(count.unwrap_or(config.candidate_count));

            println!("[1/2] Generating {} test cases for '{}' with {}...", spec.count, project_name, cli.ai_provider);
            let cache_dir = use_cache.then(|| parent_dir(&output));
            let ai_generator = cli_generator(cli.ai_provider, cli.verbose, &config, cache_dir);
            let candidates = ai_generator.generate(&spec).await?;

            if candidates.is_empty() {
                eprintln!("⚠ The AI answer contained no usable test case rows");
            }
            println!("✔ {} test cases\n", candidates.len());
            compare::print_candidates(&candidates);

            println!("\n[2/2] Saving...");
            generator::save_candidates(&output, &candidates)?;
            println!("✔ Saved: {}", output.display());
        }

        Commands::Config { set_project, set_model, set_threshold, set_count, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(project) = set_project {
                config.project_name = project;
                changed = true;
            }
            if let Some(model) = set_model {
                config.model = if model.is_empty() { None } else { Some(model) };
                changed = true;
            }
            if let Some(threshold) = set_threshold {
                config.set_threshold(threshold)?;
                changed = true;
            }
            if let Some(count) = set_count {
                config.set_candidate_count(count)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ Settings saved: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Settings:");
                println!("  Project:   {}", config.project_name);
                println!("  Model:     {}", config.model.as_deref().unwrap_or("(CLI default)"));
                println!("  Count:     {}", config.candidate_count);
                println!("  Threshold: {:.2}", config.threshold);
                println!("  Timeout:   {}s", config.timeout_seconds);
            }
        }

        Commands::Cache { clear, folder, info } => {
            let target = folder.unwrap_or_else(|| PathBuf::from("."));
            let cache_path = CacheFile::cache_path(&target);

            if info || !clear {
                if cache_path.exists() {
                    let cache = CacheFile::load(&target);
                    println!("Cache:");
                    println!("  Path:    {}", cache_path.display());
                    println!("  Entries: {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  Size:    {} bytes", meta.len());
                    }
                } else {
                    println!("No cache file: {}", cache_path.display());
                }
            }

            if clear {
                match CacheFile::clear(&target) {
                    Ok(true) => println!("✔ Cache deleted: {}", cache_path.display()),
                    Ok(false) => println!("No cache file to delete"),
                    Err(e) => eprintln!("Cache delete error: {}", e),
                }
            }
        }
    }

    Ok(())
}

fn cli_generator(provider: AiProvider, verbose: bool, config: &Config, cache_dir: Option<PathBuf>) -> CliGenerator {
    CliGenerator::new(provider)
        .with_model(config.model.clone())
        .with_timeout(Duration::from_secs(config.timeout_seconds))
        .with_cache(cache_dir)
        .verbose(verbose)
}

/// Project from the command line, then config, then an interactive prompt
fn resolve_project(project: Option<String>, config: &Config) -> Result<String> {
    if let Some(project) = project.filter(|p| !p.trim().is_empty()) {
        return Ok(project.trim().to_string());
    }
    if !config.project_name.trim().is_empty() {
        return Ok(config.project_name.trim().to_string());
    }

    let input: String = Input::new()
        .with_prompt("Target system name")
        .interact_text()
        .map_err(|e| TestCaseAiError::CliExecution(e.to_string()))?;
    Ok(input.trim().to_string())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
