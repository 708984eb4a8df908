use crate::commands::common::CommandContext;
use crate::discovery::discover_sources;
use crate::{ExitCode, OutputFormat, OutputOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_usage_linter::{
    ExtractError, LintDiagnostic, LintResult, LintSeverity, Linter, SourceError,
};
use std::path::PathBuf;

/// Diagnostic output structure for collecting warnings and errors
struct DiagnosticOutput {
    file_path: String,
    line: u32,
    column: u32,
    end_line: u32,
    end_column: u32,
    message: String,
    severity: LintSeverity,
    rule: String,
}

impl DiagnosticOutput {
    fn new(file_path: &str, diag: &LintDiagnostic) -> Self {
        Self {
            file_path: file_path.to_string(),
            // Convert from 0-based to 1-based for display
            line: diag.range.start.line + 1,
            column: diag.range.start.character + 1,
            end_line: diag.range.end.line + 1,
            end_column: diag.range.end.character + 1,
            message: diag.message.clone(),
            severity: diag.severity,
            rule: diag.rule.clone(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.message,
            "severity": self.severity.to_string(),
            "rule": self.rule,
            "location": {
                "start": { "line": self.line, "column": self.column },
                "end": { "line": self.end_line, "column": self.end_column }
            }
        })
    }
}

pub fn run(
    config_path: Option<PathBuf>,
    paths: Vec<PathBuf>,
    format: OutputFormat,
    output_opts: OutputOptions,
) -> Result<ExitCode> {
    let start_time = std::time::Instant::now();
    let ctx = CommandContext::load(config_path)?;

    let cwd = std::env::current_dir()?;
    let paths: Vec<PathBuf> = if paths.is_empty() {
        vec![ctx.root.clone()]
    } else {
        paths.into_iter().map(|p| cwd.join(p)).collect()
    };

    let sources = discover_sources(&paths, &ctx.config, &ctx.root)?;
    let linter = Linter::new(ctx.lint_config);

    let mut results: Vec<LintResult> = Vec::with_capacity(sources.len());
    let mut skipped = 0;
    for source in &sources {
        match linter.lint_file(source) {
            Ok(result) => results.push(result),
            Err(err @ SourceError::Syntax { .. }) => {
                skipped += 1;
                if output_opts.show_info {
                    eprintln!("{} {err}, skipping", "warning:".yellow().bold());
                }
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to lint {}", source.display()));
            }
        }
    }

    // Documents that could not be read or parsed never fail the run
    for result in &results {
        for doc_err in &result.document_errors {
            report_document_error(format, &result.path.display().to_string(), doc_err);
        }
    }

    let outputs: Vec<(String, Vec<DiagnosticOutput>)> = results
        .iter()
        .filter(|result| !result.diagnostics.is_empty())
        .map(|result| {
            let file = result.path.display().to_string();
            let diags = result
                .diagnostics
                .iter()
                .map(|d| DiagnosticOutput::new(&file, d))
                .collect();
            (file, diags)
        })
        .collect();

    let total_errors: usize = results.iter().map(LintResult::error_count).sum();
    let total_warnings: usize = results.iter().map(LintResult::warning_count).sum();

    match format {
        OutputFormat::Human => print_human(&outputs),
        OutputFormat::Json => {
            let files: Vec<serde_json::Value> = outputs
                .iter()
                .map(|(file, diags)| {
                    let (errors, warnings): (Vec<_>, Vec<_>) =
                        diags.iter().partition(|d| d.severity.is_error());
                    serde_json::json!({
                        "file": file,
                        "errors": errors.iter().map(|d| d.to_json()).collect::<Vec<_>>(),
                        "warnings": warnings.iter().map(|d| d.to_json()).collect::<Vec<_>>()
                    })
                })
                .collect();
            let document_errors: Vec<serde_json::Value> = results
                .iter()
                .flat_map(|result| {
                    result.document_errors.iter().map(|err| {
                        serde_json::json!({
                            "file": result.path.display().to_string(),
                            "document": err.path().display().to_string(),
                            "message": err.to_string()
                        })
                    })
                })
                .collect();

            let output = serde_json::json!({
                "success": total_errors == 0,
                "files": files,
                "document_errors": document_errors,
                "stats": {
                    "total_files": sources.len(),
                    "skipped_files": skipped,
                    "total_errors": total_errors,
                    "total_warnings": total_warnings
                }
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Github => {
            for diag in outputs.iter().flat_map(|(_, diags)| diags) {
                let level = if diag.severity.is_error() {
                    "error"
                } else {
                    "warning"
                };
                println!(
                    "::{level} file={},line={},col={}::{} [{}]",
                    diag.file_path, diag.line, diag.column, diag.message, diag.rule
                );
            }
        }
    }

    if matches!(format, OutputFormat::Human) && output_opts.show_info {
        println!();
        if total_errors == 0 && total_warnings == 0 {
            println!("{}", "✓ No unused operations found!".green().bold());
        } else if total_errors == 0 {
            println!(
                "{}",
                format!("✓ Linting passed with {total_warnings} warning(s)")
                    .yellow()
                    .bold()
            );
        } else {
            println!(
                "{}",
                format!("✗ Found {total_errors} error(s) and {total_warnings} warning(s)").red()
            );
        }
        println!(
            "  {} {} file(s) checked in {:.2}s",
            "⏱".dimmed(),
            results.len(),
            start_time.elapsed().as_secs_f64()
        );
    }

    if total_errors > 0 {
        Ok(ExitCode::LintError)
    } else {
        Ok(ExitCode::Success)
    }
}

fn print_human(outputs: &[(String, Vec<DiagnosticOutput>)]) {
    for diag in outputs.iter().flat_map(|(_, diags)| diags) {
        let (label, message) = if diag.severity.is_error() {
            ("error:".red().bold(), diag.message.red())
        } else {
            ("warning:".yellow().bold(), diag.message.yellow())
        };
        println!(
            "\n{}:{}:{}: {label} {message}",
            diag.file_path, diag.line, diag.column
        );
        println!("  {}: {}", "rule".dimmed(), diag.rule.dimmed());
    }
}

fn report_document_error(format: OutputFormat, file: &str, err: &ExtractError) {
    match format {
        OutputFormat::Human => {
            eprintln!("{} {err} (imported from {file})", "warning:".yellow().bold());
        }
        OutputFormat::Github => {
            eprintln!("::warning file={}::{err}", err.path().display());
        }
        // Included in the JSON report instead
        OutputFormat::Json => {}
    }
}
