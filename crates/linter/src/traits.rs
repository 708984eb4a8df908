//! Trait hierarchy for lint rules.

use crate::diagnostics::{LintDiagnostic, LintSeverity};
use crate::source::ParsedSource;
use graphql_usage_extract::{DocumentLoader, ExtractError};
use std::path::Path;

/// A code sample shown in rule documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleExample {
    pub title: &'static str,
    pub code: &'static str,
}

/// Documentation metadata for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDocs {
    pub category: &'static str,
    pub url: &'static str,
    pub examples: &'static [RuleExample],
}

/// Base trait for all lint rules
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule (e.g., `"no-unused-operations"`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Default severity (can be overridden by config)
    fn default_severity(&self) -> LintSeverity;

    fn docs(&self) -> RuleDocs;
}

/// Everything a source rule may look at while checking one file.
pub struct SourceContext<'a> {
    /// Path of the file being linted, as given to the linter
    pub path: &'a Path,
    pub source: &'a ParsedSource,
    /// Access to documents imported by the file
    pub loader: &'a dyn DocumentLoader,
}

/// What a rule produced for one file.
#[derive(Debug, Default)]
pub struct RuleOutcome {
    pub diagnostics: Vec<LintDiagnostic>,
    /// Imported documents that could not be read or parsed.
    /// These are operator-facing and never count as violations.
    pub document_errors: Vec<ExtractError>,
}

/// Lint rule that runs over a single JavaScript/TypeScript source file
pub trait SourceLintRule: LintRule {
    fn check(&self, ctx: &SourceContext<'_>) -> RuleOutcome;
}
