use crate::config::LintConfig;
use crate::diagnostics::LintDiagnostic;
use crate::registry::source_rules;
use crate::source::{parse_source, SourceError};
use crate::traits::SourceContext;
use graphql_usage_extract::{DocumentLoader, ExtractError, FsDocumentLoader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Diagnostics produced for one source file.
#[derive(Debug)]
pub struct LintResult {
    pub path: PathBuf,
    pub diagnostics: Vec<LintDiagnostic>,
    /// Imported documents that could not be read or parsed
    pub document_errors: Vec<ExtractError>,
}

impl LintResult {
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}

/// Runs every enabled source rule over JavaScript/TypeScript files.
///
/// A `Linter` holds no per-file state; each call parses and checks one file
/// independently.
pub struct Linter {
    config: LintConfig,
    loader: Arc<dyn DocumentLoader>,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

impl Linter {
    /// Create a linter reading imported documents from disk.
    #[must_use]
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            loader: Arc::new(FsDocumentLoader),
        }
    }

    /// Replace the loader used for imported documents.
    #[must_use]
    pub fn with_loader(mut self, loader: Arc<dyn DocumentLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Read and lint a file from disk.
    pub fn lint_file(&self, path: &Path) -> Result<LintResult, SourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.lint_source(path, &text)
    }

    /// Lint in-memory source text as if it lived at `path`.
    ///
    /// `path` decides the parser dialect, anchors relative document imports
    /// and is quoted in diagnostic messages.
    #[tracing::instrument(skip(self, text), fields(path = %path.display()))]
    pub fn lint_source(&self, path: &Path, text: &str) -> Result<LintResult, SourceError> {
        let parsed = parse_source(path, text)?;
        let ctx = SourceContext {
            path,
            source: &parsed,
            loader: self.loader.as_ref(),
        };

        let mut diagnostics = Vec::new();
        let mut document_errors = Vec::new();

        for rule in source_rules() {
            let Some(severity) = self.config.severity_for(&**rule) else {
                tracing::trace!(rule = rule.name(), "Rule disabled");
                continue;
            };

            let outcome = rule.check(&ctx);
            tracing::debug!(
                rule = rule.name(),
                diagnostics = outcome.diagnostics.len(),
                document_errors = outcome.document_errors.len(),
                "Rule finished"
            );
            diagnostics.extend(
                outcome
                    .diagnostics
                    .into_iter()
                    .map(|diag| diag.with_severity(severity)),
            );
            document_errors.extend(outcome.document_errors);
        }

        Ok(LintResult {
            path: path.to_path_buf(),
            diagnostics,
            document_errors,
        })
    }
}
