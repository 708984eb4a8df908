//! Lint JavaScript/TypeScript sources for GraphQL operations they import but
//! never use.
//!
//! A source file that imports `./user.graphql` is expected to call the hook
//! generated for every named operation in that document (`query GetUser` ->
//! `useGetUserQuery`). The `no-unused-operations` rule reports the ones that
//! never appear.
//!
//! ```rust,ignore
//! use graphql_usage_linter::{LintConfig, Linter};
//!
//! let result = Linter::new(LintConfig::default()).lint_file(path)?;
//! for diagnostic in &result.diagnostics {
//!     println!("{diagnostic}");
//! }
//! ```

mod config;
mod diagnostics;
mod linter;
mod registry;
mod rules;
mod source;
mod traits;

pub use config::{LintConfig, LintConfigError, RuleSeverity};
pub use diagnostics::{LintDiagnostic, LintSeverity, OffsetRange, Position, Range};
pub use linter::{LintResult, Linter};
pub use registry::{all_rule_names, find_rule, source_rules};
pub use rules::{unused_operation_message, NoUnusedOperationsRuleImpl};
pub use source::{parse_source, LineIndex, ParsedSource, SourceError, SourceLanguage};
pub use traits::{LintRule, RuleDocs, RuleExample, RuleOutcome, SourceContext, SourceLintRule};

// Re-export the loader seam so callers don't need a direct dependency
pub use graphql_usage_extract::{DocumentLoader, ExtractError, FsDocumentLoader};
