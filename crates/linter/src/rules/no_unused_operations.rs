use crate::diagnostics::{LintDiagnostic, LintSeverity};
use crate::source::ParsedSource;
use crate::traits::{LintRule, RuleDocs, RuleExample, RuleOutcome, SourceContext, SourceLintRule};
use graphql_usage_extract::{
    display_name, is_graphql_document, load_operations, DocumentLoader,
    ExtractError, OperationKind,
};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use swc_common::Span;
use swc_core::ecma::ast::{Ident, IdentName, ImportDecl};
use swc_core::ecma::visit::{Visit, VisitWith};

const RULE_ID: &str = "no-unused-operations";

/// Trait implementation for `no-unused-operations` rule
pub struct NoUnusedOperationsRuleImpl;

impl LintRule for NoUnusedOperationsRuleImpl {
    fn name(&self) -> &'static str {
        RULE_ID
    }

    fn description(&self) -> &'static str {
        "Detect unused GraphQL operations."
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn docs(&self) -> RuleDocs {
        RuleDocs {
            category: "Operations",
            url: "https://the-guild.dev/graphql/eslint/rules/no-unused-operations",
            examples: &[
                RuleExample {
                    title: "Incorrect",
                    code: r"# This GraphQL operation is defined but not used in the code.
query GetUser {
  user {
    id
    name
  }
}",
                },
                RuleExample {
                    title: "Correct",
                    code: r"# This GraphQL operation is defined.
query GetUser {
  user {
    id
    name
  }
}

# Somewhere in the code, the operation is used.
const { data, loading } = useGetUserQuery();",
                },
            ],
        }
    }
}

impl SourceLintRule for NoUnusedOperationsRuleImpl {
    fn check(&self, ctx: &SourceContext<'_>) -> RuleOutcome {
        let mut tracker = UsageTracker::new(ctx.path, ctx.source, ctx.loader);
        ctx.source.module.visit_with(&mut tracker);
        tracker.finish(self.default_severity())
    }
}

#[must_use]
pub fn unused_operation_message(name: &str, kind: OperationKind, filename: &Path) -> String {
    format!(
        "In file '{}', the GraphQL {kind} operation '{name}' is unused.",
        filename.display()
    )
}

#[derive(Debug, Clone)]
struct TrackedOperation {
    kind: OperationKind,
    derived_identifier: String,
    // The import declaration that brought the document in
    anchor: Span,
    used: bool,
}

// Identifiers are compared by text only, without scope resolution
struct UsageTracker<'a> {
    path: &'a Path,
    base_dir: &'a Path,
    source: &'a ParsedSource,
    loader: &'a dyn DocumentLoader,
    operations: Vec<TrackedOperation>,
    seen: HashSet<String>,
    document_errors: Vec<ExtractError>,
}

impl<'a> UsageTracker<'a> {
    fn new(path: &'a Path, source: &'a ParsedSource, loader: &'a dyn DocumentLoader) -> Self {
        Self {
            path,
            base_dir: path.parent().unwrap_or_else(|| Path::new("")),
            source,
            loader,
            operations: Vec::new(),
            seen: HashSet::new(),
            document_errors: Vec::new(),
        }
    }

    fn track_import(&mut self, import_path: &str, anchor: Span) {
        let document_path = normalize_path(&self.base_dir.join(import_path));

        match load_operations(self.loader, &document_path) {
            Ok(descriptors) => {
                tracing::trace!(
                    path = %document_path.display(),
                    count = descriptors.len(),
                    "Tracking imported operations"
                );
                for descriptor in descriptors {
                    let identifier = descriptor.derived_identifier();
                    let used = self.seen.contains(&identifier);
                    self.operations.push(TrackedOperation {
                        kind: descriptor.kind,
                        derived_identifier: identifier,
                        anchor,
                        used,
                    });
                }
            }
            Err(error) => {
                tracing::error!(
                    rule = RULE_ID,
                    %error,
                    "The rule \"{RULE_ID}\" encountered an issue while processing the file at \"{}\". Ensure all GraphQL operation files are correctly formatted and accessible.",
                    document_path.display()
                );
                self.document_errors.push(error);
            }
        }
    }

    fn observe(&mut self, name: &str) {
        for operation in &mut self.operations {
            if operation.derived_identifier == name {
                operation.used = true;
            }
        }
        self.seen.insert(name.to_string());
    }

    fn finish(self, severity: LintSeverity) -> RuleOutcome {
        let diagnostics = self
            .operations
            .iter()
            .filter(|operation| !operation.used)
            .map(|operation| {
                LintDiagnostic::new(
                    self.source.offset_range(operation.anchor),
                    self.source.range(operation.anchor),
                    severity,
                    unused_operation_message(
                        display_name(&operation.derived_identifier),
                        operation.kind,
                        self.path,
                    ),
                    RULE_ID,
                )
            })
            .collect();

        RuleOutcome {
            diagnostics,
            document_errors: self.document_errors,
        }
    }
}

impl Visit for UsageTracker<'_> {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        let source = self.source;
        if let Some(import_path) = source.string_literal(node.src.span) {
            if is_graphql_document(import_path) {
                self.track_import(import_path, node.span);
            }
        }
        node.visit_children_with(self);
    }

    fn visit_ident(&mut self, node: &Ident) {
        self.observe(&node.sym);
    }

    fn visit_ident_name(&mut self, node: &IdentName) {
        self.observe(&node.sym);
    }
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else {
                    normalized.push(component);
                }
            }
            _ => normalized.push(component),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Position;
    use crate::source::parse_source;
    use graphql_usage_extract::Result as ExtractResult;
    use std::collections::HashMap;

    /// Serves documents from memory, keyed by normalized path
    #[derive(Default)]
    struct MemoryLoader {
        files: HashMap<PathBuf, String>,
    }

    impl MemoryLoader {
        fn with(mut self, path: &str, text: &str) -> Self {
            self.files.insert(PathBuf::from(path), text.to_string());
            self
        }
    }

    impl DocumentLoader for MemoryLoader {
        fn load(&self, path: &Path) -> ExtractResult<String> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| ExtractError::DocumentAccess {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                })
        }
    }

    fn run_rule(loader: &MemoryLoader, path: &str, source: &str) -> RuleOutcome {
        let path = Path::new(path);
        let parsed = parse_source(path, source).unwrap();
        let ctx = SourceContext {
            path,
            source: &parsed,
            loader,
        };
        NoUnusedOperationsRuleImpl.check(&ctx)
    }

    fn messages(outcome: &RuleOutcome) -> Vec<&str> {
        outcome
            .diagnostics
            .iter()
            .map(|d| d.message.as_str())
            .collect()
    }

    #[test]
    fn test_used_query_is_not_reported() {
        let loader = MemoryLoader::default()
            .with("src/user.graphql", "query GetUser { user { id name } }");
        let outcome = run_rule(
            &loader,
            "src/user.ts",
            r"
import './user.graphql';
const { data } = useGetUserQuery();
",
        );
        assert!(outcome.diagnostics.is_empty());
        assert!(outcome.document_errors.is_empty());
    }

    #[test]
    fn test_unused_query_is_reported() {
        let loader =
            MemoryLoader::default().with("src/unused-user.graphql", "query GetUser { user { id } }");
        let outcome = run_rule(
            &loader,
            "src/unused-user.js",
            "import doc from './unused-user.graphql';\n",
        );

        assert_eq!(
            messages(&outcome),
            vec!["In file 'src/unused-user.js', the GraphQL query operation 'GetUser' is unused."]
        );
        let diag = &outcome.diagnostics[0];
        assert_eq!(diag.rule, "no-unused-operations");
        assert_eq!(diag.severity, LintSeverity::Warning);
        assert_eq!(diag.offset_range.start, 0);
        assert!(diag.offset_range.end >= "import doc from './unused-user.graphql'".len());
        assert_eq!(diag.range.start.line, 0);
    }

    #[test]
    fn test_message_template() {
        assert_eq!(
            unused_operation_message(
                "GetUser",
                OperationKind::Query,
                Path::new("unused-user.graphql")
            ),
            "In file 'unused-user.graphql', the GraphQL query operation 'GetUser' is unused."
        );
    }

    #[test]
    fn test_each_kind_reported_with_its_type() {
        let loader = MemoryLoader::default().with(
            "ops.graphql",
            r"
query GetUser { user { id } }
mutation SaveUser { saveUser { id } }
subscription OnUser { user { id } }
",
        );
        let outcome = run_rule(&loader, "index.ts", "import './ops.graphql';");

        assert_eq!(
            messages(&outcome),
            vec![
                "In file 'index.ts', the GraphQL query operation 'GetUser' is unused.",
                "In file 'index.ts', the GraphQL mutation operation 'SaveUser' is unused.",
                "In file 'index.ts', the GraphQL subscription operation 'OnUser' is unused.",
            ]
        );
    }

    #[test]
    fn test_only_unreferenced_operation_reported() {
        // `GetUserName` appears as an unrelated local binding; it still counts
        let loader = MemoryLoader::default().with(
            "user.graphql",
            "query GetUser { user { id } }\nquery GetUserName { user { name } }",
        );
        let outcome = run_rule(
            &loader,
            "user.ts",
            r"
import './user.graphql';
function render() {
  const useGetUserNameQuery = 'shadowed';
  return useGetUserNameQuery;
}
",
        );

        assert_eq!(
            messages(&outcome),
            vec!["In file 'user.ts', the GraphQL query operation 'GetUser' is unused."]
        );
    }

    #[test]
    fn test_identifier_in_any_position_counts() {
        let loader = MemoryLoader::default().with(
            "ops.graphql",
            r"
query A { a }
query B { b }
query C { c }
query D { d }
mutation E { e }
",
        );
        let outcome = run_rule(
            &loader,
            "App.tsx",
            r"
import { useAQuery } from './ops.graphql';
const hooks = { useBQuery: 1 };
api.useCQuery;
type T = useDQuery;
export const App = () => <useEMutation />;
",
        );
        assert!(outcome.diagnostics.is_empty(), "{:?}", messages(&outcome));
    }

    #[test]
    fn test_reference_before_import_counts() {
        let loader = MemoryLoader::default().with("late.gql", "query Late { late }");
        let outcome = run_rule(
            &loader,
            "late.js",
            r"
export const load = () => useLateQuery();
import './late.gql';
",
        );
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_colliding_operations_satisfied_together() {
        let loader = MemoryLoader::default()
            .with("a.graphql", "query Same { a }")
            .with("b.graphql", "query Same { b }");
        let used = run_rule(
            &loader,
            "x.ts",
            "import './a.graphql';\nimport './b.graphql';\nuseSameQuery();",
        );
        assert!(used.diagnostics.is_empty());

        let unused = run_rule(&loader, "x.ts", "import './a.graphql';\nimport './b.graphql';");
        assert_eq!(unused.diagnostics.len(), 2);
        assert_ne!(
            unused.diagnostics[0].offset_range,
            unused.diagnostics[1].offset_range
        );
    }

    #[test]
    fn test_anonymous_operations_never_reported() {
        let loader = MemoryLoader::default().with("anon.graphql", "{ viewer { id } }\nquery { a }");
        let outcome = run_rule(&loader, "anon.ts", "import './anon.graphql';");
        assert!(outcome.diagnostics.is_empty());
        assert!(outcome.document_errors.is_empty());
    }

    #[test]
    fn test_non_graphql_imports_ignored() {
        let loader = MemoryLoader::default();
        let outcome = run_rule(
            &loader,
            "index.ts",
            "import x from './user.ts';\nimport y from 'graphql';\nimport './styles.css';",
        );
        assert!(outcome.diagnostics.is_empty());
        assert!(outcome.document_errors.is_empty());
    }

    #[test]
    fn test_malformed_document_is_recovered() {
        let loader = MemoryLoader::default()
            .with("broken.graphql", "query Broken { user { id ")
            .with("ok.graphql", "query Fine { fine }");
        let outcome = run_rule(
            &loader,
            "index.ts",
            "import './broken.graphql';\nimport './ok.graphql';\n",
        );

        assert_eq!(
            messages(&outcome),
            vec!["In file 'index.ts', the GraphQL query operation 'Fine' is unused."]
        );
        assert_eq!(outcome.document_errors.len(), 1);
        assert!(matches!(
            outcome.document_errors[0],
            ExtractError::DocumentParse { .. }
        ));
    }

    #[test]
    fn test_missing_document_is_recovered() {
        let loader = MemoryLoader::default();
        let outcome = run_rule(&loader, "src/index.ts", "import '../missing.gql';");
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.document_errors.len(), 1);
        assert_eq!(
            outcome.document_errors[0].path(),
            Path::new("missing.gql")
        );
    }

    #[test]
    fn test_import_resolved_relative_to_importing_file() {
        let loader =
            MemoryLoader::default().with("app/graphql/user.graphql", "query GetUser { user }");
        let outcome = run_rule(
            &loader,
            "app/pages/user.ts",
            "import '../graphql/user.graphql';",
        );
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.document_errors.is_empty());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("a/./b/../c.graphql")),
            PathBuf::from("a/c.graphql")
        );
        assert_eq!(
            normalize_path(Path::new("../x.graphql")),
            PathBuf::from("../x.graphql")
        );
    }

    #[test]
    fn test_source_with_byte_order_mark() {
        let loader = MemoryLoader::default().with("a.graphql", "query A { a }");

        let outcome = run_rule(&loader, "a.ts", "\u{FEFF}import './a.graphql';");
        assert_eq!(
            messages(&outcome),
            vec!["In file 'a.ts', the GraphQL query operation 'A' is unused."]
        );
        assert_eq!(outcome.diagnostics[0].range.start, Position::new(0, 0));

        let used = run_rule(&loader, "a.ts", "\u{FEFF}import './a.graphql';\nuseAQuery();");
        assert!(used.diagnostics.is_empty());
    }

    #[test]
    fn test_non_ascii_text_before_import() {
        let loader = MemoryLoader::default().with("src/ops.graphql", "mutation Save { save }");
        let outcome = run_rule(
            &loader,
            "src/form.js",
            "// café ✓\nconst label = 'ü'; import './ops.graphql';\n",
        );

        assert_eq!(outcome.diagnostics.len(), 1);
        let diag = &outcome.diagnostics[0];
        // Byte column: "const label = 'ü'; " is 20 bytes
        assert_eq!(diag.range.start, Position::new(1, 20));
        assert_eq!(diag.to_string().split(' ').next(), Some("2:21"));
    }
}

