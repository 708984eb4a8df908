use crate::error::{ExtractError, Result};
use crate::operation::{OperationDescriptor, OperationKind};
use apollo_parser::cst;
use std::path::Path;

/// File extensions recognized as GraphQL documents on import paths.
pub const GRAPHQL_EXTENSIONS: &[&str] = &[".graphql", ".gql"];

/// Returns `true` if an import path refers to a GraphQL document.
///
/// The check is purely textual and case-sensitive; `./user.GRAPHQL` is not a
/// document import.
#[must_use]
pub fn is_graphql_document(import_path: &str) -> bool {
    GRAPHQL_EXTENSIONS
        .iter()
        .any(|ext| import_path.ends_with(ext))
}

/// Enumerate the named operations declared at the top level of a GraphQL document.
///
/// Operations are returned in declaration order. Anonymous operations (including
/// the `{ ... }` query shorthand) and fragments are skipped, since no hook can be
/// derived for them.
///
/// `path` is only used to attribute errors.
#[tracing::instrument(skip(text), fields(path = %path.display(), size = text.len()))]
pub fn extract_operations(text: &str, path: &Path) -> Result<Vec<OperationDescriptor>> {
    let tree = apollo_parser::Parser::new(text).parse();

    if let Some(error) = tree.errors().next() {
        tracing::debug!(
            errors = tree.errors().len(),
            offset = error.index(),
            "GraphQL document has syntax errors"
        );
        return Err(ExtractError::DocumentParse {
            path: path.to_path_buf(),
            message: error.message().to_string(),
        });
    }

    let document = tree.document();
    if document.definitions().next().is_none() {
        return Err(ExtractError::DocumentParse {
            path: path.to_path_buf(),
            message: "document contains no definitions".to_string(),
        });
    }

    let operations: Vec<OperationDescriptor> = document
        .definitions()
        .filter_map(|definition| match definition {
            cst::Definition::OperationDefinition(operation) => {
                let name = operation.name()?;
                let kind = operation
                    .operation_type()
                    .map_or(OperationKind::Query, |op_type| operation_kind(&op_type));
                Some(OperationDescriptor::new(name.text().to_string(), kind))
            }
            _ => None,
        })
        .collect();

    tracing::trace!(count = operations.len(), "Extracted operations");
    Ok(operations)
}

fn operation_kind(op_type: &cst::OperationType) -> OperationKind {
    if op_type.mutation_token().is_some() {
        OperationKind::Mutation
    } else if op_type.subscription_token().is_some() {
        OperationKind::Subscription
    } else {
        OperationKind::Query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<OperationDescriptor> {
        extract_operations(text, Path::new("test.graphql")).unwrap()
    }

    #[test]
    fn test_single_query() {
        let ops = extract("query GetUser { user { id name } }");
        assert_eq!(ops, vec![OperationDescriptor::new("GetUser", OperationKind::Query)]);
    }

    #[test]
    fn test_all_operation_kinds_in_order() {
        let ops = extract(
            r"
query GetUser { user { id } }
mutation UpdateUser($id: ID!) { updateUser(id: $id) { id } }
subscription OnUserUpdated { userUpdated { id } }
",
        );
        assert_eq!(
            ops,
            vec![
                OperationDescriptor::new("GetUser", OperationKind::Query),
                OperationDescriptor::new("UpdateUser", OperationKind::Mutation),
                OperationDescriptor::new("OnUserUpdated", OperationKind::Subscription),
            ]
        );
    }

    #[test]
    fn test_anonymous_operations_skipped() {
        let ops = extract(
            r"
{ viewer { id } }
query { user { id } }
mutation { logout }
query Named { user { id } }
",
        );
        assert_eq!(ops, vec![OperationDescriptor::new("Named", OperationKind::Query)]);
    }

    #[test]
    fn test_fragments_skipped() {
        let ops = extract(
            r"
fragment UserFields on User { id name }
query GetUser { user { ...UserFields } }
",
        );
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].name, "GetUser");
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let ops = extract("query A { a } query A { b }");
        assert_eq!(ops.len(), 2);
    }

    #[test]
    fn test_parse_error_carries_path() {
        let err = extract_operations("query GetUser { user { id ", Path::new("ops/broken.graphql"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::DocumentParse { .. }));
        assert_eq!(err.path(), Path::new("ops/broken.graphql"));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let err = extract_operations("  # nothing here\n", Path::new("empty.graphql")).unwrap_err();
        assert!(matches!(err, ExtractError::DocumentParse { .. }));
    }

    #[test]
    fn test_is_graphql_document() {
        assert!(is_graphql_document("./user.graphql"));
        assert!(is_graphql_document("../queries/user.gql"));
        assert!(!is_graphql_document("./user.ts"));
        assert!(!is_graphql_document("./user.graphql.ts"));
        assert!(!is_graphql_document("./user.GRAPHQL"));
        assert!(!is_graphql_document("graphql"));
    }
}
