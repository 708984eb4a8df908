//! Operation extraction for GraphQL documents.
//!
//! This crate turns the text of a `.graphql`/`.gql` document into the list of
//! named operations it declares, and owns the naming convention that maps an
//! operation to the data-access hook expected at its call sites
//! (`query GetUser` -> `useGetUserQuery`).
//!
//! # Example
//!
//! ```
//! use graphql_usage_extract::{derived_identifier, extract_operations, OperationKind};
//! use std::path::Path;
//!
//! let ops = extract_operations("query GetUser { user { id } }", Path::new("user.graphql")).unwrap();
//! assert_eq!(ops[0].name, "GetUser");
//! assert_eq!(ops[0].kind, OperationKind::Query);
//! assert_eq!(derived_identifier(&ops[0].name, ops[0].kind), "useGetUserQuery");
//! ```

mod error;
mod extractor;
mod loader;
mod operation;

pub use error::{ExtractError, Result};
pub use extractor::{extract_operations, is_graphql_document, GRAPHQL_EXTENSIONS};
pub use loader::{load_operations, DocumentLoader, FsDocumentLoader};
pub use operation::{derived_identifier, display_name, OperationDescriptor, OperationKind};
