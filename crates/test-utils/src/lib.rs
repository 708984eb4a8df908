//! Shared test utilities for graphql-usage crates.
//!
//! - [`TestProject`]: a throwaway directory populated with source files and
//!   GraphQL documents
//! - [`assertions`]: stable text rendering of diagnostics for insta snapshots

pub mod assertions;
mod project;

pub use project::TestProject;
