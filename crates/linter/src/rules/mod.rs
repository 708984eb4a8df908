//! Lint rule implementations
//!
//! Each rule is implemented in its own file and implements `SourceLintRule`.

mod no_unused_operations;

pub use no_unused_operations::{unused_operation_message, NoUnusedOperationsRuleImpl};
