//! Operation descriptors and the hook naming convention.

/// Prefix of every generated data-access hook.
const HOOK_PREFIX: &str = "use";

/// The kind of GraphQL operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub const ALL: [Self; 3] = [Self::Query, Self::Mutation, Self::Subscription];

    /// Keyword as written in a GraphQL document (`query`, `mutation`, `subscription`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    /// Capitalized keyword appended to hook names (`Query`, `Mutation`, `Subscription`)
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named operation declared in a GraphQL document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Operation name as written in the document
    pub name: String,
    pub kind: OperationKind,
}

impl OperationDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: OperationKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Identifier expected at call sites of this operation.
    #[must_use]
    pub fn derived_identifier(&self) -> String {
        derived_identifier(&self.name, self.kind)
    }
}

/// Build the hook identifier for an operation: `use` + name + capitalized kind.
///
/// ```
/// use graphql_usage_extract::{derived_identifier, OperationKind};
///
/// assert_eq!(derived_identifier("UpdateUser", OperationKind::Mutation), "useUpdateUserMutation");
/// ```
#[must_use]
pub fn derived_identifier(name: &str, kind: OperationKind) -> String {
    format!("{HOOK_PREFIX}{name}{}", kind.suffix())
}

/// Recover a readable operation name from a hook identifier.
///
/// Strips one leading `use` and one trailing `Query`, `Mutation` or
/// `Subscription`, whichever is present.
#[must_use]
pub fn display_name(identifier: &str) -> &str {
    let name = identifier.strip_prefix(HOOK_PREFIX).unwrap_or(identifier);
    OperationKind::ALL
        .iter()
        .find_map(|kind| name.strip_suffix(kind.suffix()))
        .unwrap_or(name)
}
