//! Snapshot testing assertions for lint diagnostics
//!
//! Diagnostics are formatted consistently for readable snapshots.

/// Format a list of diagnostics for snapshot testing.
///
/// # Example
///
/// ```ignore
/// use graphql_usage_test_utils::assertions::format_diagnostics;
///
/// let result = linter.lint_file(&path)?;
/// insta::assert_snapshot!(format_diagnostics(&result.diagnostics));
/// ```
pub fn format_diagnostics<D: std::fmt::Display>(diagnostics: &[D]) -> String {
    if diagnostics.is_empty() {
        return String::from("(no diagnostics)");
    }

    diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| format!("[{}] {d}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_diagnostics_empty() {
        let empty: Vec<String> = vec![];
        assert_eq!(format_diagnostics(&empty), "(no diagnostics)");
    }

    #[test]
    fn test_format_diagnostics_numbered() {
        let diagnostics = vec!["first", "second"];
        assert_eq!(format_diagnostics(&diagnostics), "[1] first\n[2] second");
    }
}
