use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Project configuration read from a `.graphql-usagerc.*` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Glob patterns selecting source files to lint. All JS/TS files when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Glob patterns removing files from the include set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Per-rule severities, interpreted by the linter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lint: Option<serde_json::Value>,
}

impl ProjectConfig {
    /// Check whether `path` is selected by the include/exclude patterns.
    ///
    /// Patterns are matched against the path relative to `root` with `/`
    /// separators. Paths outside `root` are matched as given.
    #[must_use]
    pub fn matches(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let candidate = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let included = match &self.include {
            Some(patterns) if !patterns.is_empty() => Self::any_match(patterns, &candidate),
            _ => true,
        };
        if !included {
            return false;
        }

        match &self.exclude {
            Some(patterns) => !Self::any_match(patterns, &candidate),
            None => true,
        }
    }

    /// Every pattern after brace expansion, for validation.
    pub(crate) fn expanded_patterns(&self) -> impl Iterator<Item = String> + '_ {
        self.include
            .iter()
            .chain(self.exclude.iter())
            .flatten()
            .flat_map(|p| Self::expand_braces(p))
    }

    fn any_match(patterns: &[String], candidate: &str) -> bool {
        patterns
            .iter()
            .flat_map(|p| Self::expand_braces(p))
            .filter_map(|p| Pattern::new(&p).ok())
            .any(|p| p.matches(candidate))
    }

    fn normalize_pattern(pattern: &str) -> String {
        let mut normalized = pattern.trim();
        normalized = normalized.strip_prefix("./").unwrap_or(normalized);
        normalized = normalized.strip_prefix('/').unwrap_or(normalized);

        let mut normalized = normalized.to_string();
        while normalized.contains("//") {
            normalized = normalized.replace("//", "/");
        }
        normalized
    }

    /// Expand a single brace group: `src/**/*.{ts,tsx}` becomes
    /// `src/**/*.ts` and `src/**/*.tsx`.
    fn expand_braces(pattern: &str) -> Vec<String> {
        let normalized = Self::normalize_pattern(pattern);

        if let (Some(start), Some(end)) = (normalized.find('{'), normalized.find('}')) {
            if start < end {
                let before = &normalized[..start];
                let after = &normalized[end + 1..];
                return normalized[start + 1..end]
                    .split(',')
                    .map(|opt| format!("{before}{}{after}", opt.trim()))
                    .collect();
            }
        }

        vec![normalized]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(include: &[&str], exclude: &[&str]) -> ProjectConfig {
        let owned = |items: &[&str]| {
            (!items.is_empty()).then(|| items.iter().map(|s| (*s).to_string()).collect())
        };
        ProjectConfig {
            include: owned(include),
            exclude: owned(exclude),
            lint: None,
        }
    }

    #[test]
    fn test_default_matches_everything() {
        let root = PathBuf::from("/project");
        assert!(ProjectConfig::default().matches(&root.join("src/a.ts"), &root));
    }

    #[test]
    fn test_include_with_braces() {
        let root = PathBuf::from("/project");
        let config = config(&["src/**/*.{ts,tsx}"], &[]);

        assert!(config.matches(&root.join("src/a/b.tsx"), &root));
        assert!(config.matches(&root.join("src/b.ts"), &root));
        assert!(!config.matches(&root.join("src/c.js"), &root));
        assert!(!config.matches(&root.join("lib/d.ts"), &root));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let root = PathBuf::from("/project");
        let config = config(&["./src/**/*.ts"], &["**/generated/**"]);

        assert!(config.matches(&root.join("src/user.ts"), &root));
        assert!(!config.matches(&root.join("src/generated/user.ts"), &root));
    }

    #[test]
    fn test_normalize_pattern() {
        assert_eq!(ProjectConfig::normalize_pattern("./src//*.ts"), "src/*.ts");
        assert_eq!(ProjectConfig::normalize_pattern("/src/*.ts"), "src/*.ts");
    }

    #[test]
    fn test_expand_braces() {
        assert_eq!(
            ProjectConfig::expand_braces("*.{js, jsx}"),
            vec!["*.js".to_string(), "*.jsx".to_string()]
        );
        assert_eq!(ProjectConfig::expand_braces("*.ts"), vec!["*.ts".to_string()]);
    }
}
