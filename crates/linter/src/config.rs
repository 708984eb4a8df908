use crate::diagnostics::LintSeverity;
use crate::registry::all_rule_names;
use crate::traits::LintRule;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Configured severity for a lint rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Off,
    Warn,
    Error,
}

impl RuleSeverity {
    /// Convert to diagnostic severity; `None` if the rule is off.
    #[must_use]
    pub const fn to_lint_severity(self) -> Option<LintSeverity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(LintSeverity::Warning),
            Self::Error => Some(LintSeverity::Error),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LintConfigError {
    #[error("unknown lint rule '{name}'{}", suggestion_hint(.suggestion))]
    UnknownRule {
        name: String,
        suggestion: Option<String>,
    },

    #[error("invalid lint configuration: {0}")]
    Invalid(String),
}

#[allow(clippy::ref_option)]
fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(", did you mean '{s}'?"))
        .unwrap_or_default()
}

/// Per-rule severity overrides.
///
/// ```yaml
/// lint:
///   no-unused-operations: error
/// ```
///
/// Rules not mentioned run at their default severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LintConfig {
    rules: HashMap<String, RuleSeverity>,
}

impl LintConfig {
    /// Build from the raw `lint` section of a project config.
    pub fn from_value(value: Option<&serde_json::Value>) -> Result<Self, LintConfigError> {
        let Some(value) = value else {
            return Ok(Self::default());
        };

        let config: Self = serde_json::from_value(value.clone())
            .map_err(|e| LintConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_rule(mut self, name: impl Into<String>, severity: RuleSeverity) -> Self {
        self.rules.insert(name.into(), severity);
        self
    }

    fn validate(&self) -> Result<(), LintConfigError> {
        let known = all_rule_names();
        for name in self.rules.keys() {
            if !known.contains(&name.as_str()) {
                let suggestion = known
                    .iter()
                    .map(|candidate| (strsim::jaro_winkler(name, candidate), *candidate))
                    .filter(|(score, _)| *score > 0.8)
                    .max_by(|a, b| a.0.total_cmp(&b.0))
                    .map(|(_, candidate)| candidate.to_string());
                return Err(LintConfigError::UnknownRule {
                    name: name.clone(),
                    suggestion,
                });
            }
        }
        Ok(())
    }

    /// Effective severity of a rule; `None` if it is turned off.
    #[must_use]
    pub fn severity_for<R: LintRule + ?Sized>(&self, rule: &R) -> Option<LintSeverity> {
        match self.rules.get(rule.name()) {
            Some(severity) => severity.to_lint_severity(),
            None => Some(rule.default_severity()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::NoUnusedOperationsRuleImpl;
    use serde_json::json;

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = LintConfig::from_value(None).unwrap();
        assert_eq!(
            config.severity_for(&NoUnusedOperationsRuleImpl),
            Some(LintSeverity::Warning)
        );
    }

    #[test]
    fn test_override_to_error() {
        let value = json!({ "no-unused-operations": "error" });
        let config = LintConfig::from_value(Some(&value)).unwrap();
        assert_eq!(
            config.severity_for(&NoUnusedOperationsRuleImpl),
            Some(LintSeverity::Error)
        );
    }

    #[test]
    fn test_rule_turned_off() {
        let config = LintConfig::default().with_rule("no-unused-operations", RuleSeverity::Off);
        assert_eq!(config.severity_for(&NoUnusedOperationsRuleImpl), None);
    }

    #[test]
    fn test_unknown_rule_suggests_closest() {
        let value = json!({ "no-unused-operation": "warn" });
        let err = LintConfig::from_value(Some(&value)).unwrap_err();
        assert_eq!(
            err,
            LintConfigError::UnknownRule {
                name: "no-unused-operation".to_string(),
                suggestion: Some("no-unused-operations".to_string()),
            }
        );
        assert_eq!(
            err.to_string(),
            "unknown lint rule 'no-unused-operation', did you mean 'no-unused-operations'?"
        );
    }

    #[test]
    fn test_invalid_severity() {
        let value = json!({ "no-unused-operations": "loud" });
        let err = LintConfig::from_value(Some(&value)).unwrap_err();
        assert!(matches!(err, LintConfigError::Invalid(_)));
    }
}
