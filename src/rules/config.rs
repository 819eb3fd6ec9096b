use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::RuleSet;
use crate::error::FilterError;

/// JSON form of a [`RuleSet`].
///
/// ```json
/// { "extend_builtin": true, "blocked_domains": ["throwaway.example"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSetConfig {
    /// Start from the built-in tables instead of empty ones.
    pub extend_builtin: bool,
    pub minimum_prefix: HashMap<String, usize>,
    pub mistyped_domains: Vec<String>,
    pub blocked_domains: Vec<String>,
    pub disposable_mx_domains: Vec<String>,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            extend_builtin: true,
            minimum_prefix: HashMap::new(),
            mistyped_domains: Vec::new(),
            blocked_domains: Vec::new(),
            disposable_mx_domains: Vec::new(),
        }
    }
}

impl RuleSetConfig {
    pub fn from_json(input: &str) -> Result<Self, FilterError> {
        serde_json::from_str(input).map_err(FilterError::rules_config)
    }

    pub fn into_rule_set(self) -> RuleSet {
        let base = if self.extend_builtin {
            RuleSet::builtin()
        } else {
            RuleSet::empty()
        };
        let rules = self
            .minimum_prefix
            .into_iter()
            .fold(base, |rules, (domain, min)| rules.with_minimum_prefix(domain, min));
        rules
            .with_mistyped_domains(self.mistyped_domains)
            .with_blocked_domains(self.blocked_domains)
            .with_disposable_mx_domains(self.disposable_mx_domains)
    }
}

impl RuleSet {
    /// Parses a [`RuleSetConfig`] document.
    pub fn from_json(input: &str) -> Result<Self, FilterError> {
        RuleSetConfig::from_json(input).map(RuleSetConfig::into_rule_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extends_builtin_by_default() {
        let rules = RuleSet::from_json(r#"{ "blocked_domains": ["Throwaway.Example"] }"#)
            .expect("valid config");
        assert!(rules.is_blocked_domain("throwaway.example"));
        assert!(rules.is_blocked_domain("mailinator.com"));
    }

    #[test]
    fn replaces_builtin_when_asked() {
        let rules = RuleSet::from_json(
            r#"{
                "extend_builtin": false,
                "minimum_prefix": { "corp.example": 4 },
                "disposable_mx_domains": ["burner.example"]
            }"#,
        )
        .expect("valid config");
        assert_eq!(rules.minimum_prefix("corp.example"), Some(4));
        assert_eq!(rules.minimum_prefix("gmail.com"), None);
        assert!(!rules.is_blocked_domain("mailinator.com"));
        assert_eq!(rules.disposable_mx_domains().collect::<Vec<_>>(), ["burner.example"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = RuleSet::from_json("{ not json").expect_err("must fail");
        assert!(matches!(err, FilterError::RulesConfig { .. }));
    }
}
