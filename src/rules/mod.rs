//! Immutable rule configuration consumed by the classifier and the blocklist
//! builder.

#[cfg(feature = "with-serde")]
mod config;
mod data;
pub(crate) mod patterns;

#[cfg(feature = "with-serde")]
pub use config::RuleSetConfig;

use std::collections::{BTreeSet, HashMap, HashSet};

/// Per-domain prefix minimums, mistyped and blocked domains, and the
/// disposable-mail domains whose MX hosts seed the reputation blocklist.
///
/// Built once, then shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    minimum_prefix: HashMap<String, usize>,
    mistyped_domains: HashSet<String>,
    blocked_domains: HashSet<String>,
    disposable_mx_domains: BTreeSet<String>,
}

impl RuleSet {
    /// The built-in tables.
    pub fn builtin() -> Self {
        Self {
            minimum_prefix: data::MINIMUM_PREFIX
                .entries()
                .map(|(domain, min)| ((*domain).to_string(), *min))
                .collect(),
            mistyped_domains: data::MISTYPED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            blocked_domains: data::BLOCKED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            disposable_mx_domains: data::DISPOSABLE_MX_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }

    /// No tables at all; the pattern rules still apply.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_minimum_prefix(mut self, domain: impl AsRef<str>, min_len: usize) -> Self {
        self.minimum_prefix
            .insert(normalize_domain(domain.as_ref()), min_len);
        self
    }

    pub fn with_mistyped_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.mistyped_domains
            .extend(domains.into_iter().map(|d| normalize_domain(d.as_ref())));
        self
    }

    pub fn with_blocked_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.blocked_domains
            .extend(domains.into_iter().map(|d| normalize_domain(d.as_ref())));
        self
    }

    pub fn with_disposable_mx_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disposable_mx_domains
            .extend(domains.into_iter().map(|d| normalize_domain(d.as_ref())));
        self
    }

    pub fn minimum_prefix(&self, domain: &str) -> Option<usize> {
        self.minimum_prefix.get(domain).copied()
    }

    pub fn is_mistyped_domain(&self, domain: &str) -> bool {
        self.mistyped_domains.contains(domain)
    }

    pub fn is_blocked_domain(&self, domain: &str) -> bool {
        self.blocked_domains.contains(domain)
    }

    /// Sorted, deduplicated.
    pub fn disposable_mx_domains(&self) -> impl Iterator<Item = &str> {
        self.disposable_mx_domains.iter().map(String::as_str)
    }

    pub fn blocked_domain_count(&self) -> usize {
        self.blocked_domains.len()
    }
}

fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_loaded() {
        let rules = RuleSet::builtin();
        assert_eq!(rules.minimum_prefix("gmail.com"), Some(6));
        assert!(rules.is_mistyped_domain("gamil.com"));
        assert!(rules.is_blocked_domain("mailinator.com"));
        assert!(rules.is_blocked_domain("example.com"));
        assert!(!rules.is_blocked_domain("gmail.com"));
        assert!(rules.disposable_mx_domains().any(|d| d == "sharklasers.com"));
        assert!(rules.blocked_domain_count() > 400);
    }

    #[test]
    fn builders_normalize_and_extend() {
        let rules = RuleSet::empty()
            .with_minimum_prefix("Corp.Example.", 3)
            .with_blocked_domains(["Throwaway.TEST"])
            .with_mistyped_domains(vec!["yaho.com".to_string()])
            .with_disposable_mx_domains(["b.test", "a.test", "b.test"]);

        assert_eq!(rules.minimum_prefix("corp.example"), Some(3));
        assert!(rules.is_blocked_domain("throwaway.test"));
        assert!(rules.is_mistyped_domain("yaho.com"));
        let mx: Vec<&str> = rules.disposable_mx_domains().collect();
        assert_eq!(mx, ["a.test", "b.test"]);
    }

    #[test]
    fn empty_has_no_tables() {
        let rules = RuleSet::empty();
        assert_eq!(rules.minimum_prefix("gmail.com"), None);
        assert!(!rules.is_blocked_domain("mailinator.com"));
        assert_eq!(rules.disposable_mx_domains().count(), 0);
    }
}
