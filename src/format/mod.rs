//! Structural, IDN-aware format validation.
//!
//! The domain part is converted to its ASCII-compatible form before the whole
//! address is matched against the structural pattern. Both steps run under a
//! time budget; running out of budget is reported as "invalid", never as an
//! error.

mod domain;
mod local;

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use regex::Regex;
use tracing::debug;

pub(crate) use domain::to_ascii_domain;

/// RFC 5321: 254 octets max, '@' compris.
const MAX_ADDRESS_LEN: usize = 254;

/// Default budget for normalization plus pattern matching.
pub const DEFAULT_FORMAT_BUDGET: Duration = Duration::from_millis(200);

static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?i)^(?:"[^"]+"|[0-9a-z](?:[-!#$%&'*+/=?^`{}|~\w.]*[0-9a-z])?)"#,
        r"@(?:\[(?:[0-9]{1,3}\.){3}[0-9]{1,3}\]|(?:[0-9a-z][-\w]*[0-9a-z]*\.)+[a-z0-9]{2,17})$",
    ))
    .expect("address pattern is a valid regex")
});

/// Checks addresses against the structural pattern within a fixed time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatValidator {
    budget: Duration,
}

impl Default for FormatValidator {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT_BUDGET)
    }
}

impl FormatValidator {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Returns `true` when `raw` is a well-formed address.
    ///
    /// Empty input, a domain that fails IDNA conversion, a pattern mismatch and
    /// an exhausted budget all yield `false`.
    pub fn is_valid(&self, raw: &str) -> bool {
        let started = Instant::now();

        if raw.is_empty() || raw.len() > MAX_ADDRESS_LEN {
            return false;
        }
        let Some((local, domain)) = raw.rsplit_once('@') else {
            return false;
        };

        let ascii = match to_ascii_domain(domain) {
            Ok(ascii) => ascii,
            Err(err) => {
                debug!(domain, error = %err, "domain punycode conversion failed");
                return false;
            }
        };
        if !self.within_budget(started) {
            debug!(budget = ?self.budget, "format budget exhausted during normalization");
            return false;
        }

        let normalized = format!("{local}@{ascii}");
        let matched = ADDRESS_PATTERN.is_match(&normalized) && local::has_valid_dots(local);

        matched && self.within_budget(started)
    }

    fn within_budget(&self, started: Instant) -> bool {
        started.elapsed() < self.budget
    }
}

/// [`FormatValidator::is_valid`] with the default 200 ms budget.
pub fn is_valid_format(raw: &str) -> bool {
    FormatValidator::default().is_valid(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_shapes() {
        for email in [
            "alice@example.com",
            "first.last@sub.example.co.uk",
            "o'brien+tag@example.org",
            "\"john doe\"@example.com",
            "user@[192.168.0.1]",
            "Mixed.Case@Example.COM",
            "x@a.co",
        ] {
            assert!(is_valid_format(email), "{email}");
        }
    }

    #[test]
    fn accepts_unicode_domain_after_idna() {
        assert!(is_valid_format("jose@exämple.com"));
    }

    #[test]
    fn rejects_malformed() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "a..b@example.com",
            ".abc@example.com",
            "abc.@example.com",
            "user@example",
            "user@-example.com",
            "user@example.c",
            "user@exa mple.com",
        ] {
            assert!(!is_valid_format(email), "{email:?}");
        }
    }

    #[test]
    fn unencodable_label_is_invalid() {
        assert!(!is_valid_format("user@xn--bad..domain"));
    }

    #[test]
    fn overlong_input_is_invalid() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(!is_valid_format(&email));
    }

    #[test]
    fn exhausted_budget_reads_as_invalid() {
        let validator = FormatValidator::new(Duration::ZERO);
        assert!(!validator.is_valid("alice@example.com"));
        assert_eq!(FormatValidator::default().budget(), DEFAULT_FORMAT_BUDGET);
    }
}
