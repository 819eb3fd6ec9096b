use thiserror::Error;

use crate::format::to_ascii_domain;

/// A parsed address: lower-cased local part and domain, plus the ASCII
/// (punycode) form of the domain used for DNS lookups.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    local: String,
    domain: String,
    ascii_domain: String,
}

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("missing '@' separator")]
    MissingAt,
    #[error("local part is empty")]
    EmptyLocal,
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain IDNA conversion failed")]
    IdnaConversion {
        #[source]
        source: idna::Errors,
    },
}

impl Address {
    /// Splits `raw` on its last `@`. Does not check the structural pattern;
    /// see [`crate::is_valid_format`] for that.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let lowered = raw.trim().to_lowercase();
        let (local, domain) = lowered.rsplit_once('@').ok_or(AddressError::MissingAt)?;
        let domain = domain.trim_end_matches('.');

        if local.is_empty() {
            return Err(AddressError::EmptyLocal);
        }
        if domain.is_empty() {
            return Err(AddressError::EmptyDomain);
        }

        let ascii_domain =
            to_ascii_domain(domain).map_err(|source| AddressError::IdnaConversion { source })?;
        if ascii_domain.is_empty() {
            return Err(AddressError::EmptyDomain);
        }

        Ok(Self {
            local: local.to_string(),
            domain: domain.to_string(),
            ascii_domain,
        })
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn ascii_domain(&self) -> &str {
        &self.ascii_domain
    }

    /// `local@domain`, lower-cased.
    pub fn full(&self) -> String {
        format!("{}@{}", self.local, self.domain)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_lowercases() {
        let address = Address::parse("Alice.Smith@Example.COM").expect("parse");
        assert_eq!(address.local(), "alice.smith");
        assert_eq!(address.domain(), "example.com");
        assert_eq!(address.ascii_domain(), "example.com");
        assert_eq!(address.to_string(), "alice.smith@example.com");
    }

    #[test]
    fn keeps_unicode_domain_and_ascii_form() {
        let address: Address = "bob@bücher.de".parse().expect("parse");
        assert_eq!(address.domain(), "bücher.de");
        assert_eq!(address.ascii_domain(), "xn--bcher-kva.de");
    }

    #[test]
    fn splits_on_last_at() {
        let address = Address::parse("\"a@b\"@example.com").expect("parse");
        assert_eq!(address.local(), "\"a@b\"");
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(matches!(Address::parse("nobody"), Err(AddressError::MissingAt)));
        assert!(matches!(Address::parse("@example.com"), Err(AddressError::EmptyLocal)));
        assert!(matches!(Address::parse("user@"), Err(AddressError::EmptyDomain)));
    }
}
