use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MxError {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain IDNA conversion failed")]
    IdnaConversion {
        #[source]
        source: idna::Errors,
    },
    #[error("lookup failed for {name}: {source}")]
    Lookup {
        name: String,
        #[source]
        source: trust_dns_resolver::error::ResolveError,
    },
    #[error("lookup for {name} timed out after {timeout:?}")]
    Timeout { name: String, timeout: Duration },
    #[error("DNS worker for {name} stopped before answering")]
    Worker { name: String },
}

impl MxError {
    pub(crate) fn idna(source: idna::Errors) -> Self {
        Self::IdnaConversion { source }
    }

    pub(crate) fn lookup(
        name: impl Into<String>,
        source: trust_dns_resolver::error::ResolveError,
    ) -> Self {
        Self::Lookup {
            name: name.into(),
            source,
        }
    }

    pub fn timeout(name: impl Into<String>, timeout: Duration) -> Self {
        Self::Timeout {
            name: name.into(),
            timeout,
        }
    }

    pub(crate) fn worker(name: impl Into<String>) -> Self {
        Self::Worker { name: name.into() }
    }
}
