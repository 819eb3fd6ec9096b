use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tracing::{debug, warn};

use super::{Blocklist, DnsLookup};
use crate::address::Address;

/// Checks that a domain has MX hosts and that none of them shares an IP
/// address with a known disposable-mail provider.
///
/// Domains that pass are remembered for the lifetime of the validator; the
/// cache only ever grows.
pub struct MxValidator {
    resolver: Arc<dyn DnsLookup>,
    blocklist: Arc<Blocklist>,
    valid_domains: RwLock<HashSet<String>>,
    ready_timeout: Option<Duration>,
}

impl MxValidator {
    pub fn new(resolver: Arc<dyn DnsLookup>, blocklist: Arc<Blocklist>) -> Self {
        Self {
            resolver,
            blocklist,
            valid_domains: RwLock::new(HashSet::new()),
            ready_timeout: None,
        }
    }

    /// Bounds the wait for the blocklist. `None` waits as long as the build
    /// takes.
    pub fn with_ready_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.ready_timeout = timeout;
        self
    }

    /// `false` when the domain has no MX, when a lookup fails or times out,
    /// when an MX host resolves to a blocklisted address, or when the
    /// blocklist did not become ready within the configured timeout.
    pub fn has_valid_mx(&self, address: &Address) -> bool {
        let Some(blocked) = self.blocked_addresses() else {
            warn!(timeout = ?self.ready_timeout, "MX blocklist not ready, failing closed");
            return false;
        };

        let domain = address.ascii_domain();
        if self.is_known_valid(domain) {
            return true;
        }

        let records = match self.resolver.lookup_mx(domain) {
            Ok(records) if !records.is_empty() => records,
            Ok(_) => {
                debug!(domain, "no MX records");
                return false;
            }
            Err(err) => {
                debug!(domain, error = %err, "MX lookup failed");
                return false;
            }
        };

        for record in &records {
            let addresses = match self.resolver.lookup_ip(&record.exchange) {
                Ok(addresses) => addresses,
                Err(err) => {
                    debug!(domain, exchange = %record.exchange, error = %err, "MX host lookup failed");
                    continue;
                }
            };
            if let Some(ip) = addresses.iter().find(|ip| blocked.contains(*ip)) {
                debug!(domain, exchange = %record.exchange, %ip, "MX host shares a disposable provider address");
                return false;
            }
        }

        self.remember(domain);
        true
    }

    /// Parses `email` first; unparseable input is `false`.
    pub fn has_valid_mx_str(&self, email: &str) -> bool {
        match Address::parse(email) {
            Ok(address) => self.has_valid_mx(&address),
            Err(err) => {
                debug!(email, error = %err, "cannot check MX of unparseable address");
                false
            }
        }
    }

    pub fn is_known_valid(&self, domain: &str) -> bool {
        self.valid_domains
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(domain)
    }

    pub fn known_valid_count(&self) -> usize {
        self.valid_domains
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn blocklist(&self) -> &Blocklist {
        &self.blocklist
    }

    fn blocked_addresses(&self) -> Option<&HashSet<IpAddr>> {
        match self.ready_timeout {
            Some(timeout) => self.blocklist.wait_timeout(timeout),
            None => Some(self.blocklist.wait()),
        }
    }

    fn remember(&self, domain: &str) {
        self.valid_domains
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(domain.to_string());
    }
}

impl std::fmt::Debug for MxValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MxValidator")
            .field("blocklist_ready", &self.blocklist.is_ready())
            .field("known_valid", &self.known_valid_count())
            .field("ready_timeout", &self.ready_timeout)
            .finish_non_exhaustive()
    }
}
