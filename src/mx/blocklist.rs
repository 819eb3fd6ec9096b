use std::collections::HashSet;
use std::net::IpAddr;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, OnceLock, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use super::DnsLookup;
use crate::error::FilterError;

/// IP addresses of known disposable-mail MX hosts, behind a one-shot
/// readiness latch.
///
/// The set is published exactly once by [`BlocklistBuilder`]. Before that,
/// [`Blocklist::wait`] blocks; afterwards every read is lock-free.
#[derive(Debug, Default)]
pub struct Blocklist {
    addresses: OnceLock<HashSet<IpAddr>>,
    lock: Mutex<()>,
    ready: Condvar,
}

impl Blocklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// A blocklist that is ready from the start.
    pub fn ready_with<I>(addresses: I) -> Self
    where
        I: IntoIterator<Item = IpAddr>,
    {
        let blocklist = Self::new();
        blocklist.publish(addresses.into_iter().collect());
        blocklist
    }

    pub fn is_ready(&self) -> bool {
        self.addresses.get().is_some()
    }

    /// Blocks until the set is published.
    pub fn wait(&self) -> &HashSet<IpAddr> {
        if let Some(addresses) = self.addresses.get() {
            return addresses;
        }
        let mut guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            if let Some(addresses) = self.addresses.get() {
                return addresses;
            }
            guard = self.ready.wait(guard).unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Like [`Blocklist::wait`], giving up after `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<&HashSet<IpAddr>> {
        if let Some(addresses) = self.addresses.get() {
            return Some(addresses);
        }
        let deadline = Instant::now() + timeout;
        let mut guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            if let Some(addresses) = self.addresses.get() {
                return Some(addresses);
            }
            let now = Instant::now();
            if now >= deadline {
                return None;
            }
            let (next, _) = self
                .ready
                .wait_timeout(guard, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            guard = next;
        }
    }

    /// Non-blocking membership test; `false` while still building.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.addresses.get().is_some_and(|set| set.contains(ip))
    }

    /// Number of published addresses, `None` while still building.
    pub fn len(&self) -> Option<usize> {
        self.addresses.get().map(HashSet::len)
    }

    /// Publishes the set and releases every waiter. Only the first call has
    /// an effect.
    pub(crate) fn publish(&self, addresses: HashSet<IpAddr>) -> bool {
        let published = self.addresses.set(addresses).is_ok();
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.ready.notify_all();
        published
    }
}

/// Resolves every disposable-mail domain to its MX host addresses.
///
/// Domains are resolved in parallel; each worker accumulates a private set and
/// the partial sets are merged once the workers are done. A failed lookup only
/// drops that domain.
pub struct BlocklistBuilder {
    resolver: Arc<dyn DnsLookup>,
    domains: Vec<String>,
    threads: usize,
}

impl BlocklistBuilder {
    pub const DEFAULT_THREADS: usize = 8;

    pub fn new<I, S>(resolver: Arc<dyn DnsLookup>, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resolver,
            domains: domains.into_iter().map(Into::into).collect(),
            threads: Self::DEFAULT_THREADS,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Runs the lookups and returns the merged set.
    pub fn collect(&self) -> HashSet<IpAddr> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("mx-blocklist-{i}"))
            .build();
        match pool {
            Ok(pool) => pool.install(|| self.collect_parallel()),
            Err(err) => {
                warn!(error = %err, "blocklist pool unavailable, resolving sequentially");
                self.domains
                    .iter()
                    .fold(HashSet::new(), |mut local, domain| {
                        self.resolve_domain(domain, &mut local);
                        local
                    })
            }
        }
    }

    fn collect_parallel(&self) -> HashSet<IpAddr> {
        self.domains
            .par_iter()
            .fold(HashSet::new, |mut local, domain| {
                self.resolve_domain(domain, &mut local);
                local
            })
            .reduce(HashSet::new, |mut merged, partial| {
                merged.extend(partial);
                merged
            })
    }

    fn resolve_domain(&self, domain: &str, into: &mut HashSet<IpAddr>) {
        let records = match self.resolver.lookup_mx(domain) {
            Ok(records) => records,
            Err(err) => {
                debug!(domain, error = %err, "skipping disposable domain");
                return;
            }
        };
        for record in records {
            match self.resolver.lookup_ip(&record.exchange) {
                Ok(addresses) => into.extend(addresses),
                Err(err) => debug!(domain, exchange = %record.exchange, error = %err, "skipping MX host"),
            }
        }
    }

    /// Collects and publishes on the calling thread.
    ///
    /// The latch is released even when collection panics; the blocklist is
    /// then empty.
    pub fn build(&self, blocklist: &Blocklist) {
        info!(domains = self.domains.len(), threads = self.threads, "building MX blocklist");
        let started = Instant::now();
        let addresses = panic::catch_unwind(AssertUnwindSafe(|| self.collect())).unwrap_or_else(|_| {
            error!("MX blocklist build panicked, publishing an empty blocklist");
            HashSet::new()
        });
        let count = addresses.len();
        if blocklist.publish(addresses) {
            info!(addresses = count, elapsed = ?started.elapsed(), "MX blocklist ready");
        } else {
            warn!("MX blocklist was already published, keeping the first one");
        }
    }

    /// Runs [`BlocklistBuilder::build`] on a dedicated thread.
    pub fn spawn(self, blocklist: Arc<Blocklist>) -> Result<JoinHandle<()>, FilterError> {
        thread::Builder::new()
            .name("mx-blocklist".to_string())
            .spawn(move || self.build(&blocklist))
            .map_err(FilterError::spawn)
    }
}

impl std::fmt::Debug for BlocklistBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlocklistBuilder")
            .field("domains", &self.domains)
            .field("threads", &self.threads)
            .finish_non_exhaustive()
    }
}
