use std::future::Future;
use std::net::IpAddr;
use std::thread;
use std::time::Duration;

use tokio::runtime::{Builder, Handle, Runtime};
use tracing::debug;
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    system_conf::read_system_conf,
};

use super::{MxError, MxRecord};
use crate::error::FilterError;
use crate::options::FilterOptions;

/// DNS operations the MX validator and the blocklist builder need.
///
/// "No such record" is `Ok(vec![])`; `Err` is kept for transport failures and
/// timeouts. Callers treat both the same way.
pub trait DnsLookup: Send + Sync {
    /// MX records for `domain`, sorted by preference.
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, MxError>;

    /// A/AAAA addresses for `host`.
    fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, MxError>;
}

/// [`DnsLookup`] over the system resolver configuration.
///
/// Lookups are driven by a private multi-thread runtime, so the blocking
/// methods can be called from many threads at once. Called from inside
/// another tokio runtime, a lookup runs on a short-lived helper thread.
pub struct SystemResolver {
    runtime: Option<Runtime>,
    resolver: TokioAsyncResolver,
    timeout: Duration,
}

impl SystemResolver {
    pub fn from_system_conf(options: &FilterOptions) -> Result<Self, FilterError> {
        let (config, mut opts) =
            read_system_conf().map_err(|err| FilterError::resolver_init(err.into()))?;
        opts.timeout = options.dns_timeout();
        opts.attempts = options.dns_attempts;
        Self::with_config(config, opts, options.dns_timeout())
    }

    /// `timeout` bounds each whole lookup, on top of the per-query timeout in
    /// `opts`.
    pub fn with_config(
        config: ResolverConfig,
        opts: ResolverOpts,
        timeout: Duration,
    ) -> Result<Self, FilterError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("mx-dns")
            .enable_all()
            .build()
            .map_err(FilterError::runtime)?;
        let resolver = {
            let _guard = runtime.enter();
            TokioAsyncResolver::tokio(config, opts)
        };
        Ok(Self {
            runtime: Some(runtime),
            resolver,
            timeout,
        })
    }

    fn block_on<F>(&self, name: &str, lookup: F) -> Result<F::Output, MxError>
    where
        F: Future + Send,
        F::Output: Send,
    {
        let Some(runtime) = self.runtime.as_ref() else {
            return Err(MxError::worker(name));
        };
        let timeout = self.timeout;
        let run = move || {
            runtime.block_on(async move { tokio::time::timeout(timeout, lookup).await })
        };

        let outcome = if Handle::try_current().is_ok() {
            // block_on would panic on a thread that already drives a runtime
            thread::scope(|scope| {
                let worker = thread::Builder::new()
                    .name("mx-dns-lookup".to_string())
                    .spawn_scoped(scope, run);
                match worker {
                    Ok(worker) => worker.join().map_err(|_| MxError::worker(name)),
                    Err(err) => {
                        debug!(name, error = %err, "cannot spawn DNS helper thread");
                        Err(MxError::worker(name))
                    }
                }
            })?
        } else {
            run()
        };
        outcome.map_err(|_| MxError::timeout(name, timeout))
    }
}

impl Drop for SystemResolver {
    fn drop(&mut self) {
        // a blocking shutdown panics inside an async context
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl std::fmt::Debug for SystemResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemResolver")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl DnsLookup for SystemResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, MxError> {
        let ascii = normalize_domain(domain)?;
        let lookup = match self.block_on(&ascii, self.resolver.mx_lookup(ascii.as_str()))? {
            Ok(lookup) => lookup,
            Err(err) if is_no_records(&err) => {
                debug!(domain = %ascii, "no MX records");
                return Ok(Vec::new());
            }
            Err(err) => return Err(MxError::lookup(ascii, err)),
        };

        let records = lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), normalize_exchange(mx.exchange().to_utf8())))
            .collect();
        Ok(sort_records(records))
    }

    fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, MxError> {
        match self.block_on(host, self.resolver.lookup_ip(host))? {
            Ok(lookup) => Ok(lookup.iter().collect()),
            Err(err) if is_no_records(&err) => Ok(Vec::new()),
            Err(err) => Err(MxError::lookup(host, err)),
        }
    }
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, MxError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(MxError::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(MxError::idna)
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

/// Ascending preference, duplicates removed.
pub(crate) fn sort_records(mut records: Vec<MxRecord>) -> Vec<MxRecord> {
    records.sort();
    records.dedup();
    records
}

fn is_no_records(err: &ResolveError) -> bool {
    matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. })
}
