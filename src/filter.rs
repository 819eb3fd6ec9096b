//! The filter context: rules, format checker, MX validator and the background
//! blocklist build, owned together.

use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, info};

use crate::classifier::{Classifier, Reason, Strictness, Verdict};
use crate::error::FilterError;
use crate::format::FormatValidator;
use crate::mx::{Blocklist, BlocklistBuilder, DnsLookup, MxValidator, SystemResolver};
use crate::options::FilterOptions;
use crate::rules::RuleSet;

/// Disposable-address filter.
///
/// Construction starts the blocklist build on the `mx-blocklist` thread and
/// returns immediately. Static classification is available at once; MX
/// validation waits until the blocklist is published.
pub struct EmailFilter {
    classifier: Classifier,
    mx: MxValidator,
    builder: Mutex<Option<JoinHandle<()>>>,
}

impl EmailFilter {
    /// Built-in rules over the system DNS configuration.
    pub fn start(options: FilterOptions) -> Result<Self, FilterError> {
        let resolver = SystemResolver::from_system_conf(&options)?;
        Self::with_resolver(RuleSet::builtin(), Arc::new(resolver), &options)
    }

    pub fn with_rules(rules: RuleSet, options: FilterOptions) -> Result<Self, FilterError> {
        let resolver = SystemResolver::from_system_conf(&options)?;
        Self::with_resolver(rules, Arc::new(resolver), &options)
    }

    pub fn with_resolver(
        rules: RuleSet,
        resolver: Arc<dyn DnsLookup>,
        options: &FilterOptions,
    ) -> Result<Self, FilterError> {
        let blocklist = Arc::new(Blocklist::new());
        let handle = BlocklistBuilder::new(resolver.clone(), rules.disposable_mx_domains())
            .with_threads(options.build_threads)
            .spawn(blocklist.clone())?;
        info!(
            blocked_domains = rules.blocked_domain_count(),
            ready_timeout = ?options.ready_timeout(),
            "email filter started"
        );

        let classifier = Classifier::new(rules)
            .with_format_validator(FormatValidator::new(options.format_budget()));
        let mx = MxValidator::new(resolver, blocklist).with_ready_timeout(options.ready_timeout());
        Ok(Self {
            classifier,
            mx,
            builder: Mutex::new(Some(handle)),
        })
    }

    /// Static tiers, then the MX check when `validate_mx` is set.
    pub fn classify(&self, email: &str, strictness: Strictness, validate_mx: bool) -> Verdict {
        let address = match self.classifier.screen(email, strictness) {
            Ok(address) => address,
            Err(reason) => return Verdict::Fake(reason),
        };
        if validate_mx && !self.mx.has_valid_mx(&address) {
            debug!(%address, "no acceptable MX");
            return Verdict::Fake(Reason::NoValidMx);
        }
        Verdict::Legitimate
    }

    pub fn is_probably_fake(&self, email: &str, strictness: Strictness, validate_mx: bool) -> bool {
        self.classify(email, strictness, validate_mx).is_fake()
    }

    /// Lowest strictness with MX validation: only addresses that are certainly
    /// unusable.
    pub fn is_fake(&self, email: &str) -> bool {
        self.is_probably_fake(email, Strictness::LENIENT, true)
    }

    pub fn has_valid_mx(&self, email: &str) -> bool {
        self.mx.has_valid_mx_str(email)
    }

    pub fn is_ready(&self) -> bool {
        self.mx.blocklist().is_ready()
    }

    /// Blocks until the blocklist is published, or until `timeout` elapses.
    /// Returns whether it is ready.
    pub fn wait_until_ready(&self, timeout: Option<Duration>) -> bool {
        let blocklist = self.mx.blocklist();
        match timeout {
            Some(timeout) => blocklist.wait_timeout(timeout).is_some(),
            None => {
                blocklist.wait();
                true
            }
        }
    }

    /// Joins the background build. Later calls return `Ok(())` at once.
    pub fn join_builder(&self) -> Result<(), FilterError> {
        let handle = self
            .builder
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match handle {
            Some(handle) => handle.join().map_err(|_| FilterError::BuilderPanicked),
            None => Ok(()),
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn rules(&self) -> &RuleSet {
        self.classifier.rules()
    }

    pub fn mx_validator(&self) -> &MxValidator {
        &self.mx
    }
}

impl std::fmt::Debug for EmailFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailFilter")
            .field("classifier", &self.classifier)
            .field("mx", &self.mx)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mx::tests::StubResolver;

    fn world() -> StubResolver {
        StubResolver::new()
            .with_mx("mailinator.com", &["mx.mailinator.com"])
            .with_host("mx.mailinator.com", &["192.0.2.10"])
            .with_mx("alias.example", &["mx.alias.example"])
            .with_host("mx.alias.example", &["192.0.2.10"])
            .with_mx("acmemail.net", &["mx.acmemail.net"])
            .with_host("mx.acmemail.net", &["203.0.113.5"])
            .failing("broken.example")
    }

    fn filter(stub: Arc<StubResolver>) -> EmailFilter {
        let rules = RuleSet::builtin().with_disposable_mx_domains(["mailinator.com"]);
        EmailFilter::with_resolver(rules, stub, &FilterOptions::default()).expect("filter")
    }

    #[test]
    fn static_tiers_do_not_wait_for_the_blocklist() {
        let filter = filter(Arc::new(world()));
        assert_eq!(
            filter.classify("j@gmail.com", Strictness::LENIENT, false),
            Verdict::Fake(Reason::BelowMinimumPrefix)
        );
        assert!(!filter.is_probably_fake("jonathan@acmemail.net", Strictness::new(6), false));
    }

    #[test]
    fn mx_tier_runs_last() {
        let stub = Arc::new(world());
        let filter = filter(stub.clone());
        assert!(filter.wait_until_ready(Some(Duration::from_secs(5))));
        let lookups_after_build = stub.mx_calls();

        assert_eq!(
            filter.classify("test@example.com", Strictness::new(2), true),
            Verdict::Fake(Reason::BlockedDomain)
        );
        assert_eq!(stub.mx_calls(), lookups_after_build);

        assert_eq!(
            filter.classify("jonathan@alias.example", Strictness::LENIENT, true),
            Verdict::Fake(Reason::NoValidMx)
        );
        assert_eq!(
            filter.classify("jonathan@acmemail.net", Strictness::MAX, true),
            Verdict::Legitimate
        );
        filter.join_builder().expect("builder joined");
    }

    #[test]
    fn is_fake_fails_closed_on_dns_errors() {
        let filter = filter(Arc::new(world()));
        assert!(filter.is_fake("jonathan@broken.example"));
        assert!(filter.is_fake("not an address"));
        assert!(!filter.is_fake("jonathan@acmemail.net"));
    }

    #[test]
    fn has_valid_mx_caches_domains() {
        let stub = Arc::new(world());
        let filter = filter(stub.clone());
        filter.join_builder().expect("builder joined");
        let before = stub.mx_calls();

        assert!(filter.has_valid_mx("a@acmemail.net"));
        assert!(filter.has_valid_mx("b@acmemail.net"));
        assert_eq!(stub.mx_calls(), before + 1);
        assert!(!filter.has_valid_mx("a@alias.example"));
        assert!(!filter.has_valid_mx("garbage"));
    }

    #[test]
    fn join_builder_is_idempotent() {
        let filter = filter(Arc::new(world()));
        filter.join_builder().expect("first join");
        assert!(filter.is_ready());
        filter.join_builder().expect("second join");
    }

    #[test]
    fn panicked_build_publishes_empty_blocklist() {
        // lookups of the disposable list panic, the build still publishes
        let stub = Arc::new(world().panicking("mailinator.com"));
        let options = FilterOptions::default().with_ready_timeout_ms(5_000);
        let rules = RuleSet::empty().with_disposable_mx_domains(["mailinator.com"]);
        let filter = EmailFilter::with_resolver(rules, stub, &options).expect("filter");

        filter.join_builder().expect("panic is contained by the builder");
        assert_eq!(filter.mx_validator().blocklist().len(), Some(0));
        // empty blocklist: the alias now passes
        assert!(filter.has_valid_mx("a@alias.example"));
    }
}
