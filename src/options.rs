use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Tunables for [`EmailFilter`](crate::EmailFilter).
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Per-lookup DNS timeout.
    pub dns_timeout_ms: u64,
    pub dns_attempts: usize,
    /// Wall-clock budget of one format check.
    pub format_budget_ms: u64,
    /// Worker threads of the blocklist build.
    pub build_threads: usize,
    /// Maximum wait for the blocklist before MX validation fails closed.
    /// `0` waits as long as the build takes.
    pub ready_timeout_ms: u64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            dns_timeout_ms: 2_000,
            dns_attempts: 2,
            format_budget_ms: 200,
            build_threads: 8,
            ready_timeout_ms: 0,
        }
    }
}

impl FilterOptions {
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }

    pub fn format_budget(&self) -> Duration {
        Duration::from_millis(self.format_budget_ms)
    }

    /// `None` when the wait is unbounded.
    pub fn ready_timeout(&self) -> Option<Duration> {
        if self.ready_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.ready_timeout_ms))
        }
    }

    pub fn with_ready_timeout_ms(mut self, ms: u64) -> Self {
        self.ready_timeout_ms = ms;
        self
    }

    pub fn with_dns_timeout_ms(mut self, ms: u64) -> Self {
        self.dns_timeout_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ready_timeout_waits_forever() {
        let options = FilterOptions::default();
        assert_eq!(options.ready_timeout(), None);
        assert_eq!(
            options.with_ready_timeout_ms(150).ready_timeout(),
            Some(Duration::from_millis(150))
        );
    }

    #[test]
    fn defaults() {
        let options = FilterOptions::default();
        assert_eq!(options.dns_timeout(), Duration::from_secs(2));
        assert_eq!(options.format_budget(), Duration::from_millis(200));
        assert_eq!(options.build_threads, 8);
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn partial_json_keeps_defaults() {
        let options: FilterOptions =
            serde_json::from_str(r#"{ "ready_timeout_ms": 500 }"#).expect("valid options");
        assert_eq!(options.ready_timeout_ms, 500);
        assert_eq!(options.dns_attempts, 2);
    }
}
