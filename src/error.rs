use thiserror::Error;

/// Errors raised while constructing an [`EmailFilter`](crate::EmailFilter).
///
/// Classification itself never fails; see [`crate::Verdict`].
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
    #[error("DNS runtime initialization failed: {source}")]
    Runtime {
        #[source]
        source: std::io::Error,
    },
    #[error("failed to spawn the blocklist builder: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },
    #[error("blocklist builder panicked")]
    BuilderPanicked,
    #[cfg(feature = "with-serde")]
    #[error("invalid rule configuration: {source}")]
    RulesConfig {
        #[source]
        source: serde_json::Error,
    },
}

impl FilterError {
    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }

    pub(crate) fn runtime(source: std::io::Error) -> Self {
        Self::Runtime { source }
    }

    pub(crate) fn spawn(source: std::io::Error) -> Self {
        Self::Spawn { source }
    }

    #[cfg(feature = "with-serde")]
    pub(crate) fn rules_config(source: serde_json::Error) -> Self {
        Self::RulesConfig { source }
    }
}
