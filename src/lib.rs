#![forbid(unsafe_code)]
//! mailfilter_lib : détection d'adresses e-mail jetables ou factices
//!
//! Static tiers (format, rule ladder) run synchronously; the MX reputation
//! check compares an address's mail hosts against the hosts of known
//! disposable-mail providers, resolved once in the background.

pub mod address;
pub mod classifier;
pub mod error;
pub mod filter;
pub mod format;
pub mod mx;
pub mod options;
pub mod rules;

pub use address::{Address, AddressError};
pub use classifier::{Classifier, Reason, Rule, Strictness, Verdict};
pub use error::FilterError;
pub use filter::EmailFilter;
pub use format::{FormatValidator, is_valid_format};
pub use mx::{
    Blocklist, BlocklistBuilder, DnsLookup, Error as MxError, MxRecord, MxValidator,
    SystemResolver,
};
pub use options::FilterOptions;
pub use rules::RuleSet;
#[cfg(feature = "with-serde")]
pub use rules::RuleSetConfig;
