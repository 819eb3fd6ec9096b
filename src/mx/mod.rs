//! DNS-based reputation check.
//!
//! [`BlocklistBuilder`] resolves the known disposable-mail domains to the IP
//! addresses of their MX hosts once, in the background, and publishes them
//! into a [`Blocklist`]. [`MxValidator`] then rejects any domain whose MX
//! hosts share one of those addresses, which catches unlisted aliases of the
//! same throwaway service.

mod blocklist;
mod error;
mod resolver;
mod types;
mod validator;

pub use blocklist::{Blocklist, BlocklistBuilder};
pub use error::MxError as Error;
pub use resolver::{DnsLookup, SystemResolver};
pub use types::MxRecord;
pub use validator::MxValidator;

pub(crate) use error::MxError;
