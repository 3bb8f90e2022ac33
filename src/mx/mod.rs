//! DNS MX resolution.
//!
//! [`LookupMx`] is the seam between the sniff engine and DNS; [`DnsResolver`]
//! is the system-resolver implementation and [`check_mx`] a one-shot helper.

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{DnsResolver, LookupMx, check_mx, resolve_with};
pub use types::{MxRecord, MxStatus};

pub(crate) use resolver::normalize_exchange;
