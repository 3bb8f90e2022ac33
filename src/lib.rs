#![forbid(unsafe_code)]
//! mxsniff : identifie le fournisseur de messagerie derrière une adresse,
//! une URL ou un nom de domaine.

pub mod bulk;
pub mod canonical;
pub mod domain;
pub mod mx;
pub mod providers;
pub mod sniff;
pub mod validator;
pub mod wildcard;

#[cfg(feature = "with-probe")]
pub mod probe;

pub use bulk::{BulkSniff, PoolOptions, bulk_sniff, fan_out};
pub use canonical::{CanonicalFlags, canonicalize};
pub use domain::{extract_domain, registrable_domain};
pub use mx::{DnsResolver, Error as MxError, LookupMx, MxRecord, MxStatus, check_mx};
pub use providers::{Provider, ProviderInfo, ProviderRegistry};
pub use sniff::{
    SniffCache, SniffError, SniffOptions, SniffOutcome, SniffResult, Sniffer, mxsniff,
};
pub use validator::{ValidationReport, is_email, parse_address, validate_address};
pub use wildcard::{WildcardDomainMap, WildcardError};

#[cfg(feature = "with-probe")]
pub use probe::{
    ProbeError, ProbeOptions, ProbeReport, ProbeVerdict, SniffAndProbe, mxprobe, sniff_and_probe,
};
