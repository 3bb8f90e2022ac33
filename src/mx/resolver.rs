use std::time::Duration;

use tracing::debug;
use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
    system_conf::read_system_conf,
};

use super::{Error, MxRecord, MxStatus};

/// Source of MX answers.
///
/// "No such domain", "no answer" and "no nameservers" are reported as
/// [`MxStatus::NoRecords`]; every other fault is an [`Error`].
pub trait LookupMx {
    fn lookup_mx(&self, domain: &str) -> Result<MxStatus, Error>;
}

impl<T: LookupMx + ?Sized> LookupMx for &T {
    fn lookup_mx(&self, domain: &str) -> Result<MxStatus, Error> {
        (**self).lookup_mx(domain)
    }
}

/// System resolver with a single timeout bounding each query.
pub struct DnsResolver {
    inner: Resolver,
}

impl DnsResolver {
    /// Builds a resolver from `/etc/resolv.conf` (or the platform
    /// equivalent). `timeout` applies per query and, with a single attempt,
    /// to the whole resolution.
    pub fn from_system_conf(timeout: Duration) -> Result<Self, Error> {
        let (config, mut opts) = read_system_conf().map_err(Error::resolver_init)?;
        opts.timeout = timeout;
        opts.attempts = 1;
        let inner = Resolver::new(config, opts).map_err(Error::resolver_init)?;
        Ok(Self { inner })
    }
}

impl LookupMx for DnsResolver {
    fn lookup_mx(&self, domain: &str) -> Result<MxStatus, Error> {
        let ascii = normalize_domain(domain)?;
        debug!(domain = %ascii, "MX query");
        let lookup = match self.inner.mx_lookup(ascii.as_str()) {
            Ok(lookup) => lookup,
            Err(err) if should_treat_as_empty(&err) => return Ok(MxStatus::NoRecords),
            Err(err) => return Err(Error::lookup(err)),
        };
        let records = lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), mx.exchange().to_utf8()))
            .collect();
        Ok(MxStatus::from_records(records))
    }
}

/// Lookup MX records for `domain` using the system resolver.
///
/// The resulting [`MxStatus`] holds normalized exchanges sorted by
/// preference, then hostname.
pub fn check_mx(domain: &str, timeout: Duration) -> Result<MxStatus, Error> {
    normalize_domain(domain)?;
    let resolver = DnsResolver::from_system_conf(timeout)?;
    resolve_with(&resolver, domain)
}

pub fn resolve_with<R>(resolver: &R, domain: &str) -> Result<MxStatus, Error>
where
    R: LookupMx + ?Sized,
{
    let mut records: Vec<MxRecord> = resolver
        .lookup_mx(domain)?
        .into_records()
        .into_iter()
        .map(|record| MxRecord::new(record.preference, normalize_exchange(&record.exchange)))
        .collect();

    records.sort();
    Ok(MxStatus::from_records(records))
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}

/// Lowercases and drops one trailing dot; the root name `.` (null MX) is
/// kept as is.
pub(crate) fn normalize_exchange(exchange: &str) -> String {
    let trimmed = exchange.trim();
    if trimmed == "." {
        return trimmed.to_string();
    }
    trimmed
        .strip_suffix('.')
        .unwrap_or(trimmed)
        .to_ascii_lowercase()
}

pub(crate) fn should_treat_as_empty(err: &ResolveError) -> bool {
    matches!(
        err.kind(),
        ResolveErrorKind::NoRecordsFound { .. } | ResolveErrorKind::NoConnections
    )
}
