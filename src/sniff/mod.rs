//! Sniff engine: classifies the mail provider behind an address, URL or
//! domain.
//!
//! A lookup either answers from the well-known mailbox domains of the
//! provider table, or queries MX records and matches each exchange against
//! the registry. Domains matching no provider are labelled with one of the
//! reserved labels, checked in this order: [`SELF_HOSTED`], [`NULL_MX`],
//! [`UNKNOWN`], [`NO_MX`].

mod cache;
mod error;
mod options;
mod types;

pub use cache::SniffCache;
pub use error::SniffError;
pub use options::SniffOptions;
pub use types::{
    NO_MX, NULL_MX, SELF_HOSTED, SniffOutcome, SniffResult, UNKNOWN, is_reserved_label,
};

use tracing::{debug, warn};

use crate::canonical::canonicalize;
use crate::domain::{extract_domain, registrable_domain};
use crate::mx::{DnsResolver, LookupMx, MxRecord, resolve_with};
use crate::providers::{ProviderInfo, ProviderRegistry};

/// Sniff engine bound to an MX source and a provider registry.
///
/// Holds no mutable state: one instance may serve any number of sequential
/// lookups, and is `Sync` whenever the resolver is.
pub struct Sniffer<R = DnsResolver> {
    resolver: R,
    registry: &'static ProviderRegistry,
    options: SniffOptions,
}

impl Sniffer<DnsResolver> {
    /// Engine on the system resolver, with `options.timeout` applied to every
    /// DNS query.
    pub fn new(options: SniffOptions) -> Result<Self, SniffError> {
        let resolver =
            DnsResolver::from_system_conf(options.timeout).map_err(SniffError::resolver)?;
        Ok(Self::with_resolver(resolver, options))
    }
}

impl<R: LookupMx> Sniffer<R> {
    pub fn with_resolver(resolver: R, options: SniffOptions) -> Self {
        Self {
            resolver,
            registry: ProviderRegistry::global(),
            options,
        }
    }

    pub fn with_registry(mut self, registry: &'static ProviderRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn options(&self) -> &SniffOptions {
        &self.options
    }

    pub fn registry(&self) -> &'static ProviderRegistry {
        self.registry
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Sniffs a single address, URL or domain.
    pub fn sniff(&self, input: &str) -> Result<SniffResult, SniffError> {
        self.run(input, None)
    }

    /// Like [`sniff`](Self::sniff), reusing and filling `cache`. Failed
    /// lookups are never cached.
    pub fn sniff_cached(
        &self,
        input: &str,
        cache: &mut dyn SniffCache,
    ) -> Result<SniffResult, SniffError> {
        self.run(input, Some(cache))
    }

    fn run(
        &self,
        input: &str,
        mut cache: Option<&mut dyn SniffCache>,
    ) -> Result<SniffResult, SniffError> {
        let domain = extract_domain(input);

        if let Some(hit) = cache.as_deref().and_then(|cache| cache.lookup(&domain)) {
            debug!(%domain, "sniff cache hit");
            return Ok(hit.with_query(input));
        }

        let mut matches: Vec<String> = Vec::new();
        let mut providers: Vec<ProviderInfo> = Vec::new();
        let mut mx = Vec::new();

        let static_hit = if self.options.use_static_domains {
            self.registry.match_domain(&domain)
        } else {
            None
        };

        match static_hit {
            Some(name) => {
                debug!(%domain, provider = name, "well-known mailbox domain");
                self.push_match(name, &mut matches, &mut providers);
            }
            None => {
                mx = self.lookup(&domain)?;
                let mut mx_domains: Vec<String> = Vec::new();
                for record in &mx {
                    if let Some(owner) = registrable_domain(&record.exchange) {
                        if !mx_domains.contains(&owner) {
                            mx_domains.push(owner);
                        }
                    }
                    if let Some(name) = self.registry.match_mx(&record.exchange) {
                        self.push_match(name, &mut matches, &mut providers);
                    }
                }
                if matches.is_empty() {
                    let label = classify_unmatched(&domain, &mx, &mx_domains);
                    matches.push(label.to_string());
                }
            }
        }

        let flags = matches
            .first()
            .map(|name| self.registry.canonical_flags(name))
            .unwrap_or_default();
        let canonical = canonicalize(input, &flags);
        let public = self.registry.is_public_domain(&domain)
            || providers.iter().any(|provider| provider.public);

        debug!(%domain, matches = ?matches, public, "sniffed");

        let result = SniffResult {
            query: input.to_string(),
            domain,
            matches,
            mx,
            providers,
            public,
            canonical,
        };

        if let Some(cache) = cache.as_deref_mut() {
            cache.store(result.domain.clone(), result.clone());
        }
        Ok(result)
    }

    fn lookup(&self, domain: &str) -> Result<Vec<MxRecord>, SniffError> {
        // rien à résoudre
        if domain.is_empty() {
            return Ok(Vec::new());
        }

        match resolve_with(&self.resolver, domain) {
            Ok(status) => Ok(status.into_records()),
            Err(err) if self.options.ignore_errors => {
                warn!(%domain, error = %err, "MX lookup failed, treated as no records");
                Ok(Vec::new())
            }
            Err(err) => Err(SniffError::lookup(domain, err)),
        }
    }

    fn push_match(
        &self,
        name: &'static str,
        matches: &mut Vec<String>,
        providers: &mut Vec<ProviderInfo>,
    ) {
        if matches.iter().any(|seen| seen == name) {
            return;
        }
        matches.push(name.to_string());
        if let Some(info) = self.registry.provider_info(name) {
            providers.push(info);
        }
    }
}

/// Label for a domain whose MX hosts matched no provider.
fn classify_unmatched(domain: &str, mx: &[MxRecord], mx_domains: &[String]) -> &'static str {
    let own = registrable_domain(domain);
    if own.is_some_and(|own| mx_domains.contains(&own)) {
        SELF_HOSTED
    } else if mx.first().is_some_and(MxRecord::is_null) {
        NULL_MX
    } else if !mx.is_empty() {
        UNKNOWN
    } else {
        NO_MX
    }
}

/// One-shot sniff on the system resolver.
///
/// Builds a fresh resolver per call; use a [`Sniffer`] to reuse one across
/// lookups.
pub fn mxsniff(input: &str, options: &SniffOptions) -> Result<SniffResult, SniffError> {
    Sniffer::new(options.clone())?.sniff(input)
}

#[cfg(test)]
mod tests;
