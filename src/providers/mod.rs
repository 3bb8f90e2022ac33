//! Provider registry: MX-hostname patterns, well-known mailbox domains and
//! public webmail domains, built once from the static table in [`data`].

mod data;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use tracing::warn;

use crate::canonical::CanonicalFlags;
use crate::sniff::is_reserved_label;
use crate::wildcard::WildcardDomainMap;

/// Static description of an email service provider.
#[derive(Debug, Clone, Copy)]
pub struct Provider {
    /// Stable identifier; survives rebrands.
    pub name: &'static str,
    pub title: Option<&'static str>,
    pub note: Option<&'static str>,
    pub url: Option<&'static str>,
    /// Freemail/webmail provider open to the public.
    pub public: bool,
    pub canonical: CanonicalFlags<'static>,
    /// MX hostname patterns; `*` matches one label.
    pub mx: &'static [&'static str],
    /// Mailbox domains served by this provider, used as a DNS shortcut.
    pub domains: &'static [&'static str],
}

/// Public fields of a [`Provider`], as reported in sniff results.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    pub title: Option<String>,
    pub note: Option<String>,
    pub url: Option<String>,
    pub public: bool,
}

impl From<&Provider> for ProviderInfo {
    fn from(provider: &Provider) -> Self {
        Self {
            name: provider.name.to_string(),
            title: provider.title.map(str::to_string),
            note: provider.note.map(str::to_string),
            url: provider.url.map(str::to_string),
            public: provider.public,
        }
    }
}

/// Read-only lookup tables derived from a provider list.
#[derive(Debug)]
pub struct ProviderRegistry {
    providers: HashMap<&'static str, &'static Provider>,
    mx: WildcardDomainMap<&'static str>,
    domains: HashMap<&'static str, &'static str>,
    public_domains: HashSet<&'static str>,
}

static GLOBAL: LazyLock<ProviderRegistry> = LazyLock::new(|| {
    ProviderRegistry::new(data::PROVIDERS, data::PUBLIC_DOMAINS.iter().copied())
});

impl ProviderRegistry {
    /// Registry over the built-in provider table. Built on first use and
    /// shared by every caller afterwards.
    pub fn global() -> &'static ProviderRegistry {
        &GLOBAL
    }

    pub fn new<I>(providers: &'static [Provider], public_domains: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let mut registry = Self {
            providers: HashMap::with_capacity(providers.len()),
            mx: WildcardDomainMap::new(),
            domains: HashMap::new(),
            public_domains: public_domains.into_iter().collect(),
        };

        for provider in providers {
            if is_reserved_label(provider.name) {
                warn!(provider = provider.name, "reserved label used as provider name, skipped");
                continue;
            }
            registry.providers.insert(provider.name, provider);
            for &pattern in provider.mx {
                if let Err(err) = registry.mx.insert(pattern, provider.name) {
                    warn!(provider = provider.name, pattern, %err, "MX pattern skipped");
                }
            }
            for &domain in provider.domains {
                registry.domains.insert(domain, provider.name);
            }
        }

        registry
    }

    pub fn provider(&self, name: &str) -> Option<&'static Provider> {
        self.providers.get(name).copied()
    }

    pub fn provider_info(&self, name: &str) -> Option<ProviderInfo> {
        self.provider(name).map(ProviderInfo::from)
    }

    /// Provider whose MX patterns match `hostname`.
    pub fn match_mx(&self, hostname: &str) -> Option<&'static str> {
        self.mx.get(hostname).copied()
    }

    /// Provider that owns the well-known mailbox domain `domain`.
    pub fn match_domain(&self, domain: &str) -> Option<&'static str> {
        self.domains.get(domain).copied()
    }

    pub fn is_public_domain(&self, domain: &str) -> bool {
        self.public_domains.contains(domain)
    }

    /// Canonicalization rules of `name`, or no-op rules for unknown names and
    /// reserved labels.
    pub fn canonical_flags(&self, name: &str) -> CanonicalFlags<'static> {
        self.provider(name)
            .map_or(CanonicalFlags::NONE, |provider| provider.canonical)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
