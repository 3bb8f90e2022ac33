use crate::mx::MxRecord;
use crate::providers::ProviderInfo;

/// Match label for domains whose MX hosts live under their own registrable
/// domain.
pub const SELF_HOSTED: &str = "self";
/// Match label for RFC 7505 null MX domains.
pub const NULL_MX: &str = "nullmx";
/// Match label for MX hosts that belong to no known provider.
pub const UNKNOWN: &str = "unknown";
/// Match label for domains without any MX record.
pub const NO_MX: &str = "nomx";

pub fn is_reserved_label(name: &str) -> bool {
    matches!(name, SELF_HOSTED | NULL_MX | UNKNOWN | NO_MX)
}

/// Outcome of a single sniff.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SniffResult {
    /// Input as given by the caller.
    pub query: String,
    /// Domain extracted from the query.
    pub domain: String,
    /// Provider ids in first-seen order, or a single reserved label.
    #[cfg_attr(feature = "with-serde", serde(rename = "match"))]
    pub matches: Vec<String>,
    /// MX answers sorted by preference; empty on a static match.
    pub mx: Vec<MxRecord>,
    pub providers: Vec<ProviderInfo>,
    pub public: bool,
    pub canonical: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffOutcome {
    /// Well-known mailbox domain, answered without DNS.
    Static,
    /// At least one MX host matched a known provider.
    Matched,
    SelfHosted,
    NullMx,
    Unknown,
    NoMx,
}

impl SniffResult {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    /// First match: the provider id used for canonicalization, or the
    /// reserved label.
    pub fn primary(&self) -> Option<&str> {
        self.matches.first().map(String::as_str)
    }

    pub fn outcome(&self) -> SniffOutcome {
        match self.primary() {
            Some(SELF_HOSTED) => SniffOutcome::SelfHosted,
            Some(NULL_MX) => SniffOutcome::NullMx,
            Some(UNKNOWN) => SniffOutcome::Unknown,
            Some(NO_MX) | None => SniffOutcome::NoMx,
            Some(_) if self.mx.is_empty() => SniffOutcome::Static,
            Some(_) => SniffOutcome::Matched,
        }
    }

    /// Exchange hostnames in preference order.
    pub fn mx_hosts(&self) -> impl Iterator<Item = &str> {
        self.mx.iter().map(|record| record.exchange.as_str())
    }
}
