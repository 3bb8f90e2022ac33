use std::time::Duration;

/// Configuration knobs for [`Sniffer`](crate::sniff::Sniffer).
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SniffOptions {
    /// Treat DNS faults (timeouts, SERVFAIL, ...) as "no MX records" instead
    /// of failing the lookup.
    pub ignore_errors: bool,
    /// DNS timeout, per query and overall.
    pub timeout: Duration,
    /// Answer well-known mailbox domains (`gmail.com`, ...) from the provider
    /// table without querying DNS.
    pub use_static_domains: bool,
}

impl SniffOptions {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Options for bulk runs: DNS faults degrade to "no MX records" so every
    /// input yields a result.
    pub fn bulk() -> Self {
        Self {
            ignore_errors: true,
            ..Self::default()
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

impl Default for SniffOptions {
    fn default() -> Self {
        Self {
            ignore_errors: false,
            timeout: Self::DEFAULT_TIMEOUT,
            use_static_domains: true,
        }
    }
}
