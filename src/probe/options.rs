use std::borrow::Cow;
use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Configuration knobs for [`mxprobe`](crate::probe::mxprobe).
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    /// Name announced in EHLO/HELO; `probe.<sender domain>` when unset.
    pub hostname: Option<String>,
    pub timeout_ms: u64,
    pub port: u16,
    /// Upgrade with STARTTLS when the server advertises it.
    pub starttls: bool,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            hostname: None,
            timeout_ms: 30_000,
            port: 25,
            starttls: false,
        }
    }
}

impl ProbeOptions {
    /// Return the timeout as a [`Duration`]. A zero timeout disables the
    /// connection/read deadline.
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.timeout_ms))
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn helo_name<'a>(&'a self, from: &str) -> Cow<'a, str> {
        match self.hostname.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Cow::Borrowed(name),
            _ => {
                let domain = from.split_once('@').map_or(from, |(_, domain)| domain);
                Cow::Owned(format!("probe.{}", domain.trim()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helo_name_defaults_to_sender_domain() {
        let options = ProbeOptions::default();
        assert_eq!(options.helo_name("me@example.org"), "probe.example.org");
        assert_eq!(options.helo_name("example.org"), "probe.example.org");
    }

    #[test]
    fn explicit_hostname_wins() {
        let options = ProbeOptions {
            hostname: Some("mta.example.net".into()),
            ..ProbeOptions::default()
        };
        assert_eq!(options.helo_name("me@example.org"), "mta.example.net");
        let blank = ProbeOptions {
            hostname: Some("  ".into()),
            ..ProbeOptions::default()
        };
        assert_eq!(blank.helo_name("me@example.org"), "probe.example.org");
    }

    #[test]
    fn timeout_conversion() {
        let options = ProbeOptions::default().with_timeout(Duration::from_secs(5));
        assert_eq!(options.timeout(), Some(Duration::from_secs(5)));
        let none = ProbeOptions {
            timeout_ms: 0,
            ..ProbeOptions::default()
        };
        assert_eq!(none.timeout(), None);
    }
}
