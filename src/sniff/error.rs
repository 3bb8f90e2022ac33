use thiserror::Error;

use crate::mx::Error as MxError;

#[derive(Debug, Error)]
pub enum SniffError {
    #[error("resolver initialization failed: {source}")]
    Resolver {
        #[source]
        source: MxError,
    },
    #[error("MX lookup failed for {domain}: {source}")]
    Lookup {
        domain: String,
        #[source]
        source: MxError,
    },
}

impl SniffError {
    pub(crate) fn resolver(source: MxError) -> Self {
        Self::Resolver { source }
    }

    pub(crate) fn lookup(domain: &str, source: MxError) -> Self {
        Self::Lookup {
            domain: domain.to_string(),
            source,
        }
    }

    /// Domain whose lookup failed, if the failure is tied to one.
    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Lookup { domain, .. } => Some(domain),
            Self::Resolver { .. } => None,
        }
    }
}
