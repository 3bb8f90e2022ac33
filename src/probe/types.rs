use std::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::sniff::SniffResult;

/// Verdict of an SMTP envelope probe.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeVerdict {
    /// Not an email address; no server was contacted.
    Invalid,
    /// No server could be probed.
    Error,
    /// Rejected without an enhanced status code.
    Fail,
    /// Rejected with a `4.x.x` status: the mailbox is not accepting mail now.
    SoftFail,
    /// Rejected with a `5.x.x` status: the mailbox does not exist.
    HardFail,
    Pass,
    /// The server accepts the recipient without verifying the mailbox.
    PassUnverified,
}

impl ProbeVerdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Error => "error",
            Self::Fail => "fail",
            Self::SoftFail => "soft-fail",
            Self::HardFail => "hard-fail",
            Self::Pass => "pass",
            Self::PassUnverified => "pass-unverified",
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass | Self::PassUnverified)
    }
}

impl fmt::Display for ProbeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict plus the SMTP reply it was derived from.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub result: ProbeVerdict,
    pub code: Option<u16>,
    pub message: Option<String>,
}

impl ProbeReport {
    pub fn new(result: ProbeVerdict, code: Option<u16>, message: Option<String>) -> Self {
        Self {
            result,
            code,
            message,
        }
    }

    pub fn invalid() -> Self {
        Self::new(ProbeVerdict::Invalid, None, None)
    }
}

/// Sniff result with the optional probe report attached.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SniffAndProbe {
    #[cfg_attr(feature = "with-serde", serde(flatten))]
    pub sniff: SniffResult,
    #[cfg_attr(
        feature = "with-serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub probe: Option<ProbeReport>,
}
