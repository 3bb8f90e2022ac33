use thiserror::Error;

use super::session::SmtpReply;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("could not resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no address found for {host}")]
    NoAddress { host: String },
    #[error("connection to {host} failed: {source}")]
    Connect {
        host: String,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
    #[error("TLS handshake failed: {source}")]
    Tls {
        #[source]
        source: native_tls::Error,
    },
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("unexpected reply {code}: {message}")]
    Reply { code: u16, message: String },
}

impl ProbeError {
    pub(crate) fn io(source: std::io::Error) -> Self {
        Self::Io { source }
    }

    pub(crate) fn reply(reply: &SmtpReply) -> Self {
        Self::Reply {
            code: reply.code,
            message: reply.message(),
        }
    }

    /// SMTP code carried by the error, if the server answered at all.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Reply { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Server text for reply errors, the error itself otherwise.
    pub fn message(&self) -> String {
        match self {
            Self::Reply { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
