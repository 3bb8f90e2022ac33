//! SMTP envelope probing (`with-probe` feature).
//!
//! [`mxprobe`] walks the candidate MX hosts in order, runs
//! `EHLO`/`MAIL FROM`/`RCPT TO` and maps the recipient reply to a
//! [`ProbeVerdict`]. No message is ever sent.

mod error;
mod options;
mod session;
mod types;

pub use error::ProbeError;
pub use options::ProbeOptions;
pub use types::{ProbeReport, ProbeVerdict, SniffAndProbe};

use native_tls::TlsConnector;
use tracing::{debug, warn};

use crate::mx::LookupMx;
use crate::sniff::{SniffError, Sniffer};
use crate::validator::{is_email, parse_address};
use session::{SmtpReply, SmtpSession};

/// Reply codes meaning the recipient was refused; the enhanced status code
/// decides between soft and hard failure.
const REFUSAL_CODES: [u16; 15] = [
    450, 451, 452, 510, 512, 515, 521, 522, 531, 533, 540, 550, 551, 552, 553,
];

enum HostOutcome {
    Verdict(ProbeReport),
    /// No verdict from this host; remember the reply and try the next one.
    Retry { code: u16, message: String },
}

/// Probes whether `email` is accepted by one of `hosts`, announcing `from`
/// as the envelope sender.
///
/// Hosts are tried in order until one yields a verdict. An empty host list
/// falls back to the address's own domain. Never fails: unreachable or
/// uncooperative servers end in [`ProbeVerdict::Error`] carrying the last
/// code and message seen.
pub fn mxprobe<S: AsRef<str>>(
    email: &str,
    hosts: &[S],
    from: &str,
    options: &ProbeOptions,
) -> ProbeReport {
    let addr = parse_address(email);
    if !is_email(addr) {
        return ProbeReport::invalid();
    }

    let candidates: Vec<&str> = if hosts.is_empty() {
        addr.split_once('@')
            .map(|(_, domain)| domain.trim())
            .into_iter()
            .collect()
    } else {
        hosts.iter().map(|host| host.as_ref()).collect()
    };

    let connector = if options.starttls {
        match TlsConnector::new() {
            Ok(connector) => Some(connector),
            Err(source) => {
                let err = ProbeError::Tls { source };
                return ProbeReport::new(ProbeVerdict::Error, None, Some(err.to_string()));
            }
        }
    } else {
        None
    };

    let helo = options.helo_name(from);
    let mut error_code = None;
    let mut error_message = None;

    for host in candidates {
        match probe_host(host, addr, from, &helo, options, connector.as_ref()) {
            Ok(HostOutcome::Verdict(report)) => {
                debug!(host, email = addr, result = %report.result, "probe verdict");
                return report;
            }
            Ok(HostOutcome::Retry { code, message }) => {
                debug!(host, code, %message, "no verdict, trying next host");
                error_code = Some(code);
                error_message = Some(message);
            }
            Err(err) => {
                warn!(host, error = %err, "probe failed");
                error_code = err.code();
                error_message = Some(err.message());
            }
        }
    }

    ProbeReport::new(ProbeVerdict::Error, error_code, error_message)
}

fn probe_host(
    host: &str,
    addr: &str,
    from: &str,
    helo: &str,
    options: &ProbeOptions,
    connector: Option<&TlsConnector>,
) -> Result<HostOutcome, ProbeError> {
    let mut session = SmtpSession::connect(host, options.port, options.timeout())?;
    let outcome = converse(&mut session, addr, from, helo, options, connector);
    session.close();
    outcome
}

fn converse(
    session: &mut SmtpSession,
    addr: &str,
    from: &str,
    helo: &str,
    options: &ProbeOptions,
    connector: Option<&TlsConnector>,
) -> Result<HostOutcome, ProbeError> {
    let banner = session.read_banner()?;
    if !banner.is_positive_completion() {
        return Err(ProbeError::reply(&banner));
    }

    let greeting = greet(session, helo)?;
    if let Some(connector) = connector {
        if greeting.has_capability("STARTTLS") {
            let reply = session.starttls(connector, options.timeout())?;
            if reply.is_positive_completion() {
                greet(session, helo)?;
            }
        }
    }

    let mail = session.send_command(&format!("MAIL FROM:<{from}>"))?;
    if mail.code != 250 {
        return Ok(HostOutcome::Retry {
            code: mail.code,
            message: mail.message(),
        });
    }

    let rcpt = session.send_command(&format!("RCPT TO:<{addr}>"))?;
    let message = rcpt.message();
    Ok(match classify_rcpt(rcpt.code, &message) {
        Some(verdict) => {
            HostOutcome::Verdict(ProbeReport::new(verdict, Some(rcpt.code), Some(message)))
        }
        None => HostOutcome::Retry {
            code: rcpt.code,
            message,
        },
    })
}

/// EHLO, falling back to HELO when refused.
fn greet(session: &mut SmtpSession, helo: &str) -> Result<SmtpReply, ProbeError> {
    let ehlo = session.send_command(&format!("EHLO {helo}"))?;
    if ehlo.is_positive_completion() {
        return Ok(ehlo);
    }
    let reply = session.send_command(&format!("HELO {helo}"))?;
    if reply.is_positive_completion() {
        Ok(reply)
    } else {
        Err(ProbeError::reply(&reply))
    }
}

/// Verdict for a `RCPT TO` reply, or `None` for codes with no known meaning.
fn classify_rcpt(code: u16, message: &str) -> Option<ProbeVerdict> {
    match code {
        250 => Some(ProbeVerdict::Pass),
        251..=253 => Some(ProbeVerdict::PassUnverified),
        code if REFUSAL_CODES.contains(&code) => {
            // certains serveurs préfixent le code étendu par '#'
            let status = message.strip_prefix('#').unwrap_or(message);
            Some(if status.starts_with("4.") {
                ProbeVerdict::SoftFail
            } else if status.starts_with("5.") {
                ProbeVerdict::HardFail
            } else {
                ProbeVerdict::Fail
            })
        }
        _ => None,
    }
}

/// Sniffs `email`, then probes its MX hosts in preference order when a
/// sender address is given.
pub fn sniff_and_probe<R: LookupMx>(
    sniffer: &Sniffer<R>,
    email: &str,
    from: Option<&str>,
    options: &ProbeOptions,
) -> Result<SniffAndProbe, SniffError> {
    let sniff = sniffer.sniff(email)?;
    let probe = from.map(|from| {
        let hosts: Vec<&str> = sniff.mx_hosts().collect();
        mxprobe(email, &hosts, from, options)
    });
    Ok(SniffAndProbe { sniff, probe })
}
