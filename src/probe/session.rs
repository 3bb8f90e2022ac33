use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use native_tls::{HandshakeError, TlsConnector, TlsStream};
use tracing::trace;

use super::error::ProbeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SmtpReply {
    pub(crate) code: u16,
    pub(crate) lines: Vec<String>,
}

impl SmtpReply {
    pub(crate) fn is_positive_completion(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Reply text, one line per reply line.
    pub(crate) fn message(&self) -> String {
        self.lines.join("\n")
    }

    pub(crate) fn has_capability(&self, cap: &str) -> bool {
        self.lines.iter().any(|line| {
            line.split_whitespace()
                .next()
                .is_some_and(|token| token.eq_ignore_ascii_case(cap))
        })
    }
}

#[derive(Debug)]
enum StreamState {
    Plain(TcpStream),
    Tls(TlsStream<TcpStream>),
    Invalid,
}

#[derive(Debug)]
struct SmtpStream {
    state: StreamState,
    buffer: Vec<u8>,
}

impl SmtpStream {
    fn connect(addr: &SocketAddr, timeout: Option<Duration>) -> Result<Self, ProbeError> {
        let stream = match timeout {
            Some(timeout) => TcpStream::connect_timeout(addr, timeout),
            None => TcpStream::connect(addr),
        }
        .map_err(|source| ProbeError::Connect {
            host: addr.to_string(),
            source,
        })?;
        stream.set_read_timeout(timeout).map_err(ProbeError::io)?;
        stream.set_write_timeout(timeout).map_err(ProbeError::io)?;
        Ok(Self {
            state: StreamState::Plain(stream),
            buffer: Vec::new(),
        })
    }

    fn upgrade_tls(
        &mut self,
        domain: &str,
        connector: &TlsConnector,
        timeout: Option<Duration>,
    ) -> Result<(), ProbeError> {
        let plain = match std::mem::replace(&mut self.state, StreamState::Invalid) {
            StreamState::Plain(stream) => stream,
            StreamState::Tls(stream) => {
                self.state = StreamState::Tls(stream);
                return Ok(());
            }
            StreamState::Invalid => {
                return Err(ProbeError::Protocol("invalid stream state".into()));
            }
        };

        let tls = complete_handshake(connector, domain, plain)?;
        tls.get_ref().set_read_timeout(timeout).map_err(ProbeError::io)?;
        tls.get_ref().set_write_timeout(timeout).map_err(ProbeError::io)?;
        self.state = StreamState::Tls(tls);
        Ok(())
    }

    fn send_command(&mut self, command: &str) -> Result<(), ProbeError> {
        let mut data = command.as_bytes().to_vec();
        data.extend_from_slice(b"\r\n");
        let written = match &mut self.state {
            StreamState::Plain(stream) => stream.write_all(&data).and_then(|()| stream.flush()),
            StreamState::Tls(stream) => stream.write_all(&data).and_then(|()| stream.flush()),
            StreamState::Invalid => {
                return Err(ProbeError::Protocol("invalid stream state".into()));
            }
        };
        written.map_err(ProbeError::io)
    }

    fn read_reply(&mut self) -> Result<SmtpReply, ProbeError> {
        let mut lines = Vec::new();
        let mut code: Option<u16> = None;
        loop {
            let line = self.read_line()?;
            let parsed_code = line
                .get(..3)
                .and_then(|digits| digits.parse::<u16>().ok())
                .ok_or_else(|| ProbeError::Protocol(format!("invalid reply: {line}")))?;
            match code {
                Some(existing) if existing != parsed_code => {
                    return Err(ProbeError::Protocol(format!(
                        "inconsistent reply codes: {existing} vs {parsed_code}"
                    )));
                }
                Some(_) => {}
                None => code = Some(parsed_code),
            }
            let is_last = line.as_bytes().get(3) != Some(&b'-');
            lines.push(line.get(4..).unwrap_or_default().to_string());
            if is_last {
                break;
            }
        }
        Ok(SmtpReply {
            code: code.unwrap_or_default(),
            lines,
        })
    }

    fn read_line(&mut self) -> Result<String, ProbeError> {
        loop {
            if let Some(pos) = self.buffer.iter().position(|byte| *byte == b'\n') {
                let mut line = self.buffer.drain(..=pos).collect::<Vec<_>>();
                line.pop();
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                return String::from_utf8(line)
                    .map_err(|err| ProbeError::Protocol(format!("utf8 error: {err}")));
            }

            let mut buf = [0u8; 512];
            let read = match &mut self.state {
                StreamState::Plain(stream) => stream.read(&mut buf),
                StreamState::Tls(stream) => stream.read(&mut buf),
                StreamState::Invalid => {
                    return Err(ProbeError::Protocol("invalid stream state".into()));
                }
            };
            let read = read.map_err(ProbeError::io)?;
            if read == 0 {
                return Err(ProbeError::io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed",
                )));
            }
            self.buffer.extend_from_slice(&buf[..read]);
        }
    }
}

fn complete_handshake(
    connector: &TlsConnector,
    domain: &str,
    stream: TcpStream,
) -> Result<TlsStream<TcpStream>, ProbeError> {
    match connector.connect(domain, stream) {
        Ok(tls) => Ok(tls),
        Err(HandshakeError::Failure(source)) => Err(ProbeError::Tls { source }),
        Err(HandshakeError::WouldBlock(mut mid)) => loop {
            match mid.handshake() {
                Ok(tls) => break Ok(tls),
                Err(HandshakeError::Failure(source)) => break Err(ProbeError::Tls { source }),
                Err(HandshakeError::WouldBlock(next)) => mid = next,
            }
        },
    }
}

/// One SMTP connection to a candidate MX host.
pub(crate) struct SmtpSession {
    host: String,
    stream: SmtpStream,
}

impl SmtpSession {
    /// Resolves `host:port` and connects to the first reachable address.
    pub(crate) fn connect(
        host: &str,
        port: u16,
        timeout: Option<Duration>,
    ) -> Result<Self, ProbeError> {
        let addresses: Vec<SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(|source| ProbeError::Resolve {
                host: host.to_string(),
                source,
            })?
            .collect();

        let mut last_err = None;
        for addr in &addresses {
            match SmtpStream::connect(addr, timeout) {
                Ok(stream) => {
                    return Ok(Self {
                        host: host.to_string(),
                        stream,
                    });
                }
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| ProbeError::NoAddress {
            host: host.to_string(),
        }))
    }

    pub(crate) fn read_banner(&mut self) -> Result<SmtpReply, ProbeError> {
        let reply = self.stream.read_reply()?;
        self.record_reply(&reply);
        Ok(reply)
    }

    pub(crate) fn send_command(&mut self, command: &str) -> Result<SmtpReply, ProbeError> {
        trace!(host = %self.host, "C: {command}");
        self.stream.send_command(command)?;
        let reply = self.stream.read_reply()?;
        self.record_reply(&reply);
        Ok(reply)
    }

    pub(crate) fn starttls(
        &mut self,
        connector: &TlsConnector,
        timeout: Option<Duration>,
    ) -> Result<SmtpReply, ProbeError> {
        let reply = self.send_command("STARTTLS")?;
        if !reply.is_positive_completion() {
            return Ok(reply);
        }
        let host = self.host.clone();
        self.stream.upgrade_tls(&host, connector, timeout)?;
        Ok(reply)
    }

    /// RSET then QUIT; failures are ignored.
    pub(crate) fn close(&mut self) {
        self.send_command("RSET").ok();
        trace!(host = %self.host, "C: QUIT");
        if self.stream.send_command("QUIT").is_ok() {
            if let Ok(reply) = self.stream.read_reply() {
                self.record_reply(&reply);
            }
        }
    }

    fn record_reply(&self, reply: &SmtpReply) {
        if reply.lines.is_empty() {
            trace!(host = %self.host, "S: {}", reply.code);
        }
        for line in &reply.lines {
            trace!(host = %self.host, "S: {} {line}", reply.code);
        }
    }
}
