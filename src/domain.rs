//! Domain extraction from addresses, URLs and raw domain names.

use std::net::IpAddr;

use url::Url;

use crate::validator::parse_address;

/// Extracts the domain to sniff from an email address, URL or raw domain.
///
/// - `Name <user@Example.com>` → `example.com` (part after the first `@`);
/// - `https://www.example.co.uk:8443/path` → `example.co.uk` (registrable
///   domain of the host);
/// - anything else is trimmed and lowercased.
///
/// Malformed input never fails; it flows through as a best-effort domain.
pub fn extract_domain(input: &str) -> String {
    if input.contains('@') {
        let addr = parse_address(input);
        let domain = addr.split_once('@').map_or(addr, |(_, domain)| domain);
        domain.trim().to_lowercase()
    } else if input.contains("//") {
        let host = url_host(input).to_lowercase();
        registrable_domain(&host).unwrap_or(host)
    } else {
        input.trim().to_lowercase()
    }
}

/// Registrable domain (public suffix + one label) of `host`, using the
/// suffix list compiled into the binary. `None` for IP literals, bare public
/// suffixes and the root name.
///
/// Only the ICANN section of the list counts: `myapp.herokuapp.com` gives
/// `herokuapp.com`, not the full hostname.
pub fn registrable_domain(host: &str) -> Option<String> {
    let trimmed = host.trim();
    let name = trimmed.strip_suffix('.').unwrap_or(trimmed).to_lowercase();
    if name.is_empty() || name.parse::<IpAddr>().is_ok() {
        return None;
    }

    let suffix = icann_suffix(&name)?;
    let prefix = name.strip_suffix(suffix)?.strip_suffix('.')?;
    let label = prefix.rsplit('.').next().filter(|label| !label.is_empty())?;
    Some(format!("{label}.{suffix}"))
}

/// Public suffix of `name`, skipping entries from the private section.
fn icann_suffix(name: &str) -> Option<&str> {
    let mut candidate = name;
    loop {
        let suffix = psl::suffix(candidate.as_bytes())?;
        let text = std::str::from_utf8(suffix.as_bytes()).ok()?;
        if !matches!(suffix.typ(), Some(psl::Type::Private)) {
            return Some(text);
        }
        // remonte d'un label: herokuapp.com -> com
        candidate = text.split_once('.')?.1;
    }
}

fn url_host(input: &str) -> String {
    let trimmed = input.trim();
    if let Ok(url) = Url::parse(trimmed) {
        if let Some(host) = url.host_str() {
            return unicode_host(host);
        }
    }

    // URL relative (`//example.com/x`) ou non standard: découpe à la main
    let after_scheme = trimmed
        .split_once("//")
        .map_or(trimmed, |(_, rest)| rest);
    let authority = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    authority
        .split(':')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// `Url` stores IDN hosts as punycode; addresses and bare domains keep
/// Unicode, so decode back to get the same key on every input path.
fn unicode_host(host: &str) -> String {
    match idna::domain_to_unicode(host) {
        (decoded, Ok(())) => decoded,
        (_, Err(_)) => host.to_string(),
    }
}
