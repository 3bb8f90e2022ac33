//! Permissive address parsing and the email-shape check.
//!
//! [`parse_address`] unwraps `Name <addr>` and `addr (comment)` forms the way
//! mail headers are usually written; [`validate_address`] then decides whether
//! the bare address is a syntactically plausible mailbox.

mod domain;
mod local;
mod types;

pub use types::ValidationReport;

use domain::check_domain;
use local::{is_local_part, is_quoted_string};

/// Extracts the bare `local@domain` part of a header-style address.
///
/// Never fails: input without a recognisable wrapper is returned trimmed.
pub fn parse_address(input: &str) -> &str {
    let trimmed = input.trim();

    if let Some(start) = trimmed.rfind('<') {
        let rest = &trimmed[start + 1..];
        if let Some(end) = rest.find('>') {
            return rest[..end].trim();
        }
    }

    // addr (commentaire)
    if trimmed.ends_with(')') {
        if let Some(open) = trimmed.find('(') {
            return trimmed[..open].trim();
        }
    }

    trimmed
}

pub fn validate_address(addr: &str) -> ValidationReport {
    let input = addr.trim();
    let mut reasons = Vec::new();

    if input.len() > 254 {
        reasons.push(format!("total length {} > 254", input.len()));
    }

    let Some((local, domain)) = input.rsplit_once('@') else {
        reasons.push("must contain '@'".to_string());
        return ValidationReport::from_reasons(reasons);
    };

    if local.contains('@') && !is_quoted_string(local) {
        reasons.push("must contain exactly one '@'".to_string());
        return ValidationReport::from_reasons(reasons);
    }

    if local.is_empty() || local.len() > 64 {
        reasons.push(format!(
            "local part length {} invalid (1..=64)",
            local.len()
        ));
    } else if !is_local_part(local) {
        reasons.push("invalid local part".to_string());
    }

    check_domain(domain, &mut reasons);

    ValidationReport::from_reasons(reasons)
}

pub fn is_email(addr: &str) -> bool {
    validate_address(addr).ok
}
