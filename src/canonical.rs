//! Address canonicalization for deduplication.

use crate::validator::{is_email, parse_address};

/// Per-provider normalization rules applied by [`canonicalize`].
///
/// The domain is always lowercased; the other rules are opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalFlags<'a> {
    /// Lowercase the mailbox.
    pub lowercase: bool,
    /// Drop every `.` from the mailbox (`exam.ple` ≡ `example`).
    pub strip_periods: bool,
    /// Alias domain → canonical domain, e.g. `googlemail.com → gmail.com`.
    pub substitute_domains: &'a [(&'a str, &'a str)],
}

impl CanonicalFlags<'_> {
    pub const NONE: CanonicalFlags<'static> = CanonicalFlags {
        lowercase: false,
        strip_periods: false,
        substitute_domains: &[],
    };

    fn substitute<'d>(&'d self, domain: &'d str) -> &'d str {
        self.substitute_domains
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(domain))
            .map_or(domain, |&(_, canonical)| canonical)
    }
}

/// Returns the canonical form of `email`, or `None` when the input does not
/// hold a plausible address.
///
/// `Name <a.b+tag@Example.com>` with `lowercase` and `strip_periods` becomes
/// `ab@example.com`.
pub fn canonicalize(email: &str, flags: &CanonicalFlags<'_>) -> Option<String> {
    let addr = parse_address(email);
    if !is_email(addr) {
        return None;
    }

    let (mailbox, domain) = addr.split_once('@')?;

    let mut mailbox = match mailbox.find('+') {
        Some(idx) => mailbox[..idx].to_string(),
        None => mailbox.to_string(),
    };
    if flags.strip_periods {
        mailbox.retain(|c| c != '.');
    }
    if flags.lowercase {
        mailbox = mailbox.to_lowercase();
    }

    let domain = domain.to_lowercase();
    let domain = flags.substitute(&domain);

    Some(format!("{mailbox}@{domain}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GMAIL: CanonicalFlags<'static> = CanonicalFlags {
        lowercase: true,
        strip_periods: true,
        substitute_domains: &[("googlemail.com", "gmail.com")],
    };

    #[test]
    fn strips_plus_tag_and_display_name() {
        assert_eq!(
            canonicalize("Example <example+extra@example.com>", &CanonicalFlags::NONE),
            Some("example@example.com".to_string())
        );
    }

    #[test]
    fn default_flags_keep_mailbox_case_and_periods() {
        assert_eq!(
            canonicalize("Exam.Ple@Example.COM", &CanonicalFlags::default()),
            Some("Exam.Ple@example.com".to_string())
        );
    }

    #[test]
    fn lowercase_and_strip_periods() {
        let flags = CanonicalFlags {
            lowercase: true,
            strip_periods: true,
            ..CanonicalFlags::NONE
        };
        assert_eq!(
            canonicalize("Name <a.b+tag@Example.com>", &flags),
            Some("ab@example.com".to_string())
        );
        assert_eq!(
            canonicalize("Exam.ple@gmail.com", &flags),
            Some("example@gmail.com".to_string())
        );
    }

    #[test]
    fn substitutes_alias_domains() {
        assert_eq!(
            canonicalize("Example <exam.ple+extra@GoogleMail.com>", &GMAIL),
            Some("example@gmail.com".to_string())
        );
    }

    #[test]
    fn single_label_and_literal_domains() {
        assert_eq!(
            canonicalize("User+tag@localhost", &CanonicalFlags::NONE),
            Some("User@localhost".to_string())
        );
        assert_eq!(
            canonicalize("user@[192.0.2.1]", &CanonicalFlags::NONE),
            Some("user@[192.0.2.1]".to_string())
        );
    }

    #[test]
    fn non_addresses_have_no_canonical_form() {
        assert_eq!(canonicalize("example.com", &GMAIL), None);
        assert_eq!(canonicalize("https://example.com/", &GMAIL), None);
        assert_eq!(canonicalize("not an <address>", &GMAIL), None);
    }
}
