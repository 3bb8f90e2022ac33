use std::collections::HashMap;

use super::*;
use crate::mx::tests::{StubAnswer, StubResolver};

fn sniffer(stub: StubResolver) -> Sniffer<StubResolver> {
    Sniffer::with_resolver(stub, SniffOptions::default())
}

fn hosts(result: &SniffResult) -> Vec<(u16, &str)> {
    result
        .mx
        .iter()
        .map(|record| (record.preference, record.exchange.as_str()))
        .collect()
}

#[test]
fn domain_without_mx_is_nomx() {
    let sniffer = sniffer(StubResolver::new());
    let result = sniffer.sniff("example.com").expect("no records is not an error");
    assert_eq!(result.matches, vec![NO_MX]);
    assert!(result.mx.is_empty());
    assert!(result.providers.is_empty());
    assert!(!result.public);
    assert_eq!(result.canonical, None);
    assert_eq!(result.outcome(), SniffOutcome::NoMx);
    assert_eq!(sniffer.resolver().queries(), 1);
}

#[test]
fn null_mx_domain() {
    let sniffer = sniffer(StubResolver::new().with_records("example.com", &[(0, ".")]));
    let result = sniffer.sniff("user@example.com").expect("lookup succeeds");
    assert_eq!(result.matches, vec![NULL_MX]);
    assert_eq!(hosts(&result), vec![(0, ".")]);
    assert_eq!(result.outcome(), SniffOutcome::NullMx);
    assert_eq!(result.canonical.as_deref(), Some("user@example.com"));
}

#[test]
fn google_apps_domain() {
    let sniffer = sniffer(StubResolver::new().with_records(
        "hasgeek.com",
        &[(5, "ALT1.ASPMX.L.GOOGLE.COM."), (1, "aspmx.l.google.com.")],
    ));
    let result = sniffer.sniff("https://hasgeek.com/about").expect("lookup succeeds");
    assert_eq!(result.domain, "hasgeek.com");
    assert_eq!(result.matches, vec!["google-apps"]);
    assert_eq!(
        hosts(&result),
        vec![(1, "aspmx.l.google.com"), (5, "alt1.aspmx.l.google.com")]
    );
    assert_eq!(result.providers.len(), 1);
    assert_eq!(result.providers[0].name, "google-apps");
    assert!(!result.public);
    assert_eq!(result.outcome(), SniffOutcome::Matched);
    assert_eq!(result.mx_hosts().next(), Some("aspmx.l.google.com"));
}

#[test]
fn static_mailbox_domain_skips_dns() {
    let sniffer = sniffer(StubResolver::new());
    let result = sniffer.sniff("Exam.Ple+news@Gmail.com").expect("static match");
    assert_eq!(result.domain, "gmail.com");
    assert_eq!(result.matches, vec!["google-gmail"]);
    assert!(result.mx.is_empty());
    assert!(result.public);
    assert_eq!(result.canonical.as_deref(), Some("example@gmail.com"));
    assert_eq!(result.outcome(), SniffOutcome::Static);
    assert_eq!(sniffer.resolver().queries(), 0);
}

#[test]
fn static_shortcut_can_be_disabled() {
    let stub = StubResolver::new().with_records(
        "googlemail.com",
        &[(5, "gmail-smtp-in.l.google.com."), (10, "alt1.gmail-smtp-in.l.google.com.")],
    );
    let options = SniffOptions {
        use_static_domains: false,
        ..SniffOptions::default()
    };
    let sniffer = Sniffer::with_resolver(stub, options);
    let result = sniffer
        .sniff("Example <exam.ple+extra@googlemail.com>")
        .expect("lookup succeeds");
    assert_eq!(result.matches, vec!["google-gmail"]);
    assert_eq!(result.mx.len(), 2);
    assert!(result.public);
    assert_eq!(result.canonical.as_deref(), Some("example@gmail.com"));
    assert_eq!(sniffer.resolver().queries(), 1);
}

#[test]
fn self_hosted_domain() {
    let sniffer = sniffer(StubResolver::new().with_records(
        "example.org",
        &[(10, "mail.example.org."), (20, "backup.mx-relay.test.")],
    ));
    let result = sniffer.sniff("example.org").expect("lookup succeeds");
    assert_eq!(result.matches, vec![SELF_HOSTED]);
    assert_eq!(result.outcome(), SniffOutcome::SelfHosted);
}

#[test]
fn self_hosted_under_private_suffix() {
    let sniffer = sniffer(
        StubResolver::new().with_records("myapp.herokuapp.com", &[(10, "mx.herokuapp.com.")]),
    );
    let result = sniffer.sniff("myapp.herokuapp.com").expect("lookup succeeds");
    assert_eq!(result.matches, vec![SELF_HOSTED]);
}

#[test]
fn unmatched_foreign_mx_is_unknown() {
    let sniffer = sniffer(StubResolver::new().with_records("example.net", &[(10, "mx.hoster.test.")]));
    let result = sniffer.sniff("example.net").expect("lookup succeeds");
    assert_eq!(result.matches, vec![UNKNOWN]);
    assert_eq!(result.outcome(), SniffOutcome::Unknown);
}

#[test]
fn provider_match_wins_over_self_hosting() {
    let sniffer = sniffer(StubResolver::new().with_records("google.com", &[(10, "aspmx.l.google.com.")]));
    let result = sniffer.sniff("google.com").expect("lookup succeeds");
    assert_eq!(result.matches, vec!["google-apps"]);
}

#[test]
fn matches_keep_first_seen_order_without_duplicates() {
    let sniffer = sniffer(StubResolver::new().with_records(
        "example.com",
        &[
            (30, "eu-smtp-inbound-2.mimecast.com."),
            (10, "eu-smtp-inbound-1.mimecast.com."),
            (20, "aspmx.l.google.com."),
        ],
    ));
    let result = sniffer.sniff("example.com").expect("lookup succeeds");
    assert_eq!(result.matches, vec!["mimecast", "google-apps"]);
    let names: Vec<&str> = result.providers.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, result.matches);
}

#[test]
fn public_domain_set_marks_result_public() {
    let sniffer = sniffer(StubResolver::new().with_records("zoho.com", &[(10, "mx.zoho.com.")]));
    let result = sniffer.sniff("someone@zoho.com").expect("lookup succeeds");
    assert_eq!(result.matches, vec!["zoho"]);
    assert!(result.public);
}

#[test]
fn dns_fault_is_surfaced_with_domain() {
    let sniffer = sniffer(StubResolver::new().with("slow.example", StubAnswer::Timeout));
    let err = sniffer.sniff("user@slow.example").unwrap_err();
    assert_eq!(err.domain(), Some("slow.example"));
    assert!(matches!(err, SniffError::Lookup { ref source, .. } if source.is_timeout()));
}

#[test]
fn dns_fault_ignored_on_request() {
    let options = SniffOptions {
        ignore_errors: true,
        ..SniffOptions::default()
    };
    let sniffer = Sniffer::with_resolver(
        StubResolver::new().with("slow.example", StubAnswer::Timeout),
        options,
    );
    let result = sniffer.sniff("slow.example").expect("fault swallowed");
    assert_eq!(result.matches, vec![NO_MX]);
    assert!(result.mx.is_empty());
}

#[test]
fn empty_input_skips_dns() {
    let sniffer = sniffer(StubResolver::new());
    let result = sniffer.sniff("   ").expect("nothing to resolve");
    assert_eq!(result.domain, "");
    assert_eq!(result.matches, vec![NO_MX]);
    assert_eq!(sniffer.resolver().queries(), 0);
}

#[test]
fn cache_issues_a_single_query_per_domain() {
    let sniffer = sniffer(StubResolver::new().with_records("example.com", &[(10, "aspmx.l.google.com.")]));
    let mut cache: HashMap<String, SniffResult> = HashMap::new();

    let first = sniffer
        .sniff_cached("a@example.com", &mut cache)
        .expect("lookup succeeds");
    let second = sniffer
        .sniff_cached("https://www.example.com/", &mut cache)
        .expect("cache hit");

    assert_eq!(sniffer.resolver().queries(), 1);
    assert_eq!(first.query, "a@example.com");
    assert_eq!(second.query, "https://www.example.com/");
    assert_eq!(second.matches, first.matches);
    assert_eq!(second.mx, first.mx);
    assert_eq!(cache.len(), 1);
}

#[test]
fn failed_lookups_are_not_cached() {
    let sniffer = sniffer(StubResolver::new().with("slow.example", StubAnswer::Timeout));
    let mut cache: HashMap<String, SniffResult> = HashMap::new();
    assert!(sniffer.sniff_cached("slow.example", &mut cache).is_err());
    assert!(sniffer.sniff_cached("slow.example", &mut cache).is_err());
    assert!(cache.is_empty());
    assert_eq!(sniffer.resolver().queries(), 2);
}

#[test]
fn one_shot_sniff_uses_static_table() {
    match mxsniff("someone@gmail.com", &SniffOptions::default()) {
        Ok(result) => {
            assert_eq!(result.matches, vec!["google-gmail"]);
            assert!(result.mx.is_empty());
        }
        // pas de resolv.conf dans certains bacs à sable
        Err(SniffError::Resolver { .. }) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reserved_labels() {
    for label in [SELF_HOSTED, NULL_MX, UNKNOWN, NO_MX] {
        assert!(is_reserved_label(label));
    }
    assert!(!is_reserved_label("google-apps"));
}

#[cfg(feature = "with-serde")]
#[test]
fn serializes_match_field() {
    let sniffer = sniffer(StubResolver::new());
    let result = sniffer.sniff("gmail.com").expect("static match");
    let json = serde_json::to_value(&result).expect("serializable");
    assert_eq!(json["match"][0], "google-gmail");
    assert_eq!(json["public"], true);
    assert!(json.get("matches").is_none());
}
