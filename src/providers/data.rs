//! Known email providers and their MX hostnames.
//!
//! Keep entries in alphabetic order. Provider names are identifiers and never
//! change, even when the holding company does; update the title instead.
//! `self`, `unknown`, `nomx` and `nullmx` are reserved labels.

use phf::phf_set;

use super::Provider;
use crate::canonical::CanonicalFlags;

const BASE: Provider = Provider {
    name: "",
    title: None,
    note: None,
    url: None,
    public: false,
    canonical: CanonicalFlags::NONE,
    mx: &[],
    domains: &[],
};

const LOWERCASE: CanonicalFlags<'static> = CanonicalFlags {
    lowercase: true,
    ..CanonicalFlags::NONE
};

pub(crate) static PROVIDERS: &[Provider] = &[
    Provider {
        name: "i-3.com",
        mx: &[
            "*.*.bak-mx.*.smtproutes.com",
            "*.*.*.bak-mx.*.smtproutes.com",
            "*.*.pri-mx.*.smtproutes.com",
            "*.*.*.pri-mx.*.smtproutes.com",
        ],
        ..BASE
    },
    Provider {
        name: "1and1",
        mx: &["*.1and1.com", "*.1and1.co.uk", "*.1and1.fr"],
        ..BASE
    },
    Provider {
        name: "adista",
        mx: &["*.adista.fr"],
        ..BASE
    },
    Provider {
        name: "amazon-aws",
        title: Some("Amazon AWS SES"),
        mx: &["inbound-smtp.*.amazonaws.com"],
        ..BASE
    },
    Provider {
        name: "amazon-aws-ec2",
        title: Some("Amazon AWS EC2"),
        mx: &["*.*.compute.amazonaws.com"],
        ..BASE
    },
    Provider {
        name: "anaxa",
        mx: &["*.anaxanet.com"],
        ..BASE
    },
    Provider {
        name: "apple-icloud",
        title: Some("Apple iCloud"),
        public: true,
        canonical: LOWERCASE,
        mx: &["*.mail.icloud.com"],
        domains: &["icloud.com", "mac.com", "me.com"],
        ..BASE
    },
    Provider {
        name: "appriver",
        mx: &["*.*.*.arsmtp.com", "*.*.*.*.arsmtp.com"],
        ..BASE
    },
    Provider {
        name: "aol",
        title: Some("AOL"),
        mx: &["*.mx.aol.com"],
        ..BASE
    },
    Provider {
        name: "barracuda",
        title: Some("Barracuda Networks"),
        mx: &["*.*.*.*.barracudanetworks.com"],
        ..BASE
    },
    Provider {
        name: "carrierzone",
        mx: &["*.carrierzone.com"],
        ..BASE
    },
    Provider {
        name: "cogent",
        title: Some("Cogent Communications"),
        mx: &["*.mail.cogentco.com"],
        ..BASE
    },
    Provider {
        name: "cologlobal",
        mx: &["*.cologlobal.com"],
        ..BASE
    },
    Provider {
        name: "cyren",
        mx: &["*.*.ctmail.com", "*.expurgate.net"],
        ..BASE
    },
    Provider {
        name: "cyso",
        mx: &["*.cyso.net"],
        ..BASE
    },
    Provider {
        name: "daemonmail",
        mx: &["*.daemonmail.com"],
        ..BASE
    },
    Provider {
        name: "dewile.net",
        mx: &["exchange.dewile.net"],
        ..BASE
    },
    Provider {
        name: "dreamhost",
        title: Some("Dreamhost"),
        mx: &[
            "*.mail.dreamhost.com",
            "*.*.mail.dreamhost.com",
            "*.*.*.mail.dreamhost.com",
        ],
        ..BASE
    },
    Provider {
        name: "easydns",
        mx: &["mx.easymail.ca"],
        ..BASE
    },
    Provider {
        name: "eapps",
        mx: &["*.eapps.com"],
        ..BASE
    },
    Provider {
        name: "emailsrvr",
        mx: &["*.emailsrvr.com"],
        ..BASE
    },
    Provider {
        name: "enom",
        mx: &["*.registrar-servers.com"],
        ..BASE
    },
    Provider {
        name: "everyone.net",
        mx: &["*.everyone.net"],
        ..BASE
    },
    Provider {
        name: "exclusivehosting",
        mx: &["*.exclusivehosting.net"],
        ..BASE
    },
    Provider {
        name: "fakemailgenerator",
        public: true,
        mx: &["*.fakemailgenerator.com"],
        ..BASE
    },
    Provider {
        name: "fastmail",
        public: true,
        mx: &["*.messagingengine.com"],
        ..BASE
    },
    Provider {
        name: "fatcow",
        mx: &["mail.fatcow.com"],
        ..BASE
    },
    Provider {
        name: "fireeye",
        mx: &["*.email.fireeyecloud.com", "*.*.email.fireeyecloud.com"],
        ..BASE
    },
    Provider {
        name: "forcepoint",
        mx: &["*.*.mailcontrol.com"],
        ..BASE
    },
    Provider {
        name: "gandi",
        title: Some("Gandi.net"),
        mx: &["mail.gandi.net"],
        ..BASE
    },
    Provider {
        name: "gmx.com",
        title: Some("GMX 1&1 Mail and Media"),
        public: true,
        mx: &["*.gmx.com", "*.gmx.net"],
        domains: &["gmx.com", "gmx.us"],
        ..BASE
    },
    Provider {
        name: "godaddy",
        title: Some("GoDaddy"),
        mx: &[
            "mailstore1.secureserver.net",
            "smtp.secureserver.net",
            "mailstore1.europe.secureserver.net",
            "smtp.europe.secureserver.net",
            "mailstore1.asia.secureserver.net",
            "smtp.asia.secureserver.net",
        ],
        ..BASE
    },
    Provider {
        name: "google-gmail",
        title: Some("Gmail"),
        url: Some("https://gmail.com/"),
        public: true,
        canonical: CanonicalFlags {
            lowercase: true,
            strip_periods: true,
            substitute_domains: &[("googlemail.com", "gmail.com")],
        },
        mx: &["gmail-smtp-in.l.google.com", "*.gmail-smtp-in.l.google.com"],
        domains: &["gmail.com", "googlemail.com"],
        ..BASE
    },
    Provider {
        name: "google-apps",
        title: Some("G Suite"),
        canonical: CanonicalFlags {
            lowercase: true,
            strip_periods: true,
            substitute_domains: &[],
        },
        mx: &[
            "aspmx.l.google.com",
            "*.aspmx.l.google.com",
            "*.googlemail.com",
            "gmr-smtp-in.l.google.com",
            "*.gmr-smtp-in.l.google.com",
            "*.*.*.psmtp.com",
            "*.*.*.*.psmtp.com",
        ],
        ..BASE
    },
    Provider {
        name: "hostcentral",
        mx: &["*.hostcentral.net"],
        ..BASE
    },
    Provider {
        name: "hostedemail",
        mx: &["mx.*.*.*.hostedemail.com", "mx.*.*.*.*.hostedemail.com"],
        ..BASE
    },
    Provider {
        name: "hostignition",
        mx: &["*.ignitionserver.net"],
        ..BASE
    },
    Provider {
        name: "hostinger",
        mx: &["*.hostinger.in"],
        ..BASE
    },
    Provider {
        name: "hostmonster",
        mx: &["*.hostmonster.com"],
        ..BASE
    },
    Provider {
        name: "ifastnet",
        mx: &["mx.byethost3.com"],
        ..BASE
    },
    Provider {
        name: "inbox.com",
        public: true,
        mx: &["*.inbox.com"],
        ..BASE
    },
    Provider {
        name: "intermedia",
        mx: &["*.intermedia.net"],
        ..BASE
    },
    Provider {
        name: "ix",
        mx: &["*.ixwebhosting.com"],
        ..BASE
    },
    Provider {
        name: "justhost",
        mx: &["*.justhost.com"],
        ..BASE
    },
    Provider {
        name: "lfchosting",
        mx: &["*.loosefoot.com"],
        ..BASE
    },
    Provider {
        name: "libraesva",
        mx: &["*.esvacloud.com"],
        ..BASE
    },
    Provider {
        name: "liquidnet",
        mx: &["*.supremebox.com"],
        ..BASE
    },
    Provider {
        name: "logix",
        mx: &["*.logix.in"],
        ..BASE
    },
    Provider {
        name: "mail.com",
        title: Some("Mail.com, a 1&1 company"),
        public: true,
        mx: &["*.mail.com"],
        ..BASE
    },
    Provider {
        name: "mailchimp-mandrill",
        title: Some("Mailchimp Mandrill"),
        mx: &["*.*.mandrillapp.com"],
        ..BASE
    },
    Provider {
        name: "mailhostbox",
        mx: &["*.mailhostbox.com"],
        ..BASE
    },
    Provider {
        name: "mailinator",
        title: Some("Mailinator"),
        public: true,
        mx: &["*.mailinator.com", "mx.powered.name"],
        ..BASE
    },
    Provider {
        name: "mailgun",
        mx: &["*.mailgun.org"],
        ..BASE
    },
    Provider {
        name: "mcafee-mxlogic",
        mx: &["*.*.*.mxlogic.net", "*.*.*.*.mxlogic.net"],
        ..BASE
    },
    Provider {
        name: "megamailservers",
        mx: &["*.megamailservers.com"],
        ..BASE
    },
    Provider {
        name: "migadu",
        mx: &["*.migadu.com"],
        ..BASE
    },
    Provider {
        name: "mimecast",
        mx: &["*.mimecast.com"],
        ..BASE
    },
    Provider {
        name: "mochahost",
        mx: &["*.mochahost.com"],
        ..BASE
    },
    Provider {
        name: "mxroute",
        mx: &["*.mxroute.com"],
        ..BASE
    },
    Provider {
        name: "name.com",
        mx: &["*.name.com"],
        ..BASE
    },
    Provider {
        name: "namecheap-privateemail",
        mx: &["*.privateemail.com"],
        ..BASE
    },
    Provider {
        name: "namecheap-webhosting",
        mx: &["*.web-hosting.com"],
        ..BASE
    },
    Provider {
        name: "net4india",
        mx: &["mail.net4india.com"],
        ..BASE
    },
    Provider {
        name: "netcore",
        title: Some("Netcore"),
        mx: &["*.netcore.co.in"],
        ..BASE
    },
    Provider {
        name: "netmagic",
        mx: &["*.netmagicians.com"],
        ..BASE
    },
    Provider {
        name: "networksolutions",
        title: Some("Network Solutions"),
        mx: &[
            "*.netsolmail.net",
            "*.*.netsolmail.net",
            "*.*.*.netsolmail.net",
            "*.*.*.*.netsolmail.net",
        ],
        ..BASE
    },
    Provider {
        name: "one.com",
        mx: &["*.one.com"],
        ..BASE
    },
    Provider {
        name: "outlook-bizmail",
        title: Some("Microsoft Outlook"),
        mx: &["*.mail.*.outlook.com"],
        ..BASE
    },
    Provider {
        name: "outlook-hotmail",
        title: Some("Microsoft Outlook Hotmail"),
        public: true,
        canonical: LOWERCASE,
        mx: &["*.hotmail.com"],
        domains: &[
            "hotmail.com",
            "msn.com",
            "outlook.co",
            "outlook.com",
            "live.com",
            "live.in",
        ],
        ..BASE
    },
    Provider {
        name: "ovh",
        mx: &["*.ovh.net"],
        ..BASE
    },
    Provider {
        name: "pair",
        mx: &["*.pair.com"],
        ..BASE
    },
    Provider {
        name: "parklogic",
        mx: &["*.parklogic.com"],
        ..BASE
    },
    Provider {
        name: "pobox",
        mx: &["*.pobox.com"],
        ..BASE
    },
    Provider {
        name: "postmarkapp",
        mx: &["inbound.postmarkapp.com"],
        ..BASE
    },
    Provider {
        name: "poponline",
        mx: &["*.pop.co"],
        ..BASE
    },
    Provider {
        name: "private-h-email",
        mx: &["mail.h-email.net"],
        ..BASE
    },
    Provider {
        name: "private-mxproc",
        mx: &["mail.mxproc.com"],
        ..BASE
    },
    Provider {
        name: "private-nickstel",
        mx: &["mail.nickstel.com"],
        ..BASE
    },
    Provider {
        name: "private-posthost",
        mx: &["*.post-host.net"],
        ..BASE
    },
    Provider {
        name: "private-serverdata",
        mx: &["*.smtp.*.serverdata.net"],
        ..BASE
    },
    Provider {
        name: "private-usermail",
        mx: &["*.user-mail.net"],
        ..BASE
    },
    Provider {
        name: "prodigy",
        mx: &["*.prodigy.net"],
        ..BASE
    },
    Provider {
        name: "proofpoint",
        mx: &["*.pphosted.com", "*.*.pphosted.com"],
        ..BASE
    },
    Provider {
        name: "protonmail",
        title: Some("Protonmail"),
        note: Some("Protonmail offers both public and private email on the same MX servers"),
        mx: &["*.protonmail.ch"],
        ..BASE
    },
    Provider {
        name: "qq",
        mx: &["*.qq.com"],
        ..BASE
    },
    Provider {
        name: "rediffmail",
        title: Some("Rediffmail"),
        public: true,
        mx: &["mx.rediffmail.rediff.akadns.net"],
        ..BASE
    },
    Provider {
        name: "rediffmail-pro",
        title: Some("Rediffmail Pro"),
        mx: &["mail.rediffmailpro.com"],
        ..BASE
    },
    Provider {
        name: "register.com",
        mx: &["*.register.com"],
        ..BASE
    },
    Provider {
        name: "reliance-data-center",
        mx: &["*.rilinfo.net"],
        ..BASE
    },
    Provider {
        name: "runbox",
        mx: &["mx.runbox.com"],
        ..BASE
    },
    Provider {
        name: "safentrix",
        mx: &["*.*.safentrix.com"],
        ..BASE
    },
    Provider {
        name: "salushosting",
        mx: &["mail.salushosting.com"],
        ..BASE
    },
    Provider {
        name: "sendgrid",
        title: Some("Sendgrid"),
        mx: &["mx.sendgrid.net"],
        ..BASE
    },
    Provider {
        name: "servage",
        mx: &["*.servage.net"],
        ..BASE
    },
    Provider {
        name: "servergrid",
        mx: &["*.securedc.com"],
        ..BASE
    },
    Provider {
        name: "sherweb",
        mx: &["*.sherweb2010.com"],
        ..BASE
    },
    Provider {
        name: "siteground",
        mx: &["mailspamprotection.com"],
        ..BASE
    },
    Provider {
        name: "spamexperts",
        mx: &[
            "mx.spamexperts.com",
            "fallbackmx.spamexperts.eu",
            "lastmx.spamexperts.net",
        ],
        ..BASE
    },
    Provider {
        name: "spamh",
        mx: &["*.*.spamh.com"],
        ..BASE
    },
    Provider {
        name: "symantec-messagelabs",
        mx: &["*.*.messagelabs.com", "*.inboundmx.com"],
        ..BASE
    },
    Provider {
        name: "tempmail",
        mx: &["*.temp-mail.org", "*.temp-mail.ru"],
        ..BASE
    },
    Provider {
        name: "webcreationuk",
        mx: &["*.webcreationuk.com"],
        ..BASE
    },
    Provider {
        name: "webfaction",
        mx: &["*.webfaction.com"],
        ..BASE
    },
    Provider {
        name: "webindia",
        mx: &["*.webindia.com"],
        ..BASE
    },
    Provider {
        name: "yahoo-corp",
        mx: &["*.corp.*.yahoo.com"],
        ..BASE
    },
    Provider {
        name: "yahoo-mail",
        title: Some("Yahoo Mail"),
        public: true,
        canonical: CanonicalFlags {
            lowercase: true,
            strip_periods: false,
            substitute_domains: &[
                ("rocketmail.com", "yahoo.com"),
                ("yahoo.co.uk", "yahoo.com"),
                ("yahoo.co.in", "yahoo.com"),
                ("ymail.com", "yahoo.com"),
            ],
        },
        mx: &[
            "*.am0.yahoodns.net",
            "mx-eu.mail.*.yahoodns.net",
            "mx-apac.mail.*.yahoodns.net",
            "*.mail.yahoo.co.jp",
        ],
        domains: &[
            "rocketmail.com",
            "yahoo.com",
            "yahoo.co.uk",
            "yahoo.co.in",
            "ymail.com",
            "yahoo.co.jp",
        ],
        ..BASE
    },
    Provider {
        name: "yahoo-smallbiz",
        title: Some("Yahoo Small Business"),
        mx: &["mx-biz.mail.am0.yahoodns.net", "*.biz.mail.yahoo.com"],
        ..BASE
    },
    Provider {
        name: "yandex",
        title: Some("Yandex"),
        public: true,
        canonical: LOWERCASE,
        mx: &["mx.yandex.ru"],
        domains: &["yandex.com", "yandex.ru"],
        ..BASE
    },
    Provider {
        name: "yandex-hosted",
        title: Some("Yandex Hosted"),
        canonical: LOWERCASE,
        mx: &["mx.yandex.net"],
        ..BASE
    },
    Provider {
        name: "yodns",
        mx: &["*.yodns.com"],
        ..BASE
    },
    Provider {
        name: "zimbra-cloudzimail",
        mx: &["*.cloudzimail.com"],
        ..BASE
    },
    Provider {
        name: "zoho",
        title: Some("Zoho"),
        note: Some(
            "Zoho provides both a public webmail service and custom domain hosting with the same MX servers",
        ),
        canonical: LOWERCASE,
        mx: &["*.zoho.com", "*.zohomail.com"],
        ..BASE
    },
];

/// Popular public webmail domains. Complements the per-provider `public`
/// flag for providers that also host private domains on the same MX set
/// (`zoho.com`, `protonmail.com`).
pub(crate) static PUBLIC_DOMAINS: phf::Set<&'static str> = phf_set! {
    "gmail.com",
    "googlemail.com",
    "hotmail.com",
    "icloud.com",
    "live.com",
    "live.in",
    "mac.com",
    "mailinator.com",
    "me.com",
    "msn.com",
    "outlook.co",
    "outlook.com",
    "pm.me",
    "protonmail.ch",
    "protonmail.com",
    "rocketmail.com",
    "yahoo.co.in",
    "yahoo.co.uk",
    "yahoo.com",
    "yandex.com",
    "yandex.ru",
    "ymail.com",
    "zoho.com",
};
