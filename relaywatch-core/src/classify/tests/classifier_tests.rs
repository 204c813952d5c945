use crate::classify::{
    Classifier, ClassifierError, HostRule, IpRuleSpec, PLATFORM_OTHER, classify,
};

#[test]
fn telegram_short_domain() {
    assert_eq!(classify("t.me", None), "telegram");
}

#[test]
fn unknown_host_is_other() {
    assert_eq!(classify("unknown-host.example", None), PLATFORM_OTHER);
}

#[test]
fn hostname_match_is_case_insensitive() {
    assert_eq!(classify("WWW.YouTube.com", None), "youtube");
    assert_eq!(classify("rr3---sn-4g5e6nsz.googlevideo.com", None), "youtube");
}

#[test]
fn first_matching_rule_wins() {
    // "netflix.com" also contains "x.com"; netflix is ordered first.
    assert_eq!(classify("www.netflix.com", None), "netflix");
    assert_eq!(classify("scontent.cdninstagram.com", None), "instagram");
}

#[test]
fn dns_resolver_hostnames() {
    assert_eq!(classify("dns.google", None), "google");
    assert_eq!(classify("dns.quad9.net", None), "dns");
    assert_eq!(classify("one.one.one.one", None), "dns");
}

#[test]
fn ip_literal_host_falls_back_to_cidr_rules() {
    assert_eq!(classify("149.154.167.51", None), "telegram");
    assert_eq!(classify("8.8.8.8", None), "dns");
    assert_eq!(classify("2001:b28:f23d::1", None), "telegram");
    assert_eq!(classify("[2001:b28:f23d::1]", None), "telegram");
    assert_eq!(classify("203.0.113.9", None), PLATFORM_OTHER);
}

#[test]
fn explicit_destination_ip_is_used_when_host_is_unknown() {
    assert_eq!(
        classify("edge.unknown.example", Some("91.108.56.130")),
        "telegram"
    );
}

#[test]
fn host_rule_beats_ip_rule() {
    assert_eq!(classify("api.telegram.org", Some("8.8.8.8")), "telegram");
}

#[test]
fn operator_rules_are_evaluated_first() {
    // Arrange
    let host_rules = vec![HostRule {
        platform: "corp".to_string(),
        needles: vec!["Corp.Example".to_string(), "t.me".to_string()],
    }];
    let ip_rules = vec![IpRuleSpec {
        platform: "corp".to_string(),
        cidrs: vec!["10.20.0.0/16".to_string(), "192.0.2.7".to_string()],
    }];

    // Act
    let classifier = Classifier::with_rules(&host_rules, &ip_rules).unwrap();

    // Assert
    assert_eq!(classifier.classify("vpn.corp.example", None), "corp");
    assert_eq!(classifier.classify("t.me", None), "corp");
    assert_eq!(classifier.classify("10.20.3.4", None), "corp");
    assert_eq!(classifier.classify("192.0.2.7", None), "corp");
    assert_eq!(classifier.classify("192.0.2.8", None), PLATFORM_OTHER);
    assert_eq!(classifier.classify("www.youtube.com", None), "youtube");
}

#[test]
fn invalid_operator_rules_are_rejected() {
    let bad_cidr = Classifier::with_rules(
        &[],
        &[IpRuleSpec {
            platform: "corp".to_string(),
            cidrs: vec!["10.0.0.0/99".to_string()],
        }],
    );
    assert!(matches!(bad_cidr, Err(ClassifierError::InvalidCidr { .. })));

    let reserved = Classifier::with_rules(
        &[HostRule {
            platform: PLATFORM_OTHER.to_string(),
            needles: vec!["x".to_string()],
        }],
        &[],
    );
    assert!(matches!(
        reserved,
        Err(ClassifierError::ReservedPlatform { .. })
    ));

    let empty_needle = Classifier::with_rules(
        &[HostRule {
            platform: "corp".to_string(),
            needles: vec!["  ".to_string()],
        }],
        &[],
    );
    assert!(matches!(
        empty_needle,
        Err(ClassifierError::EmptyNeedle { .. })
    ));
}

#[test]
fn builtin_tables_are_non_empty() {
    let classifier = Classifier::builtin();

    assert!(!classifier.host_rules().is_empty());
    assert!(!classifier.ip_rules().is_empty());
    assert!(
        classifier
            .host_rules()
            .iter()
            .all(|r| r.platform != PLATFORM_OTHER)
    );
}
