use crate::classify::{HostRule, IpRuleSpec};
use crate::conf::{ConfigError, RelaywatchConfig, validate_config};

#[test]
fn defaults_are_valid() {
    assert!(validate_config(&RelaywatchConfig::default()).is_ok());
}

#[test]
fn all_violations_are_reported_together() {
    // Arrange
    let mut cfg = RelaywatchConfig::default();
    cfg.engine.window_seconds = 0;
    cfg.engine.limit = 0;
    cfg.classifier.host_rules.push(HostRule {
        platform: "other".to_string(),
        needles: vec![" ".to_string()],
    });
    cfg.classifier.ip_rules.push(IpRuleSpec {
        platform: String::new(),
        cidrs: vec!["10.0.0.0/8".to_string(), "not-a-net".to_string()],
    });

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    let ConfigError::Validation { issues } = err else {
        panic!("Expected Validation, got {:?}", err);
    };
    let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "engine.window_seconds",
            "engine.limit",
            "classifier.host_rules[0].platform",
            "classifier.host_rules[0].needles[0]",
            "classifier.ip_rules[0].platform",
            "classifier.ip_rules[0].cidrs[1]",
        ]
    );
}

#[test]
fn bare_addresses_are_accepted_as_cidrs() {
    let mut cfg = RelaywatchConfig::default();
    cfg.classifier.ip_rules.push(IpRuleSpec {
        platform: "corp".to_string(),
        cidrs: vec!["192.0.2.7".to_string(), "2001:db8::/32".to_string()],
    });

    assert!(validate_config(&cfg).is_ok());
}
