use crate::access_log::{is_ipv6_literal, strip_port};

#[test]
fn strips_ipv4_port() {
    assert_eq!(strip_port("10.0.0.5:41223"), "10.0.0.5");
}

#[test]
fn strips_hostname_port() {
    assert_eq!(strip_port("t.me:443"), "t.me");
}

#[test]
fn unbrackets_ipv6_with_port() {
    assert_eq!(strip_port("[2001:db8::1]:443"), "2001:db8::1");
}

#[test]
fn leaves_bare_ipv6_alone() {
    assert!(is_ipv6_literal("2001:db8::1"));
    assert_eq!(strip_port("2001:db8::1"), "2001:db8::1");
    assert_eq!(strip_port("::1"), "::1");
}

#[test]
fn leaves_portless_values_alone() {
    assert_eq!(strip_port("10.0.0.5"), "10.0.0.5");
    assert_eq!(strip_port("example.com"), "example.com");
    assert_eq!(strip_port("example.com:http"), "example.com:http");
    assert_eq!(strip_port(":443"), ":443");
}

#[test]
fn ipv4_with_port_is_not_an_ipv6_literal() {
    assert!(!is_ipv6_literal("10.0.0.5:41223"));
    assert!(!is_ipv6_literal("10.0.0.5"));
}
