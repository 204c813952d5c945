/// `true` for bare IPv6 literals: contains a colon and nothing but hex digits and colons.
///
/// Such values are never port-stripped, since the last group cannot be told apart from a port.
pub fn is_ipv6_literal(addr: &str) -> bool {
    addr.contains(':') && addr.chars().all(|c| c.is_ascii_hexdigit() || c == ':')
}

/// Remove a trailing `:port` from an address.
///
/// - `10.0.0.5:41223` -> `10.0.0.5`
/// - `[2001:db8::1]:443` -> `2001:db8::1`
/// - `2001:db8::1` -> unchanged
/// - `t.me` -> unchanged
pub fn strip_port(addr: &str) -> &str {
    if let Some(rest) = addr.strip_prefix('[') {
        return match rest.split_once(']') {
            Some((host, _)) => host,
            None => addr,
        };
    }

    if is_ipv6_literal(addr) {
        return addr;
    }

    match addr.rsplit_once(':') {
        Some((host, port))
            if !host.is_empty() && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) =>
        {
            host
        }
        _ => addr,
    }
}
