use crate::access_log::address::strip_port;
use crate::access_log::timestamp::parse_timestamp_ms;
use crate::access_log::types::{Action, ParsedEvent};
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;

static ACCESS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        (?P<ts>\d+/\d+/\d+\s+\d+:\d+:\d+(?:\.\d+)?)
        \s+from\s+
        (?:(?P<src_proto>tcp|udp):)?
        (?P<src>\S+)
        \s+(?P<action>accepted|rejected)\s+
        (?:(?P<net>tcp|udp):)?
        (?P<dest>\S+)
        (?:\s+\[(?P<route>[^\]]*)\])?
        (?:\s+email:\s*(?P<tag>\S+))?
        ",
    )
    .expect("access log pattern must compile")
});

/// Parse one access-log line.
///
/// Returns `None` when the line does not follow the access-log grammar. A line that matches but
/// carries an impossible timestamp is still returned, with `timestamp_ms` left empty.
pub fn parse_line(line: &str) -> Option<ParsedEvent> {
    let caps = ACCESS_LINE.captures(line)?;

    let action = match &caps["action"] {
        "accepted" => Action::Accepted,
        _ => Action::Rejected,
    };

    let source_ip = strip_port(&caps["src"]).to_string();
    let destination_host = strip_port(&caps["dest"]).to_string();
    let destination_ip = destination_host
        .parse::<IpAddr>()
        .is_ok()
        .then(|| destination_host.clone());

    let route = caps
        .name("route")
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let identity_tag = caps
        .name("tag")
        .map(|m| m.as_str().to_string())
        .filter(|tag| !tag.is_empty());

    let (user_key, user_label) = match &identity_tag {
        Some(tag) => (tag.to_lowercase(), tag.clone()),
        None => (source_ip.to_lowercase(), source_ip.clone()),
    };

    Some(ParsedEvent {
        timestamp_ms: parse_timestamp_ms(&caps["ts"]),
        action,
        source_ip,
        destination_host,
        destination_ip,
        route,
        identity_tag,
        user_key,
        user_label,
    })
}
