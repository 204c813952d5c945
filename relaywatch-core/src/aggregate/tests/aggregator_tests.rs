use crate::access_log::{ParsedEvent, parse_line};
use crate::aggregate::{AggregationLimits, Aggregator};
use crate::classify::Classifier;
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 1, 0).unwrap()
}

fn event(line: &str) -> ParsedEvent {
    parse_line(line).unwrap_or_else(|| panic!("fixture line must parse: {line}"))
}

fn line_for(src: &str, dest: &str, time: &str) -> String {
    format!("2024/01/01 {time} from {src}:40000 accepted tcp:{dest}:443 [direct]")
}

#[test]
fn accepted_in_window_event_is_aggregated() {
    // Arrange
    let classifier = Classifier::builtin();
    let mut agg = Aggregator::new(&classifier, AggregationLimits::default(), now());
    let ev = event("2024/01/01 10:00:00 from 10.0.0.5:41223 accepted tcp:t.me:443 [direct]");

    // Act
    let accepted = agg.ingest(&ev, "local");

    // Assert
    assert!(accepted);
    assert_eq!(agg.matched_entries(), 1);

    let client = agg.client("10.0.0.5").unwrap();
    assert_eq!(client.route, "direct");
    assert_eq!(client.connections(), 1);
    assert_eq!(
        client.platform_stats["telegram"]
            .destinations
            .iter()
            .collect::<Vec<_>>(),
        vec!["t.me"]
    );
    assert!(agg.platform_tally()["telegram"].contains("10.0.0.5"));
    assert!(agg.unmatched().is_empty());
}

#[test]
fn rejected_event_changes_nothing() {
    let classifier = Classifier::builtin();
    let mut agg = Aggregator::new(&classifier, AggregationLimits::default(), now());
    let ev = event("2024/01/01 10:00:00 from 10.0.0.5:41223 rejected tcp:t.me:443 [direct]");

    assert!(!agg.ingest(&ev, "local"));
    assert_eq!(agg.matched_entries(), 0);
    assert_eq!(agg.client_count(), 0);
    assert!(agg.platform_tally().is_empty());
}

#[test]
fn events_before_cutoff_are_excluded() {
    // Arrange: window of 120s ending at 10:01:00 starts at 09:59:00.
    let classifier = Classifier::builtin();
    let mut agg = Aggregator::new(&classifier, AggregationLimits::default(), now());

    // Act
    let stale = agg.ingest(&event(&line_for("10.0.0.1", "t.me", "09:58:59")), "local");
    let boundary = agg.ingest(&event(&line_for("10.0.0.2", "t.me", "09:59:00")), "local");

    // Assert
    assert!(!stale);
    assert!(boundary);
    assert_eq!(agg.client_count(), 1);
    assert!(agg.client("10.0.0.2").is_some());
}

#[test]
fn events_without_timestamp_are_excluded() {
    let classifier = Classifier::builtin();
    let mut agg = Aggregator::new(&classifier, AggregationLimits::default(), now());
    let ev = event("2024/02/31 10:00:00 from 10.0.0.5:1 accepted tcp:t.me:443");

    assert!(!agg.ingest(&ev, "local"));
    assert_eq!(agg.matched_entries(), 0);
}

#[test]
fn same_identity_from_several_addresses_is_one_client() {
    // Arrange
    let classifier = Classifier::builtin();
    let mut agg = Aggregator::new(&classifier, AggregationLimits::default(), now());

    // Act
    agg.ingest(
        &event("2024/01/01 10:00:00 from 10.0.0.1:1 accepted tcp:t.me:443 email: alice@example.com"),
        "eu-1",
    );
    agg.ingest(
        &event("2024/01/01 10:00:10 from 10.0.0.2:1 accepted tcp:t.me:443 email: alice@example.com"),
        "us-1",
    );

    // Assert
    assert_eq!(agg.client_count(), 1);
    let client = agg.client("alice@example.com").unwrap();
    assert_eq!(
        client.source_ips.iter().cloned().collect::<Vec<_>>(),
        vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()]
    );
    assert_eq!(client.connections(), 2);
    assert_eq!(
        client.source_names.iter().cloned().collect::<Vec<_>>(),
        vec!["eu-1".to_string(), "us-1".to_string()]
    );
    assert_eq!(client.event_count, 2);
    assert_eq!(client.platform_stats["telegram"].connection_count, 2);
}

#[test]
fn last_seen_never_moves_backwards() {
    let classifier = Classifier::builtin();
    let mut agg = Aggregator::new(&classifier, AggregationLimits::default(), now());

    agg.ingest(&event(&line_for("10.0.0.1", "t.me", "10:00:30")), "local");
    agg.ingest(&event(&line_for("10.0.0.1", "t.me", "10:00:10")), "local");

    let expected = Utc
        .with_ymd_and_hms(2024, 1, 1, 10, 0, 30)
        .unwrap()
        .timestamp_millis();
    assert_eq!(agg.client("10.0.0.1").unwrap().last_seen_ms, expected);
}

#[test]
fn empty_route_does_not_overwrite_known_route() {
    let classifier = Classifier::builtin();
    let mut agg = Aggregator::new(&classifier, AggregationLimits::default(), now());

    agg.ingest(
        &event("2024/01/01 10:00:00 from 10.0.0.1:1 accepted tcp:t.me:443 [vless-in >> proxy]"),
        "local",
    );
    agg.ingest(
        &event("2024/01/01 10:00:05 from 10.0.0.1:1 accepted tcp:t.me:443"),
        "local",
    );

    assert_eq!(agg.client("10.0.0.1").unwrap().route, "vless-in >> proxy");
}

#[test]
fn client_map_is_capped_but_existing_clients_keep_updating() {
    // Arrange
    let classifier = Classifier::builtin();
    let limits = AggregationLimits {
        max_clients: 3,
        ..AggregationLimits::default()
    };
    let mut agg = Aggregator::new(&classifier, limits, now());

    // Act
    for i in 0..10 {
        agg.ingest(&event(&line_for(&format!("10.0.0.{i}"), "t.me", "10:00:00")), "local");
    }
    let existing = agg.ingest(&event(&line_for("10.0.0.0", "youtube.com", "10:00:20")), "local");

    // Assert
    assert_eq!(agg.client_count(), 3);
    assert!(existing);
    assert!(agg.client("10.0.0.9").is_none());
    assert!(agg.client("10.0.0.0").unwrap().platform_stats.contains_key("youtube"));
    assert_eq!(agg.matched_entries(), 4);
}

#[test]
fn destination_set_is_capped_and_keeps_insertion_order() {
    // Arrange
    let classifier = Classifier::builtin();
    let mut agg = Aggregator::new(&classifier, AggregationLimits::default(), now());

    // Act
    for i in 0..30 {
        agg.ingest(
            &event(&line_for("10.0.0.1", &format!("cdn{i:02}.telegram.org"), "10:00:00")),
            "local",
        );
    }

    // Assert
    let stats = &agg.client("10.0.0.1").unwrap().platform_stats["telegram"];
    assert_eq!(stats.connection_count, 30);
    assert_eq!(stats.destinations.len(), 20);
    assert_eq!(stats.destinations.first().map(String::as_str), Some("cdn00.telegram.org"));
    assert_eq!(stats.destinations.last().map(String::as_str), Some("cdn19.telegram.org"));
}

#[test]
fn unclassified_destinations_are_tracked() {
    let classifier = Classifier::builtin();
    let mut agg = Aggregator::new(&classifier, AggregationLimits::default(), now());

    agg.ingest(&event(&line_for("10.0.0.1", "unknown-host.example", "10:00:00")), "local");
    agg.ingest(&event(&line_for("10.0.0.2", "unknown-host.example", "10:00:01")), "local");

    assert_eq!(agg.unmatched().len(), 1);
    assert_eq!(agg.platform_tally()["other"].len(), 2);
}

#[test]
fn same_input_gives_identical_aggregates() {
    let classifier = Classifier::builtin();
    let lines = [
        line_for("10.0.0.1", "t.me", "10:00:00"),
        line_for("10.0.0.2", "www.youtube.com", "10:00:01"),
        line_for("10.0.0.1", "unknown-host.example", "10:00:02"),
        "2024/01/01 10:00:03 from 10.0.0.3:1 accepted tcp:api.x.com:443 email: Bob@x.io".to_string(),
    ];

    let run = || {
        let mut agg = Aggregator::new(&classifier, AggregationLimits::default(), now());
        for line in &lines {
            agg.ingest(&event(line), "local");
        }
        agg.into_parts().clients
    };

    assert_eq!(run(), run());
}
