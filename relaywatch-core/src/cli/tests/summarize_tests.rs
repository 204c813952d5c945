use crate::cli::summarize::{SummarizeArgs, build_summary, resolve_config, write_summary};
use crate::conf::{ConfigError, Mode};
use crate::logging::OutputFormat;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const STREAM: &str = concat!(
    r#"{"type":"metadata","sources":[{"node_id":1,"node_name":"eu-1","is_master":true}]}"#,
    "\n",
    r#"{"type":"logs","node_id":1,"node_name":"eu-1","lines":["2024/01/01 10:00:00 from 10.0.0.5:41223 accepted tcp:t.me:443 [direct]"]}"#,
    "\n",
    r#"{"type":"complete"}"#,
    "\n",
);

fn args() -> SummarizeArgs {
    SummarizeArgs {
        now: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 1, 0).unwrap()),
        ..SummarizeArgs::default()
    }
}

#[test]
fn flags_override_file_values() {
    // Arrange
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "engine = {{\n  window_seconds = 60\n  limit = 10\n}}").unwrap();
    let args = SummarizeArgs {
        config: Some(file.path().to_path_buf()),
        limit: Some(3),
        mode: Some(Mode::Frontend),
        ..args()
    };

    // Act
    let config = resolve_config(&args).unwrap();

    // Assert
    assert_eq!(config.engine.window_seconds, 60);
    assert_eq!(config.engine.limit, 3);
    assert_eq!(config.engine.mode, Mode::Frontend);
    assert_eq!(config.engine.lookback_lines, 1000);
}

#[test]
fn zero_override_is_rejected() {
    let args = SummarizeArgs {
        window_seconds: Some(0),
        ..args()
    };

    let err = resolve_config(&args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation { .. })
    ));
}

#[test]
fn summary_is_written_as_one_json_object() {
    // Arrange
    let summary = build_summary(&args(), STREAM.as_bytes()).unwrap();
    let mut out = Vec::new();

    // Act
    write_summary(&summary, OutputFormat::Json, false, &mut out).unwrap();

    // Assert
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["items"][0]["user_key"], "10.0.0.5");
    assert_eq!(json["sources"][0]["node_name"], "eu-1");
    let generated_at = json["generated_at"].as_str().unwrap();
    assert!(generated_at.ends_with('Z'));
    assert!(generated_at.parse::<chrono::DateTime<Utc>>().unwrap() > args().now.unwrap());
}

#[test]
fn pretty_output_renders_dashboard() {
    let summary = build_summary(&args(), STREAM.as_bytes()).unwrap();
    let mut out = Vec::new();

    write_summary(&summary, OutputFormat::Pretty, false, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Platforms:"));
    assert!(text.contains("10.0.0.5"));
}

#[test]
fn every_flag_has_help_text() {
    let cmd = <SummarizeArgs as clap::Args>::augment_args(clap::Command::new("summarize"));

    let undocumented: Vec<_> = cmd
        .get_arguments()
        .filter(|arg| arg.get_help().is_none())
        .map(|arg| arg.get_id().to_string())
        .collect();

    assert!(undocumented.is_empty(), "flags without help: {undocumented:?}");
}
