use integration_tests::harness::*;
use pretty_assertions::assert_eq;
use relaywatch_core::classify::Classifier;
use relaywatch_core::conf::EngineSettings;
use relaywatch_core::engine::Engine;
use tokio::io::{AsyncWriteExt, BufReader};

/// The async entry point consumes a stream fed from another task.
#[tokio::test]
async fn async_run_over_duplex_stream() {
    // Arrange
    let engine = Engine::new(EngineSettings::default(), Classifier::builtin());
    let (mut tx, rx) = tokio::io::duplex(64);
    let input = ndjson(&[
        metadata_chunk(&[(1, "eu-1", true)]),
        logs_chunk(
            1,
            "eu-1",
            &[
                accepted("10:00:00", "10.0.0.1", "t.me"),
                accepted("10:00:05", "10.0.0.2", "www.netflix.com"),
            ],
        ),
        complete_chunk(),
    ]);
    let writer = tokio::spawn(async move {
        tx.write_all(input.as_bytes()).await.unwrap();
    });

    // Act
    let summary = engine.run_async(BufReader::new(rx), reference_now()).await;
    writer.await.unwrap();

    // Assert
    assert_eq!(summary.matched_entries, 2);
    assert_eq!(summary.platform_counts["netflix"], 1);
    assert_eq!(summary.platform_counts["telegram"], 1);
    assert_eq!(summary.sources[0].source_name, "eu-1");
}

/// Sync and async consumption agree on identical input.
#[tokio::test]
async fn async_and_blocking_runs_agree() {
    let engine = Engine::new(EngineSettings::default(), Classifier::builtin());
    let input = std::fs::read_to_string(fixture_path("multi_source.ndjson")).unwrap();

    let blocking = engine.run_reader(input.as_bytes(), reference_now());
    let mut streamed = engine.run_async(input.as_bytes(), reference_now()).await;
    streamed.generated_at = blocking.generated_at;

    assert_eq!(blocking, streamed);
}
