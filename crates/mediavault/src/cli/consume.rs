//! Event consumption command handler.

use super::{open_records, open_storage};
use mediavault::{
    CascadeDeletionConsumer, ConsumerError, ConsumerErrorKind, JsonError, JsonLinesEventSource,
    ListenerMessage, MediaVaultConfig, MediaVaultResult, ProductEventListener,
};
use std::path::Path;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::info;

/// Replay product-deleted events from a file or stdin through the listener,
/// then print the cascade metrics.
pub async fn consume_events(
    config: &MediaVaultConfig,
    input: Option<&Path>,
    topic: Option<String>,
) -> MediaVaultResult<()> {
    let consumer = CascadeDeletionConsumer::new(open_storage(config)?, open_records(config).await?);
    let consumer_config = config.consumer().clone();
    let source = JsonLinesEventSource::new(topic.unwrap_or_else(|| consumer_config.topic().clone()));

    let (tx, rx) = mpsc::channel(*consumer_config.channel_capacity());
    let listener = tokio::spawn(ProductEventListener::new(consumer_config, consumer.clone(), rx).run());

    let forwarded = match input {
        Some(path) => {
            let file = tokio::fs::File::open(path).await.map_err(|e| {
                ConsumerError::new(ConsumerErrorKind::SourceRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            source.forward(BufReader::new(file), &tx).await
        }
        None => source.forward(BufReader::new(tokio::io::stdin()), &tx).await,
    };

    // Stop the listener even if the source failed part way
    let _ = tx.send(ListenerMessage::Shutdown).await;
    let summary = listener
        .await
        .map_err(|e| ConsumerError::new(ConsumerErrorKind::ListenerFailed(e.to_string())))?;
    let forwarded = forwarded?;

    info!(
        forwarded,
        dispatched = summary.dispatched,
        skipped = summary.skipped,
        malformed = summary.malformed,
        "Event replay finished"
    );

    let snapshot = consumer.metrics().snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).map_err(JsonError::from)?
    );
    Ok(())
}
