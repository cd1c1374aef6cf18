//! Newline-delimited JSON event source.

use crate::{Delivery, ListenerMessage};
use mediavault_error::{ConsumerError, ConsumerErrorKind, MediaVaultResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Reads one event per line and forwards each as a [`Delivery`].
///
/// Stands in for a message broker: a file, a pipe or stdin replays a topic.
/// Blank lines are ignored; everything else is passed through undecoded so the
/// listener applies the same rules as for broker traffic.
#[derive(Debug, Clone)]
pub struct JsonLinesEventSource {
    topic: String,
}

impl JsonLinesEventSource {
    /// Source publishing on `topic`.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }

    /// Topic deliveries are tagged with.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Forward every line of `reader` to `tx`, returning how many were sent.
    ///
    /// # Errors
    ///
    /// `SourceRead` if the reader fails, `ChannelClosed` if the listener is gone.
    #[instrument(skip(self, reader, tx), fields(topic = %self.topic))]
    pub async fn forward<R>(
        &self,
        reader: R,
        tx: &mpsc::Sender<ListenerMessage>,
    ) -> MediaVaultResult<u64>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut sent = 0;

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| ConsumerError::new(ConsumerErrorKind::SourceRead(e.to_string())))?
        {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            tx.send(ListenerMessage::Deliver(Delivery::new(
                self.topic.clone(),
                line.as_bytes(),
            )))
            .await
            .map_err(|_| ConsumerError::new(ConsumerErrorKind::ChannelClosed))?;
            sent += 1;
        }

        debug!(sent, "Event source exhausted");
        Ok(sent)
    }
}
