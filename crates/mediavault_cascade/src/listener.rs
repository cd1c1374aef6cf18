//! Channel-driven listener feeding deliveries to the cascade consumer.

use crate::{CascadeDeletionConsumer, CascadeOutcome, ConsumerConfig};
use mediavault_core::ProductDeletedEvent;
use mediavault_error::JsonError;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn};

/// One raw message from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Topic the message was published on
    pub topic: String,
    /// Undecoded message body
    pub payload: Vec<u8>,
}

impl Delivery {
    /// Create a delivery.
    pub fn new(topic: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
        }
    }
}

/// Message types for the product event listener.
#[derive(Debug)]
pub enum ListenerMessage {
    /// Handle a delivery
    Deliver(Delivery),
    /// Stop accepting deliveries and wait for in-flight events
    Shutdown,
}

/// What the listener did over its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerSummary {
    /// Deliveries received on any topic
    pub received: u64,
    /// Deliveries for other topics
    pub skipped: u64,
    /// Deliveries whose payload was not a valid event
    pub malformed: u64,
    /// Events handed to the consumer
    pub dispatched: u64,
    /// Dispatched events whose task panicked or was cancelled
    pub aborted: u64,
}

/// Decode a `product-deleted` payload.
///
/// # Errors
///
/// Returns error if the payload is not a JSON object with a `productId`.
pub fn decode_event(payload: &[u8]) -> Result<ProductDeletedEvent, JsonError> {
    Ok(serde_json::from_slice(payload)?)
}

/// Listener that turns deliveries into cascade deletions.
///
/// Every delivery is acknowledged: events for other topics are skipped,
/// malformed payloads are logged and dropped, and decoded events run on their
/// own task so a slow product never holds up the next one.
pub struct ProductEventListener {
    config: ConsumerConfig,
    consumer: CascadeDeletionConsumer,
    rx: mpsc::Receiver<ListenerMessage>,
    tasks: JoinSet<CascadeOutcome>,
    summary: ListenerSummary,
}

impl ProductEventListener {
    /// Creates a new listener.
    pub fn new(
        config: ConsumerConfig,
        consumer: CascadeDeletionConsumer,
        rx: mpsc::Receiver<ListenerMessage>,
    ) -> Self {
        Self {
            config,
            consumer,
            rx,
            tasks: JoinSet::new(),
            summary: ListenerSummary::default(),
        }
    }

    /// Runs the listener loop until shutdown or until every sender is gone,
    /// then waits for in-flight events.
    #[instrument(skip(self), fields(topic = %self.config.topic(), group_id = %self.config.group_id()))]
    pub async fn run(mut self) -> ListenerSummary {
        info!("Product event listener started");

        while let Some(msg) = self.rx.recv().await {
            match msg {
                ListenerMessage::Deliver(delivery) => self.dispatch(delivery),
                ListenerMessage::Shutdown => {
                    info!("Product event listener shutting down");
                    break;
                }
            }
            self.reap_finished();
        }

        while let Some(result) = self.tasks.join_next().await {
            self.record_join(result);
        }

        info!(
            received = self.summary.received,
            dispatched = self.summary.dispatched,
            "Product event listener stopped"
        );
        self.summary
    }

    fn dispatch(&mut self, delivery: Delivery) {
        self.summary.received += 1;

        if delivery.topic != *self.config.topic() {
            debug!(delivery_topic = %delivery.topic, "Skipping delivery for another topic");
            self.summary.skipped += 1;
            return;
        }

        let event = match decode_event(&delivery.payload) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "Dropping malformed product-deleted payload");
                self.summary.malformed += 1;
                return;
            }
        };

        debug!(product_id = %event.product_id, "Dispatching product deletion");
        self.summary.dispatched += 1;
        let consumer = self.consumer.clone();
        self.tasks.spawn(async move { consumer.handle(&event).await });
    }

    fn reap_finished(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            self.record_join(result);
        }
    }

    fn record_join(&mut self, result: Result<CascadeOutcome, tokio::task::JoinError>) {
        match result {
            Ok(outcome) if !outcome.is_complete() => {
                debug!(product_id = %outcome.product_id, "Product deletion left media behind");
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "Product deletion task aborted");
                self.summary.aborted += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_event() {
        let event = decode_event(br#"{"productId":"p1","userId":"u1"}"#).unwrap();
        assert_eq!(event, ProductDeletedEvent::new("p1", "u1"));
    }

    #[test]
    fn rejects_payload_without_product_id() {
        assert!(decode_event(br#"{"userId":"u1"}"#).is_err());
        assert!(decode_event(b"not json").is_err());
    }
}
