//! Event-driven cascade deletion for the mediavault image storage service.
//!
//! When a product is deleted elsewhere, every image attached to it must go
//! too. [`CascadeDeletionConsumer::handle`] does that for one
//! [`ProductDeletedEvent`](mediavault_core::ProductDeletedEvent): look up the
//! product's records, then for each record delete the artifact and, only if
//! that succeeded, the record. One failing record never stops the others.
//!
//! The transport side is kept separate:
//!
//! - [`ProductEventListener`] drains a channel of raw [`Delivery`]s, filters
//!   by topic, decodes JSON and hands each event to its own task
//! - [`JsonLinesEventSource`] feeds that channel from newline-delimited JSON
//!
//! # Example
//!
//! ```no_run
//! use mediavault_cascade::{CascadeDeletionConsumer, ConsumerConfig, ListenerMessage, ProductEventListener};
//! use mediavault_database::InMemoryMediaRepository;
//! use mediavault_storage::{FileSystemMediaStore, StorageConfig};
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//!
//! # async fn run() -> mediavault_error::MediaVaultResult<()> {
//! let storage = Arc::new(FileSystemMediaStore::new(StorageConfig::default())?);
//! let repository = Arc::new(InMemoryMediaRepository::new());
//! let consumer = CascadeDeletionConsumer::new(storage, repository);
//!
//! let config = ConsumerConfig::default();
//! let (tx, rx) = mpsc::channel(*config.channel_capacity());
//! let listener = tokio::spawn(ProductEventListener::new(config, consumer, rx).run());
//!
//! // ... forward deliveries on `tx` ...
//! let _ = tx.send(ListenerMessage::Shutdown).await;
//! let _summary = listener.await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod consumer;
mod listener;
mod metrics;
mod source;

pub use config::ConsumerConfig;
pub use consumer::{CascadeDeletionConsumer, CascadeOutcome, RecordFailure};
pub use listener::{Delivery, ListenerMessage, ListenerSummary, ProductEventListener, decode_event};
pub use metrics::{CascadeMetrics, CascadeMetricsSnapshot};
pub use source::JsonLinesEventSource;
