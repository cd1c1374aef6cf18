//! Cascade deletion of a deleted product's media.

use crate::CascadeMetrics;
use mediavault_core::{MediaRecord, ProductDeletedEvent};
use mediavault_error::StorageErrorKind;
use mediavault_interface::{MediaRepository, MediaStorage};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Which step of a record's deletion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RecordFailure {
    /// Artifact delete failed; the record was left in place
    #[display("artifact")]
    Artifact,
    /// Artifact was removed but the record delete failed
    #[display("record")]
    Record,
}

/// Summary of one handled event.
///
/// Nothing flows back to the event source; this is for in-process callers
/// and tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadeOutcome {
    /// Product the event named
    pub product_id: String,
    /// Records found for the product
    pub attempted: usize,
    /// Records removed together with their artifact
    pub deleted: usize,
    /// Records that could not be fully removed, by record id
    pub failed: Vec<(String, RecordFailure)>,
    /// The record lookup itself failed, so nothing was attempted
    pub lookup_failed: bool,
}

impl CascadeOutcome {
    /// Whether every record of the product is gone.
    pub fn is_complete(&self) -> bool {
        !self.lookup_failed && self.failed.is_empty()
    }
}

/// Removes every image of a deleted product.
///
/// Clones share the stores and metrics, so one consumer can be handed to
/// many tasks.
#[derive(Clone)]
pub struct CascadeDeletionConsumer {
    storage: Arc<dyn MediaStorage>,
    repository: Arc<dyn MediaRepository>,
    metrics: CascadeMetrics,
}

impl CascadeDeletionConsumer {
    /// Create a consumer over the given stores with fresh metrics.
    pub fn new(storage: Arc<dyn MediaStorage>, repository: Arc<dyn MediaRepository>) -> Self {
        Self {
            storage,
            repository,
            metrics: CascadeMetrics::new(),
        }
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &CascadeMetrics {
        &self.metrics
    }

    /// Delete all media of `event.product_id`.
    ///
    /// Never fails: a lookup failure is logged and the event counts as
    /// handled; per-record failures are logged and the loop moves on. A record
    /// whose artifact could not be deleted stays in place and is not retried.
    #[instrument(skip(self, event), fields(product_id = %event.product_id, user_id = %event.user_id))]
    pub async fn handle(&self, event: &ProductDeletedEvent) -> CascadeOutcome {
        let mut outcome = CascadeOutcome {
            product_id: event.product_id.clone(),
            ..CascadeOutcome::default()
        };

        let records = match self.repository.find_by_product_id(&event.product_id).await {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "Failed to look up media for deleted product");
                self.metrics.record_lookup_failure();
                self.metrics.record_event_handled();
                outcome.lookup_failed = true;
                return outcome;
            }
        };

        debug!(count = records.len(), "Found media for deleted product");
        outcome.attempted = records.len();

        for record in &records {
            match self.delete_record(record).await {
                Ok(()) => outcome.deleted += 1,
                Err(step) => outcome.failed.push((record.id.clone(), step)),
            }
        }

        self.metrics.record_event_handled();
        info!(
            attempted = outcome.attempted,
            deleted = outcome.deleted,
            failed = outcome.failed.len(),
            "Handled product deletion"
        );
        outcome
    }

    /// Artifact first, then the record. Failures are logged here.
    #[instrument(skip(self, record), fields(record_id = %record.id, path = %record.image_path))]
    async fn delete_record(&self, record: &MediaRecord) -> Result<(), RecordFailure> {
        match self.storage.delete(&record.image_path).await {
            Ok(found) => debug!(outcome = %found, "Artifact deleted"),
            Err(e) if e.storage_kind().is_some_and(StorageErrorKind::is_io_failure) => {
                error!(error = %e, "Storage failure deleting artifact, keeping record");
                self.metrics.record_artifact_failure();
                return Err(RecordFailure::Artifact);
            }
            Err(e) => {
                warn!(error = %e, "Failed to delete artifact, keeping record");
                self.metrics.record_artifact_failure();
                return Err(RecordFailure::Artifact);
            }
        }

        if let Err(e) = self.repository.delete_by_id(&record.id).await {
            error!(error = %e, "Artifact deleted but record removal failed");
            self.metrics.record_record_failure();
            return Err(RecordFailure::Record);
        }

        self.metrics.record_deleted();
        Ok(())
    }
}

impl std::fmt::Debug for CascadeDeletionConsumer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CascadeDeletionConsumer")
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}
