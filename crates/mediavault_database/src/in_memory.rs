//! In-memory implementation of MediaRepository.
//!
//! This module provides a simple HashMap-based repository keyed by record id.
//! Useful for unit tests and for embedding the service without a backing file.

use async_trait::async_trait;
use mediavault_core::MediaRecord;
use mediavault_error::MediaVaultResult;
use mediavault_interface::MediaRepository;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory repository for media records.
///
/// Stores records in a HashMap protected by an RwLock for thread-safe access.
/// Clones share the same map. All data is lost when the last clone is dropped.
///
/// # Example
/// ```no_run
/// use mediavault_core::{MediaRecord, StoredPath};
/// use mediavault_database::InMemoryMediaRepository;
/// use mediavault_interface::MediaRepository;
///
/// #[tokio::main]
/// async fn main() {
///     let repo = InMemoryMediaRepository::new();
///     let record = MediaRecord::new(StoredPath::from("a.png"), "p1", "s1");
///     repo.save(record).await.unwrap();
///     assert_eq!(repo.find_by_product_id("p1").await.unwrap().len(), 1);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryMediaRepository {
    records: Arc<RwLock<HashMap<String, MediaRecord>>>,
}

impl InMemoryMediaRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = MediaRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Get the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Check if the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Clear all records.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    /// Every stored record, in no particular order.
    pub async fn all(&self) -> Vec<MediaRecord> {
        self.records.read().await.values().cloned().collect()
    }
}

/// Records matching `predicate`, ordered by id so listings are stable.
pub(crate) fn select<'a>(
    records: impl Iterator<Item = &'a MediaRecord>,
    predicate: impl Fn(&MediaRecord) -> bool,
) -> Vec<MediaRecord> {
    let mut matches: Vec<MediaRecord> = records.filter(|r| predicate(r)).cloned().collect();
    matches.sort_by(|a, b| a.id.cmp(&b.id));
    matches
}

#[async_trait]
impl MediaRepository for InMemoryMediaRepository {
    async fn find_by_id(&self, id: &str) -> MediaVaultResult<Option<MediaRecord>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find_by_product_id(&self, product_id: &str) -> MediaVaultResult<Vec<MediaRecord>> {
        let records = self.records.read().await;
        Ok(select(records.values(), |r| r.product_id == product_id))
    }

    async fn find_by_seller_id(&self, seller_id: &str) -> MediaVaultResult<Vec<MediaRecord>> {
        let records = self.records.read().await;
        Ok(select(records.values(), |r| r.seller_id == seller_id))
    }

    async fn find_by_seller_and_product(
        &self,
        seller_id: &str,
        product_id: &str,
    ) -> MediaVaultResult<Vec<MediaRecord>> {
        let records = self.records.read().await;
        Ok(select(records.values(), |r| {
            r.seller_id == seller_id && r.product_id == product_id
        }))
    }

    #[tracing::instrument(skip(self, record), fields(record_id = %record.id))]
    async fn save(&self, record: MediaRecord) -> MediaVaultResult<MediaRecord> {
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        tracing::debug!("Saved media record");
        Ok(record)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> MediaVaultResult<()> {
        if self.records.write().await.remove(id).is_some() {
            tracing::debug!("Deleted media record");
        } else {
            tracing::debug!("Media record already absent");
        }
        Ok(())
    }
}
