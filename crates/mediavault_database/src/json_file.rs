//! JSON-file implementation of MediaRepository.

use crate::in_memory::select;
use async_trait::async_trait;
use mediavault_core::MediaRecord;
use mediavault_error::{JsonError, MediaVaultResult, RepositoryError, RepositoryErrorKind};
use mediavault_interface::MediaRepository;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// On-disk document layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordDocument {
    records: Vec<MediaRecord>,
}

/// Record store persisted as a single JSON document.
///
/// Nothing is cached: every call reads the document, and every mutation
/// re-reads it, applies one change and writes it back via a temp file +
/// rename. Several handles (or processes) on the same file therefore only
/// ever add or remove their own record and never write back a stale copy.
/// Mutations through one handle and its clones are serialized.
///
/// ```json
/// {
///   "records": [
///     { "id": "...", "imagePath": "<uuid>.png", "productId": "p1", "sellerId": "s1" }
///   ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileMediaRepository {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileMediaRepository {
    /// Open the record file at `path`. A missing file reads as empty.
    ///
    /// # Errors
    ///
    /// `Load` if the file exists but cannot be read or parsed.
    #[tracing::instrument(fields(path = %path.as_ref().display()), skip(path))]
    pub async fn open(path: impl AsRef<Path>) -> MediaVaultResult<Self> {
        let repo = Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        };

        let count = repo.load().await?.len();
        tracing::info!(count, "Opened JSON record store");
        Ok(repo)
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the number of stored records.
    ///
    /// # Errors
    ///
    /// `Load` if the document cannot be read.
    pub async fn len(&self) -> MediaVaultResult<usize> {
        Ok(self.load().await?.len())
    }

    /// Check if the repository is empty.
    ///
    /// # Errors
    ///
    /// `Load` if the document cannot be read.
    pub async fn is_empty(&self) -> MediaVaultResult<bool> {
        Ok(self.load().await?.is_empty())
    }

    /// Current contents of the document, keyed by id.
    async fn load(&self) -> MediaVaultResult<HashMap<String, MediaRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => {
                return Err(RepositoryError::new(RepositoryErrorKind::Load(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let document: RecordDocument = serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::Load(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        Ok(document
            .records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect())
    }

    /// Re-read the document, apply `change`, and write it back if `change`
    /// reports a modification.
    async fn update<F>(&self, change: F) -> MediaVaultResult<bool>
    where
        F: FnOnce(&mut HashMap<String, MediaRecord>) -> bool,
    {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        if !change(&mut records) {
            return Ok(false);
        }
        self.persist(&records).await?;
        Ok(true)
    }

    /// Write `records` to disk atomically.
    async fn persist(&self, records: &HashMap<String, MediaRecord>) -> MediaVaultResult<()> {
        let mut document = RecordDocument {
            records: records.values().cloned().collect(),
        };
        document.records.sort_by(|a, b| a.id.cmp(&b.id));
        let bytes = serde_json::to_vec_pretty(&document).map_err(JsonError::from)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                RepositoryError::new(RepositoryErrorKind::Persist(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(format!(".{}.tmp", uuid::Uuid::new_v4().simple()));
        let temp_path = PathBuf::from(temp_name);

        tokio::fs::write(&temp_path, &bytes).await.map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::Persist(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::Persist(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::trace!(count = records.len(), "Persisted record file");
        Ok(())
    }
}

#[async_trait]
impl MediaRepository for JsonFileMediaRepository {
    async fn find_by_id(&self, id: &str) -> MediaVaultResult<Option<MediaRecord>> {
        Ok(self.load().await?.remove(id))
    }

    async fn find_by_product_id(&self, product_id: &str) -> MediaVaultResult<Vec<MediaRecord>> {
        let records = self.load().await?;
        Ok(select(records.values(), |r| r.product_id == product_id))
    }

    async fn find_by_seller_id(&self, seller_id: &str) -> MediaVaultResult<Vec<MediaRecord>> {
        let records = self.load().await?;
        Ok(select(records.values(), |r| r.seller_id == seller_id))
    }

    async fn find_by_seller_and_product(
        &self,
        seller_id: &str,
        product_id: &str,
    ) -> MediaVaultResult<Vec<MediaRecord>> {
        let records = self.load().await?;
        Ok(select(records.values(), |r| {
            r.seller_id == seller_id && r.product_id == product_id
        }))
    }

    #[tracing::instrument(skip(self, record), fields(record_id = %record.id, path = %self.path.display()))]
    async fn save(&self, record: MediaRecord) -> MediaVaultResult<MediaRecord> {
        let stored = record.clone();
        self.update(move |records| {
            records.insert(stored.id.clone(), stored);
            true
        })
        .await?;

        tracing::debug!("Saved media record");
        Ok(record)
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn delete_by_id(&self, id: &str) -> MediaVaultResult<()> {
        if self.update(|records| records.remove(id).is_some()).await? {
            tracing::debug!("Deleted media record");
        } else {
            tracing::debug!("Media record already absent");
        }
        Ok(())
    }
}
