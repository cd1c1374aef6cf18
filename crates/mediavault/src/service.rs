//! Upload, lookup and removal of product media.

use mediavault_core::{MediaRecord, UploadCandidate, content_type_for_path};
use mediavault_error::{
    MediaVaultResult, RepositoryError, RepositoryErrorKind, ServiceError, ServiceErrorKind,
};
use mediavault_interface::{MediaRepository, MediaStorage};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Ties the content store to the record store.
///
/// Every record the service creates points at an artifact it just stored, and
/// every artifact it removes takes its record with it.
#[derive(Clone)]
pub struct MediaService {
    storage: Arc<dyn MediaStorage>,
    repository: Arc<dyn MediaRepository>,
}

impl MediaService {
    /// Create a service over the given stores.
    pub fn new(storage: Arc<dyn MediaStorage>, repository: Arc<dyn MediaRepository>) -> Self {
        Self {
            storage,
            repository,
        }
    }

    /// Validate and store an upload, then record it against `product_id`.
    ///
    /// If the record cannot be saved the freshly stored artifact is removed
    /// again.
    ///
    /// # Errors
    ///
    /// `MissingProductId` for a blank product id (nothing is stored), any
    /// validation kind for rejected content, storage or repository kinds for
    /// I/O failures.
    #[instrument(
        skip(self, candidate),
        fields(filename = %candidate.declared_filename, size = candidate.len())
    )]
    pub async fn upload_media(
        &self,
        candidate: &UploadCandidate,
        product_id: &str,
        seller_id: &str,
    ) -> MediaVaultResult<MediaRecord> {
        if product_id.trim().is_empty() {
            return Err(ServiceError::new(ServiceErrorKind::MissingProductId).into());
        }

        let path = self.storage.store(candidate).await?;
        let record = MediaRecord::new(path, product_id, seller_id);

        match self.repository.save(record.clone()).await {
            Ok(saved) => {
                info!(record_id = %saved.id, path = %saved.image_path, "Uploaded media");
                Ok(saved)
            }
            Err(e) => {
                if let Err(cleanup) = self.storage.delete(&record.image_path).await {
                    warn!(
                        path = %record.image_path,
                        error = %cleanup,
                        "Failed to remove artifact after record save failure"
                    );
                }
                Err(e)
            }
        }
    }

    /// Fetch a record.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` if no record has this id.
    pub async fn get_media_by_id(&self, id: &str) -> MediaVaultResult<MediaRecord> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            RepositoryError::new(RepositoryErrorKind::RecordNotFound(id.to_string())).into()
        })
    }

    /// All records of a product.
    pub async fn get_media_by_product(&self, product_id: &str) -> MediaVaultResult<Vec<MediaRecord>> {
        self.repository.find_by_product_id(product_id).await
    }

    /// All records uploaded by a seller.
    pub async fn get_media_by_seller(&self, seller_id: &str) -> MediaVaultResult<Vec<MediaRecord>> {
        self.repository.find_by_seller_id(seller_id).await
    }

    /// Records a seller uploaded for one product.
    pub async fn get_media_by_seller_and_product(
        &self,
        seller_id: &str,
        product_id: &str,
    ) -> MediaVaultResult<Vec<MediaRecord>> {
        self.repository
            .find_by_seller_and_product(seller_id, product_id)
            .await
    }

    /// Remove a seller's media: the artifact first, then the record.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` if no record has this id, `PermissionDenied` if
    /// `seller_id` did not upload it. If the artifact cannot be deleted the
    /// record is kept and the storage error returned.
    #[instrument(skip(self))]
    pub async fn delete_media(&self, id: &str, seller_id: &str) -> MediaVaultResult<()> {
        let record = self.get_media_by_id(id).await?;

        if !record.is_owned_by(seller_id) {
            warn!(owner = %record.seller_id, "Seller tried to delete media it does not own");
            return Err(ServiceError::new(ServiceErrorKind::PermissionDenied {
                media_id: id.to_string(),
                seller_id: seller_id.to_string(),
            })
            .into());
        }

        self.storage.delete(&record.image_path).await?;
        self.repository.delete_by_id(&record.id).await?;

        info!(path = %record.image_path, "Deleted media");
        Ok(())
    }

    /// Locate a record's artifact for reading, with the content type to
    /// serve it as.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` if no record has this id; `NotFound` or `InvalidPath`
    /// if the artifact cannot be resolved.
    pub async fn open_media(&self, id: &str) -> MediaVaultResult<(PathBuf, &'static str)> {
        let record = self.get_media_by_id(id).await?;
        let location = self.storage.resolve(&record.image_path).await?;
        Ok((location, content_type_for_path(record.image_path.as_str())))
    }
}

impl std::fmt::Debug for MediaService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaService").finish_non_exhaustive()
    }
}
