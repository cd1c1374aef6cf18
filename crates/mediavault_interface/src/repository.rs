//! Record store trait definition.

use async_trait::async_trait;
use mediavault_core::MediaRecord;
use mediavault_error::MediaVaultResult;

/// Record store for [`MediaRecord`]s.
///
/// Single-record operations are atomic; nothing here spans records.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Look up a record by id.
    async fn find_by_id(&self, id: &str) -> MediaVaultResult<Option<MediaRecord>>;

    /// All records belonging to a product, possibly none.
    async fn find_by_product_id(&self, product_id: &str) -> MediaVaultResult<Vec<MediaRecord>>;

    /// All records uploaded by a seller, possibly none.
    async fn find_by_seller_id(&self, seller_id: &str) -> MediaVaultResult<Vec<MediaRecord>>;

    /// Records a seller uploaded for one product, possibly none.
    async fn find_by_seller_and_product(
        &self,
        seller_id: &str,
        product_id: &str,
    ) -> MediaVaultResult<Vec<MediaRecord>>;

    /// Insert or replace a record, returning what was stored.
    async fn save(&self, record: MediaRecord) -> MediaVaultResult<MediaRecord>;

    /// Remove a record. Removing an unknown id is a no-op.
    async fn delete_by_id(&self, id: &str) -> MediaVaultResult<()>;
}
