//! Media records.

use crate::StoredPath;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persistent link between a stored artifact and the product that owns it.
///
/// # Examples
///
/// ```
/// use mediavault_core::{MediaRecord, StoredPath};
///
/// let record = MediaRecord::new(StoredPath::from("a1.png"), "product123", "seller123");
/// assert!(!record.id.is_empty());
/// assert_eq!(record.product_id, "product123");
/// assert!(record.is_owned_by("seller123"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    /// Unique record identifier
    pub id: String,
    /// Artifact this record points at
    pub image_path: StoredPath,
    /// Product the image belongs to
    pub product_id: String,
    /// Seller who uploaded the image
    pub seller_id: String,
}

impl MediaRecord {
    /// Create a record with a freshly generated id.
    pub fn new(
        image_path: StoredPath,
        product_id: impl Into<String>,
        seller_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            image_path,
            product_id: product_id.into(),
            seller_id: seller_id.into(),
        }
    }

    /// Whether `seller_id` uploaded this media.
    pub fn is_owned_by(&self, seller_id: &str) -> bool {
        self.seller_id == seller_id
    }
}
