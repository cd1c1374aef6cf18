//! Events consumed from other services.

use serde::{Deserialize, Serialize};

/// A product and everything hanging off it should be purged.
///
/// Delivered at least once; handling must converge when the same event
/// arrives again. On the wire the keys are camelCase.
///
/// # Examples
///
/// ```
/// use mediavault_core::ProductDeletedEvent;
///
/// let event = ProductDeletedEvent::new("p1", "u1");
/// assert_eq!(event.product_id, "p1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDeletedEvent {
    /// Deleted product
    pub product_id: String,
    /// User who deleted it
    #[serde(default)]
    pub user_id: String,
}

impl ProductDeletedEvent {
    /// Create a new event.
    pub fn new(product_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            user_id: user_id.into(),
        }
    }
}
