//! Stored artifact paths.

use serde::{Deserialize, Serialize};

/// Opaque name of a validated artifact inside the content store.
///
/// Produced only by a successful store call, never by the client. The value
/// is the generated filename (`<uuid>.<ext>`), relative to the storage root.
///
/// # Examples
///
/// ```
/// use mediavault_core::StoredPath;
///
/// let path = StoredPath::from("4f1c2a.png");
/// assert_eq!(path.as_str(), "4f1c2a.png");
/// assert_eq!(path.extension(), Some("png"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct StoredPath(String);

impl StoredPath {
    /// Borrow the raw path string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text after the last `.`, if any.
    pub fn extension(&self) -> Option<&str> {
        self.0
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }
}

impl From<&str> for StoredPath {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for StoredPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
