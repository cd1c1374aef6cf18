//! Content store configuration.

use derive_getters::Getters;
use mediavault_error::{ConfigError, MediaVaultResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Default upload limit: 2 MiB.
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 2 * 1024 * 1024;

/// Configuration handed to the content store at construction.
///
/// # Example
///
/// ```toml
/// [storage]
/// root_directory = "uploads/media"
/// max_size_bytes = 2_097_152
/// allowed_mime_types = ["image/png", "image/jpeg", "image/jpg", "image/webp"]
/// allowed_extensions = ["png", "jpg", "jpeg", "webp"]
/// ```
///
/// ```
/// use mediavault_storage::StorageConfig;
///
/// let config = StorageConfig::new("/tmp/media").with_max_size_bytes(1024);
/// assert_eq!(*config.max_size_bytes(), 1024);
/// assert!(config.allows_mime_type("IMAGE/PNG"));
/// assert!(!config.allows_extension("gif"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory all artifacts live in
    #[serde(default = "default_root_directory")]
    root_directory: PathBuf,

    /// Largest accepted upload in bytes
    #[serde(default = "default_max_size_bytes")]
    max_size_bytes: u64,

    /// Declared MIME types accepted by the pre-filter
    #[serde(default = "default_allowed_mime_types")]
    allowed_mime_types: BTreeSet<String>,

    /// Filename extensions accepted by the pre-filter
    #[serde(default = "default_allowed_extensions")]
    allowed_extensions: BTreeSet<String>,
}

fn default_root_directory() -> PathBuf {
    PathBuf::from("uploads/media")
}

fn default_max_size_bytes() -> u64 {
    DEFAULT_MAX_SIZE_BYTES
}

fn default_allowed_mime_types() -> BTreeSet<String> {
    ["image/png", "image/jpeg", "image/jpg", "image/webp"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_allowed_extensions() -> BTreeSet<String> {
    ["png", "jpg", "jpeg", "webp"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_directory: default_root_directory(),
            max_size_bytes: default_max_size_bytes(),
            allowed_mime_types: default_allowed_mime_types(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl StorageConfig {
    /// Default limits and allow-lists rooted at `root_directory`.
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
            ..Self::default()
        }
    }

    /// Whether `mime_type` is on the allow-list (ASCII case-insensitive).
    pub fn allows_mime_type(&self, mime_type: &str) -> bool {
        let mime_type = mime_type.trim();
        self.allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(mime_type))
    }

    /// Whether `extension` is on the allow-list (ASCII case-insensitive).
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    /// Checks the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is empty, the size limit is zero, or an
    /// allow-list is empty.
    pub fn validate(&self) -> MediaVaultResult<()> {
        if self.root_directory.as_os_str().is_empty() {
            return Err(ConfigError::new("storage.root_directory must not be empty").into());
        }
        if self.max_size_bytes == 0 {
            return Err(ConfigError::new("storage.max_size_bytes must be greater than zero").into());
        }
        if self.allowed_mime_types.is_empty() {
            return Err(ConfigError::new("storage.allowed_mime_types must not be empty").into());
        }
        if self.allowed_extensions.is_empty() {
            return Err(ConfigError::new("storage.allowed_extensions must not be empty").into());
        }
        Ok(())
    }
}
