//! Validated image storage for mediavault.
//!
//! This crate is the gatekeeper between arbitrary uploaded bytes and the
//! durable artifact store. Anything it persists is size-bounded and a genuine
//! PNG, JPEG or WebP image.
//!
//! # Pipeline
//!
//! 1. Reject empty content
//! 2. Reject content over the size limit (2 MiB by default)
//! 3. Reject a declared MIME type outside the allow-list
//! 4. Reject a filename extension outside the allow-list
//! 5. Sniff the leading bytes; reject anything that is not a known image
//! 6. Write under a random UUID name keeping the declared extension
//!
//! # Example
//!
//! ```rust
//! use mediavault_core::UploadCandidate;
//! use mediavault_interface::MediaStorage;
//! use mediavault_storage::{FileSystemMediaStore, StorageConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileSystemMediaStore::new(StorageConfig::new("/tmp/media"))?;
//!
//! let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
//! let path = store.store(&UploadCandidate::new(png, "photo.png", "image/png")).await?;
//! assert!(path.as_str().ends_with(".png"));
//!
//! let location = store.resolve(&path).await?;
//! assert!(location.starts_with(store.root()));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod filesystem;
mod sniff;
mod validation;

pub use config::{DEFAULT_MAX_SIZE_BYTES, StorageConfig};
pub use filesystem::FileSystemMediaStore;
pub use sniff::{JPEG_SIGNATURE, PNG_SIGNATURE, RIFF_TAG, WEBP_TAG, sniff_image_format};
pub use validation::{ValidatedUpload, declared_extension, validate_upload};
