//! Core data types for the mediavault image storage service.
//!
//! This crate provides the records, events and value types shared by the
//! content store, the record stores and the cascade deletion consumer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod event;
mod format;
mod path;
mod record;
mod upload;

pub use event::ProductDeletedEvent;
pub use format::{ImageFormat, content_type_for_path};
pub use path::StoredPath;
pub use record::MediaRecord;
pub use upload::UploadCandidate;
