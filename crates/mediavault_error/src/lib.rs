//! Error types for the mediavault image storage service.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Validation kinds (`EmptyFile` through `InvalidImageContent`) are raised
//! before any I/O. Storage kinds flagged by
//! [`StorageErrorKind::is_io_failure`] are environmental failures.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod consumer;
mod error;
mod json;
mod repository;
mod service;
mod storage;
mod validation;

pub use config::ConfigError;
pub use consumer::{ConsumerError, ConsumerErrorKind};
pub use error::{MediaVaultError, MediaVaultErrorKind, MediaVaultResult};
pub use json::JsonError;
pub use repository::{RepositoryError, RepositoryErrorKind};
pub use service::{ServiceError, ServiceErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
