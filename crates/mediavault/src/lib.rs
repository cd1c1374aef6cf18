//! Mediavault - validated product image storage
//!
//! Mediavault accepts seller-uploaded product images, checks that they are
//! genuine PNG, JPEG or WebP files within the size limit, and stores them under
//! generated names. When a product is deleted elsewhere, a cascade consumer
//! removes every image that belonged to it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mediavault::{
//!     FileSystemMediaStore, InMemoryMediaRepository, MediaService, StorageConfig, UploadCandidate,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = Arc::new(FileSystemMediaStore::new(StorageConfig::new("uploads/media"))?);
//!     let service = MediaService::new(storage, Arc::new(InMemoryMediaRepository::new()));
//!
//!     let bytes = std::fs::read("photo.png")?;
//!     let record = service
//!         .upload_media(&UploadCandidate::new(bytes, "photo.png", "image/png"), "product123", "seller123")
//!         .await?;
//!     println!("Stored {} as {}", record.id, record.image_path);
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - export tracing spans through OpenTelemetry (stderr)
//!
//! # Architecture
//!
//! - `mediavault_error` - Error types
//! - `mediavault_core` - Records, events, upload candidates, image formats
//! - `mediavault_interface` - `MediaStorage` and `MediaRepository` traits
//! - `mediavault_storage` - Validation pipeline and filesystem content store
//! - `mediavault_database` - In-memory and JSON-file record stores
//! - `mediavault_cascade` - Cascade deletion consumer and event listener
//!
//! This crate (`mediavault`) re-exports everything for convenience and adds
//! the service layer, configuration loading and the `mediavault` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;
mod service;

pub use config::{MediaVaultConfig, RecordsConfig};
pub use observability::{
    ObservabilityConfig, ObservabilityGuard, init_observability, shutdown_observability,
};
pub use service::MediaService;

// Re-export workspace crates
pub use mediavault_cascade::*;
pub use mediavault_core::*;
pub use mediavault_database::*;
pub use mediavault_error::*;
pub use mediavault_interface::*;
pub use mediavault_storage::*;
