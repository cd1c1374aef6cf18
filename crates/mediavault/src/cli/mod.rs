//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the mediavault binary.

mod commands;
mod consume;
mod media;
mod records;

pub use commands::{Cli, Commands};
pub use consume::consume_events;
pub use media::{delete_artifact, resolve_artifact, store_file};
pub use records::{list_records, remove_record, show_record, upload_file};

use mediavault::{
    FileSystemMediaStore, JsonFileMediaRepository, MediaVaultConfig, MediaVaultResult, StorageError,
    StorageErrorKind, UploadCandidate, content_type_for_path,
};
use std::path::Path;
use std::sync::Arc;

/// Content store built from configuration.
fn open_storage(config: &MediaVaultConfig) -> MediaVaultResult<Arc<FileSystemMediaStore>> {
    Ok(Arc::new(FileSystemMediaStore::new(config.storage().clone())?))
}

/// Record store built from configuration.
async fn open_records(config: &MediaVaultConfig) -> MediaVaultResult<Arc<JsonFileMediaRepository>> {
    Ok(Arc::new(
        JsonFileMediaRepository::open(config.records().path()).await?,
    ))
}

/// Read a local file into an upload candidate.
///
/// The declared filename defaults to the file's own name and the declared MIME
/// type to the one implied by its extension.
async fn read_candidate(
    file: &Path,
    filename: Option<String>,
    mime_type: Option<String>,
) -> MediaVaultResult<UploadCandidate> {
    let content = tokio::fs::read(file).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", file.display(), e)))
    })?;

    let filename = filename.unwrap_or_else(|| {
        file.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    let mime_type = mime_type.unwrap_or_else(|| content_type_for_path(&filename).to_string());

    Ok(UploadCandidate::new(content, filename, mime_type))
}
