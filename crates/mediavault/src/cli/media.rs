//! Content store command handlers.

use super::{open_storage, read_candidate};
use mediavault::{MediaStorage, MediaVaultConfig, MediaVaultResult, StoredPath};
use std::path::Path;

/// Validate and store a local file, printing the stored path.
pub async fn store_file(
    config: &MediaVaultConfig,
    file: &Path,
    filename: Option<String>,
    mime_type: Option<String>,
) -> MediaVaultResult<()> {
    let storage = open_storage(config)?;
    let candidate = read_candidate(file, filename, mime_type).await?;

    let path = storage.store(&candidate).await?;
    println!("{}", path);
    Ok(())
}

/// Print the absolute location of a stored artifact.
pub async fn resolve_artifact(config: &MediaVaultConfig, path: &str) -> MediaVaultResult<()> {
    let storage = open_storage(config)?;
    let location = storage.resolve(&StoredPath::from(path)).await?;
    println!("{}", location.display());
    Ok(())
}

/// Delete a stored artifact, reporting whether anything was there.
pub async fn delete_artifact(config: &MediaVaultConfig, path: &str) -> MediaVaultResult<()> {
    let storage = open_storage(config)?;
    let outcome = storage.delete(&StoredPath::from(path)).await?;
    println!("{}: {}", path, outcome);
    Ok(())
}
