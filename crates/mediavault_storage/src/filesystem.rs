//! Filesystem-based content store.
//!
//! Artifacts live in a flat namespace under one root directory, each named
//! by a random UUID plus the extension of the validated upload.

use crate::{StorageConfig, validate_upload};
use async_trait::async_trait;
use mediavault_core::{StoredPath, UploadCandidate};
use mediavault_error::{MediaVaultResult, StorageError, StorageErrorKind};
use mediavault_interface::{DeleteOutcome, MediaStorage};
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

/// Filesystem content store.
///
/// ```text
/// uploads/media/
/// ├── 0b6f3c1e-7d7a-4c55-9b0e-5d2f7a1c9e42.png
/// ├── 5a1d0f7e-2c3b-4e8a-a1f4-6b9d8c7e2f10.jpg
/// └── 9e8d7c6b-5a4f-4e3d-8c2b-1a0f9e8d7c6b.webp
/// ```
///
/// # Features
///
/// - **Validated**: nothing is written until the upload passes every check
/// - **Collision-free**: generated names, never the client's filename
/// - **Atomic writes**: temp file + rename, so partial files are never visible
/// - **Contained**: resolve and delete refuse paths that leave the root
pub struct FileSystemMediaStore {
    config: StorageConfig,
    root: PathBuf,
}

impl FileSystemMediaStore {
    /// Create a new filesystem content store.
    ///
    /// Creates the root directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the directory cannot
    /// be created or accessed.
    #[tracing::instrument(skip(config), fields(root = %config.root_directory().display()))]
    pub fn new(config: StorageConfig) -> MediaVaultResult<Self> {
        config.validate()?;

        let root_directory = config.root_directory();
        std::fs::create_dir_all(root_directory).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                root_directory.display(),
                e
            )))
        })?;

        let root = root_directory.canonicalize().map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                root_directory.display(),
                e
            )))
        })?;

        tracing::info!(path = %root.display(), "Created filesystem media store");
        Ok(Self { config, root })
    }

    /// Canonical storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of `path` inside the root, without touching the filesystem.
    ///
    /// A stored path must be a single plain filename: no separators, no
    /// `.`/`..` components, not hidden (temp files are hidden).
    fn artifact_path(&self, path: &StoredPath) -> MediaVaultResult<PathBuf> {
        let name = path.as_str();
        let mut components = Path::new(name).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if name.is_empty()
            || !single_normal
            || name.contains(['/', '\\'])
            || name.starts_with('.')
        {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(name.to_string())).into());
        }

        Ok(self.root.join(name))
    }

    /// Reject locations that resolve (through links) outside the root.
    fn ensure_contained(&self, location: &Path, path: &StoredPath) -> MediaVaultResult<()> {
        if location.starts_with(&self.root) {
            Ok(())
        } else {
            tracing::warn!(
                path = %path,
                location = %location.display(),
                "Stored path resolves outside the storage root"
            );
            Err(StorageError::new(StorageErrorKind::InvalidPath(path.to_string())).into())
        }
    }
}

#[async_trait]
impl MediaStorage for FileSystemMediaStore {
    #[tracing::instrument(
        skip(self, candidate),
        fields(filename = %candidate.declared_filename, size = candidate.len())
    )]
    async fn store(&self, candidate: &UploadCandidate) -> MediaVaultResult<StoredPath> {
        let validated = validate_upload(&self.config, candidate)?;

        let name = format!("{}.{}", Uuid::new_v4(), validated.extension);
        let path = self.root.join(&name);

        // Write to a hidden temp file first, then rename for atomicity
        let temp_path = self.root.join(format!(".{}.tmp", name));
        tokio::fs::write(&temp_path, &candidate.content)
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    temp_path.display(),
                    e
                )))
            })?;

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
                tracing::warn!(
                    path = %temp_path.display(),
                    error = %cleanup,
                    "Failed to remove temp file after rename failure"
                );
            }
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into());
        }

        tracing::info!(
            path = %path.display(),
            size = candidate.len(),
            format = %validated.format,
            "Stored media file"
        );

        Ok(StoredPath::from(name))
    }

    #[tracing::instrument(skip(self, path), fields(path = %path))]
    async fn resolve(&self, path: &StoredPath) -> MediaVaultResult<PathBuf> {
        let location = self.artifact_path(path)?;

        let location = match tokio::fs::canonicalize(&location).await {
            Ok(canonical) => canonical,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::new(StorageErrorKind::NotFound(path.to_string())).into());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    location.display(),
                    e
                )))
                .into());
            }
        };

        self.ensure_contained(&location, path)?;

        tracing::debug!(location = %location.display(), "Resolved media file");
        Ok(location)
    }

    #[tracing::instrument(skip(self, path), fields(path = %path))]
    async fn delete(&self, path: &StoredPath) -> MediaVaultResult<DeleteOutcome> {
        let location = self.artifact_path(path)?;

        match tokio::fs::remove_file(&location).await {
            Ok(()) => {
                tracing::info!(path = %location.display(), "Deleted media file");
                Ok(DeleteOutcome::Removed)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %location.display(), "Media file already absent");
                Ok(DeleteOutcome::AlreadyAbsent)
            }
            Err(e) => Err(StorageError::new(StorageErrorKind::FileDelete(format!(
                "{}: {}",
                location.display(),
                e
            )))
            .into()),
        }
    }
}
