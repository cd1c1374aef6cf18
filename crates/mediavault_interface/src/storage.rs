//! Content store trait definition.

use async_trait::async_trait;
use mediavault_core::{StoredPath, UploadCandidate};
use mediavault_error::MediaVaultResult;
use std::path::PathBuf;

/// What a delete call found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DeleteOutcome {
    /// The artifact existed and was removed
    #[display("removed")]
    Removed,
    /// Nothing was stored under the path
    #[display("already absent")]
    AlreadyAbsent,
}

/// Trait for content store backends.
///
/// Implementations own the validation pipeline: whatever they persist must be
/// size-bounded and a genuine image of an allowed format.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Validate an upload and persist it under a freshly generated name.
    ///
    /// Validation completes before any I/O, so a rejected upload leaves no
    /// trace in the store.
    ///
    /// # Errors
    ///
    /// Validation kinds for rejected content, storage kinds for I/O failures.
    async fn store(&self, candidate: &UploadCandidate) -> MediaVaultResult<StoredPath>;

    /// Map a stored path to a readable location inside the storage root.
    ///
    /// # Errors
    ///
    /// `InvalidPath` if the path would leave the root, `NotFound` if nothing
    /// is stored there.
    async fn resolve(&self, path: &StoredPath) -> MediaVaultResult<PathBuf>;

    /// Remove an artifact.
    ///
    /// Deleting something that is not there succeeds with
    /// [`DeleteOutcome::AlreadyAbsent`], so redelivered events are harmless.
    async fn delete(&self, path: &StoredPath) -> MediaVaultResult<DeleteOutcome>;
}
