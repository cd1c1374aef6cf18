//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Failed to remove file
    #[display("Failed to delete file: {}", _0)]
    FileDelete(String),
    /// Artifact not found at the specified location
    #[display("Media not found: {}", _0)]
    NotFound(String),
    /// Stored path is malformed or escapes the storage root
    #[display("Invalid storage path: {}", _0)]
    InvalidPath(String),
}

impl StorageErrorKind {
    /// Whether this kind stems from the environment (disk, permissions)
    /// rather than from the path the caller supplied.
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            StorageErrorKind::DirectoryCreation(_)
                | StorageErrorKind::FileWrite(_)
                | StorageErrorKind::FileRead(_)
                | StorageErrorKind::FileDelete(_)
        )
    }
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use mediavault_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("abc.png".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// assert!(!err.kind().is_io_failure());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorageErrorKind {
        &self.kind
    }
}
