//! Top-level error wrapper types.

use crate::{
    ConfigError, ConsumerError, ConsumerErrorKind, JsonError, RepositoryError,
    RepositoryErrorKind, ServiceError, ServiceErrorKind,
    StorageError, StorageErrorKind, ValidationError, ValidationErrorKind,
};

/// Every failure a mediavault operation can report.
///
/// # Examples
///
/// ```
/// use mediavault_error::{MediaVaultError, ValidationError, ValidationErrorKind};
///
/// let err: MediaVaultError = ValidationError::new(ValidationErrorKind::EmptyFile).into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MediaVaultErrorKind {
    /// Upload rejected by the validation pipeline
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Content store failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Record store failure
    #[from(RepositoryError)]
    Repository(RepositoryError),
    /// Service-level rule violation
    #[from(ServiceError)]
    Service(ServiceError),
    /// Event consumer failure
    #[from(ConsumerError)]
    Consumer(ConsumerError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Mediavault error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mediavault_error::{MediaVaultResult, StorageError, StorageErrorKind};
///
/// fn might_fail() -> MediaVaultResult<()> {
///     Err(StorageError::new(StorageErrorKind::FileWrite("disk full".to_string())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.storage_kind(), Some(StorageErrorKind::FileWrite(_))));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mediavault Error: {}", _0)]
pub struct MediaVaultError(Box<MediaVaultErrorKind>);

impl MediaVaultError {
    /// Create a new error from a kind.
    pub fn new(kind: MediaVaultErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MediaVaultErrorKind {
        &self.0
    }

    /// Validation kind, if this is a rejected upload.
    pub fn validation_kind(&self) -> Option<&ValidationErrorKind> {
        match self.kind() {
            MediaVaultErrorKind::Validation(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Storage kind, if the content store failed.
    pub fn storage_kind(&self) -> Option<&StorageErrorKind> {
        match self.kind() {
            MediaVaultErrorKind::Storage(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Repository kind, if the record store failed.
    pub fn repository_kind(&self) -> Option<&RepositoryErrorKind> {
        match self.kind() {
            MediaVaultErrorKind::Repository(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Consumer kind, if the event plumbing failed.
    pub fn consumer_kind(&self) -> Option<&ConsumerErrorKind> {
        match self.kind() {
            MediaVaultErrorKind::Consumer(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Service kind, if a service rule was violated.
    pub fn service_kind(&self) -> Option<&ServiceErrorKind> {
        match self.kind() {
            MediaVaultErrorKind::Service(e) => Some(e.kind()),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to MediaVaultErrorKind
impl<T> From<T> for MediaVaultError
where
    T: Into<MediaVaultErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for mediavault operations.
pub type MediaVaultResult<T> = std::result::Result<T, MediaVaultError>;
