//! Record store error types.

/// Kinds of record store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RepositoryErrorKind {
    /// No record exists with the given id
    #[display("Media not found: {}", _0)]
    RecordNotFound(String),
    /// Backing store could not be read
    #[display("Failed to load records: {}", _0)]
    Load(String),
    /// Backing store could not be written
    #[display("Failed to persist records: {}", _0)]
    Persist(String),
}

/// Record store error with location tracking.
///
/// # Examples
///
/// ```
/// use mediavault_error::{RepositoryError, RepositoryErrorKind};
///
/// let err = RepositoryError::new(RepositoryErrorKind::RecordNotFound("media123".to_string()));
/// assert!(format!("{}", err).contains("media123"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Repository Error: {} at line {} in {}", kind, line, file)]
pub struct RepositoryError {
    /// The kind of error that occurred
    pub kind: RepositoryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RepositoryError {
    /// Create a new repository error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RepositoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RepositoryErrorKind {
        &self.kind
    }
}
