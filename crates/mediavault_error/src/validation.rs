//! Upload validation error types.
//!
//! Every kind here is raised before the content store is touched.

/// Reasons an upload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Upload carried no bytes
    #[display("File is empty")]
    EmptyFile,
    /// Upload is larger than the configured limit
    #[display("File size exceeds {} limit", size_limit(limit))]
    FileTooLarge {
        /// Size of the rejected content in bytes
        size: u64,
        /// Configured maximum in bytes
        limit: u64,
    },
    /// Declared MIME type is not on the allow-list
    #[display("Unsupported MIME type '{}': only PNG, JPG, JPEG and WebP images are allowed", _0)]
    UnsupportedMimeType(String),
    /// Declared filename extension is not on the allow-list
    #[display("Unsupported file extension '{}': only PNG, JPG, JPEG and WebP images are allowed", _0)]
    UnsupportedExtension(String),
    /// Leading bytes match no known image signature
    #[display("Invalid image file")]
    InvalidImageContent,
}

/// Render a byte limit the way upload clients are told about it: whole
/// mebibytes as `2MB`, anything else in bytes.
fn size_limit(bytes: &u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if *bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{} byte", bytes)
    }
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use mediavault_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyFile);
/// assert!(format!("{}", err).contains("File is empty"));
/// assert_eq!(err.kind(), &ValidationErrorKind::EmptyFile);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_message() {
        let kind = ValidationErrorKind::FileTooLarge {
            size: 2 * 1024 * 1024 + 1,
            limit: 2 * 1024 * 1024,
        };
        assert_eq!(kind.to_string(), "File size exceeds 2MB limit");

        let odd = ValidationErrorKind::FileTooLarge {
            size: 1001,
            limit: 1000,
        };
        assert_eq!(odd.to_string(), "File size exceeds 1000 byte limit");
    }
}
