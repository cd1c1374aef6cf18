//! Layered upload validation.
//!
//! Cheap structural checks run first (size, declared MIME type, extension);
//! the byte-level signature check runs last, so oversized or mislabelled
//! input never reaches it.

use crate::{StorageConfig, sniff_image_format};
use mediavault_core::{ImageFormat, UploadCandidate};
use mediavault_error::{ValidationError, ValidationErrorKind};
use tracing::{debug, instrument, warn};

/// An upload that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpload {
    /// Format detected from the content itself
    pub format: ImageFormat,
    /// Lower-cased extension taken from the declared filename
    pub extension: String,
}

/// Text after the last `.` of a filename, lower-cased.
///
/// Returns `None` when there is no dot or nothing follows it.
pub fn declared_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .map(str::to_ascii_lowercase)
}

/// Run the full validation pipeline against `config`.
///
/// # Errors
///
/// The first failing check, in order: `EmptyFile`, `FileTooLarge`,
/// `UnsupportedMimeType`, `UnsupportedExtension`, `InvalidImageContent`.
#[instrument(
    skip(config, candidate),
    fields(
        filename = %candidate.declared_filename,
        mime_type = %candidate.declared_mime_type,
        size = candidate.len()
    )
)]
pub fn validate_upload(
    config: &StorageConfig,
    candidate: &UploadCandidate,
) -> Result<ValidatedUpload, ValidationError> {
    if candidate.is_empty() {
        warn!("Rejected upload: file is empty");
        return Err(ValidationError::new(ValidationErrorKind::EmptyFile));
    }

    let size = candidate.len() as u64;
    let limit = *config.max_size_bytes();
    if size > limit {
        warn!(limit, "Rejected upload: file too large");
        return Err(ValidationError::new(ValidationErrorKind::FileTooLarge {
            size,
            limit,
        }));
    }

    if !config.allows_mime_type(&candidate.declared_mime_type) {
        warn!("Rejected upload: MIME type not allowed");
        return Err(ValidationError::new(
            ValidationErrorKind::UnsupportedMimeType(candidate.declared_mime_type.clone()),
        ));
    }

    let extension = match declared_extension(&candidate.declared_filename) {
        Some(ext) if config.allows_extension(&ext) => ext,
        other => {
            warn!(extension = ?other, "Rejected upload: extension not allowed");
            return Err(ValidationError::new(
                ValidationErrorKind::UnsupportedExtension(other.unwrap_or_default()),
            ));
        }
    };

    let Some(format) = sniff_image_format(&candidate.content) else {
        warn!("Rejected upload: content matches no image signature");
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidImageContent,
        ));
    };

    debug!(%format, %extension, "Upload passed validation");
    Ok(ValidatedUpload { format, extension })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_text_after_last_dot() {
        assert_eq!(declared_extension("photo.PNG"), Some("png".to_string()));
        assert_eq!(declared_extension("archive.tar.jpeg"), Some("jpeg".to_string()));
        assert_eq!(declared_extension("../../etc/passwd.webp"), Some("webp".to_string()));
        assert_eq!(declared_extension("noextension"), None);
        assert_eq!(declared_extension("trailing."), None);
    }

    #[test]
    fn separator_after_dot_is_not_an_extension_match() {
        let config = StorageConfig::default();
        let ext = declared_extension("x.png/evil").unwrap_or_default();
        assert!(!config.allows_extension(&ext));
    }
}
