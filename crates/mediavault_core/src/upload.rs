//! Upload input.

/// Raw upload as handed over by the HTTP layer.
///
/// Exists only for the duration of a store call. The filename and MIME type
/// are client claims and are never trusted on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    /// Uploaded bytes
    pub content: Vec<u8>,
    /// Filename the client sent
    pub declared_filename: String,
    /// MIME type the client sent
    pub declared_mime_type: String,
}

impl UploadCandidate {
    /// Create a new upload candidate.
    pub fn new(
        content: impl Into<Vec<u8>>,
        declared_filename: impl Into<String>,
        declared_mime_type: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            declared_filename: declared_filename.into(),
            declared_mime_type: declared_mime_type.into(),
        }
    }

    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the upload carried no bytes.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
