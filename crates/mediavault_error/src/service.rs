//! Media service error types.

/// Specific service error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServiceErrorKind {
    /// Upload did not name the owning product
    #[display("productId is required")]
    MissingProductId,
    /// Caller does not own the media
    #[display("You do not have permission to delete this media")]
    PermissionDenied {
        /// Media the caller tried to remove
        media_id: String,
        /// Seller making the request
        seller_id: String,
    },
}

/// Service error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Service Error: {} at line {} in {}", kind, line, file)]
pub struct ServiceError {
    /// The specific error kind
    pub kind: ServiceErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ServiceError {
    /// Create a new service error with location tracking.
    #[track_caller]
    pub fn new(kind: ServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ServiceErrorKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_message() {
        let kind = ServiceErrorKind::PermissionDenied {
            media_id: "m1".to_string(),
            seller_id: "intruder".to_string(),
        };
        assert_eq!(
            kind.to_string(),
            "You do not have permission to delete this media"
        );
    }
}
