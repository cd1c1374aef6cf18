//! Event consumer error types.

/// Kinds of event consumer errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConsumerErrorKind {
    /// The event source could not be read
    #[display("Failed to read event source: {}", _0)]
    SourceRead(String),
    /// The listener stopped accepting deliveries
    #[display("Event listener channel closed")]
    ChannelClosed,
    /// The listener task ended abnormally
    #[display("Event listener failed: {}", _0)]
    ListenerFailed(String),
}

/// Event consumer error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Consumer Error: {} at line {} in {}", kind, line, file)]
pub struct ConsumerError {
    /// The kind of error that occurred
    pub kind: ConsumerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConsumerError {
    /// Create a new consumer error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConsumerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConsumerErrorKind {
        &self.kind
    }
}
