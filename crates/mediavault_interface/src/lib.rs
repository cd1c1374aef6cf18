//! Trait definitions for the mediavault image storage service.
//!
//! The content store ([`MediaStorage`]) holds artifact bytes; the record
//! store ([`MediaRepository`]) holds the [`MediaRecord`](mediavault_core::MediaRecord)s
//! pointing at them. Both are consumed through trait objects so the cascade
//! consumer and the service layer never name a concrete backend.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod repository;
mod storage;

pub use repository::MediaRepository;
pub use storage::{DeleteOutcome, MediaStorage};
