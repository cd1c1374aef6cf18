//! Record stores for the mediavault image storage service.
//!
//! Two [`MediaRepository`](mediavault_interface::MediaRepository)
//! implementations:
//!
//! - [`InMemoryMediaRepository`]: a map behind an async lock, lost on drop
//! - [`JsonFileMediaRepository`]: the same map, written back to a JSON
//!   document after every mutation so records survive restarts

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod in_memory;
mod json_file;

pub use in_memory::InMemoryMediaRepository;
pub use json_file::JsonFileMediaRepository;
