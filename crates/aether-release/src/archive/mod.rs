//! ZIP archive plumbing.
//!
//! - `writer.rs`: deterministic entry writer
//! - `atomic.rs`: temp-file-then-rename publication
//! - `reader.rs`: listing and reading finished archives

mod atomic;
mod reader;
mod writer;

pub(crate) use atomic::AtomicFile;
pub use reader::{inspect_archive, read_entry, ArchiveEntryInfo};
pub use writer::ReleaseArchive;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("duplicate archive entry: {name}")]
    DuplicateEntry { name: String },

    #[error("archive has no entry named '{name}'")]
    EntryNotFound { name: String },
}
