use std::collections::BTreeSet;
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::ArchiveError;
use crate::config::Compression;

/// Deterministic ZIP writer for release entries.
///
/// Every entry gets the same options: the configured compression, the ZIP
/// epoch (1980-01-01 00:00) as modification time and mode `0644`. Two runs
/// over the same inputs therefore produce identical bytes.
///
/// # Example
///
/// ```no_run
/// use aether_release::{Compression, ReleaseArchive};
/// use std::fs::File;
///
/// let file = File::create("release.zip").unwrap();
/// let mut archive = ReleaseArchive::new(file, Compression::Deflated, None);
/// archive.add_entry("README.txt", b"hello\n").unwrap();
/// archive.finish().unwrap();
/// ```
pub struct ReleaseArchive<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
    names: BTreeSet<String>,
}

impl<W: Write + Seek> ReleaseArchive<W> {
    pub fn new(writer: W, compression: Compression, level: Option<i64>) -> Self {
        let method = match compression {
            Compression::Deflated => CompressionMethod::Deflated,
            Compression::Stored => CompressionMethod::Stored,
        };
        let options = SimpleFileOptions::default()
            .compression_method(method)
            .compression_level(level)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);

        Self {
            zip: ZipWriter::new(writer),
            options,
            names: BTreeSet::new(),
        }
    }

    /// Add one entry. Names must be unique within the archive.
    pub fn add_entry(&mut self, name: &str, data: &[u8]) -> Result<(), ArchiveError> {
        if !self.names.insert(name.to_string()) {
            return Err(ArchiveError::DuplicateEntry {
                name: name.to_string(),
            });
        }
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(data)?;
        Ok(())
    }

    pub fn entry_count(&self) -> usize {
        self.names.len()
    }

    /// Write the central directory and hand back the underlying writer.
    pub fn finish(self) -> Result<W, ArchiveError> {
        Ok(self.zip.finish()?)
    }
}
