use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

use super::ArchiveError;

/// Summary of one entry in a finished archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntryInfo {
    pub name: String,
    pub size: u64,
    pub compressed_size: u64,
    pub crc32: u32,
    pub compression: String,
}

fn open(path: &Path) -> Result<ZipArchive<BufReader<File>>, ArchiveError> {
    let file = File::open(path)?;
    Ok(ZipArchive::new(BufReader::new(file))?)
}

/// List the entries of an archive in central-directory order.
pub fn inspect_archive(path: &Path) -> Result<Vec<ArchiveEntryInfo>, ArchiveError> {
    let mut zip = open(path)?;
    let mut out = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        let entry = zip.by_index(i)?;
        out.push(ArchiveEntryInfo {
            name: entry.name().to_string(),
            size: entry.size(),
            compressed_size: entry.compressed_size(),
            crc32: entry.crc32(),
            compression: format!("{:?}", entry.compression()),
        });
    }
    Ok(out)
}

/// Read the full contents of one entry.
pub fn read_entry(path: &Path, name: &str) -> Result<Vec<u8>, ArchiveError> {
    let mut zip = open(path)?;
    let mut entry = match zip.by_name(name) {
        Ok(e) => e,
        Err(ZipError::FileNotFound) => {
            return Err(ArchiveError::EntryNotFound {
                name: name.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };
    // Header sizes are untrusted; let the buffer grow as data arrives.
    let mut buf = Vec::new();
    entry.read_to_end(&mut buf)?;
    Ok(buf)
}
