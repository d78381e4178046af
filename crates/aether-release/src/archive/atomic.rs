use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A file written under a temporary name next to `target` and renamed into
/// place by [`commit`](AtomicFile::commit).
///
/// Dropping it without committing removes the temporary file, so the target
/// path only ever holds a complete file (or whatever was there before).
pub(crate) struct AtomicFile {
    tmp: NamedTempFile,
    target: PathBuf,
}

impl AtomicFile {
    pub(crate) fn create(target: &Path) -> io::Result<Self> {
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let base = target
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("path has no filename: {}", target.display()),
                )
            })?;

        let prefix = format!(".{base}.");
        let tmp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(parent)?;

        Ok(Self {
            tmp,
            target: target.to_path_buf(),
        })
    }

    pub(crate) fn as_file_mut(&mut self) -> &mut File {
        self.tmp.as_file_mut()
    }

    /// Flush to disk and rename over the target.
    pub(crate) fn commit(self) -> io::Result<()> {
        self.tmp.as_file().sync_all()?;

        // Temp files are created 0600.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(self.tmp.path(), std::fs::Permissions::from_mode(0o644))?;
        }

        self.tmp.persist(&self.target).map_err(|e| e.error)?;
        Ok(())
    }
}
