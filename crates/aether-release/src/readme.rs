//! The user-facing README shipped in every release.

use std::path::{Path, PathBuf};

use crate::error::{PackageError, PackageResult, PackageStep};

/// Built-in README text. Contains non-ASCII status glyphs, so it is always
/// written as UTF-8.
pub const DEFAULT_README: &str = "\
# Aether - Luau Scripting Environment

## Installation:
1. Extract all files to the same folder
2. Run AetherSetup.exe
3. Follow the setup wizard instructions
4. Launch Aether from the desktop shortcut

## Usage:
1. Open the script editor
2. Write or load a Luau script
3. Click \"Execute\" to run it
4. Watch the console panel for output

## Package Contents:
✓ AetherSetup.exe - setup wizard
✓ AetherGUI.dll - native GUI library
✓ aether_backend.dll - backend library
✓ *.pdb - debug symbols

## Support:
- Educational use only
- Use responsibly

Version: 1.0.0
Build: Final Release
";

/// Write `text` to `<release_dir>/<name>`, replacing any previous content.
pub(crate) fn write_readme(release_dir: &Path, name: &str, text: &str) -> PackageResult<PathBuf> {
    let path = release_dir.join(name);
    std::fs::write(&path, text.as_bytes())
        .map_err(|e| PackageError::fs(PackageStep::WriteReadme, &path, e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "README written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_readme_has_glyphs() {
        assert!(DEFAULT_README.contains('✓'));
        assert!(!DEFAULT_README.is_ascii());
    }

    #[test]
    fn test_write_readme_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.txt"), "old content that is longer").unwrap();

        let path = write_readme(dir.path(), "README.txt", "new ✓\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "new ✓\n");
    }

    #[test]
    fn test_write_readme_missing_dir_reports_step() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_readme(&dir.path().join("absent"), "README.txt", "x").unwrap_err();
        assert_eq!(err.step(), Some(PackageStep::WriteReadme));
    }
}
