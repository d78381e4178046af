//! Error types for release packaging.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::archive::ArchiveError;

/// Result type for packaging operations.
pub type PackageResult<T> = Result<T, PackageError>;

/// The packaging step that was running when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageStep {
    CreateReleaseDir,
    ReadReadmeSource,
    WriteReadme,
    ReadReadme,
    ReadSource,
    CreateArchive,
    AddEntry,
    FinalizeArchive,
    PublishArchive,
}

impl fmt::Display for PackageStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CreateReleaseDir => "creating release directory",
            Self::ReadReadmeSource => "reading README source",
            Self::WriteReadme => "writing README",
            Self::ReadReadme => "reading README back from disk",
            Self::ReadSource => "reading build output",
            Self::CreateArchive => "creating archive",
            Self::AddEntry => "adding archive entry",
            Self::FinalizeArchive => "finalizing archive",
            Self::PublishArchive => "publishing archive",
        };
        f.write_str(s)
    }
}

/// Configuration and manifest errors. Raised before anything touches disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("duplicate manifest entry: {name}")]
    DuplicateEntry { name: String },

    #[error("invalid manifest entry name '{name}': {reason}")]
    InvalidEntryName { name: String, reason: &'static str },

    #[error("no manifest entry named '{name}'")]
    UnknownEntry { name: String },
}

/// Errors that can occur while producing a release package.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Directory or file could not be created, read or written.
    #[error("{step} failed for {}: {source}", path.display())]
    Filesystem {
        step: PackageStep,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive writer failed mid-write.
    #[error("{step} failed for {}: {source}", path.display())]
    Archive {
        step: PackageStep,
        path: PathBuf,
        #[source]
        source: ArchiveError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PackageError {
    pub(crate) fn fs(step: PackageStep, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            step,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn archive(
        step: PackageStep,
        path: impl Into<PathBuf>,
        source: impl Into<ArchiveError>,
    ) -> Self {
        Self::Archive {
            step,
            path: path.into(),
            source: source.into(),
        }
    }

    /// Step that failed, if the error came from the packaging run itself.
    pub fn step(&self) -> Option<PackageStep> {
        match self {
            Self::Filesystem { step, .. } | Self::Archive { step, .. } => Some(*step),
            Self::Config(_) => None,
        }
    }

    /// Returns true for configuration or manifest problems.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Suggested exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            _ => 1,
        }
    }
}
