//! Release packaging for Aether.
//!
//! Stages a README in the release directory and bundles it, together with
//! every manifest entry, into a single ZIP archive. Entries without a
//! configured build output are filled with placeholder text.

pub mod archive;
pub mod config;
pub mod error;
pub mod manifest;
pub mod packager;
pub mod readme;

// Convenience re-exports
pub use archive::{inspect_archive, read_entry, ArchiveEntryInfo, ArchiveError, ReleaseArchive};
pub use config::{Compression, ReadmeConfig, ReleaseConfig};
pub use error::{ConfigError, PackageError, PackageResult, PackageStep};
pub use manifest::{placeholder_content, ManifestEntry, ReleaseManifest};
pub use packager::{
    create_release_package, EntryOrigin, PackagePlan, PackageReport, Packager, PlannedEntry,
};
pub use readme::DEFAULT_README;
