//! Release package assembly.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::archive::{AtomicFile, ReleaseArchive};
use crate::config::ReleaseConfig;
use crate::error::{PackageError, PackageResult, PackageStep};
use crate::manifest::placeholder_content;
use crate::readme;

/// Where the bytes of a planned archive entry come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryOrigin {
    /// The README staged in the release directory.
    Readme,
    /// Synthesized placeholder text.
    Placeholder { description: String },
    /// A build output read from disk.
    Source { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedEntry {
    pub name: String,
    pub origin: EntryOrigin,
}

/// What a run would produce, computed without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackagePlan {
    pub release_dir: PathBuf,
    pub readme_path: PathBuf,
    pub archive_path: PathBuf,
    pub entries: Vec<PlannedEntry>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub archive_path: PathBuf,
    pub readme_path: PathBuf,
    /// README plus one per manifest entry.
    pub entry_count: usize,
    /// Entries filled with placeholder text.
    pub placeholders: Vec<String>,
    /// Entries packaged from build outputs.
    pub sourced: Vec<String>,
    pub created_at: String,
}

impl PackageReport {
    /// The three console lines printed after a run.
    pub fn summary_lines(&self) -> [String; 3] {
        let reminder = if self.placeholders.is_empty() {
            "🔄 All entries packaged from build outputs".to_string()
        } else {
            "🔄 Replace placeholder files with actual build outputs".to_string()
        };
        [
            format!(
                "✅ Release package created: {}",
                self.archive_path.display()
            ),
            format!("📦 Contains {} files", self.entry_count),
            reminder,
        ]
    }
}

/// Builds the release directory, README and archive described by a
/// [`ReleaseConfig`].
///
/// Paths in the config are relative to the base directory, which defaults to
/// the process working directory.
#[derive(Debug, Clone)]
pub struct Packager {
    config: ReleaseConfig,
    base_dir: Option<PathBuf>,
}

impl Packager {
    pub fn new(config: ReleaseConfig) -> Self {
        Self {
            config,
            base_dir: None,
        }
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn config(&self) -> &ReleaseConfig {
        &self.config
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn release_dir(&self) -> PathBuf {
        self.resolve(Path::new(&self.config.release_dir_name))
    }

    pub fn archive_path(&self) -> PathBuf {
        self.resolve(Path::new(&self.config.output_zip_name))
    }

    /// Validate the config and list the entries a run would write.
    pub fn plan(&self) -> PackageResult<PackagePlan> {
        self.config.validate()?;

        let release_dir = self.release_dir();
        let mut entries = Vec::with_capacity(self.config.manifest.len() + 1);
        entries.push(PlannedEntry {
            name: self.config.readme.name.clone(),
            origin: EntryOrigin::Readme,
        });
        for entry in &self.config.manifest {
            let origin = match &entry.source {
                Some(src) => EntryOrigin::Source {
                    path: self.resolve(src),
                },
                None => EntryOrigin::Placeholder {
                    description: entry.description.clone(),
                },
            };
            entries.push(PlannedEntry {
                name: entry.name.clone(),
                origin,
            });
        }

        Ok(PackagePlan {
            readme_path: release_dir.join(&self.config.readme.name),
            release_dir,
            archive_path: self.archive_path(),
            entries,
        })
    }

    fn readme_text(&self) -> PackageResult<String> {
        match &self.config.readme.file {
            Some(file) => {
                let path = self.resolve(file);
                std::fs::read_to_string(&path)
                    .map_err(|e| PackageError::fs(PackageStep::ReadReadmeSource, &path, e))
            }
            None => Ok(self.config.readme_text().to_string()),
        }
    }

    /// Stage the README and write the archive.
    ///
    /// The archive is written to a temporary file beside its final path and
    /// renamed into place only after every entry has been flushed. On error
    /// nothing is published; a previous archive at the same path is kept.
    pub fn run(&self) -> PackageResult<PackageReport> {
        let plan = self.plan()?;
        let config = &self.config;

        std::fs::create_dir_all(&plan.release_dir)
            .map_err(|e| PackageError::fs(PackageStep::CreateReleaseDir, &plan.release_dir, e))?;
        tracing::info!(path = %plan.release_dir.display(), "release directory ready");

        let text = self.readme_text()?;
        let readme_path = readme::write_readme(&plan.release_dir, &config.readme.name, &text)?;
        let readme_bytes = std::fs::read(&readme_path)
            .map_err(|e| PackageError::fs(PackageStep::ReadReadme, &readme_path, e))?;

        let archive_path = plan.archive_path;
        let mut out = AtomicFile::create(&archive_path)
            .map_err(|e| PackageError::fs(PackageStep::CreateArchive, &archive_path, e))?;

        let mut placeholders = Vec::new();
        let mut sourced = Vec::new();
        let entry_count = {
            let mut archive =
                ReleaseArchive::new(out.as_file_mut(), config.compression, config.compression_level);
            archive
                .add_entry(&config.readme.name, &readme_bytes)
                .map_err(|e| PackageError::archive(PackageStep::AddEntry, &archive_path, e))?;

            for entry in &config.manifest {
                let bytes = match &entry.source {
                    Some(src) => {
                        let path = self.resolve(src);
                        let bytes = std::fs::read(&path)
                            .map_err(|e| PackageError::fs(PackageStep::ReadSource, &path, e))?;
                        sourced.push(entry.name.clone());
                        bytes
                    }
                    None => {
                        placeholders.push(entry.name.clone());
                        placeholder_content(&entry.description).into_bytes()
                    }
                };
                archive
                    .add_entry(&entry.name, &bytes)
                    .map_err(|e| PackageError::archive(PackageStep::AddEntry, &archive_path, e))?;
                tracing::debug!(
                    entry = %entry.name,
                    bytes = bytes.len(),
                    placeholder = entry.is_placeholder(),
                    "entry added"
                );
            }

            let count = archive.entry_count();
            archive
                .finish()
                .map_err(|e| PackageError::archive(PackageStep::FinalizeArchive, &archive_path, e))?;
            count
        };

        out.commit()
            .map_err(|e| PackageError::fs(PackageStep::PublishArchive, &archive_path, e))?;
        tracing::info!(
            archive = %archive_path.display(),
            entries = entry_count,
            placeholders = placeholders.len(),
            "release package written"
        );

        Ok(PackageReport {
            archive_path,
            readme_path,
            entry_count,
            placeholders,
            sourced,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

/// Build the stock release in the current directory and print the summary.
///
/// Returns the archive path.
pub fn create_release_package() -> PackageResult<PathBuf> {
    let report = Packager::new(ReleaseConfig::default()).run()?;
    for line in report.summary_lines() {
        println!("{line}");
    }
    Ok(report.archive_path)
}
