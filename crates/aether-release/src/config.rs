//! Packaging configuration.
//!
//! `ReleaseConfig::default()` reproduces the stock Aether release. A YAML
//! file can override any field; missing fields keep their defaults and
//! unknown keys are rejected.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::manifest::ReleaseManifest;
use crate::readme::DEFAULT_README;

pub const DEFAULT_OUTPUT_ZIP_NAME: &str = "Aether-Release-v1.0.zip";
pub const DEFAULT_RELEASE_DIR_NAME: &str = "release";
pub const DEFAULT_README_NAME: &str = "README.txt";

/// Stock manifest: name and description of each shipped artifact.
pub const DEFAULT_MANIFEST: &[(&str, &str)] = &[
    ("AetherSetup.exe", "Setup wizard executable"),
    ("AetherGUI.dll", "Native GUI library"),
    ("aether_backend.dll", "Security backend library"),
    ("AetherGUI.pdb", "GUI debug symbols"),
    ("aether_backend.pdb", "Backend debug symbols"),
];

/// Compression method applied to every archive entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

/// Where the README text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadmeConfig {
    /// File name inside the release directory and inside the archive.
    pub name: String,
    /// Inline text. Mutually exclusive with `file`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Path of a file whose contents become the README.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_README_NAME.to_string(),
            text: None,
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    pub output_zip_name: String,
    pub release_dir_name: String,
    pub readme: ReadmeConfig,
    pub compression: Compression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<i64>,
    pub manifest: ReleaseManifest,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        let manifest = ReleaseManifest::from_static(DEFAULT_MANIFEST);
        Self {
            output_zip_name: DEFAULT_OUTPUT_ZIP_NAME.to_string(),
            release_dir_name: DEFAULT_RELEASE_DIR_NAME.to_string(),
            readme: ReadmeConfig::default(),
            compression: Compression::default(),
            compression_level: None,
            manifest,
        }
    }
}

impl ReleaseConfig {
    /// Stock configuration with a custom manifest.
    pub fn with_manifest(manifest: ReleaseManifest) -> Self {
        Self {
            manifest,
            ..Self::default()
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Bind a build output file to an existing manifest entry.
    pub fn with_source(mut self, name: &str, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        self.manifest.set_source(name, path)?;
        Ok(self)
    }

    /// Inline README text used unless `readme.file` is set.
    pub fn readme_text(&self) -> &str {
        self.readme.text.as_deref().unwrap_or(DEFAULT_README)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_file_name("output_zip_name", &self.output_zip_name)?;
        check_file_name("release_dir_name", &self.release_dir_name)?;
        if self.output_zip_name == self.release_dir_name {
            return Err(ConfigError::Invalid {
                field: "output_zip_name",
                reason: format!("collides with release_dir_name '{}'", self.release_dir_name),
            });
        }
        crate::manifest::validate_entry_name(&self.readme.name).map_err(|e| {
            ConfigError::Invalid {
                field: "readme.name",
                reason: e.to_string(),
            }
        })?;

        if self.readme.text.is_some() && self.readme.file.is_some() {
            return Err(ConfigError::Invalid {
                field: "readme",
                reason: "'text' and 'file' are mutually exclusive".into(),
            });
        }

        if let Some(level) = self.compression_level {
            if self.compression == Compression::Stored {
                return Err(ConfigError::Invalid {
                    field: "compression_level",
                    reason: "not applicable to stored entries".into(),
                });
            }
            // Deflate has no level 0; use `compression: stored` instead.
            if !(1..=9).contains(&level) {
                return Err(ConfigError::Invalid {
                    field: "compression_level",
                    reason: format!("{level} is outside 1..=9"),
                });
            }
        }

        self.manifest.validate(&self.readme.name)
    }
}

/// Output and staging names are plain file names in the base directory.
fn check_file_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    };
    if value.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if value == "." || value == ".." {
        return Err(invalid("must name a file, not a directory reference"));
    }
    if value.contains('/') || value.contains('\\') {
        return Err(invalid("must be a plain file name without separators"));
    }
    Ok(())
}
