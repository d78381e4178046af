//! Release manifest: the ordered set of named archive entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// One named entry of the release archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Archive-relative path, kept literally.
    pub name: String,
    /// Human-readable description, used for placeholder text.
    pub description: String,
    /// Build output to package. Absent means a placeholder is synthesized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl ManifestEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }
}

/// Placeholder text standing in for a build output that is not available yet.
pub fn placeholder_content(description: &str) -> String {
    format!("# {description}\n# This is a placeholder - replace with actual build output\n")
}

/// Ordered mapping from entry name to entry.
///
/// Insertion order is archive order. Uniqueness is enforced by [`push`] and
/// re-checked by [`validate`] for manifests that came in through serde.
///
/// [`push`]: ReleaseManifest::push
/// [`validate`]: ReleaseManifest::validate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseManifest {
    entries: Vec<ManifestEntry>,
}

impl ReleaseManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Manifest from a compiled-in list. Names there are trusted;
    /// [`validate`](ReleaseManifest::validate) still runs before any packaging.
    pub(crate) fn from_static(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(name, description)| ManifestEntry::new(*name, *description))
                .collect(),
        }
    }

    /// Build a manifest from `(name, description)` pairs.
    pub fn from_pairs<I, N, D>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<String>,
    {
        let mut manifest = Self::new();
        for (name, description) in pairs {
            manifest.push(ManifestEntry::new(name, description))?;
        }
        Ok(manifest)
    }

    /// Append an entry, rejecting invalid or duplicate names.
    pub fn push(&mut self, entry: ManifestEntry) -> Result<(), ConfigError> {
        validate_entry_name(&entry.name)?;
        if self.get(&entry.name).is_some() {
            return Err(ConfigError::DuplicateEntry { name: entry.name });
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Bind a build output to an existing entry.
    pub fn set_source(&mut self, name: &str, source: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| ConfigError::UnknownEntry {
                name: name.to_string(),
            })?;
        entry.source = Some(source.into());
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every name and reject duplicates and collisions with `reserved`
    /// (the README entry name).
    pub fn validate(&self, reserved: &str) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        seen.insert(reserved);
        for entry in &self.entries {
            validate_entry_name(&entry.name)?;
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateEntry {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ReleaseManifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Archive entry names are relative, forward-slash paths without `..`.
pub(crate) fn validate_entry_name(name: &str) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidEntryName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.starts_with('/') || Path::new(name).is_absolute() {
        return Err(invalid("absolute paths are not allowed"));
    }
    if name.contains('\\') {
        return Err(invalid("backslashes are not allowed, use '/'"));
    }
    if name.ends_with('/') {
        return Err(invalid("name must not end with '/'"));
    }
    if name.split('/').any(|c| c == "..") {
        return Err(invalid("parent directory components are not allowed"));
    }
    if name.split('/').any(str::is_empty) {
        return Err(invalid("empty path component"));
    }
    Ok(())
}
