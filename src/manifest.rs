use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::FigshareError;
use crate::utils::parse_file;

/// Default manifest location, relative to the working directory.
pub const MANIFEST_FILE: &str = "figshare_metadata.yaml";

/// Maps project numbers to the figshare article holding their data.
///
/// ```yaml
/// 3:
///   url: https://figshare.com/articles/dataset/cells/54321
///   path: proj3
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<u32, ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestEntry {
    pub url: String,
    pub path: PathBuf,
}

impl ManifestEntry {
    /// The figshare code, i.e. the last segment of the URL.
    pub fn code(&self) -> &str {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }

    /// Where the data is unpacked: `<path>/data`.
    pub fn data_dir(&self) -> PathBuf {
        self.path.join("data")
    }

    /// Where the project's code lives: `<path>/src`.
    pub fn src_dir(&self) -> PathBuf {
        self.path.join("src")
    }
}

impl Manifest {
    /// Reads and validates a JSON or YAML manifest.
    pub fn load(path: &Path) -> Result<Self, FigshareError> {
        let invalid = |reason: String| FigshareError::Manifest {
            path: path.to_path_buf(),
            reason,
        };

        let manifest: Manifest = parse_file(path).map_err(|e| invalid(e.to_string()))?;
        manifest.validate().map_err(invalid)?;

        Ok(manifest)
    }

    fn validate(&self) -> Result<(), String> {
        if self.entries.is_empty() {
            return Err("no projects listed".to_string());
        }

        for (index, entry) in &self.entries {
            if entry.code().is_empty() {
                return Err(format!("project {index} has no figshare code in '{}'", entry.url));
            }
        }

        Ok(())
    }

    pub fn get(&self, index: u32) -> Option<&ManifestEntry> {
        self.entries.get(&index)
    }

    /// Project numbers in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// Parses typed input into a project number listed in the manifest.
    pub fn parse_index(&self, input: &str) -> Result<(u32, &ManifestEntry), FigshareError> {
        let input = input.trim();
        let index = input
            .parse::<u32>()
            .map_err(|_| FigshareError::InvalidSelection(input.to_string()))?;

        self.get(index)
            .map(|entry| (index, entry))
            .ok_or_else(|| FigshareError::NotInManifest {
                index,
                available: self.describe_indices(),
            })
    }

    /// Comma separated project numbers, e.g. `0, 1, 3`.
    pub fn describe_indices(&self) -> String {
        self.indices()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
