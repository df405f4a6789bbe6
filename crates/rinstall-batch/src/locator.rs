//! Manifest discovery

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::command::DEPENDENCY_DIR;
use crate::error::{BatchError, Result};

/// File that marks a directory as a package
pub const MANIFEST_FILE: &str = "package.json";

/// Finds every directory beneath a root that directly contains a manifest
///
/// Dependency trees (`node_modules`) and hidden (dot-prefixed) entries below
/// the root are pruned entirely, so nothing inside them is ever visited.
/// Results come back in depth-first pre-order with siblings sorted by file
/// name; the root itself, when it has a manifest, comes first.
#[derive(Debug, Clone)]
pub struct ManifestLocator {
    manifest: String,
    excluded_dir: String,
}

impl Default for ManifestLocator {
    fn default() -> Self {
        Self {
            manifest: MANIFEST_FILE.to_string(),
            excluded_dir: DEPENDENCY_DIR.to_string(),
        }
    }
}

impl ManifestLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locate manifest directories under `root`
    pub fn locate(&self, root: &Path) -> Result<Vec<PathBuf>> {
        info!("Scanning for {} under {:?}", self.manifest, root);

        if !root.is_dir() {
            return Err(BatchError::RootNotFound(root.to_path_buf()));
        }

        let mut dirs = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_pruned(entry.file_name()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(BatchError::Scan {
                        path: root.to_path_buf(),
                        source: e,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable path");
                    continue;
                }
            };

            if self.is_manifest(&entry) {
                if let Some(dir) = entry.path().parent() {
                    debug!("Found manifest in {:?}", dir);
                    dirs.push(dir.to_path_buf());
                }
            }
        }

        info!("Discovered {} package directories", dirs.len());
        Ok(dirs)
    }

    fn is_pruned(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        name.starts_with('.') || name == self.excluded_dir.as_str()
    }

    fn is_manifest(&self, entry: &DirEntry) -> bool {
        !entry.file_type().is_dir() && entry.file_name() == OsStr::new(&self.manifest)
    }
}

/// Drop `root` itself from a list of discovered directories
pub fn exclude_root(dirs: Vec<PathBuf>, root: &Path) -> Vec<PathBuf> {
    let root = normalize(root);
    dirs.into_iter()
        .filter(|dir| normalize(dir) != root)
        .collect()
}

fn normalize(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.components().collect())
}
