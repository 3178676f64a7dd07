//! Lister backed by the `versions` directory under the goenv root

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::version::error::ListError;
use crate::version::lister::VersionLister;

/// Lists every directory under `<root>/versions` as an installed version
pub struct VersionsDirLister {
    dir: PathBuf,
}

impl VersionsDirLister {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl VersionLister for VersionsDirLister {
    fn list_installed(&self) -> Result<Vec<String>, ListError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Versions directory {:?} does not exist", self.dir);
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(ListError::ReadDir {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut versions = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", self.dir, e);
                    continue;
                }
            };

            // Follows symlinks, so linked toolchains count as installed
            if !entry.path().is_dir() {
                continue;
            }

            let Ok(name) = entry.file_name().into_string() else {
                warn!("Skipping non UTF-8 entry {:?}", entry.file_name());
                continue;
            };

            if name.starts_with('.') {
                continue;
            }

            versions.push(name);
        }

        debug!("Found {} installed versions in {:?}", versions.len(), self.dir);
        Ok(versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_installed_returns_directory_names() {
        let temp_dir = TempDir::new().unwrap();
        for version in ["1.20.9", "1.21.0", "1.22rc1"] {
            std::fs::create_dir(temp_dir.path().join(version)).unwrap();
        }

        let lister = VersionsDirLister::new(temp_dir.path());
        let mut versions = lister.list_installed().unwrap();
        versions.sort();

        assert_eq!(versions, vec!["1.20.9", "1.21.0", "1.22rc1"]);
    }

    #[test]
    fn list_installed_skips_files_and_hidden_entries() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("1.21.0")).unwrap();
        std::fs::create_dir(temp_dir.path().join(".cache")).unwrap();
        std::fs::write(temp_dir.path().join("README"), "not a version").unwrap();

        let lister = VersionsDirLister::new(temp_dir.path());

        assert_eq!(lister.list_installed().unwrap(), vec!["1.21.0"]);
    }

    #[test]
    fn list_installed_returns_empty_when_directory_missing() {
        let temp_dir = TempDir::new().unwrap();
        let lister = VersionsDirLister::new(temp_dir.path().join("versions"));

        assert!(lister.list_installed().unwrap().is_empty());
    }

    #[test]
    fn list_installed_fails_when_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("versions");
        std::fs::write(&file, "").unwrap();

        let lister = VersionsDirLister::new(&file);

        assert!(matches!(
            lister.list_installed(),
            Err(ListError::ReadDir { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn list_installed_follows_symlinked_versions() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("go-src");
        let versions_dir = temp_dir.path().join("versions");
        std::fs::create_dir(&target).unwrap();
        std::fs::create_dir(&versions_dir).unwrap();
        std::os::unix::fs::symlink(&target, versions_dir.join("1.21.0")).unwrap();

        let lister = VersionsDirLister::new(&versions_dir);

        assert_eq!(lister.list_installed().unwrap(), vec!["1.21.0"]);
    }
}
