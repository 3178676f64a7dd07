//! goenv root and collaborator test utilities

use std::cell::Cell;
use std::path::PathBuf;

use tempfile::TempDir;

use goenv_installed::config::SUPPORTED_MAJORS;
use goenv_installed::version::error::ListError;
use goenv_installed::version::lister::VersionLister;
use goenv_installed::version::probe::SystemProbe;
use goenv_installed::version::resolver::VersionResolver;

/// Lister returning a fixed list and counting calls
pub struct FakeLister {
    versions: Vec<String>,
    calls: Cell<usize>,
}

impl FakeLister {
    pub fn new(versions: &[&str]) -> Self {
        Self {
            versions: versions.iter().map(|v| v.to_string()).collect(),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl VersionLister for &FakeLister {
    fn list_installed(&self) -> Result<Vec<String>, ListError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.versions.clone())
    }
}

/// Probe with a fixed answer, counting calls
pub struct FakeProbe {
    system: Option<PathBuf>,
    calls: Cell<usize>,
}

impl FakeProbe {
    pub fn present() -> Self {
        Self {
            system: Some(PathBuf::from("/usr/local/go/bin/go")),
            calls: Cell::new(0),
        }
    }

    pub fn absent() -> Self {
        Self {
            system: None,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SystemProbe for &FakeProbe {
    fn find_system(&self) -> Option<PathBuf> {
        self.calls.set(self.calls.get() + 1);
        self.system.clone()
    }
}

/// Create a resolver over fixed versions with the default supported majors
pub fn test_resolver<'a>(
    lister: &'a FakeLister,
    probe: &'a FakeProbe,
) -> VersionResolver<&'a FakeLister, &'a FakeProbe> {
    VersionResolver::new(lister, probe, SUPPORTED_MAJORS.to_vec())
}

/// Create a goenv root with one directory per installed version
pub fn create_goenv_root(versions: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let versions_dir = temp_dir.path().join("versions");
    std::fs::create_dir_all(&versions_dir).unwrap();

    for version in versions {
        std::fs::create_dir(versions_dir.join(version)).unwrap();
    }

    temp_dir
}
