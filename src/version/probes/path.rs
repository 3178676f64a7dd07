//! PATH-based system toolchain probe

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::GO_BINARY;
use crate::version::probe::SystemProbe;

/// Searches PATH for the `go` binary, ignoring goenv's own shims
///
/// Skipping the shims directory is what distinguishes a system toolchain
/// from one goenv would dispatch to.
pub struct PathSystemProbe {
    path: Option<OsString>,
    shims_dir: PathBuf,
    cwd: PathBuf,
}

impl PathSystemProbe {
    pub fn new(
        path: Option<OsString>,
        shims_dir: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            path,
            shims_dir: shims_dir.into(),
            cwd: cwd.into(),
        }
    }

    /// Probe using the current process PATH and working directory
    pub fn from_env(shims_dir: impl Into<PathBuf>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(std::env::var_os("PATH"), shims_dir, cwd)
    }

    /// PATH with every entry pointing at the shims directory removed
    fn search_path(&self) -> Option<OsString> {
        let path = self.path.as_ref()?;
        let entries = std::env::split_paths(path).filter(|p| !same_dir(p, &self.shims_dir));
        std::env::join_paths(entries).ok()
    }
}

impl SystemProbe for PathSystemProbe {
    fn find_system(&self) -> Option<PathBuf> {
        let search_path = self.search_path()?;
        match which::which_in(GO_BINARY, Some(search_path), &self.cwd) {
            Ok(found) => {
                debug!("System go found at {:?}", found);
                Some(found)
            }
            Err(e) => {
                debug!("No system go on PATH: {}", e);
                None
            }
        }
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write_executable(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn join(dirs: &[&Path]) -> Option<OsString> {
        Some(std::env::join_paths(dirs).unwrap())
    }

    #[test]
    fn find_system_returns_go_outside_shims() {
        let temp_dir = TempDir::new().unwrap();
        let shims = temp_dir.path().join("shims");
        let bin = temp_dir.path().join("bin");
        std::fs::create_dir_all(&shims).unwrap();
        std::fs::create_dir_all(&bin).unwrap();
        write_executable(&shims, "go");
        let expected = write_executable(&bin, "go");

        let search = join(&[shims.as_path(), bin.as_path()]);
        let probe = PathSystemProbe::new(search, &shims, temp_dir.path());

        assert_eq!(probe.find_system(), Some(expected));
    }

    #[test]
    fn find_system_ignores_go_in_shims_only() {
        let temp_dir = TempDir::new().unwrap();
        let shims = temp_dir.path().join("shims");
        std::fs::create_dir_all(&shims).unwrap();
        write_executable(&shims, "go");

        let probe = PathSystemProbe::new(join(&[shims.as_path()]), &shims, temp_dir.path());

        assert_eq!(probe.find_system(), None);
    }

    #[test]
    fn find_system_returns_none_without_path() {
        let temp_dir = TempDir::new().unwrap();

        let probe = PathSystemProbe::new(None, temp_dir.path().join("shims"), temp_dir.path());

        assert_eq!(probe.find_system(), None);
    }
}
