//! Probe trait for locating a system-provided Go toolchain

use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

/// Trait for finding the toolchain used under the `system` version context
#[cfg_attr(test, automock)]
pub trait SystemProbe {
    /// Returns the path of the system `go` binary, if one is on the PATH
    fn find_system(&self) -> Option<PathBuf>;
}
