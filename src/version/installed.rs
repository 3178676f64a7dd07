//! Snapshot of the installed versions for a single resolution

use regex::Regex;

use crate::version::go_version::sort_versions;

/// Installed version strings, sorted ascending version-aware on construction
///
/// The snapshot is read-only; every lookup scans the same sorted list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledVersions {
    sorted: Vec<String>,
}

impl InstalledVersions {
    pub fn new(mut versions: Vec<String>) -> Self {
        sort_versions(&mut versions);
        Self { sorted: versions }
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Versions in ascending order
    pub fn as_slice(&self) -> &[String] {
        &self.sorted
    }

    /// Greatest installed version
    pub fn latest(&self) -> Option<&str> {
        self.sorted.last().map(String::as_str)
    }

    /// Greatest installed version whose whole string matches `pattern`
    ///
    /// The pattern is expected to be anchored by the caller.
    pub fn latest_matching(&self, pattern: &Regex) -> Option<&str> {
        self.sorted
            .iter()
            .rev()
            .find(|v| pattern.is_match(v))
            .map(String::as_str)
    }

    /// The installed entry equal to `version`
    pub fn get(&self, version: &str) -> Option<&str> {
        self.sorted
            .iter()
            .find(|v| *v == version)
            .map(String::as_str)
    }
}
