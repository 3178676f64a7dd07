//! Version-aware ordering for installed Go version strings
//!
//! Versions are compared numerically component by component, so `1.20.10`
//! sorts after `1.20.9`. A missing component orders lowest (`1.23` < `1.23.0`)
//! and a release candidate orders before the final release with the same
//! numeric components (`1.23rc2` < `1.23`).

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)*)(?:rc(\d*))?$").expect("version regex is valid")
});

/// Release stage of a version
///
/// Declaration order is significant: every release candidate orders before
/// the final release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// `rcN`; a bare `rc` suffix carries no number and orders first
    ReleaseCandidate(Option<u64>),
    Final,
}

/// A parsed Go version such as `1.21.0`, `1.23` or `1.23rc1`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GoVersion {
    components: Vec<u64>,
    stage: Stage,
}

impl GoVersion {
    /// Parse a version string, returning None if it is not a dotted numeric
    /// version with an optional `rcN` suffix.
    ///
    /// Examples:
    /// - "1" -> [1], Final
    /// - "1.23.4" -> [1, 23, 4], Final
    /// - "1.23rc1" -> [1, 23], ReleaseCandidate(Some(1))
    pub fn parse(version: &str) -> Option<Self> {
        let caps = VERSION_RE.captures(version)?;

        let components = caps[1]
            .split('.')
            .map(|part| part.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;

        let stage = match caps.get(2) {
            None => Stage::Final,
            Some(m) if m.as_str().is_empty() => Stage::ReleaseCandidate(None),
            Some(m) => Stage::ReleaseCandidate(Some(m.as_str().parse().ok()?)),
        };

        Some(Self { components, stage })
    }
}

/// Compare two version strings version-aware
///
/// Strings that do not parse order before every parsed version and compare
/// lexicographically among themselves.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (GoVersion::parse(a), GoVersion::parse(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// Sort version strings ascending, version-aware
pub fn sort_versions(versions: &mut [String]) {
    versions.sort_by(|a, b| compare_versions(a, b));
}
