//! Version specifier resolution
//!
//! Resolves a specifier against the installed versions in stages, returning
//! at the first stage that finds a match:
//!
//! 1. `system`: succeeds iff a system toolchain is on the PATH
//! 2. `latest` (or no specifier): greatest installed version
//! 3. bare integer (`1`, `23`, `23rc1`): qualified by each supported major
//! 4. minor (`1.23`, `1.23rc1`): greatest patch or release candidate
//! 5. full (`1.23.4`): exact match
//!
//! The installed versions are fetched at most once per resolution and the
//! probe is only consulted for `system`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::SYSTEM_VERSION;
use crate::version::error::{ListError, ResolveError};
use crate::version::installed::InstalledVersions;
use crate::version::lister::VersionLister;
use crate::version::probe::SystemProbe;
use crate::version::specifier::Specifier;

static RC_MINOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.\d+rc)\d+$").expect("rc minor regex is valid"));

/// Resolves specifiers using a version lister and a system probe
pub struct VersionResolver<L, P> {
    lister: L,
    probe: P,
    supported_majors: Vec<u64>,
}

impl<L: VersionLister, P: SystemProbe> VersionResolver<L, P> {
    pub fn new(lister: L, probe: P, supported_majors: Vec<u64>) -> Self {
        Self {
            lister,
            probe,
            supported_majors,
        }
    }

    /// Resolve a raw specifier to an installed version, or `system`
    pub fn resolve(&self, raw: &str) -> Result<String, ResolveError> {
        let specifier = Specifier::parse(raw);
        debug!("Resolving {:?}", specifier);

        resolve(
            &specifier,
            &self.supported_majors,
            || self.installed(),
            || match self.probe.find_system() {
                Some(path) => {
                    debug!("Using system go at {:?}", path);
                    true
                }
                None => false,
            },
        )
    }

    /// Snapshot of the installed versions, sorted ascending
    pub fn installed(&self) -> Result<InstalledVersions, ListError> {
        self.lister.list_installed().map(InstalledVersions::new)
    }
}

/// Resolve a classified specifier
///
/// `fetch_installed` and `system_present` are each called at most once:
/// the former for every specifier except `system`, the latter only for
/// `system`.
pub fn resolve<F, S>(
    specifier: &Specifier,
    supported_majors: &[u64],
    fetch_installed: F,
    system_present: S,
) -> Result<String, ResolveError>
where
    F: FnOnce() -> Result<InstalledVersions, ListError>,
    S: FnOnce() -> bool,
{
    if *specifier == Specifier::System {
        return if system_present() {
            Ok(SYSTEM_VERSION.to_string())
        } else {
            Err(ResolveError::SystemNotFound)
        };
    }

    let installed = fetch_installed()?;

    if *specifier == Specifier::Latest {
        return installed
            .latest()
            .map(str::to_string)
            .ok_or(ResolveError::NoVersionsInstalled);
    }

    find_match(specifier, supported_majors, &installed)?
        .map(str::to_string)
        .ok_or_else(|| ResolveError::VersionNotInstalled(specifier.as_str().to_string()))
}

/// Run the integer, minor and full stages in order
fn find_match<'a>(
    specifier: &Specifier,
    supported_majors: &[u64],
    installed: &'a InstalledVersions,
) -> Result<Option<&'a str>, regex::Error> {
    if let Specifier::Integer(spec) = specifier {
        for major in supported_majors {
            let found = if *spec == major.to_string() {
                latest_major(installed, *major)?
            } else {
                latest_minor(installed, &format!("{major}.{spec}"))?
            };

            if found.is_some() {
                debug!("Integer specifier {} matched under major {}", spec, major);
                return Ok(found);
            }
        }
    }

    if let Specifier::Minor(spec) = specifier {
        if let Some(found) = latest_minor(installed, spec)? {
            return Ok(Some(found));
        }
    }

    if let Specifier::Full(spec) = specifier {
        if let Some(found) = installed.get(spec) {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// Greatest `major.minor.patch` release of the given major
///
/// Release candidates and partial versions never match.
fn latest_major(
    installed: &InstalledVersions,
    major: u64,
) -> Result<Option<&str>, regex::Error> {
    let pattern = Regex::new(&format!(r"^{major}\.\d+\.\d+$"))?;
    Ok(installed.latest_matching(&pattern))
}

/// Greatest version of a minor, or of a release candidate family
///
/// `1.23rc1` searches the `1.23rc` family (`1.23rc`, `1.23rc2`, ...);
/// `1.23` searches `1.23`, `1.23.N` and, literally, `1.23N`.
fn latest_minor<'a>(
    installed: &'a InstalledVersions,
    query: &str,
) -> Result<Option<&'a str>, regex::Error> {
    let prefix = RC_MINOR_RE
        .captures(query)
        .and_then(|caps| caps.get(1))
        .map_or(query, |m| m.as_str());

    let pattern = Regex::new(&format!(r"^{}\.?(\d+)?$", regex::escape(prefix)))?;
    let found = installed.latest_matching(&pattern);
    debug!("Latest for prefix {}: {:?}", prefix, found);
    Ok(found)
}
