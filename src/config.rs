use std::path::PathBuf;

// =============================================================================
// Version constants
// =============================================================================

/// Majors used to qualify bare-integer specifiers, in priority order
pub const SUPPORTED_MAJORS: &[u64] = &[1];

/// Specifier selecting the toolchain found on the PATH
pub const SYSTEM_VERSION: &str = "system";

/// Specifier selecting the greatest installed version
pub const LATEST_VERSION: &str = "latest";

/// Name of the toolchain binary looked up on the PATH
pub const GO_BINARY: &str = "go";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// goenv root directory holding `versions/` and `shims/`
    pub root: PathBuf,
    /// Enables debug logging
    pub debug: bool,
    pub supported_majors: Vec<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: root_dir_with_env(None, dirs::home_dir()),
            debug: false,
            supported_majors: SUPPORTED_MAJORS.to_vec(),
        }
    }
}

impl Config {
    /// Build the configuration from `GOENV_ROOT` and `GOENV_DEBUG`
    pub fn from_env() -> Self {
        Self::with_env(
            std::env::var("GOENV_ROOT").ok(),
            std::env::var("GOENV_DEBUG").ok(),
            dirs::home_dir(),
        )
    }

    fn with_env(
        goenv_root: Option<String>,
        goenv_debug: Option<String>,
        home_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            root: root_dir_with_env(goenv_root, home_dir),
            debug: goenv_debug.is_some_and(|v| !v.is_empty()),
            supported_majors: SUPPORTED_MAJORS.to_vec(),
        }
    }

    /// Directory holding one subdirectory per installed version
    pub fn versions_dir(&self) -> PathBuf {
        self.root.join("versions")
    }

    /// Directory holding goenv's shims, excluded when probing for system go
    pub fn shims_dir(&self) -> PathBuf {
        self.root.join("shims")
    }
}

/// Uses $GOENV_ROOT if set and non-empty, otherwise ~/.goenv,
/// or ./.goenv if no home directory is available.
fn root_dir_with_env(goenv_root: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    goenv_root
        .filter(|root| !root.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".goenv")))
        .unwrap_or_else(|| PathBuf::from(".goenv"))
}
