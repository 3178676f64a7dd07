use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Failed to read versions directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("system version not found in PATH")]
    SystemNotFound,

    #[error("no versions installed")]
    NoVersionsInstalled,

    #[error("version '{0}' not installed")]
    VersionNotInstalled(String),

    #[error(transparent)]
    List(#[from] ListError),

    #[error("Invalid version pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ResolveError {
    /// Stable identifier of the failure kind, used for structured output
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::SystemNotFound => "system_not_found",
            ResolveError::NoVersionsInstalled => "no_versions_installed",
            ResolveError::VersionNotInstalled(_) => "version_not_installed",
            ResolveError::List(_) => "list_failed",
            ResolveError::Pattern(_) => "invalid_pattern",
        }
    }
}
