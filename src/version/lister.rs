//! Lister trait for fetching the installed version strings

#[cfg(test)]
use mockall::automock;

use crate::version::error::ListError;

/// Trait for listing the versions installed by goenv
#[cfg_attr(test, automock)]
pub trait VersionLister {
    /// Returns every installed version string, in no particular order
    fn list_installed(&self) -> Result<Vec<String>, ListError>;
}
