//! Installed-version lister implementations

pub mod versions_dir;

pub use versions_dir::VersionsDirLister;
