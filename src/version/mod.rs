//! Version resolution layer
//!
//! Resolves a user-supplied Go version specifier against the versions
//! installed by goenv.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Lister    │────▶│  Installed  │◀────│  Resolver   │
//! │  (fetch)    │     │ (snapshot)  │     │  (stages)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                          ┌─────────────────────┼─────────────┐
//!                          ▼                     ▼             ▼
//!                   ┌─────────────┐     ┌─────────────┐ ┌─────────────┐
//!                   │  Specifier  │     │ GoVersion   │ │    Probe    │
//!                   │ (classify)  │     │ (ordering)  │ │  (system)   │
//!                   └─────────────┘     └─────────────┘ └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types for listing and resolution
//! - [`go_version`]: Version-aware ordering of installed version strings
//! - [`installed`]: Sorted snapshot of the installed versions
//! - [`lister`]: Trait for listing installed versions
//! - [`listers`]: Concrete listers (versions directory)
//! - [`probe`]: Trait for locating a system toolchain
//! - [`probes`]: Concrete probes (PATH search)
//! - [`resolver`]: Specifier resolution stages
//! - [`specifier`]: Specifier classification

pub mod error;
pub mod go_version;
pub mod installed;
pub mod lister;
pub mod listers;
pub mod probe;
pub mod probes;
pub mod resolver;
pub mod specifier;
