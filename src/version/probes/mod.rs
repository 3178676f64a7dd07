//! System toolchain probe implementations

pub mod path;

pub use path::PathSystemProbe;
