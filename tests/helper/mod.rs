//! Shared helpers for integration tests

#![allow(dead_code)]

mod goenv;

pub use goenv::{FakeLister, FakeProbe, create_goenv_root, test_resolver};
