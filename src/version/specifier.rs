//! Classification of user-supplied version specifiers

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{LATEST_VERSION, SYSTEM_VERSION};

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(rc\d+)?$").expect("integer regex is valid"));

static MINOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+(rc\d+)?$").expect("minor regex is valid"));

static FULL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("full regex is valid"));

/// A version specifier classified by shape
///
/// Each variant except `Latest` and `System` keeps the trimmed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
    /// `latest`, or no specifier at all
    Latest,
    /// `system`
    System,
    /// Bare integer, optionally with an rc suffix: `1`, `23`, `23rc1`
    Integer(String),
    /// `major.minor`, optionally with an rc suffix: `1.23`, `1.23rc1`
    Minor(String),
    /// `major.minor.patch`: `1.23.4`
    Full(String),
    /// Anything else; never matches an installed version
    Unrecognized(String),
}

impl Specifier {
    /// Classify a raw specifier. Patterns are tried in a fixed priority
    /// order against the trimmed input.
    pub fn parse(raw: &str) -> Self {
        let spec = raw.trim();

        if spec.is_empty() || spec == LATEST_VERSION {
            Specifier::Latest
        } else if spec == SYSTEM_VERSION {
            Specifier::System
        } else if INTEGER_RE.is_match(spec) {
            Specifier::Integer(spec.to_string())
        } else if MINOR_RE.is_match(spec) {
            Specifier::Minor(spec.to_string())
        } else if FULL_RE.is_match(spec) {
            Specifier::Full(spec.to_string())
        } else {
            Specifier::Unrecognized(spec.to_string())
        }
    }

    /// The specifier as the user wrote it (trimmed)
    pub fn as_str(&self) -> &str {
        match self {
            Specifier::Latest => LATEST_VERSION,
            Specifier::System => SYSTEM_VERSION,
            Specifier::Integer(s)
            | Specifier::Minor(s)
            | Specifier::Full(s)
            | Specifier::Unrecognized(s) => s,
        }
    }
}
