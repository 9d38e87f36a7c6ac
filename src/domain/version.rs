//! Release tag validation

use crate::error::{KustagError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Regex for valid image tags: the OCI tag grammar with an optional leading
/// 'v'. This charset contains no shell metacharacters, so a validated tag can
/// never smuggle anything into downstream tooling.
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^v?[A-Za-z0-9_][A-Za-z0-9._-]{0,127}$").unwrap())
}

/// A validated container image tag, e.g. "1.2.3" or "v2.0.0-rc.1"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    /// Validate a raw version string into a tag. Fails with `InvalidVersion`
    /// on empty input or characters outside the tag grammar.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !tag_regex().is_match(trimmed) {
            return Err(KustagError::InvalidVersion(input.to_string()));
        }
        Ok(ReleaseTag(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReleaseTag {
    type Err = KustagError;

    fn from_str(s: &str) -> Result<Self> {
        ReleaseTag::parse(s)
    }
}
