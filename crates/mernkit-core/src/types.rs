use crate::error::{MernkitError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap())
}

fn validate_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !name_re().is_match(trimmed) {
        return Err(MernkitError::InvalidName(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Name of the directory a new scaffold is rooted at.
///
/// Trimmed on parse; must be usable verbatim as a single path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: &str) -> Result<Self> {
        validate_name(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a vertical slice (model/controller/router triplet).
///
/// Doubles as a path-naming token and as the substitution parameter for
/// generated identifiers, so the same character rule as [`ProjectName`] applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureName(String);

impl FeatureName {
    pub fn parse(raw: &str) -> Result<Self> {
        validate_name(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in ["demo", "my-app", "shop_v2", "Api.Server", "x"] {
            ProjectName::parse(name).unwrap_or_else(|_| panic!("expected valid: {name}"));
            FeatureName::parse(name).unwrap_or_else(|_| panic!("expected valid: {name}"));
        }
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(ProjectName::parse("  demo  ").unwrap().as_str(), "demo");
        assert_eq!(FeatureName::parse(" user ").unwrap().as_str(), "user");
    }

    #[test]
    fn invalid_names() {
        for name in ["", "   ", "\t", "has space", "a/b", "../up", ".hidden", "-lead"] {
            assert!(ProjectName::parse(name).is_err(), "expected invalid: {name}");
            assert!(FeatureName::parse(name).is_err(), "expected invalid: {name}");
        }
    }
}
