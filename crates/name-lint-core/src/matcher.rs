//! Regex patterns with explicit match polarity.

use crate::error::ConfigError;
use regex::Regex;

/// A validated regex pattern with a match/no-match polarity.
///
/// The regex is compiled once at construction and reused for all calls.
/// With polarity `true` a name must match the pattern to be satisfied;
/// with polarity `false` it must not.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    raw: String,
    expect_match: bool,
    compiled: Regex,
}

impl MatchPattern {
    /// Creates a new match pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegex`] if the pattern does not
    /// compile. `context` names the configuration field for the error
    /// message.
    pub fn new(pattern: &str, expect_match: bool, context: &str) -> Result<Self, ConfigError> {
        let compiled = Regex::new(pattern).map_err(|e| ConfigError::InvalidRegex {
            context: context.to_string(),
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            raw: pattern.to_string(),
            expect_match,
            compiled,
        })
    }

    /// Tests whether a name satisfies this pattern's polarity.
    #[must_use]
    pub fn is_satisfied_by(&self, name: &str) -> bool {
        self.compiled.is_match(name) == self.expect_match
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the polarity: `true` means the name must match.
    #[must_use]
    pub fn expects_match(&self) -> bool {
        self.expect_match
    }
}

impl PartialEq for MatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.expect_match == other.expect_match
    }
}

impl Eq for MatchPattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_polarity_requires_match() {
        let p = MatchPattern::new("^I[A-Z]", true, "test").unwrap();
        assert!(p.is_satisfied_by("IUser"));
        assert!(!p.is_satisfied_by("User"));
    }

    #[test]
    fn negative_polarity_forbids_match() {
        let p = MatchPattern::new("^I[A-Z]", false, "test").unwrap();
        assert!(!p.is_satisfied_by("IUser"));
        assert!(p.is_satisfied_by("User"));
        assert!(p.is_satisfied_by("Item")); // `It` is not `I` + uppercase
    }

    #[test]
    fn invalid_regex_rejected_with_context() {
        let err = MatchPattern::new("te(st", true, "rules[1].filter").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegex { .. }));
        assert!(err.to_string().contains("rules[1].filter"));
    }
}
