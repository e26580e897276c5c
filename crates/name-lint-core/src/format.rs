//! Predefined case-style predicates and underscore policies.
//!
//! Every predicate is a pure function over a name that has already had its
//! leading/trailing underscores and affixes stripped by the verdict engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named case-style validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredefinedFormat {
    /// First character lowercase, no underscores.
    #[serde(rename = "camelCase")]
    CamelCase,
    /// camelCase with single-letter uppercase humps only.
    #[serde(rename = "strictCamelCase")]
    StrictCamelCase,
    /// First character uppercase, no underscores.
    #[serde(rename = "PascalCase")]
    PascalCase,
    /// PascalCase with single-letter uppercase humps only.
    #[serde(rename = "StrictPascalCase")]
    StrictPascalCase,
    /// Lowercase words joined by single underscores.
    #[serde(rename = "snake_case")]
    SnakeCase,
    /// Uppercase words joined by single underscores.
    #[serde(rename = "UPPER_CASE")]
    UpperCase,
}

impl PredefinedFormat {
    /// Returns the configuration-facing name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::StrictCamelCase => "strictCamelCase",
            Self::PascalCase => "PascalCase",
            Self::StrictPascalCase => "StrictPascalCase",
            Self::SnakeCase => "snake_case",
            Self::UpperCase => "UPPER_CASE",
        }
    }

    /// Tests whether a name satisfies this case style.
    ///
    /// The empty string satisfies every style: after affix stripping there
    /// may be nothing left to constrain.
    #[must_use]
    pub fn is_match(self, name: &str) -> bool {
        if name.is_empty() {
            return true;
        }
        match self {
            Self::CamelCase => is_camel_case(name),
            Self::StrictCamelCase => is_strict_camel_case(name),
            Self::PascalCase => is_pascal_case(name),
            Self::StrictPascalCase => is_strict_pascal_case(name),
            Self::SnakeCase => is_snake_case(name),
            Self::UpperCase => is_upper_case(name),
        }
    }
}

impl fmt::Display for PredefinedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn first_char(name: &str) -> char {
    // Callers guarantee non-empty.
    name.chars().next().unwrap_or('\0')
}

fn is_camel_case(name: &str) -> bool {
    !first_char(name).is_uppercase() && !name.contains('_')
}

fn is_pascal_case(name: &str) -> bool {
    !first_char(name).is_lowercase() && !name.contains('_')
}

fn is_strict_camel_case(name: &str) -> bool {
    !first_char(name).is_uppercase() && has_strict_humps(name, false)
}

fn is_strict_pascal_case(name: &str) -> bool {
    !first_char(name).is_lowercase() && has_strict_humps(name, true)
}

/// Checks that uppercase characters appear only as single-letter humps.
/// `first_upper` is whether the first character counts as an uppercase hump.
fn has_strict_humps(name: &str, first_upper: bool) -> bool {
    if name.starts_with('_') {
        return false;
    }
    let mut prev_upper = first_upper;
    for c in name.chars().skip(1) {
        if c == '_' {
            return false;
        }
        let upper = c.is_uppercase();
        if upper == prev_upper {
            if upper {
                return false;
            }
        } else {
            prev_upper = upper;
        }
    }
    true
}

fn is_snake_case(name: &str) -> bool {
    name.chars().all(|c| !c.is_uppercase()) && has_valid_separators(name)
}

fn is_upper_case(name: &str) -> bool {
    name.chars().all(|c| !c.is_lowercase()) && has_valid_separators(name)
}

/// Underscores must be single, interior separators.
fn has_valid_separators(name: &str) -> bool {
    if name.starts_with('_') {
        return false;
    }
    let mut was_underscore = false;
    for c in name.chars().skip(1) {
        if c == '_' {
            if was_underscore {
                return false;
            }
            was_underscore = true;
        } else {
            was_underscore = false;
        }
    }
    !was_underscore
}

/// Policy for leading or trailing underscores on a name.
///
/// Policies that accept an underscore also strip it before the remaining
/// checks run; an unset policy neither checks nor strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnderscorePolicy {
    /// No underscore permitted at this position.
    Forbid,
    /// Exactly one underscore required; stripped when present.
    Require,
    /// A double underscore required; stripped when present.
    RequireDouble,
    /// One underscore tolerated and stripped when present.
    Allow,
    /// A double underscore tolerated and stripped when present.
    AllowDouble,
    /// A double underscore stripped when present, otherwise a single one.
    AllowSingleOrDouble,
}

impl UnderscorePolicy {
    /// Returns the configuration-facing name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forbid => "forbid",
            Self::Require => "require",
            Self::RequireDouble => "requireDouble",
            Self::Allow => "allow",
            Self::AllowDouble => "allowDouble",
            Self::AllowSingleOrDouble => "allowSingleOrDouble",
        }
    }
}

impl fmt::Display for UnderscorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
