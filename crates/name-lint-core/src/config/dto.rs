//! Deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization of the user's rule
//! list. They are converted to domain rules via the loader. Field names
//! follow the camelCase configuration surface.

use crate::format::{PredefinedFormat, UnderscorePolicy};
use crate::modifier::{Modifier, TypeModifier};
use crate::selector::RuleSelector;
use serde::Deserialize;

/// Raw representation of one rule entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleDto {
    /// Target selector, a single name or a list of names.
    pub selector: SelectorListDto,

    /// Modifiers that must all hold for a match.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,

    /// Type modifiers that must all hold for a match.
    #[serde(default)]
    pub types: Vec<TypeModifier>,

    /// Name filter: exact pattern string or `{match, regex}` object.
    #[serde(default)]
    pub filter: Option<FilterDto>,

    /// Allowed case styles; `null` disables the format check.
    #[serde(default)]
    pub format: Option<Vec<PredefinedFormat>>,

    /// Custom regex constraint on the stripped name.
    #[serde(default)]
    pub custom: Option<MatchRegexDto>,

    /// Leading underscore policy.
    #[serde(default)]
    pub leading_underscore: Option<UnderscorePolicy>,

    /// Trailing underscore policy.
    #[serde(default)]
    pub trailing_underscore: Option<UnderscorePolicy>,

    /// Allowed prefixes.
    #[serde(default)]
    pub prefix: Vec<String>,

    /// Allowed suffixes.
    #[serde(default)]
    pub suffix: Vec<String>,

    /// Overriding failure message.
    #[serde(default)]
    pub failure_message: Option<String>,
}

/// A selector field: one selector name or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SelectorListDto {
    /// A single selector name.
    Single(RuleSelector),
    /// A list of selector names.
    Many(Vec<RuleSelector>),
}

impl SelectorListDto {
    /// Flattens to a list of selectors.
    #[must_use]
    pub fn into_vec(self) -> Vec<RuleSelector> {
        match self {
            Self::Single(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

/// A filter: a bare pattern string implies `match: true`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilterDto {
    /// Pattern that names must match.
    Pattern(String),
    /// Explicit pattern with polarity.
    Regex(MatchRegexDto),
}

/// A regex with explicit match polarity.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchRegexDto {
    /// `true` requires a match, `false` forbids one.
    #[serde(rename = "match")]
    pub expect_match: bool,
    /// The regex source.
    pub regex: String,
}

/// Root document for TOML configuration: a `[[rules]]` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesDto {
    /// The ordered rule entries.
    #[serde(default)]
    pub rules: Vec<RuleDto>,
}
