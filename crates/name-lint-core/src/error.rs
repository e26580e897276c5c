//! Compile-time configuration errors.

use crate::modifier::{Modifier, TypeModifier};
use crate::selector::RuleSelector;
use miette::Diagnostic;

/// A fatal error found while compiling a rule list.
///
/// Compilation stops at the first error; no descriptor is ever evaluated
/// against a partially compiled set. Each variant carries the index of the
/// offending entry in the user's declaration order where one exists.
#[derive(Debug, Clone, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// A required modifier is not meaningful for the entry's selector.
    #[error("rules[{index}]: modifier `{modifier}` is not applicable to selector `{selector}`")]
    InapplicableModifier {
        /// Declaration index of the offending entry.
        index: usize,
        /// The modifier that does not apply.
        modifier: Modifier,
        /// The selector it was required on.
        selector: RuleSelector,
    },

    /// Type modifiers were required on a selector that carries no type.
    #[error(
        "rules[{index}]: selector `{selector}` does not carry a type, \
         `{type_modifier}` cannot be required"
    )]
    InapplicableTypeModifier {
        /// Declaration index of the offending entry.
        index: usize,
        /// The type modifier that does not apply.
        type_modifier: TypeModifier,
        /// The selector it was required on.
        selector: RuleSelector,
    },

    /// An entry declared no selector at all.
    #[error("rules[{index}]: at least one selector is required")]
    EmptySelector {
        /// Declaration index of the offending entry.
        index: usize,
    },

    /// A filter or custom regex failed to compile.
    #[error("{context}: invalid regex `{pattern}`: {reason}")]
    InvalidRegex {
        /// Where the pattern appeared (e.g., "rules[2].filter").
        context: String,
        /// The source pattern.
        pattern: String,
        /// The regex engine's explanation.
        reason: String,
    },

    /// A prefix or suffix list contained an empty string.
    #[error("{context}: affix entries must not be empty")]
    EmptyAffix {
        /// Where the affix appeared (e.g., "rules[0].prefix[1]").
        context: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{MetaSelector, Selector};

    #[test]
    fn error_messages_name_the_offending_entry() {
        let err = ConfigError::InapplicableModifier {
            index: 3,
            modifier: Modifier::Private,
            selector: RuleSelector::Individual(Selector::Variable),
        };
        let msg = err.to_string();
        assert!(msg.contains("rules[3]"));
        assert!(msg.contains("private"));
        assert!(msg.contains("variable"));
    }

    #[test]
    fn type_modifier_error_names_selector() {
        let err = ConfigError::InapplicableTypeModifier {
            index: 0,
            type_modifier: TypeModifier::Boolean,
            selector: RuleSelector::Meta(MetaSelector::Method),
        };
        assert!(err.to_string().contains("method"));
        assert!(err.to_string().contains("boolean"));
    }
}
