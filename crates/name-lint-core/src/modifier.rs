//! Modifiers: boolean facts about an identifier occurrence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A boolean fact that may hold for an identifier occurrence.
///
/// Rule entries require modifiers as match constraints; descriptors carry
/// the modifiers that actually hold. Each selector admits only a subset of
/// modifiers, checked at rule compilation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Modifier {
    /// Declared with `const`.
    Const,
    /// Declared `readonly`.
    Readonly,
    /// Declared `static`.
    Static,
    /// Explicit `public` accessibility.
    Public,
    /// `protected` accessibility.
    Protected,
    /// `private` accessibility.
    Private,
    /// Declared `abstract`.
    Abstract,
    /// Bound via a destructuring pattern.
    Destructured,
    /// Declared at module/global scope.
    Global,
    /// Exported from its module.
    Exported,
    /// Declared but never read.
    Unused,
    /// The name is not a valid bare identifier and must be quoted.
    RequiresQuotes,
}

impl Modifier {
    /// All modifiers, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Const,
        Self::Readonly,
        Self::Static,
        Self::Public,
        Self::Protected,
        Self::Private,
        Self::Abstract,
        Self::Destructured,
        Self::Global,
        Self::Exported,
        Self::Unused,
        Self::RequiresQuotes,
    ];

    /// Returns the configuration-facing name (camelCase).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Readonly => "readonly",
            Self::Static => "static",
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Destructured => "destructured",
            Self::Global => "global",
            Self::Exported => "exported",
            Self::Unused => "unused",
            Self::RequiresQuotes => "requiresQuotes",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A broad type-shape category for identifiers that carry a type.
///
/// Only available on type-carrying selectors (variables, parameters,
/// properties, accessors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeModifier {
    /// Boolean-typed.
    Boolean,
    /// String-typed.
    String,
    /// Number-typed.
    Number,
    /// Function-typed.
    Function,
    /// Array-typed.
    Array,
}

impl TypeModifier {
    /// Returns the configuration-facing name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number => "number",
            Self::Function => "function",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for TypeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_deserializes_from_camel_case() {
        let m: Modifier = serde_json::from_str("\"requiresQuotes\"").unwrap();
        assert_eq!(m, Modifier::RequiresQuotes);
        let m: Modifier = serde_json::from_str("\"const\"").unwrap();
        assert_eq!(m, Modifier::Const);
    }

    #[test]
    fn modifier_display_matches_config_name() {
        assert_eq!(Modifier::RequiresQuotes.to_string(), "requiresQuotes");
        assert_eq!(Modifier::Readonly.to_string(), "readonly");
    }

    #[test]
    fn type_modifier_roundtrip() {
        let t: TypeModifier = serde_json::from_str("\"boolean\"").unwrap();
        assert_eq!(t, TypeModifier::Boolean);
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"boolean\"");
    }
}
