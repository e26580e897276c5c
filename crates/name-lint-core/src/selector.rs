//! Selectors: syntactic identifier categories and their grouping hierarchy.
//!
//! Individual selectors name one syntactic category. Meta-selectors expand
//! to a fixed set of individual selectors; `default` covers everything.
//! The hierarchy is static and acyclic.

use crate::modifier::Modifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntactic category of a single identifier occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selector {
    /// A local or module-level variable binding.
    Variable,
    /// A function declaration or expression.
    Function,
    /// A function or method parameter.
    Parameter,
    /// A constructor parameter that declares a property.
    ParameterProperty,
    /// A property declared on a class.
    ClassProperty,
    /// A property in an object literal.
    ObjectLiteralProperty,
    /// A property in a type or interface declaration.
    TypeProperty,
    /// A method declared on a class.
    ClassMethod,
    /// A method in an object literal.
    ObjectLiteralMethod,
    /// A method in a type or interface declaration.
    TypeMethod,
    /// A get/set accessor.
    Accessor,
    /// A member of an enum.
    EnumMember,
    /// A class declaration.
    Class,
    /// An interface declaration.
    Interface,
    /// A type alias declaration.
    TypeAlias,
    /// An enum declaration.
    Enum,
    /// A generic type parameter.
    TypeParameter,
}

impl Selector {
    /// Returns the configuration-facing name (camelCase).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Parameter => "parameter",
            Self::ParameterProperty => "parameterProperty",
            Self::ClassProperty => "classProperty",
            Self::ObjectLiteralProperty => "objectLiteralProperty",
            Self::TypeProperty => "typeProperty",
            Self::ClassMethod => "classMethod",
            Self::ObjectLiteralMethod => "objectLiteralMethod",
            Self::TypeMethod => "typeMethod",
            Self::Accessor => "accessor",
            Self::EnumMember => "enumMember",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::TypeAlias => "typeAlias",
            Self::Enum => "enum",
            Self::TypeParameter => "typeParameter",
        }
    }

    /// Modifiers that a rule entry targeting this selector may require.
    #[must_use]
    pub fn applicable_modifiers(self) -> &'static [Modifier] {
        use Modifier as M;
        match self {
            Self::Variable => &[
                M::Const,
                M::Destructured,
                M::Global,
                M::Exported,
                M::Unused,
            ],
            Self::Function => &[M::Global, M::Exported, M::Unused],
            Self::Parameter | Self::TypeParameter => &[M::Unused],
            Self::ClassProperty | Self::ObjectLiteralProperty | Self::TypeProperty => &[
                M::Private,
                M::Protected,
                M::Public,
                M::Static,
                M::Readonly,
                M::Abstract,
                M::RequiresQuotes,
            ],
            Self::ParameterProperty => &[M::Private, M::Protected, M::Public, M::Readonly],
            Self::ClassMethod | Self::ObjectLiteralMethod | Self::TypeMethod | Self::Accessor => &[
                M::Private,
                M::Protected,
                M::Public,
                M::Static,
                M::Abstract,
                M::RequiresQuotes,
            ],
            Self::EnumMember => &[M::RequiresQuotes],
            Self::Class => &[M::Abstract, M::Exported, M::Unused],
            Self::Interface | Self::TypeAlias | Self::Enum => &[M::Exported, M::Unused],
        }
    }

    /// Whether identifiers in this category carry a type, making type
    /// modifiers meaningful.
    #[must_use]
    pub fn carries_type(self) -> bool {
        matches!(
            self,
            Self::Variable
                | Self::Parameter
                | Self::ParameterProperty
                | Self::ClassProperty
                | Self::ObjectLiteralProperty
                | Self::TypeProperty
                | Self::Accessor
        )
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coarser grouping of individual selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetaSelector {
    /// The universal selector: admits every individual selector.
    Default,
    /// Variables, functions, and parameters.
    VariableLike,
    /// Every kind of member: properties, methods, accessors, enum members.
    MemberLike,
    /// Classes, interfaces, type aliases, enums, and type parameters.
    TypeLike,
    /// Class, object-literal, and type properties.
    Property,
    /// Class, object-literal, and type methods.
    Method,
}

impl MetaSelector {
    /// The individual selectors this grouping expands to.
    #[must_use]
    pub fn expansion(self) -> &'static [Selector] {
        use Selector as S;
        match self {
            Self::Default => &[
                S::Variable,
                S::Function,
                S::Parameter,
                S::ParameterProperty,
                S::ClassProperty,
                S::ObjectLiteralProperty,
                S::TypeProperty,
                S::ClassMethod,
                S::ObjectLiteralMethod,
                S::TypeMethod,
                S::Accessor,
                S::EnumMember,
                S::Class,
                S::Interface,
                S::TypeAlias,
                S::Enum,
                S::TypeParameter,
            ],
            Self::VariableLike => &[S::Variable, S::Function, S::Parameter],
            Self::MemberLike => &[
                S::ClassProperty,
                S::ObjectLiteralProperty,
                S::TypeProperty,
                S::ParameterProperty,
                S::ClassMethod,
                S::ObjectLiteralMethod,
                S::TypeMethod,
                S::Accessor,
                S::EnumMember,
            ],
            Self::TypeLike => &[
                S::Class,
                S::Interface,
                S::TypeAlias,
                S::Enum,
                S::TypeParameter,
            ],
            Self::Property => &[S::ClassProperty, S::ObjectLiteralProperty, S::TypeProperty],
            Self::Method => &[S::ClassMethod, S::ObjectLiteralMethod, S::TypeMethod],
        }
    }

    /// Tests whether an individual selector belongs to this grouping.
    #[must_use]
    pub fn contains(self, selector: Selector) -> bool {
        matches!(self, Self::Default) || self.expansion().contains(&selector)
    }

    /// Returns the configuration-facing name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::VariableLike => "variableLike",
            Self::MemberLike => "memberLike",
            Self::TypeLike => "typeLike",
            Self::Property => "property",
            Self::Method => "method",
        }
    }

    /// Modifiers that a rule entry targeting this grouping may require.
    #[must_use]
    pub fn applicable_modifiers(self) -> &'static [Modifier] {
        use Modifier as M;
        match self {
            Self::Default => &Modifier::ALL,
            Self::VariableLike => &[M::Unused],
            Self::MemberLike | Self::Property => &[
                M::Private,
                M::Protected,
                M::Public,
                M::Static,
                M::Readonly,
                M::Abstract,
                M::RequiresQuotes,
            ],
            Self::Method => &[
                M::Private,
                M::Protected,
                M::Public,
                M::Static,
                M::Abstract,
                M::RequiresQuotes,
            ],
            Self::TypeLike => &[M::Abstract, M::Exported, M::Unused],
        }
    }
}

impl fmt::Display for MetaSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule entry's selector: an individual category or a meta grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSelector {
    /// One individual selector.
    Individual(Selector),
    /// A meta-selector grouping.
    Meta(MetaSelector),
}

impl RuleSelector {
    /// Tests whether this entry selector admits a descriptor's individual
    /// selector.
    #[must_use]
    pub fn admits(self, selector: Selector) -> bool {
        match self {
            Self::Individual(s) => s == selector,
            Self::Meta(m) => m.contains(selector),
        }
    }

    /// Base specificity contribution: `default` is broadest, individual
    /// selectors are narrowest.
    #[must_use]
    pub fn base_specificity(self) -> u32 {
        match self {
            Self::Meta(MetaSelector::Default) => 0,
            Self::Meta(_) => 1,
            Self::Individual(_) => 2,
        }
    }

    /// Modifiers a rule entry with this selector may require.
    #[must_use]
    pub fn applicable_modifiers(self) -> &'static [Modifier] {
        match self {
            Self::Individual(s) => s.applicable_modifiers(),
            Self::Meta(m) => m.applicable_modifiers(),
        }
    }

    /// Whether type modifiers are meaningful for this selector.
    #[must_use]
    pub fn carries_type(self) -> bool {
        match self {
            Self::Individual(s) => s.carries_type(),
            Self::Meta(m) => matches!(m, MetaSelector::Property),
        }
    }
}

impl fmt::Display for RuleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual(s) => fmt::Display::fmt(s, f),
            Self::Meta(m) => fmt::Display::fmt(m, f),
        }
    }
}
