//! Identifier descriptors: the per-occurrence query object.
//!
//! The host's AST walker is responsible for deciding what counts as an
//! identifier and which modifiers hold for it; this crate only consumes
//! the resulting descriptor.

use crate::modifier::{Modifier, TypeModifier};
use crate::selector::Selector;

/// Facts about one identifier occurrence, supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    selector: Selector,
    modifiers: Vec<Modifier>,
    types: Vec<TypeModifier>,
    name: String,
}

impl Descriptor {
    /// Creates a descriptor with no active modifiers.
    #[must_use]
    pub fn new(selector: Selector, name: impl Into<String>) -> Self {
        Self {
            selector,
            modifiers: Vec::new(),
            types: Vec::new(),
            name: name.into(),
        }
    }

    /// Marks a modifier as active for this occurrence.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        if !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    /// Marks a type modifier as active for this occurrence.
    #[must_use]
    pub fn with_type(mut self, type_modifier: TypeModifier) -> Self {
        if !self.types.contains(&type_modifier) {
            self.types.push(type_modifier);
        }
        self
    }

    /// Returns the individual selector of this occurrence.
    #[must_use]
    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Returns the literal name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the active modifiers.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Returns the active type modifiers.
    #[must_use]
    pub fn types(&self) -> &[TypeModifier] {
        &self.types
    }

    /// Tests whether a modifier is active.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Tests whether a type modifier is active.
    #[must_use]
    pub fn has_type(&self, type_modifier: TypeModifier) -> bool {
        self.types.contains(&type_modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_deduplicates_modifiers() {
        let d = Descriptor::new(Selector::Variable, "maxCount")
            .with_modifier(Modifier::Const)
            .with_modifier(Modifier::Const)
            .with_modifier(Modifier::Global);
        assert_eq!(d.modifiers().len(), 2);
        assert!(d.has_modifier(Modifier::Const));
        assert!(d.has_modifier(Modifier::Global));
        assert!(!d.has_modifier(Modifier::Exported));
    }

    #[test]
    fn type_modifiers_tracked_separately() {
        let d = Descriptor::new(Selector::Parameter, "flag").with_type(TypeModifier::Boolean);
        assert!(d.has_type(TypeModifier::Boolean));
        assert!(!d.has_type(TypeModifier::String));
        assert!(d.modifiers().is_empty());
    }
}
