//! The per-run linter: a compiled rule set plus the check entry point.

use name_lint_core::config::{rule_set_from_json, rule_set_from_toml, LoadRulesError};
use name_lint_core::{validate, Descriptor, NamingRule, RuleSet, Verdict};

/// A compiled naming-convention linter for one analysis run.
///
/// Holds the immutable rule set; checks are pure and re-entrant, so a
/// `Linter` can be shared across a parallel traversal. Reconfiguration
/// means building a new `Linter`, never mutating this one.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    rules: RuleSet,
}

impl Linter {
    /// Wraps an already compiled rule set.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Compiles a rule list built programmatically.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](name_lint_core::ConfigError) if any entry
    /// is invalid for its selector.
    pub fn compile(entries: Vec<NamingRule>) -> Result<Self, name_lint_core::ConfigError> {
        Ok(Self::new(RuleSet::compile(entries)?))
    }

    /// Loads and compiles a JSON array of rule entries.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or compilation fails.
    pub fn from_json(content: &str) -> Result<Self, LoadRulesError> {
        Ok(Self::new(rule_set_from_json(content)?))
    }

    /// Loads and compiles a TOML document with `[[rules]]` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or compilation fails.
    pub fn from_toml(content: &str) -> Result<Self, LoadRulesError> {
        Ok(Self::new(rule_set_from_toml(content)?))
    }

    /// Returns the compiled rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Checks one identifier occurrence.
    ///
    /// Resolves the governing rule and validates the name against its
    /// format configuration. Returns `None` when no rule admits the
    /// occurrence: the identifier is unconstrained.
    #[must_use]
    pub fn check(&self, descriptor: &Descriptor) -> Option<Verdict> {
        let rule = self.rules.resolve(descriptor)?;
        Some(validate(descriptor.name(), rule.format()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use name_lint_core::Selector;

    #[test]
    fn empty_linter_constrains_nothing() {
        let linter = Linter::default();
        let d = Descriptor::new(Selector::Variable, "ANYTHING_goes");
        assert!(linter.check(&d).is_none());
    }

    #[test]
    fn check_reports_failure_reasons() {
        let linter = Linter::from_json(
            r#"[{ "selector": "function", "format": ["camelCase", "PascalCase"] }]"#,
        )
        .unwrap();
        let verdict = linter
            .check(&Descriptor::new(Selector::Function, "do_work"))
            .unwrap();
        assert!(!verdict.passed());
        assert!(verdict.reasons()[0].contains("camelCase, PascalCase"));
    }
}
