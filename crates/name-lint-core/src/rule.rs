//! Naming rules, the rule compiler, and the specificity resolver.
//!
//! A user declares an ordered list of [`NamingRule`]s. [`RuleSet::compile`]
//! validates each entry against the selector hierarchy, expands
//! multi-selector entries, and precomputes a specificity score per compiled
//! rule. [`RuleSet::resolve`] then picks the single governing rule for a
//! descriptor: highest specificity wins, ties go to the later declaration.

use crate::descriptor::Descriptor;
use crate::error::ConfigError;
use crate::format::{PredefinedFormat, UnderscorePolicy};
use crate::matcher::MatchPattern;
use crate::modifier::{Modifier, TypeModifier};
use crate::selector::RuleSelector;
use tracing::debug;

/// The validation contract applied to names accepted by a rule.
///
/// All fields are optional; an empty `FormatOptions` accepts every name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    formats: Option<Vec<PredefinedFormat>>,
    custom: Option<MatchPattern>,
    leading_underscore: Option<UnderscorePolicy>,
    trailing_underscore: Option<UnderscorePolicy>,
    prefix: Vec<String>,
    suffix: Vec<String>,
    failure_message: Option<String>,
}

impl FormatOptions {
    /// Creates an empty format configuration (no checks).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the name to satisfy at least one of the given case styles.
    #[must_use]
    pub fn with_formats(mut self, formats: Vec<PredefinedFormat>) -> Self {
        self.formats = Some(formats);
        self
    }

    /// Adds a custom regex constraint.
    #[must_use]
    pub fn with_custom(mut self, custom: MatchPattern) -> Self {
        self.custom = Some(custom);
        self
    }

    /// Sets the leading underscore policy.
    #[must_use]
    pub fn with_leading_underscore(mut self, policy: UnderscorePolicy) -> Self {
        self.leading_underscore = Some(policy);
        self
    }

    /// Sets the trailing underscore policy.
    #[must_use]
    pub fn with_trailing_underscore(mut self, policy: UnderscorePolicy) -> Self {
        self.trailing_underscore = Some(policy);
        self
    }

    /// Requires the name to start with one of the given prefixes.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Vec<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Requires the name to end with one of the given suffixes.
    #[must_use]
    pub fn with_suffix(mut self, suffix: Vec<String>) -> Self {
        self.suffix = suffix;
        self
    }

    /// Replaces all generated failure reasons with a single message.
    #[must_use]
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = Some(message.into());
        self
    }

    /// Allowed case styles, or `None` for no format check.
    #[must_use]
    pub fn formats(&self) -> Option<&[PredefinedFormat]> {
        self.formats.as_deref()
    }

    /// Custom regex constraint, if any.
    #[must_use]
    pub fn custom(&self) -> Option<&MatchPattern> {
        self.custom.as_ref()
    }

    /// Leading underscore policy, if any.
    #[must_use]
    pub fn leading_underscore(&self) -> Option<UnderscorePolicy> {
        self.leading_underscore
    }

    /// Trailing underscore policy, if any.
    #[must_use]
    pub fn trailing_underscore(&self) -> Option<UnderscorePolicy> {
        self.trailing_underscore
    }

    /// Allowed prefixes (empty means unchecked).
    #[must_use]
    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }

    /// Allowed suffixes (empty means unchecked).
    #[must_use]
    pub fn suffix(&self) -> &[String] {
        &self.suffix
    }

    /// User-supplied failure message override, if any.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }
}

/// One raw rule entry as declared by the user.
///
/// Declaration order in the rule list is significant: it breaks specificity
/// ties during resolution.
#[derive(Debug, Clone)]
pub struct NamingRule {
    selectors: Vec<RuleSelector>,
    modifiers: Vec<Modifier>,
    types: Vec<TypeModifier>,
    filter: Option<MatchPattern>,
    format: FormatOptions,
}

impl NamingRule {
    /// Creates a rule targeting a single selector.
    #[must_use]
    pub fn new(selector: RuleSelector, format: FormatOptions) -> Self {
        Self {
            selectors: vec![selector],
            modifiers: Vec::new(),
            types: Vec::new(),
            filter: None,
            format,
        }
    }

    /// Creates a rule targeting several selectors at once.
    #[must_use]
    pub fn for_selectors(selectors: Vec<RuleSelector>, format: FormatOptions) -> Self {
        Self {
            selectors,
            modifiers: Vec::new(),
            types: Vec::new(),
            filter: None,
            format,
        }
    }

    /// Requires the given modifiers to hold for a match.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Requires the given type modifiers to hold for a match.
    #[must_use]
    pub fn with_types(mut self, types: Vec<TypeModifier>) -> Self {
        self.types = types;
        self
    }

    /// Restricts which names this rule even considers.
    #[must_use]
    pub fn with_filter(mut self, filter: MatchPattern) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// A single-selector rule with its precomputed specificity score.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    selector: RuleSelector,
    modifiers: Vec<Modifier>,
    types: Vec<TypeModifier>,
    filter: Option<MatchPattern>,
    format: FormatOptions,
    specificity: u32,
    index: usize,
}

impl CompiledRule {
    /// Returns the selector this rule targets.
    #[must_use]
    pub fn selector(&self) -> RuleSelector {
        self.selector
    }

    /// Returns the format configuration.
    #[must_use]
    pub fn format(&self) -> &FormatOptions {
        &self.format
    }

    /// Returns the specificity score.
    #[must_use]
    pub fn specificity(&self) -> u32 {
        self.specificity
    }

    /// Returns the declaration index of the originating entry.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Tests whether this rule admits a descriptor.
    ///
    /// Admission requires the selector to cover the descriptor's category,
    /// every required modifier and type modifier to be active, and the
    /// filter (if any) to be satisfied by the raw name. The filter is a
    /// hard gate only; it never contributes to specificity.
    #[must_use]
    pub fn admits(&self, descriptor: &Descriptor) -> bool {
        if !self.selector.admits(descriptor.selector()) {
            return false;
        }
        if !self.modifiers.iter().all(|m| descriptor.has_modifier(*m)) {
            return false;
        }
        if !self.types.iter().all(|t| descriptor.has_type(*t)) {
            return false;
        }
        match &self.filter {
            Some(filter) => filter.is_satisfied_by(descriptor.name()),
            None => true,
        }
    }
}

/// An immutable, compiled rule set.
///
/// Compiled once per configuration; resolution never mutates it, so a set
/// may be shared freely across a parallel outer traversal. Recompilation
/// produces a new value.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compiles an ordered list of raw rules.
    ///
    /// Multi-selector entries expand into one compiled rule per selector;
    /// all expanded rules keep the declaration index of their entry.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: a modifier or type
    /// modifier that is not applicable to an entry's selector, or an entry
    /// with no selector at all.
    pub fn compile(entries: Vec<NamingRule>) -> Result<Self, ConfigError> {
        let mut rules = Vec::new();
        for (index, mut entry) in entries.into_iter().enumerate() {
            if entry.selectors.is_empty() {
                return Err(ConfigError::EmptySelector { index });
            }
            // A repeated mention is a single constraint; it must not inflate
            // the specificity score.
            dedup_preserving_order(&mut entry.modifiers);
            dedup_preserving_order(&mut entry.types);
            for selector in &entry.selectors {
                for modifier in &entry.modifiers {
                    if !selector.applicable_modifiers().contains(modifier) {
                        return Err(ConfigError::InapplicableModifier {
                            index,
                            modifier: *modifier,
                            selector: *selector,
                        });
                    }
                }
                if let Some(type_modifier) = entry.types.first() {
                    if !selector.carries_type() {
                        return Err(ConfigError::InapplicableTypeModifier {
                            index,
                            type_modifier: *type_modifier,
                            selector: *selector,
                        });
                    }
                }

                let specificity = selector
                    .base_specificity()
                    .saturating_add(u32::try_from(entry.modifiers.len()).unwrap_or(u32::MAX))
                    .saturating_add(u32::try_from(entry.types.len()).unwrap_or(u32::MAX));
                debug!(
                    "compiled rules[{index}] selector `{selector}` with specificity {specificity}"
                );
                rules.push(CompiledRule {
                    selector: *selector,
                    modifiers: entry.modifiers.clone(),
                    types: entry.types.clone(),
                    filter: entry.filter.clone(),
                    format: entry.format.clone(),
                    specificity,
                    index,
                });
            }
        }
        Ok(Self { rules })
    }

    /// Picks the single governing rule for a descriptor.
    ///
    /// Among all admitting rules the one with the highest specificity wins;
    /// on a tie the later-declared entry wins. Returns `None` when no rule
    /// admits the descriptor: the identifier is unconstrained.
    #[must_use]
    pub fn resolve(&self, descriptor: &Descriptor) -> Option<&CompiledRule> {
        let winner = self
            .rules
            .iter()
            .filter(|r| r.admits(descriptor))
            .max_by_key(|r| (r.specificity, r.index));
        match winner {
            Some(rule) => debug!(
                "`{}` governed by rules[{}] (selector `{}`, specificity {})",
                descriptor.name(),
                rule.index,
                rule.selector,
                rule.specificity
            ),
            None => debug!("`{}` is unconstrained", descriptor.name()),
        }
        winner
    }

    /// Returns the compiled rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Returns the number of compiled rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Drops repeated elements, keeping first-occurrence order.
fn dedup_preserving_order<T: PartialEq + Copy>(items: &mut Vec<T>) {
    let mut seen: Vec<T> = Vec::with_capacity(items.len());
    items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(*item);
            true
        }
    });
}
