//! Rule-list configuration driven by JSON or TOML.
//!
//! # Architecture
//!
//! ```text
//! JSON / TOML text
//!   ↓ serde (DTO layer)
//! dto types
//!   ↓ validate + convert (loader)
//! Vec<NamingRule>
//!   ↓ RuleSet::compile
//! RuleSet
//! ```

pub mod dto;
pub mod loader;

use crate::error::ConfigError;
use crate::rule::RuleSet;

/// Errors from parsing configuration text and compiling the rule list.
#[derive(Debug, thiserror::Error)]
pub enum LoadRulesError {
    /// JSON deserialization failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Rule validation or compilation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Parses a JSON array of rule entries and compiles it.
///
/// # Errors
///
/// Returns an error if JSON parsing, conversion, or compilation fails.
pub fn rule_set_from_json(content: &str) -> Result<RuleSet, LoadRulesError> {
    let dtos: Vec<dto::RuleDto> = serde_json::from_str(content)?;
    let rules = loader::load(dtos)?;
    Ok(RuleSet::compile(rules)?)
}

/// Parses a TOML document with `[[rules]]` entries and compiles it.
///
/// Returns an empty set if no rules are present.
///
/// # Errors
///
/// Returns an error if TOML parsing, conversion, or compilation fails.
pub fn rule_set_from_toml(content: &str) -> Result<RuleSet, LoadRulesError> {
    let document: dto::RulesDto = toml::from_str(content)?;
    let rules = loader::load(document.rules)?;
    Ok(RuleSet::compile(rules)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Descriptor;
    use crate::selector::Selector;
    use crate::validator::validate;

    #[test]
    fn json_config_end_to_end() {
        let set = rule_set_from_json(
            r#"[
                { "selector": "default", "format": ["camelCase"] },
                {
                    "selector": "variable",
                    "modifiers": ["const", "global"],
                    "format": ["UPPER_CASE"]
                }
            ]"#,
        )
        .unwrap();
        assert_eq!(set.len(), 2);

        let d = Descriptor::new(Selector::Variable, "MAX_COUNT")
            .with_modifier(crate::modifier::Modifier::Const)
            .with_modifier(crate::modifier::Modifier::Global);
        let rule = set.resolve(&d).unwrap();
        assert_eq!(rule.index(), 1);
        assert!(validate(d.name(), rule.format()).passed());
    }

    #[test]
    fn toml_config_end_to_end() {
        let set = rule_set_from_toml(
            r#"
[[rules]]
selector = "interface"
format = ["PascalCase"]
prefix = ["I"]
"#,
        )
        .unwrap();
        let d = Descriptor::new(Selector::Interface, "IUser");
        let rule = set.resolve(&d).unwrap();
        assert!(validate(d.name(), rule.format()).passed());
    }

    #[test]
    fn empty_toml_yields_empty_set() {
        let set = rule_set_from_toml("").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn inapplicable_modifier_fails_compilation() {
        let err = rule_set_from_json(
            r#"[{ "selector": "variable", "modifiers": ["private"], "format": null }]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadRulesError::Config(ConfigError::InapplicableModifier { index: 0, .. })
        ));
    }

    #[test]
    fn malformed_json_reported() {
        assert!(matches!(
            rule_set_from_json("[{"),
            Err(LoadRulesError::Json(_))
        ));
    }
}
