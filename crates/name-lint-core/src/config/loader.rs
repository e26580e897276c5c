//! DTO → domain rule conversion with validation.

use super::dto::{FilterDto, RuleDto};
use crate::error::ConfigError;
use crate::matcher::MatchPattern;
use crate::rule::{FormatOptions, NamingRule};

/// Converts raw rule DTOs into domain rules, compiling every regex and
/// rejecting empty affix entries. Declaration order is preserved.
///
/// # Errors
///
/// Returns the first [`ConfigError`] encountered, with a context path
/// naming the offending entry and field.
pub fn load(dtos: Vec<RuleDto>) -> Result<Vec<NamingRule>, ConfigError> {
    dtos.into_iter()
        .enumerate()
        .map(|(index, dto)| convert_rule(dto, index))
        .collect()
}

fn convert_rule(dto: RuleDto, index: usize) -> Result<NamingRule, ConfigError> {
    let ctx = format!("rules[{index}]");

    let filter = match dto.filter {
        Some(FilterDto::Pattern(pattern)) => {
            Some(MatchPattern::new(&pattern, true, &format!("{ctx}.filter"))?)
        }
        Some(FilterDto::Regex(regex)) => Some(MatchPattern::new(
            &regex.regex,
            regex.expect_match,
            &format!("{ctx}.filter"),
        )?),
        None => None,
    };

    let custom = match dto.custom {
        Some(regex) => Some(MatchPattern::new(
            &regex.regex,
            regex.expect_match,
            &format!("{ctx}.custom"),
        )?),
        None => None,
    };

    check_affixes(&dto.prefix, &ctx, "prefix")?;
    check_affixes(&dto.suffix, &ctx, "suffix")?;

    let mut format = FormatOptions::new()
        .with_prefix(dto.prefix)
        .with_suffix(dto.suffix);
    if let Some(formats) = dto.format {
        format = format.with_formats(formats);
    }
    if let Some(custom) = custom {
        format = format.with_custom(custom);
    }
    if let Some(policy) = dto.leading_underscore {
        format = format.with_leading_underscore(policy);
    }
    if let Some(policy) = dto.trailing_underscore {
        format = format.with_trailing_underscore(policy);
    }
    if let Some(message) = dto.failure_message {
        format = format.with_failure_message(message);
    }

    let mut rule = NamingRule::for_selectors(dto.selector.into_vec(), format)
        .with_modifiers(dto.modifiers)
        .with_types(dto.types);
    if let Some(filter) = filter {
        rule = rule.with_filter(filter);
    }
    Ok(rule)
}

fn check_affixes(affixes: &[String], ctx: &str, field: &str) -> Result<(), ConfigError> {
    for (i, affix) in affixes.iter().enumerate() {
        if affix.is_empty() {
            return Err(ConfigError::EmptyAffix {
                context: format!("{ctx}.{field}[{i}]"),
            });
        }
    }
    Ok(())
}
