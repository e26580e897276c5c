//! The verdict engine: checks one name against a rule's format options.
//!
//! Checks run in a fixed order — trailing underscore, leading underscore,
//! prefix, suffix, predefined formats, custom regex — each strip feeding
//! the next check. Failures are collected rather than short-circuited, so
//! a verdict reports every violated constraint at once.

use crate::format::{PredefinedFormat, UnderscorePolicy};
use crate::rule::FormatOptions;
use serde::Serialize;

/// Pass/fail outcome for a single identifier occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pass: bool,
    reasons: Vec<String>,
}

impl Verdict {
    /// A passing verdict.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            pass: true,
            reasons: Vec::new(),
        }
    }

    /// A failing verdict with the given reasons.
    #[must_use]
    pub fn fail(reasons: Vec<String>) -> Self {
        Self {
            pass: false,
            reasons,
        }
    }

    /// Whether the name satisfied every configured check.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.pass
    }

    /// Human-readable reasons for a failing verdict, in check order.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

/// Which end of the name an underscore policy or affix applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Leading,
    Trailing,
}

/// Validates a name against a format configuration.
///
/// Never errors for well-formed input: malformed configuration (such as an
/// uncompilable regex) is rejected earlier, at compile time.
#[must_use]
pub fn validate(name: &str, options: &FormatOptions) -> Verdict {
    let mut reasons = Vec::new();

    let rest = check_underscore(
        Position::Trailing,
        options.trailing_underscore(),
        name,
        &mut reasons,
    );
    let rest = check_underscore(
        Position::Leading,
        options.leading_underscore(),
        rest,
        &mut reasons,
    );
    let rest = check_affix(Position::Leading, options.prefix(), rest, &mut reasons);
    let rest = check_affix(Position::Trailing, options.suffix(), rest, &mut reasons);
    check_formats(options.formats(), rest, &mut reasons);
    check_custom(options, rest, &mut reasons);

    if reasons.is_empty() {
        Verdict::pass()
    } else if let Some(message) = options.failure_message() {
        Verdict::fail(vec![message.to_string()])
    } else {
        Verdict::fail(reasons)
    }
}

fn strip_underscores<'a>(name: &'a str, position: Position, count: usize) -> Option<&'a str> {
    let underscores = "_".repeat(count);
    match position {
        Position::Leading => name.strip_prefix(underscores.as_str()),
        Position::Trailing => name.strip_suffix(underscores.as_str()),
    }
}

fn position_word(position: Position) -> &'static str {
    match position {
        Position::Leading => "leading",
        Position::Trailing => "trailing",
    }
}

/// Applies an underscore policy, recording a reason on violation and
/// returning the name with the accepted underscores stripped.
///
/// On a `forbid` violation the single underscore is still stripped so the
/// later checks see the core name and can report their own findings.
fn check_underscore<'a>(
    position: Position,
    policy: Option<UnderscorePolicy>,
    name: &'a str,
    reasons: &mut Vec<String>,
) -> &'a str {
    let Some(policy) = policy else {
        return name;
    };
    let single = strip_underscores(name, position, 1);
    let double = strip_underscores(name, position, 2);
    let word = position_word(position);

    match policy {
        UnderscorePolicy::Forbid => {
            if let Some(stripped) = single {
                reasons.push(format!("must not have a {word} underscore"));
                stripped
            } else {
                name
            }
        }
        UnderscorePolicy::Require => match single {
            Some(stripped) => stripped,
            None => {
                reasons.push(format!("must have a {word} underscore"));
                name
            }
        },
        UnderscorePolicy::RequireDouble => match double {
            Some(stripped) => stripped,
            None => {
                reasons.push(format!("must have a double {word} underscore"));
                name
            }
        },
        UnderscorePolicy::Allow => single.unwrap_or(name),
        UnderscorePolicy::AllowDouble => double.unwrap_or(name),
        UnderscorePolicy::AllowSingleOrDouble => double.or(single).unwrap_or(name),
    }
}

/// Checks and strips a configured prefix or suffix list.
///
/// Among the affixes that match, the longest one is the strictest candidate
/// and is the one stripped.
fn check_affix<'a>(
    position: Position,
    affixes: &[String],
    name: &'a str,
    reasons: &mut Vec<String>,
) -> &'a str {
    if affixes.is_empty() {
        return name;
    }
    let matched = affixes
        .iter()
        .filter(|affix| match position {
            Position::Leading => name.starts_with(affix.as_str()),
            Position::Trailing => name.ends_with(affix.as_str()),
        })
        .max_by_key(|affix| affix.len());

    match matched {
        Some(affix) => match position {
            Position::Leading => &name[affix.len()..],
            Position::Trailing => &name[..name.len() - affix.len()],
        },
        None => {
            let kind = match position {
                Position::Leading => "prefixes",
                Position::Trailing => "suffixes",
            };
            let listed = affixes
                .iter()
                .map(|a| format!("`{a}`"))
                .collect::<Vec<_>>()
                .join(", ");
            reasons.push(format!("must have one of the following {kind}: {listed}"));
            name
        }
    }
}

/// Requires the stripped name to satisfy at least one allowed style.
/// An absent or empty format list performs no check.
fn check_formats(formats: Option<&[PredefinedFormat]>, name: &str, reasons: &mut Vec<String>) {
    let Some(formats) = formats else {
        return;
    };
    if formats.is_empty() || formats.iter().any(|f| f.is_match(name)) {
        return;
    }
    let listed = formats
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    reasons.push(format!(
        "must match one of the following formats: {listed}"
    ));
}

fn check_custom(options: &FormatOptions, name: &str, reasons: &mut Vec<String>) {
    let Some(pattern) = options.custom() else {
        return;
    };
    if pattern.is_satisfied_by(name) {
        return;
    }
    let polarity = if pattern.expects_match() {
        "must match"
    } else {
        "must not match"
    };
    reasons.push(format!("{polarity} the pattern `{}`", pattern.as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchPattern;

    fn camel() -> FormatOptions {
        FormatOptions::new().with_formats(vec![PredefinedFormat::CamelCase])
    }

    #[test]
    fn empty_options_accept_anything() {
        assert!(validate("__whatever__", &FormatOptions::new()).passed());
    }

    #[test]
    fn format_or_semantics() {
        let options = FormatOptions::new().with_formats(vec![
            PredefinedFormat::SnakeCase,
            PredefinedFormat::UpperCase,
        ]);
        assert!(validate("max_count", &options).passed());
        assert!(validate("MAX_COUNT", &options).passed());
        let verdict = validate("maxCount", &options);
        assert!(!verdict.passed());
        assert_eq!(verdict.reasons().len(), 1);
        assert!(verdict.reasons()[0].contains("snake_case, UPPER_CASE"));
    }

    #[test]
    fn empty_format_list_is_unchecked() {
        let options = FormatOptions::new().with_formats(vec![]);
        assert!(validate("Any_Thing", &options).passed());
    }

    #[test]
    fn leading_underscore_require_and_strip() {
        let options = camel().with_leading_underscore(UnderscorePolicy::Require);
        assert!(validate("_value", &options).passed());

        let verdict = validate("value", &options);
        assert!(!verdict.passed());
        assert!(verdict.reasons()[0].contains("must have a leading underscore"));
    }

    #[test]
    fn leading_underscore_forbid() {
        let options = camel().with_leading_underscore(UnderscorePolicy::Forbid);
        let verdict = validate("_value", &options);
        assert!(!verdict.passed());
        assert!(verdict.reasons()[0].contains("must not have a leading underscore"));
        assert!(validate("value", &options).passed());
    }

    #[test]
    fn forbid_still_strips_for_later_checks() {
        // The case check runs on the core name, so only the underscore
        // violation is reported.
        let options = camel().with_leading_underscore(UnderscorePolicy::Forbid);
        let verdict = validate("_value", &options);
        assert_eq!(verdict.reasons().len(), 1);
    }

    #[test]
    fn double_underscore_policies() {
        let options = camel().with_leading_underscore(UnderscorePolicy::RequireDouble);
        assert!(validate("__value", &options).passed());
        assert!(!validate("_value", &options).passed());

        let options = camel().with_leading_underscore(UnderscorePolicy::AllowSingleOrDouble);
        assert!(validate("__value", &options).passed());
        assert!(validate("_value", &options).passed());
        assert!(validate("value", &options).passed());
    }

    #[test]
    fn trailing_underscore_checked_before_leading() {
        let options = camel()
            .with_leading_underscore(UnderscorePolicy::Require)
            .with_trailing_underscore(UnderscorePolicy::Require);
        assert!(validate("_value_", &options).passed());

        let verdict = validate("value", &options);
        assert_eq!(verdict.reasons().len(), 2);
        assert!(verdict.reasons()[0].contains("trailing"));
        assert!(verdict.reasons()[1].contains("leading"));
    }

    #[test]
    fn prefix_stripped_before_case_check() {
        let options = FormatOptions::new()
            .with_formats(vec![PredefinedFormat::PascalCase])
            .with_prefix(vec!["I".to_string()]);
        assert!(validate("IUser", &options).passed());

        let verdict = validate("User", &options);
        assert!(!verdict.passed());
        assert!(verdict.reasons()[0].contains("prefixes"));
    }

    #[test]
    fn longest_matching_affix_is_stripped() {
        // Stripping only `i` would leave `sReady`, which fails PascalCase;
        // the longer `is` leaves `Ready`.
        let options = FormatOptions::new()
            .with_formats(vec![PredefinedFormat::PascalCase])
            .with_prefix(vec!["i".to_string(), "is".to_string()]);
        assert!(validate("isReady", &options).passed());
    }

    #[test]
    fn suffix_checked_and_stripped() {
        let options = FormatOptions::new()
            .with_formats(vec![PredefinedFormat::PascalCase])
            .with_suffix(vec!["Impl".to_string()]);
        assert!(validate("UserImpl", &options).passed());
        assert!(!validate("User", &options).passed());
    }

    #[test]
    fn custom_regex_polarity() {
        let must = camel().with_custom(MatchPattern::new("^x", true, "test").unwrap());
        assert!(validate("xValue", &must).passed());
        let verdict = validate("value", &must);
        assert!(verdict.reasons()[0].contains("must match the pattern"));

        let must_not =
            FormatOptions::new().with_custom(MatchPattern::new("^I[A-Z]", false, "test").unwrap());
        assert!(validate("User", &must_not).passed());
        let verdict = validate("IUser", &must_not);
        assert!(verdict.reasons()[0].contains("must not match the pattern"));
    }

    #[test]
    fn all_failures_collected() {
        let options = FormatOptions::new()
            .with_formats(vec![PredefinedFormat::CamelCase])
            .with_prefix(vec!["do".to_string()])
            .with_custom(MatchPattern::new("z$", true, "test").unwrap());
        let verdict = validate("GET_VALUE", &options);
        assert!(!verdict.passed());
        assert_eq!(verdict.reasons().len(), 3);
    }

    #[test]
    fn failure_message_replaces_reasons() {
        let options = camel().with_failure_message("use lowerCamelCase here");
        let verdict = validate("NOT_CAMEL", &options);
        assert!(!verdict.passed());
        assert_eq!(verdict.reasons(), ["use lowerCamelCase here"]);
    }

    #[test]
    fn validate_is_pure() {
        let options = camel().with_leading_underscore(UnderscorePolicy::Allow);
        assert_eq!(validate("_fooBar", &options), validate("_fooBar", &options));
    }
}
