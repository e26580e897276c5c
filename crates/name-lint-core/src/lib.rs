//! # name-lint-core
//!
//! Core engine for naming-convention linting.
//!
//! Identifiers are classified against a user-declared, ordered list of
//! naming rules. For each identifier occurrence the engine decides which
//! single rule governs it — a CSS-like specificity cascade over selectors,
//! modifiers, type modifiers, and name filters — and whether its spelling
//! satisfies that rule's format configuration.
//!
//! This crate provides:
//!
//! - [`Selector`] / [`MetaSelector`] — the identifier category hierarchy
//! - [`RuleSet`] — compiled, immutable rule sets with specificity scores
//! - [`validate`] — the verdict engine over a rule's [`FormatOptions`]
//! - [`Descriptor`] — the per-occurrence query object supplied by the host
//! - [`config`] — JSON/TOML rule-list loading
//!
//! ## Example
//!
//! ```
//! use name_lint_core::{
//!     config::rule_set_from_json, validate, Descriptor, Modifier, Selector,
//! };
//!
//! let set = rule_set_from_json(
//!     r#"[
//!         { "selector": "default", "format": ["camelCase"] },
//!         {
//!             "selector": "variable",
//!             "modifiers": ["const", "global"],
//!             "format": ["UPPER_CASE"]
//!         }
//!     ]"#,
//! )?;
//!
//! let occurrence = Descriptor::new(Selector::Variable, "MAX_COUNT")
//!     .with_modifier(Modifier::Const)
//!     .with_modifier(Modifier::Global);
//!
//! if let Some(rule) = set.resolve(&occurrence) {
//!     let verdict = validate(occurrence.name(), rule.format());
//!     assert!(verdict.passed());
//! }
//! # Ok::<(), name_lint_core::config::LoadRulesError>(())
//! ```
//!
//! The host's AST traversal, diagnostic rendering, and file discovery live
//! outside this crate; only the descriptor boundary is consumed here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod descriptor;
mod error;
mod format;
mod matcher;
mod modifier;
mod rule;
mod selector;
mod validator;

/// Configuration loading (JSON/TOML rule lists).
pub mod config;

pub use descriptor::Descriptor;
pub use error::ConfigError;
pub use format::{PredefinedFormat, UnderscorePolicy};
pub use matcher::MatchPattern;
pub use modifier::{Modifier, TypeModifier};
pub use rule::{CompiledRule, FormatOptions, NamingRule, RuleSet};
pub use selector::{MetaSelector, RuleSelector, Selector};
pub use validator::{validate, Verdict};
