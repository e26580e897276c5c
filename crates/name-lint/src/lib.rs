//! # name-lint
//!
//! Naming-convention linter for identifiers.
//!
//! This is the main facade crate: it re-exports the core engine and adds
//! the [`Linter`] convenience wrapper that ties rule resolution and name
//! validation together per identifier occurrence.
//!
//! ## Quick start
//!
//! ```
//! use name_lint::{Linter, Descriptor, Modifier, Selector};
//!
//! let linter = Linter::from_json(
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
//! // Governed by the const+global rule, which it satisfies.
//! assert!(linter.check(&occurrence).unwrap().passed());
//! # Ok::<(), name_lint::config::LoadRulesError>(())
//! ```
//!
//! The host drives its own AST traversal and builds one [`Descriptor`] per
//! identifier occurrence; [`Linter::check`] returns `None` when no rule
//! admits the occurrence (unconstrained, implicit pass).

#![forbid(unsafe_code)]

pub use name_lint_core::*;

mod linter;

pub use linter::Linter;
