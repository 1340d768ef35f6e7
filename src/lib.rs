//! conf-validator: configuration-driven validation rule lookup.
//!
//! Validation rules live in a hierarchical store keyed by validation type
//! (`release`, `form`, ...) and field. This crate resolves a type plus a
//! [`Selector`](rules::Selector) into flat pipe-delimited rule strings, fills in
//! `%NAME%` placeholders, and hands the result to a pluggable validation engine.
//!
//! ```
//! use conf_validator::rules::{Selector, Variables, resolve_rules};
//! use conf_validator::store::RuleTree;
//!
//! let tree = RuleTree::from_yaml(
//!     "form:\n  form_name: \"required|unique:meta_forms,form_name,null,id,release_id,%RELEASE_ID%\"\n",
//! )
//! .unwrap();
//! let vars = Variables::new().with("RELEASE_ID", 51);
//! let rules = resolve_rules(&tree, "form", &Selector::key("form_name"), Some(&vars));
//! assert_eq!(
//!     rules.get("form_name"),
//!     Some("required|unique:meta_forms,form_name,null,id,release_id,51")
//! );
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod rules;
pub mod store;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Settings;
pub use engine::{FailureReport, Record, ValidationEngine, ValidatorHandle};
pub use error::{ConfValidatorError, Result, ValidationFailure};
pub use rules::{RuleMap, Selector, SelectorEntry, Variables, resolve_rules, substitute};
pub use store::{RuleNode, RuleStore, RuleTree};
pub use validate::ConfValidator;
