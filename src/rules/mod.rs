//! Rule resolution and placeholder substitution.
//!
//! Maps a validation type plus a [`Selector`] to a [`RuleMap`] of pipe-delimited
//! rule strings:
//! - sequence and group values are flattened with `|`
//! - grouped selector entries fall back to the literal sub-key when unconfigured
//! - `%NAME%` tokens are replaced from [`Variables`]

mod resolve;
mod rule_map;
mod selector;
mod substitute;


// Re-export public API
pub use resolve::resolve_rules;
pub use rule_map::{RuleMap, Variables};
pub use selector::{Selector, SelectorEntry};
pub use substitute::{substitute, unresolved_placeholders};
