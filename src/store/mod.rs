//! Hierarchical rule store.
//!
//! Rules are kept in an immutable tree of [`RuleNode`]s. The resolver only sees the
//! [`RuleStore`] trait, so hosts can plug in their own configuration backend.

mod lookup;
mod node;
mod tree;


// Re-export public API
pub use lookup::RuleStore;
pub use node::{RULE_SEPARATOR, RuleGroup, RuleNode};
pub use tree::RuleTree;
