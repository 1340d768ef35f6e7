//! The read-only lookup interface the resolver consumes.

use super::node::RuleNode;

/// Read access to a hierarchical rule store.
///
/// Paths are given as segments (`["release", "description"]`) rather than a dotted
/// string so that keys containing dots stay addressable.
pub trait RuleStore {
    /// The node at `path`, or `None` if any segment is missing.
    fn get(&self, path: &[&str]) -> Option<&RuleNode>;

    /// Keys directly under `path`, in stored order.
    ///
    /// Returns an empty list when `path` is missing or is not a group. An empty
    /// `path` lists the top-level keys (the validation types).
    fn keys(&self, path: &[&str]) -> Vec<String>;

    /// Convenience lookup by dotted path, e.g. `"release.description"`.
    fn get_dotted(&self, dotted: &str) -> Option<&RuleNode> {
        let segments: Vec<&str> = dotted.split('.').collect();
        self.get(&segments)
    }
}

impl<T: RuleStore + ?Sized> RuleStore for &T {
    fn get(&self, path: &[&str]) -> Option<&RuleNode> {
        (**self).get(path)
    }

    fn keys(&self, path: &[&str]) -> Vec<String> {
        (**self).keys(path)
    }
}
