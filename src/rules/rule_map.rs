//! Ordered maps used by the resolver: resolved rules and placeholder variables.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Display;

/// Resolved rules: field (or group key) to a single pipe-delimited rule string.
///
/// Iteration follows insertion order, which is the order of the selector entries
/// that produced the map. Re-inserting a key replaces its rule in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleMap {
    entries: IndexMap<String, String>,
}

impl RuleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, rule: impl Into<String>) {
        self.entries.insert(field.into(), rule.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, r)| (f.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RuleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(field, rule)| (field.into(), rule.into()))
                .collect(),
        }
    }
}

impl IntoIterator for RuleMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Placeholder values substituted into `%NAME%` tokens.
///
/// Values are stored in their string form; anything `Display` can be inserted,
/// so `Variables::new().with("RELEASE_ID", 51)` works. Substitution applies the
/// variables in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    entries: IndexMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing (in place) any earlier value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.entries.insert(name.into(), value.to_string());
    }

    /// Builder form of [`Variables::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.to_string()))
                .collect(),
        }
    }
}
