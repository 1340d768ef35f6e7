//! Rule nodes: the values stored in the rule tree.

use crate::error::{ConfValidatorError, Result};
use indexmap::IndexMap;
use serde_yaml::Value;

/// Separator used when a node is flattened into a single rule string.
pub const RULE_SEPARATOR: &str = "|";

/// A value in the rule tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleNode {
    /// A single rule string, e.g. `required|string`.
    Rule(String),
    /// Ordered rule fragments, joined with `|` when flattened.
    Fragments(Vec<String>),
    /// A nested namespace of named nodes.
    Group(RuleGroup),
}

impl RuleNode {
    /// Flatten this node into one pipe-delimited rule string.
    ///
    /// Groups flatten to the rules of all their children, in order. Children that
    /// flatten to an empty string are skipped so no empty `||` tokens appear.
    pub fn flatten(&self) -> String {
        match self {
            RuleNode::Rule(rule) => rule.clone(),
            RuleNode::Fragments(fragments) => fragments.join(RULE_SEPARATOR),
            RuleNode::Group(group) => group
                .iter()
                .map(|(_, node)| node.flatten())
                .filter(|rule| !rule.is_empty())
                .collect::<Vec<_>>()
                .join(RULE_SEPARATOR),
        }
    }

    /// Returns the nested group if this node is one.
    pub fn as_group(&self) -> Option<&RuleGroup> {
        match self {
            RuleNode::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Convert a parsed YAML value into a rule node.
    ///
    /// `path` is only used for error messages. Returns `Ok(None)` for YAML `null`,
    /// which is treated as an absent value.
    pub(crate) fn from_yaml(path: &str, value: Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            scalar @ (Value::Bool(_) | Value::Number(_) | Value::String(_)) => {
                Ok(scalar_to_string(&scalar).map(RuleNode::Rule))
            }
            Value::Sequence(items) => {
                let mut fragments = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    if item.is_null() {
                        continue;
                    }
                    let fragment = scalar_to_string(&item).ok_or_else(|| {
                        ConfValidatorError::UserError(format!(
                            "rule '{}' entry {} must be a scalar rule fragment, found a nested {}",
                            path,
                            index,
                            describe(&item)
                        ))
                    })?;
                    fragments.push(fragment);
                }
                Ok(Some(RuleNode::Fragments(fragments)))
            }
            Value::Mapping(mapping) => RuleGroup::from_yaml(path, Value::Mapping(mapping))
                .map(|group| Some(RuleNode::Group(group))),
            Value::Tagged(tagged) => RuleNode::from_yaml(path, tagged.value),
        }
    }
}

/// An ordered mapping of key to rule node.
///
/// Keys keep the order in which they were written in the source file. Re-inserting
/// an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleGroup {
    entries: IndexMap<String, RuleNode>,
}

impl RuleGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing (in place) any node already stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, node: RuleNode) {
        self.entries.insert(key.into(), node);
    }

    pub fn get(&self, key: &str) -> Option<&RuleNode> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert a YAML mapping (or `null`, for an empty file) into a group.
    pub(crate) fn from_yaml(path: &str, value: Value) -> Result<Self> {
        let mapping = match value {
            Value::Null => return Ok(Self::new()),
            Value::Mapping(mapping) => mapping,
            Value::Tagged(tagged) => return Self::from_yaml(path, tagged.value),
            other => {
                return Err(ConfValidatorError::UserError(format!(
                    "rules at '{}' must be a mapping of keys to rules, found a {}",
                    display_path(path),
                    describe(&other)
                )));
            }
        };

        let mut group = Self::new();
        for (key, value) in mapping {
            let key = scalar_to_string(&key).ok_or_else(|| {
                ConfValidatorError::UserError(format!(
                    "rules at '{}' contain a non-scalar key ({})",
                    display_path(path),
                    describe(&key)
                ))
            })?;
            let child_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", path, key)
            };
            if let Some(node) = RuleNode::from_yaml(&child_path, value)? {
                group.insert(key, node);
            }
        }
        Ok(group)
    }
}

/// String form of a YAML scalar, or `None` for anything else.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}
