//! In-memory rule tree loaded from YAML.

use super::lookup::RuleStore;
use super::node::{RuleGroup, RuleNode};
use crate::error::{ConfValidatorError, Result};
use std::path::Path;

/// File extensions recognized by [`RuleTree::load_dir`].
const RULE_FILE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Immutable tree of validation rules.
///
/// Top-level keys are validation types (e.g. `release`, `form`); below them are
/// field rules and nested rule groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTree {
    root: RuleGroup,
}

impl RuleTree {
    /// Build a tree from an already-assembled root group.
    pub fn new(root: RuleGroup) -> Self {
        Self { root }
    }

    /// The top-level group (validation types).
    pub fn root(&self) -> &RuleGroup {
        &self.root
    }

    /// Parse a tree from a YAML document whose top-level keys are validation types.
    ///
    /// An empty document yields an empty tree.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| {
            ConfValidatorError::UserError(format!("failed to parse rules YAML: {}", e))
        })?;
        Ok(Self::new(RuleGroup::from_yaml("", value)?))
    }

    /// Load a tree from a single YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_rules_file(path)?;
        Self::from_yaml(&content).map_err(|e| {
            ConfValidatorError::UserError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Load a tree from a directory holding one YAML file per validation type.
    ///
    /// `release.yaml` becomes the `release` validation type. Files are read in
    /// file-name order; other files are ignored. Two files with the same stem
    /// (`form.yaml` and `form.yml`) are rejected.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| {
            ConfValidatorError::UserError(format!(
                "failed to read rules directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ConfValidatorError::UserError(format!(
                    "failed to read rules directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
            let path = entry.path();
            if path.is_file() && is_rule_file(&path) {
                files.push(path);
            }
        }
        files.sort();

        let mut root = RuleGroup::new();
        for path in files {
            let Some(validation_type) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if root.contains_key(validation_type) {
                return Err(ConfValidatorError::UserError(format!(
                    "validation type '{}' is defined by more than one file in '{}'",
                    validation_type,
                    dir.display()
                )));
            }

            let content = read_rules_file(&path)?;
            let value: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
                ConfValidatorError::UserError(format!(
                    "failed to parse rules YAML in '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            let group = RuleGroup::from_yaml(validation_type, value)?;
            tracing::debug!(
                validation_type,
                keys = group.len(),
                file = %path.display(),
                "loaded rule file"
            );
            root.insert(validation_type, RuleNode::Group(group));
        }

        Ok(Self::new(root))
    }

    /// Load from `path`, dispatching to [`RuleTree::load_dir`] for directories.
    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            Self::load_dir(path)
        } else {
            Self::load(path)
        }
    }

    /// Names of all configured validation types.
    pub fn validation_types(&self) -> Vec<String> {
        self.root.keys()
    }
}

impl RuleStore for RuleTree {
    fn get(&self, path: &[&str]) -> Option<&RuleNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.root.get(first)?;
        for segment in rest {
            node = node.as_group()?.get(segment)?;
        }
        Some(node)
    }

    fn keys(&self, path: &[&str]) -> Vec<String> {
        if path.is_empty() {
            return self.root.keys();
        }
        self.get(path)
            .and_then(RuleNode::as_group)
            .map(RuleGroup::keys)
            .unwrap_or_default()
    }
}

fn read_rules_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ConfValidatorError::UserError(format!(
            "failed to read rules file '{}': {}",
            path.display(),
            e
        ))
    })
}

fn is_rule_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            RULE_FILE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
