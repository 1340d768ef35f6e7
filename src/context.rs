//! Settings and rule-tree resolution for CLI commands.
//!
//! Every command goes through [`RulesContext::resolve`] so the rules path is
//! chosen the same way everywhere:
//! 1. `--rules`
//! 2. `CONF_VALIDATOR_RULES`
//! 3. `rules_path` from the `--settings` file
//! 4. `validation.yaml`

use crate::cli::GlobalArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::store::RuleTree;
use std::path::PathBuf;

/// Settings plus the loaded rule tree.
#[derive(Debug, Clone)]
pub struct RulesContext {
    pub settings: Settings,
    pub rules_path: PathBuf,
    pub tree: RuleTree,
}

impl RulesContext {
    /// Resolve settings from the process environment and load the rule tree.
    pub fn resolve(global: &GlobalArgs) -> Result<Self> {
        Self::resolve_with(global, |name| std::env::var(name).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve_with<F>(global: &GlobalArgs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = match &global.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let mut settings = settings.with_env_overrides(lookup);
        if let Some(rules) = &global.rules {
            settings.rules_path = Some(rules.clone());
        }

        let rules_path = settings.rules_path_or_default();
        let tree = RuleTree::load_path(&rules_path)?;
        tracing::debug!(
            path = %rules_path.display(),
            types = tree.validation_types().len(),
            "loaded rules"
        );

        Ok(Self {
            settings,
            rules_path,
            tree,
        })
    }
}
