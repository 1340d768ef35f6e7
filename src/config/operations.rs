//! Settings loading, environment overrides, and validation.

use super::model::Settings;
use super::types::{DEFAULT_RULES_PATH, DISABLE_VALIDATION_ENV, RULES_PATH_ENV, parse_flag};
use crate::error::{ConfValidatorError, Result};
use std::path::{Path, PathBuf};

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Successfully loaded and validated settings
    /// * `Err(ConfValidatorError::UserError)` - Read error, parse error or invalid value
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfValidatorError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(yaml).map_err(|e| {
            ConfValidatorError::UserError(format!("failed to parse settings YAML: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ConfValidatorError::UserError(format!("failed to serialize settings to YAML: {}", e))
        })
    }

    /// Default settings overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Default settings overridden by variables from `lookup`.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_env_overrides(lookup)
    }

    /// Apply environment overrides from `lookup` on top of these settings.
    ///
    /// - `DISABLE_VALIDATION` replaces `disable_validation` when set (see
    ///   [`parse_flag`] for accepted values)
    /// - `CONF_VALIDATOR_RULES` replaces `rules_path` when set and non-empty
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(DISABLE_VALIDATION_ENV) {
            self.disable_validation = parse_flag(&value);
        }
        if let Some(value) = lookup(RULES_PATH_ENV) {
            let value = value.trim();
            if !value.is_empty() {
                self.rules_path = Some(PathBuf::from(value));
            }
        }
        self
    }

    /// The configured rules path, or `validation.yaml`.
    pub fn rules_path_or_default(&self) -> PathBuf {
        self.rules_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RULES_PATH))
    }

    /// Validate settings values.
    ///
    /// Validation rules:
    /// - `rules_path`, when set, must not be empty
    pub fn validate(&self) -> Result<()> {
        if self
            .rules_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(ConfValidatorError::UserError(
                "settings validation failed: rules_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
