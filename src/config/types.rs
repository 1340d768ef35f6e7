//! Configuration types, constants, and defaults.

use serde::{Deserialize, Serialize};

/// Environment variable that turns validation off entirely.
pub const DISABLE_VALIDATION_ENV: &str = "DISABLE_VALIDATION";

/// Environment variable naming the rules file or directory.
pub const RULES_PATH_ENV: &str = "CONF_VALIDATOR_RULES";

/// Rules path used when neither settings nor environment name one.
pub const DEFAULT_RULES_PATH: &str = "validation.yaml";

/// Output format for resolved rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Interpret an environment flag value.
///
/// `true`, `(true)`, `1`, `yes` and `on` (any case, surrounding whitespace ignored)
/// are true; every other value is false.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "(true)" | "1" | "yes" | "on"
    )
}
