//! Settings struct definition.

use super::types::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime settings for conf-validator.
///
/// Unknown fields in YAML are ignored for forward compatibility; missing fields
/// take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Skip validation entirely; `validate` always succeeds.
    pub disable_validation: bool,

    /// Rules file, or directory of per-type rule files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_path: Option<PathBuf>,

    /// Output format used by the CLI when printing rules.
    pub output_format: OutputFormat,
}
