//! Settings for conf-validator.
//!
//! Settings come from an optional YAML file and from the environment
//! (`DISABLE_VALIDATION`, `CONF_VALIDATOR_RULES`), environment winning. The
//! validation orchestrator receives them explicitly and never reads the
//! environment itself.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Settings;
pub use types::{
    DEFAULT_RULES_PATH, DISABLE_VALIDATION_ENV, OutputFormat, RULES_PATH_ENV, parse_flag,
};
