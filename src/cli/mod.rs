//! CLI argument parsing for conf-validator.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Command implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// conf-validator: inspect validation rules resolved from YAML rule files.
///
/// Rule files map validation types (e.g. `release`, `form`) to field rules:
/// - a field rule is a pipe-delimited string or a list of fragments
/// - a field may hold a group of named sub-rules
/// - `%NAME%` placeholders are filled in with `--var NAME=VALUE`
#[derive(Parser, Debug)]
#[command(name = "conf-validator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Rules file, or directory with one YAML file per validation type.
    ///
    /// Falls back to CONF_VALIDATOR_RULES, then the settings file, then
    /// `validation.yaml`.
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// Settings file (YAML).
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved rules for a validation type.
    ///
    /// With no keys every field of the type is resolved. A key of the form
    /// `group=sub1,sub2` picks sub-rules from a group; sub-keys with no configured
    /// rule are used literally (e.g. `file_example=type,max:10`). Write `\,` for a
    /// comma inside a literal sub-key (e.g. `file_example=mimes:jpg\,png`).
    Rules(RulesArgs),

    /// List the configured validation types.
    Types,

    /// List the fields configured for a validation type.
    Keys(KeysArgs),
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Validation type (e.g. release).
    pub validation_type: String,

    /// Fields to resolve, in output order. `group=sub1,sub2` selects sub-rules;
    /// `\,` escapes a comma inside a sub-key.
    pub keys: Vec<String>,

    /// Placeholder value as NAME=VALUE (repeatable).
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub vars: Vec<(String, String)>,

    /// Output format (yaml, json). Defaults to the settings value.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `keys` command.
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Validation type (e.g. release).
    pub validation_type: String,
}

/// Parse a `NAME=VALUE` assignment.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{}'", s));
    }
    if name.contains('%') {
        return Err(format!(
            "variable name '{}' must not include the '%' delimiters",
            name
        ));
    }
    Ok((name.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
