//! Command implementations for conf-validator.
//!
//! Routes parsed CLI commands to their handlers.

mod rules;

use crate::cli::{Cli, Command};
use crate::context::RulesContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = RulesContext::resolve(&cli.global)?;

    match cli.command {
        Command::Rules(args) => rules::cmd_rules(&ctx, args),
        Command::Types => rules::cmd_types(&ctx),
        Command::Keys(args) => rules::cmd_keys(&ctx, args),
    }
}
