//! Implementation of the `rules`, `types` and `keys` commands.

use crate::cli::{KeysArgs, RulesArgs};
use crate::config::OutputFormat;
use crate::context::RulesContext;
use crate::error::{ConfValidatorError, Result};
use crate::rules::{
    RuleMap, Selector, SelectorEntry, Variables, resolve_rules, unresolved_placeholders,
};
use crate::store::RuleStore;

#[cfg(test)]
mod tests;

/// Execute the `rules` command.
pub fn cmd_rules(ctx: &RulesContext, args: RulesArgs) -> Result<()> {
    let format = match args.format.as_deref() {
        Some(s) => OutputFormat::from_str(s).ok_or_else(|| {
            ConfValidatorError::UserError(format!(
                "unknown output format '{}'. Use 'yaml' or 'json'.",
                s
            ))
        })?,
        None => ctx.settings.output_format,
    };

    let selector = parse_selector(&args.keys)?;
    let variables: Variables = args.vars.into_iter().collect();
    let rules = resolve_rules(
        &ctx.tree,
        &args.validation_type,
        &selector,
        Some(&variables),
    );

    for (field, token) in unresolved_placeholders(&rules) {
        eprintln!(
            "Warning: rule for '{}' still contains {} (pass --var {}=VALUE)",
            field,
            token,
            token.trim_matches('%')
        );
    }

    print!("{}", render_rules(&rules, format)?);
    Ok(())
}

/// Execute the `types` command.
pub fn cmd_types(ctx: &RulesContext) -> Result<()> {
    for validation_type in ctx.tree.validation_types() {
        println!("{}", validation_type);
    }
    Ok(())
}

/// Execute the `keys` command.
pub fn cmd_keys(ctx: &RulesContext, args: KeysArgs) -> Result<()> {
    let keys = ctx.tree.keys(&[args.validation_type.as_str()]);
    if keys.is_empty() {
        return Err(ConfValidatorError::UserError(format!(
            "no rules configured for validation type '{}' in '{}'",
            args.validation_type,
            ctx.rules_path.display()
        )));
    }
    for key in keys {
        println!("{}", key);
    }
    Ok(())
}

/// Build a selector from CLI keys.
///
/// - no keys: every field
/// - one plain key: that field only
/// - otherwise an ordered key spec, where `group=sub1,sub2` is a grouped entry
pub(crate) fn parse_selector(keys: &[String]) -> Result<Selector> {
    if keys.is_empty() {
        return Ok(Selector::AllKeys);
    }
    if keys.len() == 1 && !keys[0].contains('=') {
        return Ok(Selector::SingleKey(keys[0].clone()));
    }

    keys.iter()
        .map(|key| parse_entry(key))
        .collect::<Result<Vec<_>>>()
        .map(Selector::KeySpec)
}

fn parse_entry(key: &str) -> Result<SelectorEntry> {
    let Some((group, sub_keys)) = key.split_once('=') else {
        return Ok(SelectorEntry::Plain(key.to_string()));
    };
    if group.is_empty() {
        return Err(ConfValidatorError::UserError(format!(
            "missing group name in '{}'. Use GROUP=sub1,sub2.",
            key
        )));
    }
    let sub_keys = split_sub_keys(sub_keys);
    if sub_keys.is_empty() {
        return Err(ConfValidatorError::UserError(format!(
            "group '{}' needs at least one sub-key",
            group
        )));
    }
    Ok(SelectorEntry::Grouped(group.to_string(), sub_keys))
}

/// Split a sub-key list on `,`, where `\,` is a literal comma inside a sub-key.
///
/// `type,mimes:jpg\,png` yields `["type", "mimes:jpg,png"]`. Blank sub-keys are dropped.
fn split_sub_keys(list: &str) -> Vec<String> {
    let mut sub_keys = Vec::new();
    let mut current = String::new();
    let mut chars = list.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&',') => {
                current.push(',');
                chars.next();
            }
            ',' => sub_keys.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    sub_keys.push(current);

    sub_keys
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

pub(crate) fn render_rules(rules: &RuleMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(rules).map_err(|e| {
            ConfValidatorError::UserError(format!("failed to serialize rules to YAML: {}", e))
        }),
        OutputFormat::Json => serde_json::to_string_pretty(rules)
            .map(|json| format!("{}\n", json))
            .map_err(|e| {
                ConfValidatorError::UserError(format!("failed to serialize rules to JSON: {}", e))
            }),
    }
}
