//! `%NAME%` placeholder substitution.

use super::rule_map::{RuleMap, Variables};
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[A-Za-z0-9_]+%").expect("Invalid placeholder regex"));

/// Replace every `%name%` token in every rule with the matching variable value.
///
/// With no variables (or an empty set) the map is returned untouched. Variables
/// are applied in insertion order, each as a plain literal replace, so values are
/// inserted verbatim with no escaping.
pub fn substitute(rules: RuleMap, variables: Option<&Variables>) -> RuleMap {
    let Some(variables) = variables.filter(|vars| !vars.is_empty()) else {
        return rules;
    };

    rules
        .into_iter()
        .map(|(field, rule)| {
            let rule = variables.iter().fold(rule, |rule, (name, value)| {
                rule.replace(&format!("%{}%", name), value)
            });
            (field, rule)
        })
        .collect()
}

/// Placeholder tokens still present in the rules, as `(field, token)` pairs.
///
/// Only word-character names are reported (`%RELEASE_ID%`), so `%` signs inside
/// regex rules are not mistaken for placeholders.
pub fn unresolved_placeholders(rules: &RuleMap) -> Vec<(String, String)> {
    rules
        .iter()
        .flat_map(|(field, rule)| {
            PLACEHOLDER_REGEX
                .find_iter(rule)
                .map(move |m| (field.to_string(), m.as_str().to_string()))
        })
        .collect()
}
