//! Rule resolution: validation type + selector to a flattened rule map.

use super::rule_map::{RuleMap, Variables};
use super::selector::{Selector, SelectorEntry};
use super::substitute::substitute;
use crate::store::{RULE_SEPARATOR, RuleStore};

/// Resolve the rules for `validation_type` selected by `selector`, then substitute
/// `variables` into them.
///
/// Resolution never fails:
/// - a missing plain field resolves to an empty rule string (the field is still
///   present in the map);
/// - a missing sub-key of a grouped entry (or one configured as an empty rule,
///   `0` or `false`) resolves to the sub-key itself;
/// - an unknown validation type resolves to an empty map for [`Selector::AllKeys`].
///
/// # Example
///
/// ```
/// use conf_validator::rules::{Selector, resolve_rules};
/// use conf_validator::store::RuleTree;
///
/// let tree = RuleTree::from_yaml("release:\n  description: [required, string]\n").unwrap();
/// let rules = resolve_rules(&tree, "release", &Selector::key("description"), None);
/// assert_eq!(rules.get("description"), Some("required|string"));
/// ```
pub fn resolve_rules<S: RuleStore + ?Sized>(
    store: &S,
    validation_type: &str,
    selector: &Selector,
    variables: Option<&Variables>,
) -> RuleMap {
    let rules = match selector {
        Selector::SingleKey(field) => {
            let mut rules = RuleMap::new();
            rules.insert(field.as_str(), field_rule(store, validation_type, field));
            rules
        }
        Selector::AllKeys => {
            let entries: Vec<SelectorEntry> = store
                .keys(&[validation_type])
                .into_iter()
                .map(SelectorEntry::Plain)
                .collect();
            if entries.is_empty() {
                tracing::debug!(validation_type, "no rules configured for validation type");
            }
            resolve_entries(store, validation_type, &entries)
        }
        Selector::KeySpec(entries) => resolve_entries(store, validation_type, entries),
    };

    substitute(rules, variables)
}

fn resolve_entries<S: RuleStore + ?Sized>(
    store: &S,
    validation_type: &str,
    entries: &[SelectorEntry],
) -> RuleMap {
    let mut rules = RuleMap::new();
    for entry in entries {
        match entry {
            SelectorEntry::Plain(field) => {
                rules.insert(field.as_str(), field_rule(store, validation_type, field));
            }
            SelectorEntry::Grouped(group, sub_keys) => {
                rules.insert(
                    group.as_str(),
                    group_rule(store, validation_type, group, sub_keys),
                );
            }
        }
    }
    rules
}

/// Full rule of one field; empty when the field is not configured.
fn field_rule<S: RuleStore + ?Sized>(store: &S, validation_type: &str, field: &str) -> String {
    match store.get(&[validation_type, field]) {
        Some(node) => node.flatten(),
        None => {
            tracing::debug!(validation_type, field, "no rule configured, using empty rule");
            String::new()
        }
    }
}

/// Whether a configured sub-key value counts as missing.
///
/// Empty rules, `0` and `false` all defer to the literal sub-key.
fn is_unset_rule(rule: &str) -> bool {
    matches!(rule, "" | "0" | "false")
}

/// Rules for the requested sub-keys of a group, joined with `|`.
fn group_rule<S: RuleStore + ?Sized>(
    store: &S,
    validation_type: &str,
    group: &str,
    sub_keys: &[String],
) -> String {
    sub_keys
        .iter()
        .map(|sub_key| {
            let configured = store
                .get(&[validation_type, group, sub_key.as_str()])
                .map(|node| node.flatten())
                .filter(|rule| !is_unset_rule(rule));
            configured.unwrap_or_else(|| {
                tracing::trace!(
                    validation_type,
                    group,
                    sub_key = sub_key.as_str(),
                    "using sub-key as literal rule"
                );
                sub_key.clone()
            })
        })
        .collect::<Vec<_>>()
        .join(RULE_SEPARATOR)
}
