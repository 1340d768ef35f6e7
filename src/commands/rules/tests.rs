//! Tests for the rules commands.

use super::{parse_selector, render_rules};
use crate::config::OutputFormat;
use crate::rules::{RuleMap, Selector, SelectorEntry, resolve_rules};
use crate::test_support::sample_tree;

fn keys(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_no_keys_selects_all() {
    assert_eq!(parse_selector(&[]).unwrap(), Selector::AllKeys);
}

#[test]
fn test_single_plain_key() {
    assert_eq!(
        parse_selector(&keys(&["description"])).unwrap(),
        Selector::SingleKey("description".to_string())
    );
}

#[test]
fn test_mixed_keys_keep_order() {
    let selector = parse_selector(&keys(&["name", "file_example=type, max:10", "description"]))
        .unwrap();
    assert_eq!(
        selector,
        Selector::KeySpec(vec![
            SelectorEntry::Plain("name".to_string()),
            SelectorEntry::Grouped(
                "file_example".to_string(),
                vec!["type".to_string(), "max:10".to_string()]
            ),
            SelectorEntry::Plain("description".to_string()),
        ])
    );
}

#[test]
fn test_escaped_comma_stays_inside_sub_key() {
    let selector =
        parse_selector(&keys(&[r"file_example=type,mimes:jpg\,png", r"ref=unique:t\,c"])).unwrap();
    assert_eq!(
        selector,
        Selector::KeySpec(vec![
            SelectorEntry::Grouped(
                "file_example".to_string(),
                vec!["type".to_string(), "mimes:jpg,png".to_string()]
            ),
            SelectorEntry::Grouped("ref".to_string(), vec!["unique:t,c".to_string()]),
        ])
    );

    let rules = resolve_rules(&sample_tree(), "release", &selector, None);
    assert_eq!(rules.get("file_example"), Some("mimes:jpg,png|mimes:jpg,png"));
    assert_eq!(rules.get("ref"), Some("unique:t,c"));
}

#[test]
fn test_single_group_key_is_key_spec() {
    let selector = parse_selector(&keys(&["file_example=size"])).unwrap();
    assert!(matches!(selector, Selector::KeySpec(ref entries) if entries.len() == 1));
}

#[test]
fn test_bad_group_entries_are_user_errors() {
    let err = parse_selector(&keys(&["=type"])).unwrap_err();
    assert!(err.to_string().contains("missing group name"));

    let err = parse_selector(&keys(&["file_example=,"])).unwrap_err();
    assert!(err.to_string().contains("at least one sub-key"));
}

#[test]
fn test_cli_selector_resolves_against_tree() {
    let selector = parse_selector(&keys(&["file_example=type,max:10", "name"])).unwrap();
    let rules = resolve_rules(&sample_tree(), "release", &selector, None);
    assert_eq!(
        rules,
        RuleMap::from_iter([
            ("file_example", "mimes:jpg,png|max:10"),
            ("name", "required|string|max:255"),
        ])
    );
}

#[test]
fn test_render_json_is_ordered_object() {
    let rules = RuleMap::from_iter([("name", "required"), ("age", "integer")]);
    let json = render_rules(&rules, OutputFormat::Json).unwrap();

    assert!(json.ends_with('\n'));
    let name_at = json.find("\"name\"").unwrap();
    let age_at = json.find("\"age\"").unwrap();
    assert!(name_at < age_at);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["age"], "integer");
}

#[test]
fn test_render_yaml_parses_back() {
    let rules = resolve_rules(&sample_tree(), "release", &Selector::AllKeys, None);
    let yaml = render_rules(&rules, OutputFormat::Yaml).unwrap();

    let parsed: serde_yaml::Mapping = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(
        parsed.get("description").and_then(|v| v.as_str()),
        Some("required|string")
    );
}
