//! Tests for the validation orchestrator.

use super::ConfValidator;
use crate::config::{DISABLE_VALIDATION_ENV, Settings};
use crate::error::ConfValidatorError;
use crate::rules::{Selector, Variables};
use crate::store::RuleTree;
use crate::test_support::{RecordingEngine, record, sample_tree};
use serde_json::json;

fn validator(engine: &RecordingEngine, settings: Settings) -> ConfValidator<RuleTree, &RecordingEngine> {
    ConfValidator::new(sample_tree(), engine, settings)
}

#[test]
fn test_valid_record_passes() {
    let engine = RecordingEngine::default();
    let validator = validator(&engine, Settings::default());

    let data = record(json!({"name": "v1.0", "description": "first release"}));
    let result = validator.validate(
        "release",
        &Selector::spec().field("name").field("description"),
        &data,
        None,
    );

    assert!(result.is_ok());
    assert_eq!(engine.calls(), 1);
}

#[test]
fn test_failing_record_raises_validation_failed() {
    let engine = RecordingEngine::default();
    let validator = validator(&engine, Settings::default());

    let data = record(json!({"name": ""}));
    let err = validator
        .validate("release", &Selector::AllKeys, &data, None)
        .unwrap_err();

    let ConfValidatorError::ValidationFailed(failure) = &err else {
        panic!("expected ValidationFailed, got {err:?}");
    };
    assert_eq!(
        failure.messages(),
        &[
            "The name field is required.".to_string(),
            "The description field is required.".to_string(),
        ]
    );
    assert_eq!(
        failure.report().get("description"),
        Some(&["The description field is required.".to_string()][..])
    );
    assert_eq!(failure.report().messages(), failure.messages());
    assert_eq!(err.exit_code(), crate::exit_codes::VALIDATION_FAILURE);
}

#[test]
fn test_engine_receives_resolved_and_substituted_rules() {
    let engine = RecordingEngine::default();
    let validator = validator(&engine, Settings::default());

    let vars = Variables::new().with("RELEASE_ID", 51);
    let data = record(json!({"form_name": "contact", "position": 2}));
    validator
        .validate("form", &Selector::AllKeys, &data, Some(&vars))
        .unwrap();

    let rules = engine.last_rules().unwrap();
    assert_eq!(
        rules.get("form_name"),
        Some("required|string|regex:/^[a-z0-9_]{1,30}$/|unique:meta_forms,form_name,null,id,release_id,51")
    );
    assert_eq!(rules.get("position"), Some("integer"));
}

#[test]
fn test_grouped_selector_reaches_engine() {
    let engine = RecordingEngine::default();
    let validator = validator(&engine, Settings::default());

    let data = record(json!({}));
    let err = validator
        .validate(
            "release",
            &Selector::spec().group("file_example", ["required", "size"]),
            &data,
            None,
        )
        .unwrap_err();

    assert_eq!(
        engine.last_rules().unwrap().get("file_example"),
        Some("required|max:1024")
    );
    assert_eq!(
        err.validation_failure().unwrap().messages(),
        &["The file_example field is required.".to_string()]
    );
}

#[test]
fn test_disabled_validation_never_calls_engine() {
    let engine = RecordingEngine::default();
    let settings = Settings {
        disable_validation: true,
        ..Default::default()
    };
    let validator = validator(&engine, settings);

    let data = record(json!({"position": "not a number"}));
    for selector in [Selector::AllKeys, Selector::key("form_name")] {
        assert!(validator.validate("form", &selector, &data, None).is_ok());
    }

    assert_eq!(engine.calls(), 0);
    assert!(engine.last_rules().is_none());
}

#[test]
fn test_disable_flag_from_environment_lookup() {
    let engine = RecordingEngine::default();
    let settings = Settings::from_env_with(|name| {
        (name == DISABLE_VALIDATION_ENV).then(|| "true".to_string())
    });
    let validator = validator(&engine, settings);

    let data = record(json!({}));
    assert!(validator.validate("release", &Selector::AllKeys, &data, None).is_ok());
    assert_eq!(engine.calls(), 0);
}

#[test]
fn test_unknown_validation_type_validates_against_no_rules() {
    let engine = RecordingEngine::default();
    let validator = validator(&engine, Settings::default());

    let data = record(json!({"anything": 1}));
    assert!(validator.validate("unknown", &Selector::AllKeys, &data, None).is_ok());
    assert!(engine.last_rules().unwrap().is_empty());
}

#[test]
fn test_resolve_rules_matches_free_function() {
    let engine = RecordingEngine::default();
    let validator = validator(&engine, Settings::default());

    let selector = Selector::key("description");
    assert_eq!(
        validator.resolve_rules("release", &selector, None),
        crate::rules::resolve_rules(validator.store(), "release", &selector, None)
    );
    assert_eq!(engine.calls(), 0);
}
