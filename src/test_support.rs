//! Shared helpers for unit tests.

use crate::engine::{FailureReport, Record, ValidationEngine, ValidatorHandle};
use crate::rules::RuleMap;
use crate::store::RuleTree;
use std::cell::{Cell, RefCell};

pub(crate) const SAMPLE_RULES_YAML: &str = r#"
release:
  name: "required|string|max:255"
  description:
    - required
    - string
  file_example:
    type: "mimes:jpg,png"
    size: "max:1024"
form:
  form_name: "required|string|regex:/^[a-z0-9_]{1,30}$/|unique:meta_forms,form_name,null,id,release_id,%RELEASE_ID%"
  position: "integer"
"#;

pub(crate) fn sample_tree() -> RuleTree {
    RuleTree::from_yaml(SAMPLE_RULES_YAML).unwrap()
}

pub(crate) fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("test record must be a JSON object, got {other}"),
    }
}

/// Minimal engine understanding `required` and `integer`, recording every call.
#[derive(Default)]
pub(crate) struct RecordingEngine {
    calls: Cell<usize>,
    last_rules: RefCell<Option<RuleMap>>,
}

impl RecordingEngine {
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn last_rules(&self) -> Option<RuleMap> {
        self.last_rules.borrow().clone()
    }
}

pub(crate) struct RecordedOutcome {
    report: FailureReport,
}

impl ValidatorHandle for RecordedOutcome {
    fn fails(&self) -> bool {
        !self.report.is_empty()
    }

    fn failure_report(&self) -> FailureReport {
        self.report.clone()
    }
}

impl ValidationEngine for RecordingEngine {
    type Handle = RecordedOutcome;

    fn make_validator(&self, data: &Record, rules: &RuleMap) -> RecordedOutcome {
        self.calls.set(self.calls.get() + 1);
        *self.last_rules.borrow_mut() = Some(rules.clone());

        let mut report = FailureReport::new();
        for (field, rule) in rules.iter() {
            let value = data.get(field).filter(|v| !v.is_null());
            for token in rule.split('|') {
                match token {
                    "required" if value.is_none_or(|v| v.as_str() == Some("")) => {
                        report.add(field, format!("The {field} field is required."));
                    }
                    "integer" if value.is_some_and(|v| !v.is_i64()) => {
                        report.add(field, format!("The {field} must be an integer."));
                    }
                    _ => {}
                }
            }
        }
        RecordedOutcome { report }
    }
}
