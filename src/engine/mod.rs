//! Interface to the external validation engine.
//!
//! This crate does not implement field validators (`required`, `string`, `regex:`,
//! `unique:` …). A host plugs in an engine that understands rule strings; the
//! orchestrator only asks it to build a validator for a record and whether that
//! validator fails.

use crate::rules::RuleMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A data record to validate: field name to JSON value.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A validation engine that checks records against pipe-delimited rule strings.
pub trait ValidationEngine {
    type Handle: ValidatorHandle;

    /// Build a validator for `data` against `rules`.
    fn make_validator(&self, data: &Record, rules: &RuleMap) -> Self::Handle;
}

/// The outcome of one engine run.
pub trait ValidatorHandle {
    /// Whether the data failed any rule.
    fn fails(&self) -> bool;

    /// Per-field failure messages. Only meaningful when [`ValidatorHandle::fails`]
    /// returns `true`.
    fn failure_report(&self) -> FailureReport;
}

impl<E: ValidationEngine + ?Sized> ValidationEngine for &E {
    type Handle = E::Handle;

    fn make_validator(&self, data: &Record, rules: &RuleMap) -> Self::Handle {
        (**self).make_validator(data, rules)
    }
}

/// Failure messages grouped by field, in the order the engine reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FailureReport {
    fields: IndexMap<String, Vec<String>>,
}

impl FailureReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, appending to that field's existing messages.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Messages for one field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Fields with their messages, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// All messages flattened in field order.
    pub fn messages(&self) -> Vec<String> {
        self.fields.values().flatten().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
