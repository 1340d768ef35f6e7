//! Resolve rules and run them through the validation engine.

use crate::config::Settings;
use crate::engine::{Record, ValidationEngine, ValidatorHandle};
use crate::error::{ConfValidatorError, Result, ValidationFailure};
use crate::rules::{RuleMap, Selector, Variables, resolve_rules};
use crate::store::RuleStore;

/// Validates records against rules looked up from a rule store.
///
/// Holds the store, the engine, and the [`Settings`] that decide whether
/// validation runs at all. All inputs are read-only, so a `ConfValidator` can be
/// shared across threads whenever its store and engine can.
#[derive(Debug, Clone)]
pub struct ConfValidator<S, E> {
    store: S,
    engine: E,
    settings: Settings,
}

impl<S: RuleStore, E: ValidationEngine> ConfValidator<S, E> {
    pub fn new(store: S, engine: E, settings: Settings) -> Self {
        Self {
            store,
            engine,
            settings,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve rules for `validation_type` without validating anything.
    pub fn resolve_rules(
        &self,
        validation_type: &str,
        selector: &Selector,
        variables: Option<&Variables>,
    ) -> RuleMap {
        resolve_rules(&self.store, validation_type, selector, variables)
    }

    /// Validate `data` against the rules selected for `validation_type`.
    ///
    /// Returns `Ok(())` immediately, without resolving rules or calling the engine,
    /// when `disable_validation` is set.
    ///
    /// # Errors
    ///
    /// * `ConfValidatorError::ValidationFailed` - the engine rejected the data; the
    ///   error carries the engine's report and its flattened messages
    pub fn validate(
        &self,
        validation_type: &str,
        selector: &Selector,
        data: &Record,
        variables: Option<&Variables>,
    ) -> Result<()> {
        if self.settings.disable_validation {
            tracing::debug!(validation_type, "validation disabled, skipping");
            return Ok(());
        }

        let rules = self.resolve_rules(validation_type, selector, variables);
        tracing::debug!(validation_type, fields = rules.len(), "validating record");

        let validator = self.engine.make_validator(data, &rules);
        if validator.fails() {
            let failure = ValidationFailure::new(validator.failure_report());
            tracing::debug!(
                validation_type,
                messages = failure.messages().len(),
                "record failed validation"
            );
            return Err(ConfValidatorError::ValidationFailed(failure));
        }

        Ok(())
    }
}
