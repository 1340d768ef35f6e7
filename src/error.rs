//! Error types for conf-validator.
//!
//! Uses thiserror for derive macros. Rule resolution never fails; the only errors
//! are configuration problems and data that the validation engine rejects.

use crate::engine::FailureReport;
use crate::exit_codes;
use std::fmt;
use thiserror::Error;

/// Main error type for conf-validator operations.
#[derive(Error, Debug)]
pub enum ConfValidatorError {
    /// Unreadable or malformed rule files, bad arguments.
    #[error("{0}")]
    UserError(String),

    /// The validation engine rejected the data against the resolved rules.
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationFailure),
}

impl ConfValidatorError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfValidatorError::UserError(_) => exit_codes::USER_ERROR,
            ConfValidatorError::ValidationFailed(_) => exit_codes::VALIDATION_FAILURE,
        }
    }

    /// The validation failure payload, if this is a `ValidationFailed` error.
    pub fn validation_failure(&self) -> Option<&ValidationFailure> {
        match self {
            ConfValidatorError::ValidationFailed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Result type alias for conf-validator operations.
pub type Result<T> = std::result::Result<T, ConfValidatorError>;

/// Failure report from the engine together with its flattened messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    report: FailureReport,
    messages: Vec<String>,
}

impl ValidationFailure {
    /// Wrap an engine report, flattening its messages once up front.
    pub fn new(report: FailureReport) -> Self {
        let messages = report.messages();
        Self { report, messages }
    }

    /// Every failure message, in field order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The report exactly as the engine produced it.
    pub fn report(&self) -> &FailureReport {
        &self.report
    }

    /// Take ownership of the underlying report.
    pub fn into_report(self) -> FailureReport {
        self.report
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.messages.is_empty() {
            return write!(f, "data rejected by validation engine");
        }
        write!(f, "{}", self.messages.join("; "))
    }
}
