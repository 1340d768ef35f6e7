//! Exit code constants for the conf-validator CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or malformed rule files)
//! - 2: Validation failure (data rejected by the engine)
//!
//! The binary only inspects rules and never validates records, so it exits with
//! 0 or 1. Code 2 is for hosts that run [`crate::ConfValidator`] and map its
//! error through [`crate::ConfValidatorError::exit_code`].

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid rule files.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the data did not satisfy the resolved rules.
///
/// Library only; no CLI command produces it.
pub const VALIDATION_FAILURE: i32 = 2;
