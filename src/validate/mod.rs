//! Record validation.
//!
//! [`ConfValidator`] resolves rules from a store and hands them, with the
//! caller's record, to a pluggable validation engine.

mod orchestrator;

#[cfg(test)]
mod tests;

pub use orchestrator::ConfValidator;
