//! Validation error types
//!
//! One variant per constraint class, each naming the offending field so
//! the user can fix the document without consulting the schema source.

use std::fmt;
use thiserror::Error;

/// A single constraint violation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: &'static str, value: usize },

    #[error("{field} must be > 0.0 (got {value})")]
    NonPositiveFloat { field: &'static str, value: f64 },

    #[error("{field} must be >= 0.0 (got {value})")]
    NegativeFloat { field: &'static str, value: f64 },

    #[error("logging.log_dir must not be empty")]
    EmptyLogDir,

    #[error("Unknown optimizer: {0} (must be one of: adamw, adam, sgd)")]
    UnknownOptimizer(String),

    #[error("Unknown training target: {0} (must be a QM9 property, e.g. mu, alpha, homo)")]
    UnknownTarget(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

/// Every violation found in one validation pass
///
/// Validation is error-collecting rather than fail-fast so a user sees
/// all problems in a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigViolations(Vec<ValidationError>);

impl ConfigViolations {
    pub fn new(violations: Vec<ValidationError>) -> Self {
        debug_assert!(!violations.is_empty());
        Self(violations)
    }

    pub fn violations(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ConfigViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invalid config ({} violation(s)):", self.0.len())?;
        for violation in &self.0 {
            writeln!(f, "  - {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigViolations {}
