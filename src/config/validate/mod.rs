//! Configuration validation
//!
//! Validates parsed configuration documents before the training harness
//! consumes them.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::{ConfigViolations, ValidationError};
pub use validator::{validate_config, KNOWN_OPTIMIZERS};

pub(crate) use validator::collect_violations;
