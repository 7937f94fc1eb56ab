//! Crate-level error types
//!
//! Three failure layers surface from [`crate::config::load_config`]:
//! unreadable source, malformed YAML, and a document that parses but
//! does not satisfy the schema. Constraint violations are collected and
//! reported together rather than one at a time.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigViolations;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or serializing a configuration
#[derive(Debug, Error)]
pub enum Error {
    /// The source file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source text is not well-formed YAML
    #[error("Malformed config: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// The document is well-formed but a required field is missing or
    /// has the wrong type; serde names the offending field
    #[error("Config schema error: {0}")]
    Schema(#[source] serde_yaml::Error),

    /// One or more values violate their stated constraints
    #[error(transparent)]
    Invalid(#[from] ConfigViolations),

    /// Serialization back to YAML failed
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),
}
