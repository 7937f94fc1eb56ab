//! Configuration document, loader, and validation
//!
//! The document is loaded once at process start, validated, and passed
//! by reference into every collaborator that needs it. There is no
//! global config state and no update-in-place.

pub mod cli;
mod loader;
pub mod schema;
mod validate;

pub use cli::{Cli, Command, InfoArgs, InitArgs, OutputFormat, ValidateArgs};
pub use loader::{load_config, load_config_str, to_yaml};
pub use schema::{
    ConfigDocument, Device, LoggingConfig, OptimizerConfig, PonitaConfig, TestConfig,
    TrainingConfig, QM9_TARGETS,
};
pub use validate::{validate_config, ConfigViolations, ValidationError, KNOWN_OPTIMIZERS};
