//! Typed training configuration for PONITA-style equivariant models on QM9
//!
//! The training harness reads one YAML document with five sections
//! (`logging`, `ponita`, `training`, `test`, `optimizer`) plus top-level
//! `seed` and `device`. This crate defines that schema, loads and
//! validates documents, and serializes them back.
//!
//! # Example
//!
//! ```no_run
//! use ponita_config::config::load_config;
//!
//! let doc = load_config("config.yaml")?;
//! println!("training {} for {} epochs", doc.training.target, doc.training.num_epochs);
//! # Ok::<(), ponita_config::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;

pub use config::{load_config, load_config_str, to_yaml, validate_config, ConfigDocument};
pub use error::{Error, Result};
