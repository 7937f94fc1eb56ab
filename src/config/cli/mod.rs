//! CLI argument types
//!
//! Parsed by clap in `main` and handed to the command handlers in
//! `crate::cli`.

mod core;
mod types;

pub use core::{Cli, Command, InfoArgs, InitArgs, ValidateArgs};
pub use types::OutputFormat;
