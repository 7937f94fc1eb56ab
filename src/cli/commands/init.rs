//! Init command implementation
//!
//! Writes the reference QM9 configuration so a new run starts from a
//! document that is known to validate.

use std::fs;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{to_yaml, ConfigDocument, InitArgs};

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        ));
    }

    let yaml = to_yaml(&ConfigDocument::default()).map_err(|e| format!("{e}"))?;
    fs::write(&args.output, yaml)
        .map_err(|e| format!("Failed to write {}: {e}", args.output.display()))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Wrote reference config to {}", args.output.display()),
    );
    log(
        level,
        LogLevel::Verbose,
        "Edit training.target and logging.log_dir before starting a run",
    );

    Ok(())
}
