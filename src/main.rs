//! ponita-config CLI
//!
//! Lint and inspect training configuration files for the PONITA QM9
//! harness.
//!
//! # Usage
//!
//! ```bash
//! # Check a config before queueing a run
//! ponita-config validate config.yaml --detailed
//!
//! # Show config contents
//! ponita-config info config.yaml --format json
//!
//! # Write the reference config
//! ponita-config init --output config.yaml
//! ```

use clap::Parser;
use ponita_config::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
