//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, to_yaml, InfoArgs, OutputFormat};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let doc = load_config(&args.config).map_err(|e| format!("{e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Seed: {}", doc.seed);
            match doc.device {
                Some(device) => println!("Device: {device}"),
                None => println!("Device: auto-detect"),
            }
            println!("Target: {}", doc.training.target);
            println!(
                "Model: hidden_dim={}, num_ori={}, num_layers={}",
                doc.ponita.hidden_dim, doc.ponita.num_ori, doc.ponita.num_layers
            );
            println!(
                "Optimizer: {} (lr={})",
                doc.optimizer.name, doc.optimizer.learning_rate
            );
            println!("Epochs: {}", doc.training.num_epochs);
            println!("Batch size: {}", doc.training.batch_size);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&doc)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = to_yaml(&doc).map_err(|e| format!("{e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
