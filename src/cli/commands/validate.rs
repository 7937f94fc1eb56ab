//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ConfigDocument, ValidateArgs};

/// Format the logging section as a string
pub fn format_logging_info(doc: &ConfigDocument) -> String {
    let mut lines = vec![
        format!("  Log dir: {}", doc.logging.log_dir.display()),
        format!("  Log every: {} steps", doc.logging.log_every_n_steps),
    ];
    if doc.logging.checkpoint {
        lines.push(format!(
            "  Checkpoint every: {} epochs (keep {})",
            doc.logging.checkpoint_every_n_epochs, doc.logging.keep_n_checkpoints
        ));
    } else {
        lines.push("  Checkpointing: disabled".to_string());
    }
    lines.join("\n")
}

/// Format the model section as a string
pub fn format_model_info(doc: &ConfigDocument) -> String {
    format!(
        "  Hidden dim: {}\n  Orientations: {}\n  Basis dim: {} (degree {})\n  Layers: {} (widening {})\n  Radius: {}",
        doc.ponita.hidden_dim,
        doc.ponita.num_ori,
        doc.ponita.basis_dim,
        doc.ponita.degree,
        doc.ponita.num_layers,
        doc.ponita.widening_factor,
        doc.ponita.radius,
    )
}

/// Format the training and test sections as a string
pub fn format_training_info(doc: &ConfigDocument) -> String {
    let mut lines = vec![
        format!("  Target: {}", doc.training.target),
        format!("  Epochs: {}", doc.training.num_epochs),
        format!(
            "  Batch size: {} (test: {})",
            doc.training.batch_size, doc.test.batch_size
        ),
        format!("  Workers: {}", doc.training.num_workers),
    ];
    if doc.training.early_stopping {
        lines.push(format!(
            "  Early stopping after epoch {}",
            doc.test.min_num_epochs
        ));
    }
    lines.join("\n")
}

/// Format the optimizer section as a string
pub fn format_optimizer_info(doc: &ConfigDocument) -> String {
    format!(
        "  Optimizer: {}\n  Learning rate: {}\n  Grad clip: {}\n  Weight decay: {}",
        doc.optimizer.name,
        doc.optimizer.learning_rate,
        doc.optimizer.clip_grad_norm,
        doc.optimizer.weight_decay,
    )
}

/// Print detailed configuration summary
pub fn print_detailed_summary(doc: &ConfigDocument) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_model_info(doc));
    println!();
    println!("{}", format_training_info(doc));
    println!();
    println!("{}", format_optimizer_info(doc));
    println!();
    println!("{}", format_logging_info(doc));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    // load_config already runs the constraint checks
    let doc = load_config(&args.config).map_err(|e| format!("{e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&doc);
    }

    Ok(())
}
