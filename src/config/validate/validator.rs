//! Configuration validation logic
//!
//! Pure range and enum checks over an already-parsed document. No
//! filesystem access: `logging.log_dir` is only checked for emptiness
//! here, writability is the consumer's concern at run start.

use super::error::{ConfigViolations, ValidationError};
use crate::config::schema::{ConfigDocument, QM9_TARGETS};

/// Optimizers the training harness knows how to construct
pub const KNOWN_OPTIMIZERS: [&str; 3] = ["adamw", "adam", "sgd"];

/// Validate a configuration document
///
/// Collects every violation instead of stopping at the first, so one
/// pass reports all problems. Checks:
/// - positive-integer fields are nonzero
/// - positive-float fields are > 0
/// - `optimizer.name` is a known optimizer
/// - `training.target` is a QM9 property
pub fn validate_config(doc: &ConfigDocument) -> Result<(), ConfigViolations> {
    let mut violations = Vec::new();
    collect_violations(doc, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ConfigViolations::new(violations))
    }
}

pub(crate) fn collect_violations(doc: &ConfigDocument, violations: &mut Vec<ValidationError>) {
    check_positive(violations, "logging.log_every_n_steps", doc.logging.log_every_n_steps);
    check_positive(
        violations,
        "logging.visualize_every_n_steps",
        doc.logging.visualize_every_n_steps,
    );
    check_positive(
        violations,
        "logging.checkpoint_every_n_epochs",
        doc.logging.checkpoint_every_n_epochs,
    );
    if doc.logging.log_dir.as_os_str().is_empty() {
        violations.push(ValidationError::EmptyLogDir);
    }

    check_positive(violations, "ponita.hidden_dim", doc.ponita.hidden_dim);
    check_positive(violations, "ponita.num_ori", doc.ponita.num_ori);
    check_positive(violations, "ponita.basis_dim", doc.ponita.basis_dim);
    check_positive(violations, "ponita.num_layers", doc.ponita.num_layers);
    check_positive(violations, "ponita.widening_factor", doc.ponita.widening_factor);
    check_positive_float(violations, "ponita.radius", doc.ponita.radius);

    check_positive(violations, "training.num_epochs", doc.training.num_epochs);
    check_positive(violations, "training.batch_size", doc.training.batch_size);
    if !QM9_TARGETS.contains(&doc.training.target.as_str()) {
        violations.push(ValidationError::UnknownTarget(doc.training.target.clone()));
    }

    check_positive(violations, "test.test_every_n_epochs", doc.test.test_every_n_epochs);
    check_positive(violations, "test.test_interval", doc.test.test_interval);
    check_positive(violations, "test.batch_size", doc.test.batch_size);

    if !KNOWN_OPTIMIZERS.contains(&doc.optimizer.name.as_str()) {
        violations.push(ValidationError::UnknownOptimizer(doc.optimizer.name.clone()));
    }
    check_positive_float(violations, "optimizer.learning_rate", doc.optimizer.learning_rate);
    check_positive_float(violations, "optimizer.clip_grad_norm", doc.optimizer.clip_grad_norm);
    // written to reject NaN as well, like check_positive_float
    if !(doc.optimizer.weight_decay >= 0.0) {
        violations.push(ValidationError::NegativeFloat {
            field: "optimizer.weight_decay",
            value: doc.optimizer.weight_decay,
        });
    }
}

fn check_positive(violations: &mut Vec<ValidationError>, field: &'static str, value: usize) {
    if value == 0 {
        violations.push(ValidationError::NonPositive { field, value });
    }
}

fn check_positive_float(violations: &mut Vec<ValidationError>, field: &'static str, value: f64) {
    // NaN is not a meaningful hyperparameter either
    if !(value > 0.0) {
        violations.push(ValidationError::NonPositiveFloat { field, value });
    }
}
