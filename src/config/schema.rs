//! YAML schema for the PONITA training configuration
//!
//! One document, five sections (`logging`, `ponita`, `training`, `test`,
//! `optimizer`) plus two top-level scalars (`seed`, `device`). The
//! document is parsed once at startup, validated, and then read-only:
//! no mutation API is exposed. Range constraints are enforced by
//! [`crate::config::validate_config`], not here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The 19 QM9 regression targets, in dataset column order.
///
/// `training.target` must name one of these; consumers use the index to
/// select the property column.
pub const QM9_TARGETS: [&str; 19] = [
    "mu", "alpha", "homo", "lumo", "gap", "r2", "zpve", "U0", "U", "H", "G", "Cv", "U0_atom",
    "U_atom", "H_atom", "G_atom", "A", "B", "C",
];

/// Compute device selection
///
/// Absent from the document means auto-detect: the consumer picks CUDA
/// when available and falls back to CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cpu,
    Cuda,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda => write!(f, "cuda"),
        }
    }
}

/// Complete training configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Global reproducibility seed for all pseudo-random generators
    pub seed: i64,

    /// Compute device; unset means auto-detect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// Checkpointing and progress reporting
    pub logging: LoggingConfig,

    /// Model architecture hyperparameters
    pub ponita: PonitaConfig,

    /// Training loop hyperparameters
    pub training: TrainingConfig,

    /// Evaluation cadence and batch sizing
    pub test: TestConfig,

    /// Optimizer construction parameters
    pub optimizer: OptimizerConfig,
}

/// Logging, checkpointing, and progress reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Directory for run logs and checkpoints
    pub log_dir: PathBuf,

    /// Log training metrics every N optimizer steps
    pub log_every_n_steps: usize,

    /// Emit prediction visualizations every N steps
    pub visualize_every_n_steps: usize,

    /// Whether to write checkpoints at all
    pub checkpoint: bool,

    /// Checkpoint cadence in epochs
    pub checkpoint_every_n_epochs: usize,

    /// How many recent checkpoints to retain (0 keeps all)
    pub keep_n_checkpoints: usize,

    /// Suppress the progress bar (for non-interactive runs)
    pub no_progress_bar: bool,

    /// Verbose debug output
    pub debug: bool,
}

/// Architecture hyperparameters for the rotation-equivariant model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PonitaConfig {
    /// Width of hidden feature channels
    pub hidden_dim: usize,

    /// Number of discretized orientations on the sphere
    pub num_ori: usize,

    /// Dimension of the polynomial basis
    pub basis_dim: usize,

    /// Polynomial degree of the basis functions
    pub degree: usize,

    /// Number of message-passing layers
    pub num_layers: usize,

    /// Channel widening factor inside each layer
    pub widening_factor: usize,

    /// Neighbor cutoff distance in Angstrom
    pub radius: f64,

    /// Attach a readout head after every layer instead of only the last
    pub multiple_readouts: bool,

    /// Include self-loop edges in the molecular graph
    #[serde(rename = "loop")]
    pub self_loops: bool,
}

/// Training loop hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainingConfig {
    /// Apply random rotation augmentation to training samples
    pub train_augmentation: bool,

    /// QM9 property to predict (see [`QM9_TARGETS`])
    pub target: String,

    /// Number of epochs to train
    pub num_epochs: usize,

    /// Training batch size
    pub batch_size: usize,

    /// Data-loading worker count (0 loads in the main thread)
    pub num_workers: usize,

    /// Keep the best model by validation metric
    pub model_checkpoint: bool,

    /// Stop early when the validation metric stops improving
    pub early_stopping: bool,
}

/// Evaluation cadence and batch sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestConfig {
    /// Run the test split every N epochs
    pub test_every_n_epochs: usize,

    /// Evaluation interval within an epoch, in steps
    pub test_interval: usize,

    /// Evaluation batch size
    pub batch_size: usize,

    /// Skip evaluation before this many epochs have completed
    pub min_num_epochs: usize,
}

/// Optimizer construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptimizerConfig {
    /// Seed for optimizer-internal randomness, independent of the
    /// top-level seed
    pub seed: i64,

    /// Optimizer name: "adamw" | "adam" | "sgd"
    pub name: String,

    /// Learning rate
    pub learning_rate: f64,

    /// Gradient norm clipping threshold
    pub clip_grad_norm: f64,

    /// Decoupled weight decay coefficient
    pub weight_decay: f64,
}

impl Default for ConfigDocument {
    /// Reference QM9 hyperparameters, also emitted by `ponita-config init`.
    fn default() -> Self {
        Self {
            seed: 42,
            device: None,
            logging: LoggingConfig {
                log_dir: PathBuf::from("./logs"),
                log_every_n_steps: 100,
                visualize_every_n_steps: 500,
                checkpoint: true,
                checkpoint_every_n_epochs: 5,
                keep_n_checkpoints: 3,
                no_progress_bar: false,
                debug: false,
            },
            ponita: PonitaConfig {
                hidden_dim: 128,
                num_ori: 16,
                basis_dim: 256,
                degree: 3,
                num_layers: 9,
                widening_factor: 4,
                radius: 1000.0,
                multiple_readouts: true,
                self_loops: true,
            },
            training: TrainingConfig {
                train_augmentation: true,
                target: "alpha".to_string(),
                num_epochs: 1000,
                batch_size: 96,
                num_workers: 4,
                model_checkpoint: true,
                early_stopping: false,
            },
            test: TestConfig {
                test_every_n_epochs: 10,
                test_interval: 10,
                batch_size: 96,
                min_num_epochs: 100,
            },
            optimizer: OptimizerConfig {
                seed: 0,
                name: "adamw".to_string(),
                learning_rate: 1e-5,
                clip_grad_norm: 1.0,
                weight_decay: 0.01,
            },
        }
    }
}
