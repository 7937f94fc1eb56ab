//! End-to-end tests over the shipped reference configuration

use std::path::PathBuf;

use ponita_config::config::{load_config, load_config_str, to_yaml, Device};
use ponita_config::Error;

fn qm9_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs/qm9.yaml")
}

#[test]
fn reference_config_loads_with_expected_values() {
    let doc = load_config(qm9_config_path()).unwrap();

    assert_eq!(doc.seed, 42);
    assert_eq!(doc.device, None);
    assert_eq!(doc.ponita.hidden_dim, 128);
    assert_eq!(doc.ponita.num_ori, 16);
    assert_eq!(doc.training.batch_size, 96);
    assert_eq!(doc.optimizer.learning_rate, 1e-5);
}

#[test]
fn reference_config_matches_init_template() {
    let doc = load_config(qm9_config_path()).unwrap();
    assert_eq!(doc, ponita_config::ConfigDocument::default());
}

#[test]
fn reference_config_roundtrips_through_yaml() {
    let doc = load_config(qm9_config_path()).unwrap();
    let reloaded = load_config_str(&to_yaml(&doc).unwrap()).unwrap();
    assert_eq!(doc, reloaded);
}

#[test]
fn repeated_loads_are_equal() {
    let text = std::fs::read_to_string(qm9_config_path()).unwrap();
    assert_eq!(
        load_config_str(&text).unwrap(),
        load_config_str(&text).unwrap()
    );
}

#[test]
fn negative_clip_grad_norm_is_rejected() {
    let text = std::fs::read_to_string(qm9_config_path()).unwrap();
    let broken = text.replace("clip_grad_norm: 1.0", "clip_grad_norm: -1.0");

    match load_config_str(&broken).unwrap_err() {
        Error::Invalid(violations) => {
            let message = violations.to_string();
            assert!(message.contains("optimizer.clip_grad_norm"));
        }
        other => panic!("expected Invalid error, got {other:?}"),
    }
}

#[test]
fn missing_required_field_names_the_field() {
    let text = std::fs::read_to_string(qm9_config_path()).unwrap();
    let broken = text.replace("  learning_rate: 1.0e-5\n", "");

    match load_config_str(&broken).unwrap_err() {
        Error::Schema(e) => assert!(e.to_string().contains("learning_rate")),
        other => panic!("expected Schema error, got {other:?}"),
    }
}

#[test]
fn non_boolean_value_for_boolean_field_is_rejected() {
    let text = std::fs::read_to_string(qm9_config_path()).unwrap();
    let broken = text.replace("checkpoint: true", "checkpoint: definitely");

    match load_config_str(&broken).unwrap_err() {
        Error::Schema(_) => {}
        other => panic!("expected Schema error, got {other:?}"),
    }
}

#[test]
fn explicit_device_overrides_auto_detect() {
    let text = std::fs::read_to_string(qm9_config_path()).unwrap();
    let with_device = text.replace("seed: 42\n", "seed: 42\ndevice: cuda\n");

    let doc = load_config_str(&with_device).unwrap();
    assert_eq!(doc.device, Some(Device::Cuda));
}
