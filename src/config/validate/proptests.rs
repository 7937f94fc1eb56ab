//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::{ConfigDocument, QM9_TARGETS};
use proptest::prelude::*;

fn arb_valid_doc() -> impl Strategy<Value = ConfigDocument> {
    (
        (1usize..512, 1usize..64, 1usize..32),   // batch_size, num_ori, num_layers
        1e-8f64..1.0,                            // learning_rate
        0.1f64..100.0,                           // clip_grad_norm
        0.0f64..0.1,                             // weight_decay
        0usize..QM9_TARGETS.len(),               // target index
    )
        .prop_map(|((batch_size, num_ori, num_layers), lr, clip, wd, target_idx)| {
            let mut doc = ConfigDocument::default();
            doc.training.batch_size = batch_size;
            doc.ponita.num_ori = num_ori;
            doc.ponita.num_layers = num_layers;
            doc.optimizer.learning_rate = lr;
            doc.optimizer.clip_grad_norm = clip;
            doc.optimizer.weight_decay = wd;
            doc.training.target = QM9_TARGETS[target_idx].to_string();
            doc
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_doc_passes(doc in arb_valid_doc()) {
        prop_assert!(validate_config(&doc).is_ok());
    }

    #[test]
    fn prop_zero_batch_size_fails(doc in arb_valid_doc()) {
        let mut doc = doc;
        doc.training.batch_size = 0;
        let err = validate_config(&doc).unwrap_err();
        let expected = ValidationError::NonPositive { field: "training.batch_size", value: 0 };
        let reported = err.violations().contains(&expected);
        prop_assert!(reported);
    }

    #[test]
    fn prop_non_positive_lr_fails(doc in arb_valid_doc(), lr in -1.0f64..=0.0) {
        let mut doc = doc;
        doc.optimizer.learning_rate = lr;
        let err = validate_config(&doc).unwrap_err();
        let reported = matches!(
            err.violations()[0],
            ValidationError::NonPositiveFloat { field: "optimizer.learning_rate", .. }
        );
        prop_assert!(reported);
    }

    #[test]
    fn prop_validation_is_pure(doc in arb_valid_doc()) {
        // Two passes over the same document agree
        let first = validate_config(&doc);
        let second = validate_config(&doc);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_serde_roundtrip_preserves_document(doc in arb_valid_doc()) {
        let yaml = serde_yaml::to_string(&doc).unwrap();
        let reparsed: ConfigDocument = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(doc, reparsed);
    }
}
