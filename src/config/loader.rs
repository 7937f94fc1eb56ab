//! Loading and serializing configuration documents
//!
//! `load_config` is the single entry point for the training harness: it
//! reads the YAML source, decodes it into the typed schema, and runs
//! every constraint check before handing the document over. The file
//! handle is scoped to the read; nothing is held open afterwards.

use std::fs;
use std::path::Path;

use super::schema::ConfigDocument;
use super::validate::{collect_violations, ConfigViolations};
use crate::error::{Error, Result};

/// Top-level keys the schema recognizes
const KNOWN_SECTIONS: [&str; 7] =
    ["seed", "device", "logging", "ponita", "training", "test", "optimizer"];

/// Load a configuration document from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConfigDocument> {
    let text = fs::read_to_string(path.as_ref()).map_err(|source| Error::Read {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    load_config_str(&text)
}

/// Load a configuration document from YAML source text
///
/// Fails with [`Error::Parse`] on malformed YAML, [`Error::Schema`] when
/// a required field is missing or has the wrong type, and
/// [`Error::Invalid`] when values violate their constraints or the
/// document contains sections the schema does not recognize. Constraint
/// violations are collected and reported together.
pub fn load_config_str(text: &str) -> Result<ConfigDocument> {
    let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(Error::Parse)?;

    let mut violations = Vec::new();
    if let Some(mapping) = value.as_mapping() {
        for key in mapping.keys() {
            match key.as_str() {
                Some(name) if KNOWN_SECTIONS.contains(&name) => {}
                Some(name) => {
                    violations.push(super::validate::ValidationError::UnknownSection(
                        name.to_string(),
                    ));
                }
                // non-string keys can never match a section name
                None => {
                    let rendered = serde_yaml::to_string(key)
                        .map(|s| s.trim().to_string())
                        .unwrap_or_else(|_| format!("{key:?}"));
                    violations.push(super::validate::ValidationError::UnknownSection(rendered));
                }
            }
        }
    }

    let doc: ConfigDocument = serde_yaml::from_value(value).map_err(Error::Schema)?;

    collect_violations(&doc, &mut violations);
    if violations.is_empty() {
        Ok(doc)
    } else {
        Err(ConfigViolations::new(violations).into())
    }
}

/// Serialize a document back to YAML
///
/// Round-trips: the output parses back to an equal document.
pub fn to_yaml(doc: &ConfigDocument) -> Result<String> {
    serde_yaml::to_string(doc).map_err(Error::Serialize)
}
