//! Algorithm attributes for the analysis problem.
//!
//! The algorithm is an open-ended attribute bag: the execution engine decides
//! which keys a given analysis type understands, so nothing here validates
//! names or values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only algorithm document version currently produced.
pub const ALGORITHM_DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum AlgorithmError {
  #[error("unsupported version {version} for Algorithm::{operation}")]
  UnsupportedVersion {
    version: u32,
    operation: &'static str,
  },
}

/// Sampling/optimization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Algorithm {
  attributes: Map<String, Value>,
}

impl Default for Algorithm {
  fn default() -> Self {
    let mut attributes = Map::new();
    attributes.insert("seed".to_string(), Value::Null);
    attributes.insert("failed_f_value".to_string(), Value::from(1e18));
    attributes.insert("debug_messages".to_string(), Value::from(0));
    Self { attributes }
  }
}

impl Algorithm {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert or overwrite an attribute.
  pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
    self.attributes.insert(name.into(), value.into());
  }

  pub fn attribute(&self, name: &str) -> Option<&Value> {
    self.attributes.get(name)
  }

  pub fn remove_attribute(&mut self, name: &str) -> Option<Value> {
    self.attributes.remove(name)
  }

  pub fn attributes(&self) -> &Map<String, Value> {
    &self.attributes
  }

  /// Render the attributes as the `problem.algorithm` object.
  pub fn to_document(&self, version: u32) -> Result<Value, AlgorithmError> {
    if version != ALGORITHM_DOCUMENT_VERSION {
      return Err(AlgorithmError::UnsupportedVersion {
        version,
        operation: "to_document",
      });
    }
    Ok(Value::Object(self.attributes.clone()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_default_attributes() {
    let algorithm = Algorithm::new();
    assert_eq!(
      algorithm.to_document(1).unwrap(),
      json!({ "seed": null, "failed_f_value": 1e18, "debug_messages": 0 })
    );
  }

  #[test]
  fn test_set_and_remove_attribute() {
    let mut algorithm = Algorithm::new();
    algorithm.set_attribute("number_of_samples", 100);
    algorithm.set_attribute("seed", 42);
    assert_eq!(algorithm.attribute("number_of_samples"), Some(&json!(100)));
    assert_eq!(algorithm.attribute("seed"), Some(&json!(42)));

    assert_eq!(algorithm.remove_attribute("debug_messages"), Some(json!(0)));
    assert_eq!(algorithm.attribute("debug_messages"), None);
  }

  #[test]
  fn test_unsupported_version() {
    let err = Algorithm::new().to_document(3).unwrap_err();
    assert_eq!(err.to_string(), "unsupported version 3 for Algorithm::to_document");
  }
}
