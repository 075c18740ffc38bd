use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WorkflowError;
use crate::step::Argument;

/// File name of the manifest inside a measure directory.
pub const MANIFEST_FILE: &str = "measure.json";

/// Metadata describing a measure on disk.
///
/// Measures are stored one per directory:
/// ```text
/// {measures}/
/// └── set_window_to_wall_ratio/
///     ├── measure.json
///     ├── measure.rb
///     └── resources/ (optional)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureManifest {
  /// Measure name, e.g. "set_window_to_wall_ratio"
  pub name: String,

  #[serde(default)]
  pub display_name: Option<String>,

  /// Measure type, e.g. "ModelMeasure" or "EnergyPlusMeasure"
  pub measure_type: String,

  /// Implementing class, e.g. "SetWindowToWallRatio"
  #[serde(default)]
  pub class_name: Option<String>,

  #[serde(default)]
  pub arguments: Vec<ManifestArgument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestArgument {
  pub name: String,
  #[serde(default)]
  pub display_name: Option<String>,
  #[serde(rename = "type", default)]
  pub value_type: Option<String>,
  #[serde(default)]
  pub default_value: Value,
}

impl MeasureManifest {
  /// Read the manifest from a measure directory.
  pub fn read(measure_dir: &Path) -> Result<Self, WorkflowError> {
    let manifest_path = measure_dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&manifest_path).map_err(|source| WorkflowError::Io {
      path: manifest_path.display().to_string(),
      source,
    })?;
    serde_json::from_str(&content).map_err(|source| WorkflowError::InvalidManifest {
      path: manifest_path.display().to_string(),
      source,
    })
  }

  /// Display name for a step built from this measure.
  pub fn step_display_name(&self) -> &str {
    self.display_name.as_deref().unwrap_or(&self.name)
  }

  /// Arguments initialized to their defaults.
  pub fn arguments(&self) -> Vec<Argument> {
    self
      .arguments
      .iter()
      .map(|arg| Argument {
        name: arg.name.clone(),
        display_name: arg.display_name.clone().unwrap_or_else(|| arg.name.clone()),
        value_type: arg.value_type.clone(),
        default_value: arg.default_value.clone(),
        value: arg.default_value.clone(),
      })
      .collect()
  }
}
