use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::distribution::Distribution;

/// On-disk definition of a whole analysis.
///
/// ```json
/// {
///   "display_name": "Office Retrofit",
///   "analysis_type": "lhs",
///   "seed": "seeds/office.osm",
///   "weather_file": "weather/chicago.epw",
///   "algorithm": { "number_of_samples": 20 },
///   "steps": [ ... ],
///   "outputs": [ { "name": "total_energy", "objective_function": true } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulationDef {
  pub display_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub analysis_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub seed: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weather_file: Option<String>,
  /// Attributes laid over the algorithm defaults.
  #[serde(default)]
  pub algorithm: Map<String, Value>,
  #[serde(default)]
  pub steps: Vec<StepDef>,
  /// Raw output field maps; defaults are merged in when they are added.
  #[serde(default)]
  pub outputs: Vec<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDef {
  pub name: String,
  pub display_name: String,
  pub measure_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub measure_definition_class_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub measure_definition_directory: Option<String>,
  #[serde(default)]
  pub arguments: Vec<ArgumentDef>,
  #[serde(default)]
  pub variables: Vec<VariableDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDef {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  /// Argument type as reported by the measure, e.g. "double" or "choice".
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value_type: Option<String>,
  #[serde(default)]
  pub default_value: Value,
  /// Fixed value; falls back to `default_value` when absent.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDef {
  /// Name of the argument this variable drives.
  pub argument: String,
  pub display_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name_short: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub units: Option<String>,
  pub distribution: Distribution,
  #[serde(default)]
  pub static_value: Value,
}
