//! Output declarations.
//!
//! An output declaration is a flat field map. A fixed set of defaults is laid
//! down first and the caller's fields are overlaid on top, so caller values
//! win and keys this crate does not know about are carried through untouched.
//!
//! ```json
//! {
//!   "name": "total_site_energy",
//!   "units": "",
//!   "objective_function": false,
//!   "objective_function_index": null,
//!   "objective_function_target": null,
//!   "objective_function_group": null,
//!   "scaling_factor": null
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single output of interest, stored exactly as it will be serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputDeclaration {
  fields: Map<String, Value>,
}

impl OutputDeclaration {
  /// Build a declaration by overlaying `fields` on the default field set.
  pub fn from_fields(fields: Map<String, Value>) -> Self {
    let mut merged = default_fields();
    for (key, value) in fields {
      merged.insert(key, value);
    }
    Self { fields: merged }
  }

  pub fn fields(&self) -> &Map<String, Value> {
    &self.fields
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.fields.get(key)
  }

  /// The declared name, if one was given and is not null.
  pub fn name(&self) -> Option<&Value> {
    self.fields.get("name").filter(|v| !v.is_null())
  }

  /// Only a boolean `true` marks an objective function.
  pub fn is_objective_function(&self) -> bool {
    matches!(self.fields.get("objective_function"), Some(Value::Bool(true)))
  }
}

impl From<OutputFields> for OutputDeclaration {
  fn from(fields: OutputFields) -> Self {
    Self::from_fields(fields.into())
  }
}

fn default_fields() -> Map<String, Value> {
  let mut fields = Map::new();
  fields.insert("units".to_string(), Value::String(String::new()));
  fields.insert("objective_function".to_string(), Value::Bool(false));
  fields.insert("objective_function_index".to_string(), Value::Null);
  fields.insert("objective_function_target".to_string(), Value::Null);
  fields.insert("objective_function_group".to_string(), Value::Null);
  fields.insert("scaling_factor".to_string(), Value::Null);
  fields
}

/// Typed view of the recognized output fields.
///
/// Unset fields are left out of the resulting map so that the defaults in
/// [`OutputDeclaration::from_fields`] apply to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputFields {
  pub name: Option<String>,
  pub display_name: Option<String>,
  pub display_name_short: Option<String>,
  pub metadata_id: Option<String>,
  pub export: Option<bool>,
  pub visualize: Option<bool>,
  pub units: Option<String>,
  pub variable_type: Option<String>,
  pub objective_function: Option<bool>,
  pub objective_function_index: Option<i64>,
  pub objective_function_target: Option<f64>,
  pub scaling_factor: Option<f64>,
  pub objective_function_group: Option<i64>,
}

impl OutputFields {
  pub fn named(name: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      ..Self::default()
    }
  }

  pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
    self.display_name = Some(display_name.into());
    self
  }

  pub fn units(mut self, units: impl Into<String>) -> Self {
    self.units = Some(units.into());
    self
  }

  pub fn variable_type(mut self, variable_type: impl Into<String>) -> Self {
    self.variable_type = Some(variable_type.into());
    self
  }

  /// Mark the output as an objective function at the given index.
  pub fn objective(mut self, index: i64) -> Self {
    self.objective_function = Some(true);
    self.objective_function_index = Some(index);
    self
  }

  pub fn objective_target(mut self, target: f64) -> Self {
    self.objective_function_target = Some(target);
    self
  }

  pub fn objective_group(mut self, group: i64) -> Self {
    self.objective_function_group = Some(group);
    self
  }

  pub fn scaling_factor(mut self, factor: f64) -> Self {
    self.scaling_factor = Some(factor);
    self
  }
}

impl From<OutputFields> for Map<String, Value> {
  fn from(fields: OutputFields) -> Self {
    let mut map = Map::new();
    insert(&mut map, "name", fields.name);
    insert(&mut map, "display_name", fields.display_name);
    insert(&mut map, "display_name_short", fields.display_name_short);
    insert(&mut map, "metadata_id", fields.metadata_id);
    insert(&mut map, "export", fields.export);
    insert(&mut map, "visualize", fields.visualize);
    insert(&mut map, "units", fields.units);
    insert(&mut map, "variable_type", fields.variable_type);
    insert(&mut map, "objective_function", fields.objective_function);
    insert(&mut map, "objective_function_index", fields.objective_function_index);
    insert(&mut map, "objective_function_target", fields.objective_function_target);
    insert(&mut map, "scaling_factor", fields.scaling_factor);
    insert(&mut map, "objective_function_group", fields.objective_function_group);
    map
  }
}

fn insert<T: Into<Value>>(map: &mut Map<String, Value>, key: &str, value: Option<T>) {
  if let Some(value) = value {
    map.insert(key.to_string(), value.into());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn fields(value: Value) -> Map<String, Value> {
    match value {
      Value::Object(map) => map,
      other => panic!("expected object, got {other}"),
    }
  }

  #[test]
  fn test_defaults_fill_missing_keys() {
    let output = OutputDeclaration::from_fields(fields(json!({ "name": "energy" })));

    assert_eq!(
      serde_json::to_value(&output).unwrap(),
      json!({
        "name": "energy",
        "units": "",
        "objective_function": false,
        "objective_function_index": null,
        "objective_function_target": null,
        "objective_function_group": null,
        "scaling_factor": null,
      })
    );
  }

  #[test]
  fn test_caller_values_win_and_unknown_keys_survive() {
    let output = OutputDeclaration::from_fields(fields(json!({
      "name": "eui",
      "units": "kBtu/ft^2",
      "objective_function": true,
      "scaling_factor": null,
      "custom_tag": [1, 2],
    })));

    assert_eq!(output.get("units"), Some(&json!("kBtu/ft^2")));
    assert_eq!(output.get("custom_tag"), Some(&json!([1, 2])));
    assert_eq!(output.get("objective_function_group"), Some(&Value::Null));
    assert!(output.is_objective_function());
  }

  #[test]
  fn test_objective_function_requires_boolean_true() {
    let output = OutputDeclaration::from_fields(fields(json!({ "objective_function": "yes" })));
    assert!(!output.is_objective_function());
    assert_eq!(output.name(), None);
  }

  #[test]
  fn test_null_name_is_treated_as_missing() {
    let output = OutputDeclaration::from_fields(fields(json!({ "name": null })));
    assert_eq!(output.name(), None);
  }

  #[test]
  fn test_output_fields_leave_unset_keys_to_defaults() {
    let output: OutputDeclaration = OutputFields::named("cost").units("$").objective(2).into();

    assert_eq!(output.name(), Some(&json!("cost")));
    assert_eq!(output.get("units"), Some(&json!("$")));
    assert_eq!(output.get("objective_function_index"), Some(&json!(2)));
    assert_eq!(output.get("objective_function_target"), Some(&Value::Null));
    assert_eq!(output.get("display_name"), None);
    assert!(output.is_objective_function());
  }

  #[test]
  fn test_key_order_is_defaults_then_caller_keys() {
    let output = OutputDeclaration::from_fields(fields(json!({
      "name": "eui",
      "units": "kWh",
      "custom_tag": 1,
    })));

    let keys: Vec<&str> = output.fields().keys().map(String::as_str).collect();
    assert_eq!(
      keys,
      vec![
        "units",
        "objective_function",
        "objective_function_index",
        "objective_function_target",
        "objective_function_group",
        "scaling_factor",
        "name",
        "custom_tag",
      ]
    );
    assert_eq!(
      serde_json::to_string(&output).unwrap(),
      r#"{"units":"kWh","objective_function":false,"objective_function_index":null,"#.to_string()
        + r#""objective_function_target":null,"objective_function_group":null,"#
        + r#""scaling_factor":null,"name":"eui","custom_tag":1}"#
    );
  }
}
